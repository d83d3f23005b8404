use std::env;
use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use nmconv::config::{Config, Fold};
use nmconv::debug::enable_debug;
use nmconv::debug_println;
use nmconv::error::{ErrorFormatter, ErrorKind, NmconvError, Result};

const USAGE: &str = "\
Usage: nmconv [OPTIONS] <FROM> <TO> [NAME]...
       nmconv --config <FILE> [OPTIONS] [NAME]...

Reads names from stdin, one per line, when no NAME is given.

Options:
  --config <FILE>   Read FROM, TO and the transform from a JSON file
  --prefix <WORD>   Put WORD in front of every name (repeatable)
  --postfix <WORD>  Put WORD after every name (repeatable)
  --fold <FOLD>     Case of every output word (lower, upper, capitalize);
                    separator styles only
  --no-color        Plain error output
  --debug           Report what nmconv is doing on stderr

Styles: snake, kebab, screaming-snake, camel, pascal, sep:<literal>";

#[derive(Debug)]
struct Invocation {
    config: Config,
    config_path: Option<String>,
    names: Vec<String>,
}

/// The command line split into flags and positionals, nothing loaded yet
#[derive(Debug, Default)]
struct CommandLine {
    help: bool,
    config_path: Option<String>,
    prefix: Vec<String>,
    postfix: Vec<String>,
    fold: Option<Fold>,
    no_color: bool,
    debug: bool,
    positional: Vec<String>,
}

fn usage_error(message: impl Into<String>) -> NmconvError {
    NmconvError::new(ErrorKind::UsageError, message).with_help("run with --help for usage")
}

fn option_value<'a>(
    flag: &str,
    args: &mut impl Iterator<Item = &'a String>,
) -> Result<&'a String> {
    args.next()
        .ok_or_else(|| usage_error(format!("{} expects a value", flag)))
}

impl CommandLine {
    fn parse(args: &[String]) -> Result<Self> {
        let mut command_line = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => command_line.help = true,
                "--config" => {
                    command_line.config_path = Some(option_value(arg, &mut iter)?.clone());
                }
                "--prefix" => command_line.prefix.push(option_value(arg, &mut iter)?.clone()),
                "--postfix" => command_line.postfix.push(option_value(arg, &mut iter)?.clone()),
                "--fold" => command_line.fold = Some(option_value(arg, &mut iter)?.parse()?),
                "--no-color" => command_line.no_color = true,
                "--debug" => command_line.debug = true,
                "--" => command_line.positional.extend(iter.by_ref().cloned()),
                flag if flag.starts_with("--") => {
                    return Err(usage_error(format!("unknown option '{}'", flag)));
                }
                _ => command_line.positional.push(arg.clone()),
            }
        }
        Ok(command_line)
    }

    /// Loads the config file, if any, and lays the flags over it
    fn into_invocation(self) -> Result<Invocation> {
        if self.debug {
            enable_debug();
        }

        let mut config = match &self.config_path {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        config.prefix.extend(self.prefix);
        config.postfix.extend(self.postfix);
        if self.fold.is_some() {
            config.fold = self.fold;
        }
        if self.no_color {
            config.color = false;
        }

        let mut positional = self.positional;
        let names = if self.config_path.is_some() {
            positional
        } else {
            if positional.len() < 2 {
                return Err(usage_error("missing <FROM> and <TO> styles"));
            }
            let names = positional.split_off(2);
            config.from = positional[0].parse()?;
            config.to = positional[1].parse()?;
            names
        };
        config.validate()?;

        Ok(Invocation {
            config,
            config_path: self.config_path,
            names,
        })
    }
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    CommandLine::parse(args)?.into_invocation()
}

/// The config decides once it is loaded; before that only `--no-color` can
fn color_wanted(invocation: &Result<Invocation>, no_color: bool) -> bool {
    match invocation {
        Ok(invocation) => invocation.config.color,
        Err(_) => !no_color,
    }
}

fn render_error(err: &NmconvError, use_color: bool, config_path: Option<&str>) -> String {
    let mut formatter = ErrorFormatter::new(err).with_color(use_color);
    if let (Some(path), ErrorKind::InvalidConfig | ErrorKind::IoError) = (config_path, err.kind) {
        formatter = formatter.with_source_name(path);
    }
    formatter.format()
}

fn exit_with(err: &NmconvError, use_color: bool, config_path: Option<&str>) -> ! {
    eprintln!("{}", render_error(err, use_color, config_path));
    let code = if err.kind == ErrorKind::UsageError { 2 } else { 1 };
    process::exit(code)
}

fn run(invocation: Invocation) -> Result<()> {
    if let Some(path) = &invocation.config_path {
        debug_println!("using config {}", path);
    }
    let config = invocation.config;
    debug_println!(
        "converting {} -> {} (transform: {})",
        config.from,
        config.to,
        config.transform().is_some()
    );
    let conversion = config.conversion();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if invocation.names.is_empty() {
        debug_println!("reading names from stdin");
        for line in io::stdin().lock().lines() {
            writeln!(out, "{}", conversion.convert(&line?))?;
        }
    } else {
        for name in &invocation.names {
            writeln!(out, "{}", conversion.convert(name))?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let command_line = match CommandLine::parse(&args) {
        Ok(command_line) => command_line,
        Err(err) => {
            // Nothing was parsed, so fall back to looking for the flag itself
            let no_color = args
                .iter()
                .take_while(|arg| *arg != "--")
                .any(|arg| arg == "--no-color");
            exit_with(&err, !no_color, None)
        }
    };

    if command_line.help {
        println!("{}", USAGE);
        return;
    }

    let no_color = command_line.no_color;
    let config_path = command_line.config_path.clone();
    let invocation = command_line.into_invocation();
    let use_color = color_wanted(&invocation, no_color);

    if let Err(err) = invocation.and_then(run) {
        exit_with(&err, use_color, config_path.as_deref());
    }
}
