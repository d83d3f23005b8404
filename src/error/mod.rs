//! Error types for nmconv
//!
//! The conversion pipeline itself is total and never fails. Errors only come
//! from building strategies out of bad input (an empty separator, an unknown
//! style name) and from the command-line caller reading configuration.

mod conversions;

use colored::*;
use std::fmt;

/// Error context providing additional information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Main error type for nmconv
#[derive(Debug, Clone)]
pub struct NmconvError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl NmconvError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// The error raised whenever a separator-based strategy is built from `""`
    pub fn empty_separator() -> Self {
        Self::new(ErrorKind::EmptySeparator, "empty separator")
            .with_help("use a non-empty literal such as \"_\" or \"-\"")
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Strategy construction
    EmptySeparator,
    UnknownStyle,

    // Configuration
    InvalidConfig,

    // Command line
    UsageError,
    IoError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptySeparator => "invalid configuration",
            ErrorKind::UnknownStyle => "unknown style",
            ErrorKind::InvalidConfig => "invalid configuration",
            ErrorKind::UsageError => "usage error",
            ErrorKind::IoError => "I/O error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NmconvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for NmconvError {}

/// Result type for nmconv operations
pub type Result<T> = std::result::Result<T, NmconvError>;

/// Renders an error for a terminal, optionally coloured
pub struct ErrorFormatter<'a> {
    error: &'a NmconvError,
    source_name: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a NmconvError) -> Self {
        Self {
            error,
            source_name: None,
            use_color: true,
        }
    }

    /// Names the input (a config file, usually) the error came from
    pub fn with_source_name(mut self, source_name: &'a str) -> Self {
        self.source_name = Some(source_name);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(source_name) = self.source_name {
            output.push_str(&if self.use_color {
                source_name.bold().to_string()
            } else {
                source_name.to_string()
            });
            output.push_str(": ");
        }

        let error_kind = self.error.kind.to_string();
        let error_label = if self.use_color {
            error_kind.red().bold().to_string()
        } else {
            error_kind
        };

        output.push_str(&format!("{}: {}", error_label, self.error.message));

        if let Some(note) = &self.error.context.note {
            let note_label = if self.use_color {
                "note".blue().bold()
            } else {
                "note".into()
            };
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = if self.use_color {
                "help".green().bold()
            } else {
                "help".into()
            };
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_separator_message() {
        let err = NmconvError::empty_separator();
        assert_eq!(err.kind, ErrorKind::EmptySeparator);
        assert!(err
            .to_string()
            .starts_with("invalid configuration: empty separator"));
    }

    #[test]
    fn test_display_with_context() {
        let err = NmconvError::new(ErrorKind::UnknownStyle, "unknown style 'snek'")
            .with_note("styles are matched case-sensitively")
            .with_help("try 'snake'");

        assert_eq!(
            err.to_string(),
            "unknown style: unknown style 'snek'\nnote: styles are matched case-sensitively\nhelp: try 'snake'"
        );
    }

    #[test]
    fn test_formatter_without_color() {
        let err = NmconvError::new(ErrorKind::InvalidConfig, "missing field `from`");
        let output = ErrorFormatter::new(&err)
            .with_source_name("job.json")
            .with_color(false)
            .format();

        assert_eq!(output, "job.json: invalid configuration: missing field `from`");
    }
}
