//! Named naming conventions.
//!
//! A [`Style`] bundles the normalizer that reads a convention and the
//! denormalizer that writes it, so callers can say "snake to camel" instead
//! of wiring strategies by hand.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::conversion::Conversion;
use crate::denormalize::{camel_1_low, camel_1_up, Denormalize, Sep, SepX};
use crate::error::{ErrorKind, NmconvError};
use crate::normalize::{uncamel, Normalize, Unsep};
use crate::segment::{lower_word, upper_word, Separator};

/// Prefix for arbitrary separator styles, e.g. `sep:.`
const SEPARATOR_PREFIX: &str = "sep:";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Style {
    /// `foo_bar`
    Snake,
    /// `foo-bar`
    Kebab,
    /// `FOO_BAR`
    ScreamingSnake,
    /// `fooBar`
    Camel,
    /// `FooBar`
    Pascal,
    /// Words joined by a literal separator, case left alone
    Separator(Separator),
}

impl Style {
    pub fn normalizer(&self) -> Arc<dyn Normalize> {
        match self {
            Style::Snake | Style::ScreamingSnake => Arc::new(Unsep::from(Separator::snake())),
            Style::Kebab => Arc::new(Unsep::from(Separator::kebab())),
            Style::Camel | Style::Pascal => Arc::new(uncamel),
            Style::Separator(separator) => Arc::new(Unsep::from(separator.clone())),
        }
    }

    pub fn denormalizer(&self) -> Arc<dyn Denormalize> {
        match self {
            Style::Snake => Arc::new(SepX::with_separator(lower_word, Separator::snake())),
            Style::Kebab => Arc::new(SepX::with_separator(lower_word, Separator::kebab())),
            Style::ScreamingSnake => {
                Arc::new(SepX::with_separator(upper_word, Separator::snake()))
            }
            Style::Camel => Arc::new(camel_1_low),
            Style::Pascal => Arc::new(camel_1_up),
            Style::Separator(separator) => Arc::new(Sep::from(separator.clone())),
        }
    }

    /// The literal words are joined with on output; `None` for camel and
    /// pascal, which join without one
    pub fn separator(&self) -> Option<Separator> {
        match self {
            Style::Snake | Style::ScreamingSnake => Some(Separator::snake()),
            Style::Kebab => Some(Separator::kebab()),
            Style::Camel | Style::Pascal => None,
            Style::Separator(separator) => Some(separator.clone()),
        }
    }

    /// Reads names in `self` and writes them in `target`
    pub fn conversion_to(&self, target: &Style) -> Conversion {
        Conversion::from_parts(self.normalizer(), None, target.denormalizer())
    }

    fn known_names() -> &'static str {
        "snake, kebab, screaming-snake, camel, pascal, sep:<literal>"
    }
}

impl FromStr for Style {
    type Err = NmconvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(literal) = s.strip_prefix(SEPARATOR_PREFIX) {
            return Ok(Style::Separator(Separator::new(literal)?));
        }

        match s {
            "snake" | "snake_case" => Ok(Style::Snake),
            "kebab" | "kebab-case" | "lisp" => Ok(Style::Kebab),
            "screaming-snake" | "SCREAMING_SNAKE_CASE" | "constant" => Ok(Style::ScreamingSnake),
            "camel" | "camelCase" => Ok(Style::Camel),
            "pascal" | "PascalCase" => Ok(Style::Pascal),
            _ => Err(
                NmconvError::new(ErrorKind::UnknownStyle, format!("'{}'", s))
                    .with_help(format!("known styles: {}", Style::known_names())),
            ),
        }
    }
}

impl TryFrom<String> for Style {
    type Error = NmconvError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Snake => f.write_str("snake"),
            Style::Kebab => f.write_str("kebab"),
            Style::ScreamingSnake => f.write_str("screaming-snake"),
            Style::Camel => f.write_str("camel"),
            Style::Pascal => f.write_str("pascal"),
            Style::Separator(separator) => write!(f, "{}{}", SEPARATOR_PREFIX, separator),
        }
    }
}
