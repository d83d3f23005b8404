//! Word-segment primitives.
//!
//! A name in normalized form is an ordered list of words. These helpers are
//! the per-word case folds the denormalizers and transforms are built from.

use std::fmt;

use crate::error::{NmconvError, Result};

/// Separator for lisp-like (kebab case) naming conventions
pub const KEBAB: &str = "-";

/// Same as [`KEBAB`]
pub const LISP: &str = KEBAB;

/// Separator for C-like (snake case) naming conventions
pub const SNAKE: &str = "_";

/// The normalized form of a name: one entry per word, in name order
pub type Segments = Vec<String>;

/// Upper-cases the first character and lower-cases the remainder.
///
/// An empty word stays empty.
pub fn cap_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

pub fn lower_word(word: &str) -> String {
    word.to_lowercase()
}

pub fn upper_word(word: &str) -> String {
    word.to_uppercase()
}

/// A validated separator literal; the empty string is never a separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Separator(String);

impl Separator {
    /// Fails with [`ErrorKind::EmptySeparator`](crate::error::ErrorKind::EmptySeparator)
    /// if `separator` is empty.
    pub fn new(separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(NmconvError::empty_separator());
        }
        Ok(Self(separator))
    }

    pub fn snake() -> Self {
        Self(SNAKE.to_string())
    }

    pub fn kebab() -> Self {
        Self(KEBAB.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
