//! Denormalizers: the word list back to a name in some convention.

use crate::error::Result;
use crate::segment::{Separator, cap_word};

/// Converts a name from its normalized form to a naming convention, undoing
/// what a [`Normalize`](crate::normalize::Normalize) did.
///
/// Implemented for every `Fn(&[String]) -> String`.
pub trait Denormalize: Send + Sync {
    fn denormalize(&self, words: &[String]) -> String;
}

impl<F> Denormalize for F
where
    F: Fn(&[String]) -> String + Send + Sync,
{
    fn denormalize(&self, words: &[String]) -> String {
        self(words)
    }
}

/// Joins words with a literal separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sep {
    separator: Separator,
}

impl Sep {
    pub fn new(separator: impl Into<String>) -> Result<Self> {
        Ok(Self {
            separator: Separator::new(separator)?,
        })
    }

    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }
}

impl From<Separator> for Sep {
    fn from(separator: Separator) -> Self {
        Self { separator }
    }
}

impl Denormalize for Sep {
    fn denormalize(&self, words: &[String]) -> String {
        words.join(self.separator.as_str())
    }
}

/// Like [`Sep`], but passes every word through `xform_word` before joining.
#[derive(Clone)]
pub struct SepX<F> {
    xform_word: F,
    separator: Separator,
}

impl<F> SepX<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    pub fn new(xform_word: F, separator: impl Into<String>) -> Result<Self> {
        Ok(Self {
            xform_word,
            separator: Separator::new(separator)?,
        })
    }

    pub fn with_separator(xform_word: F, separator: Separator) -> Self {
        Self {
            xform_word,
            separator,
        }
    }
}

impl<F> Denormalize for SepX<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn denormalize(&self, words: &[String]) -> String {
        words
            .iter()
            .map(|word| (self.xform_word)(word))
            .collect::<Vec<_>>()
            .join(self.separator.as_str())
    }
}

impl<F> std::fmt::Debug for SepX<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SepX")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

/// Joins words with no separator and no case change
pub fn concat(words: &[String]) -> String {
    words.concat()
}

/// camelCase: first word lower-cased, every later word capitalized
pub fn camel_1_low(words: &[String]) -> String {
    let mut iter = words.iter();
    let mut result = match iter.next() {
        Some(first) => first.to_lowercase(),
        None => return String::new(),
    };
    for word in iter {
        result.push_str(&cap_word(word));
    }
    result
}

/// PascalCase: every word capitalized
pub fn camel_1_up(words: &[String]) -> String {
    words.iter().map(|word| cap_word(word)).collect()
}
