//! Normalizers: names in some convention to the word list.

use nonempty::NonEmpty;

use crate::error::Result;
use crate::segment::{Separator, Segments};

/// Converts a name from some naming convention to its normalized form.
///
/// Implemented for every `Fn(&str) -> Segments`, so plain functions such as
/// [`uncamel`] can be used wherever a normalizer is expected.
pub trait Normalize: Send + Sync {
    fn normalize(&self, name: &str) -> Segments;
}

impl<F> Normalize for F
where
    F: Fn(&str) -> Segments + Send + Sync,
{
    fn normalize(&self, name: &str) -> Segments {
        self(name)
    }
}

/// Splits on every occurrence of a literal separator.
///
/// Leading, trailing and doubled separators produce empty words at those
/// positions; nothing is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsep {
    separator: Separator,
}

impl Unsep {
    /// Fails with [`ErrorKind::EmptySeparator`](crate::error::ErrorKind::EmptySeparator)
    /// if `separator` is empty.
    pub fn new(separator: impl Into<String>) -> Result<Self> {
        Ok(Self {
            separator: Separator::new(separator)?,
        })
    }

    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }
}

impl From<Separator> for Unsep {
    fn from(separator: Separator) -> Self {
        Self { separator }
    }
}

impl Normalize for Unsep {
    fn normalize(&self, name: &str) -> Segments {
        name.split(self.separator.as_str())
            .map(String::from)
            .collect()
    }
}

/// Splits a camel-case name before every upper-case letter after the first
/// character.
///
/// The first word always starts at position 0, whatever its case, so an
/// empty name yields a single empty word. Runs of capitals split into one
/// word per letter: `"FB"` becomes `["F", "B"]`.
pub fn uncamel(name: &str) -> Segments {
    split_camel(name).into()
}

fn split_camel(name: &str) -> NonEmpty<String> {
    let mut boundaries = name
        .char_indices()
        .skip(1)
        .filter(|(_, ch)| ch.is_uppercase())
        .map(|(idx, _)| idx);

    let head_end = boundaries.next();
    let mut words = NonEmpty::new(name[..head_end.unwrap_or(name.len())].to_string());
    let mut start = match head_end {
        Some(end) => end,
        None => return words,
    };

    for end in boundaries {
        words.push(name[start..end].to_string());
        start = end;
    }
    words.push(name[start..].to_string());

    words
}
