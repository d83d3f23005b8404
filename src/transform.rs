//! Transforms: word list to word list, between normalizing and
//! denormalizing.
//!
//! Every transform takes the word list by value and hands back a list it
//! owns, so a shared transform never touches a sequence some other caller
//! still holds.

use std::fmt;
use std::sync::Arc;

use crate::segment::Segments;

/// Maps one normalized name to another.
///
/// Implemented for every `Fn(Segments) -> Segments`.
pub trait Transform: Send + Sync {
    fn transform(&self, words: Segments) -> Segments;
}

impl<F> Transform for F
where
    F: Fn(Segments) -> Segments + Send + Sync,
{
    fn transform(&self, words: Segments) -> Segments {
        self(words)
    }
}

/// Leaves the word list as it is
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn transform(&self, words: Segments) -> Segments {
        words
    }
}

/// Replaces every word `w` with `xform_word(w)`; length and order are kept.
#[derive(Clone)]
pub struct PerSegment<F> {
    xform_word: F,
}

impl<F> PerSegment<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    pub fn new(xform_word: F) -> Self {
        Self { xform_word }
    }
}

impl<F> Transform for PerSegment<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transform(&self, words: Segments) -> Segments {
        words.iter().map(|word| (self.xform_word)(word)).collect()
    }
}

impl<F> fmt::Debug for PerSegment<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerSegment").finish_non_exhaustive()
    }
}

fn to_words<I, S>(words: I) -> Segments
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words.into_iter().map(Into::into).collect()
}

/// Puts fixed words in front of the name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    words: Segments,
}

impl Prefix {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: to_words(words),
        }
    }
}

impl Transform for Prefix {
    fn transform(&self, words: Segments) -> Segments {
        let mut result = Vec::with_capacity(self.words.len() + words.len());
        result.extend(self.words.iter().cloned());
        result.extend(words);
        result
    }
}

/// Puts fixed words after the name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postfix {
    words: Segments,
}

impl Postfix {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: to_words(words),
        }
    }
}

impl Transform for Postfix {
    fn transform(&self, mut words: Segments) -> Segments {
        words.extend(self.words.iter().cloned());
        words
    }
}

/// Applies transforms left to right, each one consuming the output of the
/// one before. An empty chain is the identity.
#[derive(Clone, Default)]
pub struct Chain {
    transforms: Vec<Arc<dyn Transform>>,
}

impl Chain {
    pub fn new(transforms: Vec<Arc<dyn Transform>>) -> Self {
        Self { transforms }
    }

    /// Appends `next` to the end of the chain
    pub fn then(mut self, next: impl Transform + 'static) -> Self {
        self.transforms.push(Arc::new(next));
        self
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl Transform for Chain {
    fn transform(&self, words: Segments) -> Segments {
        self.transforms
            .iter()
            .fold(words, |words, xform| xform.transform(words))
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("len", &self.transforms.len())
            .finish()
    }
}
