//! The three-stage pipeline: normalize, transform, denormalize.

use std::fmt;
use std::sync::Arc;

use crate::denormalize::{Denormalize, Sep, SepX};
use crate::error::Result;
use crate::normalize::{Normalize, Unsep};
use crate::style::Style;
use crate::transform::Transform;

/// Converts `name` by normalizing it from its current naming convention and
/// denormalizing it into the target one.
pub fn convert<N, D>(name: &str, from: &N, to: &D) -> String
where
    N: Normalize + ?Sized,
    D: Denormalize + ?Sized,
{
    to.denormalize(&from.normalize(name))
}

/// Like [`convert`], with `xform` applied to the normalized form in between.
pub fn convert_x<N, T, D>(name: &str, from: &N, xform: &T, to: &D) -> String
where
    N: Normalize + ?Sized,
    T: Transform + ?Sized,
    D: Denormalize + ?Sized,
{
    to.denormalize(&xform.transform(from.normalize(name)))
}

/// A reusable normalizer, optional transform and denormalizer.
///
/// Nothing checks that the strategies fit together; pairing a camel-case
/// normalizer with a separator denormalizer is allowed and simply keeps any
/// stray separator inside the word it falls in. A `Conversion` holds no
/// mutable state, so clones and concurrent callers can share one freely.
///
/// ```
/// use nmconv::{Conversion, Sep, Unsep};
///
/// let conv = Conversion::new(Unsep::new("_").unwrap(), Sep::new("-").unwrap());
///
/// // Callers that only want a `Fn(&str) -> String` can borrow `convert`.
/// fn user(name: &str, conv: impl Fn(&str) -> String) -> String {
///     format!("'{}' → '{}'", name, conv(name))
/// }
/// assert_eq!(user("foo_bar_baz", |n| conv.convert(n)), "'foo_bar_baz' → 'foo-bar-baz'");
/// ```
#[derive(Clone)]
pub struct Conversion {
    norm: Arc<dyn Normalize>,
    xform: Option<Arc<dyn Transform>>,
    denorm: Arc<dyn Denormalize>,
}

impl Conversion {
    pub fn new(norm: impl Normalize + 'static, denorm: impl Denormalize + 'static) -> Self {
        Self {
            norm: Arc::new(norm),
            xform: None,
            denorm: Arc::new(denorm),
        }
    }

    /// Sets the transform stage, replacing any previous one
    pub fn with_transform(mut self, xform: impl Transform + 'static) -> Self {
        self.xform = Some(Arc::new(xform));
        self
    }

    /// Builds a conversion from one named style to another
    pub fn between(from: &Style, to: &Style) -> Self {
        from.conversion_to(to)
    }

    pub(crate) fn from_parts(
        norm: Arc<dyn Normalize>,
        xform: Option<Arc<dyn Transform>>,
        denorm: Arc<dyn Denormalize>,
    ) -> Self {
        Self {
            norm,
            xform,
            denorm,
        }
    }

    pub fn has_transform(&self) -> bool {
        self.xform.is_some()
    }

    pub fn convert(&self, name: &str) -> String {
        let words = self.norm.normalize(name);
        let words = match &self.xform {
            Some(xform) => xform.transform(words),
            None => words,
        };
        self.denorm.denormalize(&words)
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("has_transform", &self.xform.is_some())
            .finish_non_exhaustive()
    }
}

/// Splits and joins on the same separator
pub fn sep_convention(separator: &str) -> Result<Conversion> {
    Ok(Conversion::new(Unsep::new(separator)?, Sep::new(separator)?))
}

/// Splits and joins on the same separator, passing every word through
/// `xform_word` on the way out
pub fn sep_x_convention<F>(xform_word: F, separator: &str) -> Result<Conversion>
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Ok(Conversion::new(
        Unsep::new(separator)?,
        SepX::new(xform_word, separator)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denormalize::{camel_1_low, camel_1_up, concat};
    use crate::normalize::uncamel;
    use crate::segment::{cap_word, upper_word, KEBAB, SNAKE};
    use crate::transform::{Chain, PerSegment, Postfix, Prefix};

    #[test]
    fn test_fun_conv() {
        let conv = Conversion::new(Unsep::new(SNAKE).unwrap(), Sep::new(KEBAB).unwrap());
        assert_eq!(conv.convert("foo_bar_baz"), "foo-bar-baz");
        assert!(!conv.has_transform());
    }

    #[test]
    fn test_free_convert() {
        assert_eq!(convert("fooBar", &uncamel, &camel_1_up), "FooBar");
        assert_eq!(
            convert("FooBar", &uncamel, &Sep::new(SNAKE).unwrap()),
            "Foo_Bar"
        );
    }

    #[test]
    fn test_free_convert_x() {
        let xform = PerSegment::new(upper_word);
        let to = Sep::new(SNAKE).unwrap();
        assert_eq!(convert_x("maxValue", &uncamel, &xform, &to), "MAX_VALUE");
    }

    #[test]
    fn test_convert_through_dyn() {
        let from: &dyn Normalize = &uncamel;
        let to: &dyn Denormalize = &camel_1_low;
        assert_eq!(convert("FooBar", from, to), "fooBar");
    }

    #[test]
    fn test_prefix_then_capitalize() {
        let conv = Conversion::new(uncamel, concat).with_transform(
            Chain::default()
                .then(Prefix::new(["get"]))
                .then(PerSegment::new(cap_word)),
        );
        assert!(conv.has_transform());
        assert_eq!(conv.convert("userName"), "GetUserName");
    }

    #[test]
    fn test_with_transform_replaces() {
        let conv = Conversion::new(Unsep::new(SNAKE).unwrap(), Sep::new(SNAKE).unwrap())
            .with_transform(Prefix::new(["a"]))
            .with_transform(Postfix::new(["z"]));
        assert_eq!(conv.convert("m"), "m_z");
    }

    #[test]
    fn test_mismatched_pair_keeps_separator_text() {
        let conv = Conversion::new(uncamel, Sep::new(KEBAB).unwrap());
        assert_eq!(conv.convert("foo_barBaz"), "foo_bar-Baz");
    }

    #[test]
    fn test_sep_convention() {
        let conv = sep_convention(SNAKE).unwrap();
        assert_eq!(conv.convert("a__b"), "a__b");
        assert!(sep_convention("").is_err());
    }

    #[test]
    fn test_sep_x_convention() {
        let conv = sep_x_convention(upper_word, KEBAB).unwrap();
        assert_eq!(conv.convert("content-type"), "CONTENT-TYPE");
        assert!(sep_x_convention(upper_word, "").is_err());
    }

    #[test]
    fn test_convert_is_repeatable() {
        let conv = Conversion::new(uncamel, Sep::new(SNAKE).unwrap());
        let first = conv.convert("someLongName");
        for _ in 0..10 {
            assert_eq!(conv.convert("someLongName"), first);
        }
    }

    #[test]
    fn test_conversion_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Conversion>();
    }
}
