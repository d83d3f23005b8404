use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::conversion::Conversion;
use crate::debug_println;
use crate::denormalize::{Denormalize, SepX};
use crate::error::{ErrorKind, NmconvError, Result};
use crate::segment::{cap_word, lower_word, upper_word};
use crate::style::Style;
use crate::transform::{Chain, Postfix, Prefix, Transform};

/// Case of every output word, replacing the one the target style would use.
///
/// Only separator-joined targets take a fold; camel and pascal decide the
/// case of each word themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fold {
    Lower,
    Upper,
    Capitalize,
}

impl Fold {
    pub fn word_fn(self) -> fn(&str) -> String {
        match self {
            Fold::Lower => lower_word,
            Fold::Upper => upper_word,
            Fold::Capitalize => cap_word,
        }
    }
}

impl std::str::FromStr for Fold {
    type Err = NmconvError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "lower" => Ok(Fold::Lower),
            "upper" => Ok(Fold::Upper),
            "capitalize" => Ok(Fold::Capitalize),
            _ => Err(
                NmconvError::new(ErrorKind::InvalidConfig, format!("unknown fold '{}'", s))
                    .with_help("expected one of: lower, upper, capitalize"),
            ),
        }
    }
}

/// One conversion job, as read from a JSON file or assembled from flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub from: Style,
    pub to: Style,
    pub prefix: Vec<String>,
    pub postfix: Vec<String>,
    pub fold: Option<Fold>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            from: Style::Snake,
            to: Style::Snake,
            prefix: Vec::new(),
            postfix: Vec::new(),
            fold: None,
            color: true,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a fold whose target style would overrule it
    pub fn validate(&self) -> Result<()> {
        if self.fold.is_some() && self.to.separator().is_none() {
            return Err(NmconvError::new(
                ErrorKind::InvalidConfig,
                format!("fold has no effect on {} output", self.to),
            )
            .with_note("camel and pascal set the case of every word themselves")
            .with_help("drop the fold or pick a separator style such as snake or sep:<literal>"));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug_println!("loading config from {}", path.display());
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)
            .map_err(|err| err.with_note(format!("while reading {}", path.display())))?;
        debug_println!("loaded config: {:?}", config);
        Ok(config)
    }

    /// The transform stage described by this config, if it has one
    pub fn transform(&self) -> Option<Chain> {
        let mut chain = Chain::default();
        if !self.prefix.is_empty() {
            chain = chain.then(Prefix::new(self.prefix.iter().cloned()));
        }
        if !self.postfix.is_empty() {
            chain = chain.then(Postfix::new(self.postfix.iter().cloned()));
        }
        (!chain.is_empty()).then_some(chain)
    }

    /// The target style's denormalizer, with the fold as its word case
    pub fn denormalizer(&self) -> Arc<dyn Denormalize> {
        match (self.fold, self.to.separator()) {
            (Some(fold), Some(separator)) => {
                Arc::new(SepX::with_separator(fold.word_fn(), separator))
            }
            _ => self.to.denormalizer(),
        }
    }

    pub fn conversion(&self) -> Conversion {
        let xform = self
            .transform()
            .map(|chain| Arc::new(chain) as Arc<dyn Transform>);
        Conversion::from_parts(self.from.normalizer(), xform, self.denormalizer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.from, Style::Snake);
        assert!(config.transform().is_none());
        assert!(!config.conversion().has_transform());
        assert_eq!(config.conversion().convert("a_b"), "a_b");
    }

    #[test]
    fn test_from_json() {
        let config = Config::from_json(
            r#"{ "from": "camel", "to": "snake", "prefix": ["get"], "fold": "upper" }"#,
        )
        .unwrap();

        assert_eq!(config.from, Style::Camel);
        assert_eq!(config.fold, Some(Fold::Upper));
        assert!(config.color);
        assert_eq!(config.conversion().convert("userName"), "GET_USER_NAME");
    }

    #[test]
    fn test_fold_overrides_target_case() {
        let mut config = Config {
            from: Style::Snake,
            to: Style::Kebab,
            ..Config::default()
        };
        assert_eq!(config.conversion().convert("User_NAME"), "user-name");

        config.fold = Some(Fold::Capitalize);
        assert_eq!(config.conversion().convert("User_NAME"), "User-Name");

        config.to = Style::ScreamingSnake;
        config.fold = Some(Fold::Lower);
        assert_eq!(config.conversion().convert("User_NAME"), "user_name");
    }

    #[test]
    fn test_fold_rejected_for_camel_targets() {
        for to in ["camel", "pascal"] {
            let json = format!(r#"{{ "from": "snake", "to": "{}", "fold": "upper" }}"#, to);
            let err = Config::from_json(&json).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidConfig);
            assert!(err.message.contains("fold has no effect"));
        }

        let config = Config {
            to: Style::Camel,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_color_from_json() {
        let config = Config::from_json(r#"{ "color": false }"#).unwrap();
        assert!(!config.color);
    }

    #[test]
    fn test_transform_order() {
        let config = Config {
            from: Style::Kebab,
            to: Style::Separator(crate::segment::Separator::new(".").unwrap()),
            prefix: vec!["a".into()],
            postfix: vec!["z".into()],
            fold: Some(Fold::Capitalize),
            color: false,
        };
        assert_eq!(config.transform().map(|chain| chain.len()), Some(2));
        assert_eq!(config.conversion().convert("m-n"), "A.M.N.Z");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_json(r#"{ "form": "camel" }"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_bad_style_rejected() {
        let err = Config::from_json(r#"{ "from": "sep:" }"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidConfig);
        assert!(err.message.contains("empty separator"));
    }

    #[test]
    fn test_fold_from_str() {
        assert_eq!("capitalize".parse::<Fold>().unwrap(), Fold::Capitalize);
        assert!("title".parse::<Fold>().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/nmconv.json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::IoError);
    }
}
