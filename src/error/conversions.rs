//! Conversions from foreign error types into NmconvError

use super::{ErrorKind, NmconvError};

impl From<std::io::Error> for NmconvError {
    fn from(err: std::io::Error) -> Self {
        NmconvError::new(ErrorKind::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for NmconvError {
    fn from(err: serde_json::Error) -> Self {
        NmconvError::new(ErrorKind::InvalidConfig, err.to_string())
    }
}
