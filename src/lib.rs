pub mod config;
pub mod conversion;
pub mod debug;
pub mod denormalize;
pub mod error;
pub mod normalize;
pub mod segment;
pub mod style;
pub mod transform;

pub use config::*;
pub use conversion::*;
pub use denormalize::*;
pub use error::{ErrorFormatter, ErrorKind, NmconvError};
pub use normalize::*;
pub use segment::*;
pub use style::*;
pub use transform::*;
