pub(crate) mod error;
pub(crate) mod sample;

pub use error::{Error, Result};
pub use sample::Sample;
