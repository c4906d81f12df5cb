mod common;
mod config;
mod image;
mod ops;

pub mod prelude;

pub use prelude::*;

// Error handling
pub use crate::common::{Error, Result};

// Element types
pub use crate::common::Sample;

// Configuration
pub use crate::config::SegmentationConfig;

// Image files
pub use crate::image::{read_gray, save_mask, SUPPORTED_EXTENSIONS};

// Operations
pub use crate::ops::{segment, segment_default, BandThreshold};
