pub use crate::common::{Error, Result, Sample};
pub use crate::config::SegmentationConfig;
pub use crate::ops::{segment, segment_default, BandThreshold};
