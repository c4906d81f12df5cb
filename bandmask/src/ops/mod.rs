mod band_threshold;

pub use band_threshold::{segment, segment_default, BandThreshold};
