use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Expected exactly 2 thresholds, got {0}")]
    ThresholdCount(usize),
    #[error("Thresholds are reversed: low {low} > high {high}")]
    ReversedThresholds { low: f64, high: f64 },
    #[error("Thresholds must be finite: low {low}, high {high}")]
    NonFiniteThreshold { low: f64, high: f64 },
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("Invalid array shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("Invalid file extension: {0}")]
    InvalidExtension(String),
    #[error("Unsupported color type: {0}")]
    UnsupportedColorType(String),
    #[error("Image error: {0}")]
    Image(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(e) => Error::Io(e),
            e => Error::Image(e.to_string()),
        }
    }
}

impl From<common::FileExtensionError> for Error {
    fn from(e: common::FileExtensionError) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
