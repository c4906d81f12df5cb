pub mod file_format;
pub mod float_ext;
pub mod log_setup;
pub mod test_utils;

pub use file_format::{get_file_extension, FileExtensionError, FileFormatResult, SerdeFormat};
pub use float_ext::{FloatExt, EPSILON};
