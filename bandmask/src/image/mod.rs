
use std::path::Path;

use ::image as image_lib;
use common::get_file_extension;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use num_traits::Float;

use crate::common::{Error, Result};

/// Supported image file extensions for reading and writing.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff", "tif"];

fn file_extension(filename: &Path) -> Result<String> {
    let filename = filename.to_string_lossy();
    let extension = get_file_extension(&filename)
        .ok_or_else(|| Error::InvalidExtension("missing extension".to_string()))?
        .to_ascii_lowercase();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::InvalidExtension(extension));
    }

    Ok(extension)
}

/// Reads an image file as normalized luma intensities in `[0, 1]`.
///
/// Color images are reduced to luma. The array has shape `(height, width)`.
pub fn read_gray<P: AsRef<Path>>(filename: P) -> Result<Array2<f32>> {
    let filename = filename.as_ref();
    file_extension(filename)?;

    let img = image_lib::open(filename)?;
    let (width, height) = (img.width() as usize, img.height() as usize);

    let values: Vec<f32> = match img.color() {
        image_lib::ColorType::L8
        | image_lib::ColorType::La8
        | image_lib::ColorType::Rgb8
        | image_lib::ColorType::Rgba8 => img
            .to_luma8()
            .into_raw()
            .into_iter()
            .map(|v| v as f32 / u8::MAX as f32)
            .collect(),
        image_lib::ColorType::L16
        | image_lib::ColorType::La16
        | image_lib::ColorType::Rgb16
        | image_lib::ColorType::Rgba16 => img
            .to_luma16()
            .into_raw()
            .into_iter()
            .map(|v| v as f32 / u16::MAX as f32)
            .collect(),
        image_lib::ColorType::Rgb32F | image_lib::ColorType::Rgba32F => {
            img.to_luma32f().into_raw()
        }
        other => return Err(Error::UnsupportedColorType(format!("{:?}", other))),
    };

    log::debug!(
        "Loaded {} ({}x{} {:?})",
        filename.display(),
        width,
        height,
        img.color()
    );

    Ok(Array2::from_shape_vec((height, width), values)?)
}

/// Writes a 2-D mask as an 8-bit grayscale image.
///
/// Values are clamped to `[0, 1]` and scaled to `0..=255`; NaN is written
/// as black. The format follows the file extension.
pub fn save_mask<S, M, P>(mask: &ArrayBase<S, Ix2>, filename: P) -> Result<()>
where
    S: Data<Elem = M>,
    M: Float,
    P: AsRef<Path>,
{
    let filename = filename.as_ref();
    let format = match file_extension(filename)?.as_str() {
        "png" => image_lib::ImageFormat::Png,
        "jpg" | "jpeg" => image_lib::ImageFormat::Jpeg,
        "tif" | "tiff" => image_lib::ImageFormat::Tiff,
        other => return Err(Error::InvalidExtension(other.to_string())),
    };

    let (height, width) = mask.dim();
    let width = u32::try_from(width)
        .map_err(|_| Error::Image(format!("mask width {} exceeds u32", width)))?;
    let height = u32::try_from(height)
        .map_err(|_| Error::Image(format!("mask height {} exceeds u32", height)))?;

    let bytes: Vec<u8> = mask
        .iter()
        .map(|v| {
            let v = v.to_f32().unwrap_or(0.0);
            if v.is_nan() {
                0
            } else {
                (v.clamp(0.0, 1.0) * u8::MAX as f32).round() as u8
            }
        })
        .collect();

    let gray = image_lib::GrayImage::from_raw(width, height, bytes)
        .ok_or_else(|| Error::Image("mask buffer does not match dimensions".to_string()))?;
    gray.save_with_format(filename, format)?;

    log::debug!("Saved {}x{} mask to {}", width, height, filename.display());

    Ok(())
}
