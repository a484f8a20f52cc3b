//! Image loading utilities.

use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView};

use crate::error::{Error, Result};

use super::Raster;

/// Load an image from disk as an 8-bit raster.
///
/// Higher bit-depth inputs are narrowed to 8 bits per channel while keeping
/// their channel layout (gray, gray+alpha, RGB, RGBA).
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file is missing or cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    tracing::debug!(
        "Loaded {}: {width}x{height} {:?}",
        path.display(),
        img.color()
    );

    Ok(to_8bit(img))
}

/// Narrow a decoded image to 8 bits per channel.
fn to_8bit(img: DynamicImage) -> Raster {
    match img.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => img,
        ColorType::L16 => DynamicImage::ImageLuma8(img.to_luma8()),
        ColorType::La16 => DynamicImage::ImageLumaA8(img.to_luma_alpha8()),
        ColorType::Rgb16 | ColorType::Rgb32F => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => DynamicImage::ImageRgba8(img.to_rgba8()),
    }
}
