//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_image;
pub use save::save_image;

use image::DynamicImage;

/// In-memory raster with 8 bits per channel.
///
/// Anything coming out of [`load_image`] is one of the `Luma8`, `LumaA8`,
/// `Rgb8` or `Rgba8` variants.
pub type Raster = DynamicImage;

/// File extension used for every generated variation.
pub const OUTPUT_EXTENSION: &str = "png";
