//! Pixel transforms applied to a loaded raster.
//!
//! Every transform takes the raster by reference and returns a new one with
//! the same channel layout. Output values always stay within `0..=255`.

mod brightness;
mod noise;
mod rotate;

pub use brightness::adjust_brightness;
pub use noise::add_noise;
pub use rotate::{expanded_dimensions, rotate};

use image::{DynamicImage, ImageBuffer, Pixel};

use crate::image::Raster;

/// 8-bit pixel buffer of any channel layout.
pub(crate) type Buffer<P> = ImageBuffer<P, Vec<u8>>;

/// A per-buffer operation that works for every 8-bit pixel layout.
pub(crate) trait PixelMap {
    /// Produce a new buffer from `buf`. `has_alpha` is set when the last
    /// channel of `P` is an alpha channel.
    fn map<P>(&mut self, buf: &Buffer<P>, has_alpha: bool) -> Buffer<P>
    where
        P: Pixel<Subpixel = u8> + Send + Sync;
}

/// Run `op` on whichever buffer `raster` holds.
pub(crate) fn map_raster<M: PixelMap>(raster: &Raster, op: &mut M) -> Raster {
    match raster {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(op.map(buf, false)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(op.map(buf, true)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(op.map(buf, false)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(op.map(buf, true)),
        other => DynamicImage::ImageRgba8(op.map(&other.to_rgba8(), true)),
    }
}

/// Clamp to the 8-bit range and round to the nearest integer.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(value: f32) -> u8 {
    // Safe: clamped to [0, 255] before casting
    value.round().clamp(0.0, 255.0) as u8
}
