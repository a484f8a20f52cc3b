//! Brightness scaling.

use image::Pixel;

use crate::error::{Error, Result};
use crate::image::Raster;

use super::{map_raster, Buffer, PixelMap};

/// Scale the colour channels of a raster by `factor`.
///
/// This is a blend towards black: `0.0` gives a black image, `1.0` leaves the
/// raster unchanged, values above `1.0` brighten and saturate at 255. Scaled
/// values are truncated, not rounded. Alpha is left untouched.
///
/// # Errors
///
/// Returns an error if `factor` is negative or not finite.
pub fn adjust_brightness(raster: &Raster, factor: f64) -> Result<Raster> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(Error::invalid("factor", "must be a finite, non-negative number"));
    }

    tracing::debug!("Scaling brightness by {factor}");
    Ok(map_raster(raster, &mut Brightness { factor }))
}

struct Brightness {
    factor: f64,
}

impl PixelMap for Brightness {
    fn map<P>(&mut self, buf: &Buffer<P>, has_alpha: bool) -> Buffer<P>
    where
        P: Pixel<Subpixel = u8> + Send + Sync,
    {
        let mut out = buf.clone();
        let colour = usize::from(P::CHANNEL_COUNT) - usize::from(has_alpha);

        for pixel in out.pixels_mut() {
            for value in &mut pixel.channels_mut()[..colour] {
                *value = truncate(f64::from(*value) * self.factor);
            }
        }

        out
    }
}

/// Clamp to the 8-bit range, dropping the fractional part.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(value: f64) -> u8 {
    // Safe: clamped to [0, 255] before casting
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(16, 16, |x, y| {
            #[allow(clippy::cast_possible_truncation)]
            let v = (x * 16 + y) as u8;
            Rgb([v, v / 2, 255 - v])
        }))
    }

    #[test]
    fn test_unit_factor_is_noop() {
        let raster = gradient();
        let out = adjust_brightness(&raster, 1.0).unwrap();
        assert_eq!(out, raster);
    }

    #[test]
    fn test_dim() {
        let raster = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([200, 100, 255])));
        let out = adjust_brightness(&raster, 0.6).unwrap().to_rgb8();
        assert_eq!(out.get_pixel(0, 0), &Rgb([120, 60, 153]));
    }

    #[test]
    fn test_bright_saturates() {
        let raster = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([200, 100, 0])));
        let out = adjust_brightness(&raster, 1.4).unwrap().to_rgb8();
        assert_eq!(out.get_pixel(1, 1), &Rgb([255, 140, 0]));
    }

    #[test]
    fn test_fraction_is_dropped() {
        let raster = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([101, 99, 1])));
        let dim = adjust_brightness(&raster, 0.6).unwrap().to_rgb8();
        assert_eq!(dim.get_pixel(0, 0), &Rgb([60, 59, 0]));

        let bright = adjust_brightness(&raster, 1.4).unwrap().to_rgb8();
        assert_eq!(bright.get_pixel(0, 0), &Rgb([141, 138, 1]));
    }

    #[test]
    fn test_alpha_preserved() {
        let raster =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([100, 100, 100, 77])));
        let out = adjust_brightness(&raster, 0.5).unwrap().to_rgba8();
        assert_eq!(out.get_pixel(0, 1), &Rgba([50, 50, 50, 77]));
    }

    #[test]
    fn test_zero_is_black() {
        let out = adjust_brightness(&gradient(), 0.0).unwrap().to_rgb8();
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_invalid_factor() {
        let raster = gradient();
        assert!(adjust_brightness(&raster, -0.1).is_err());
        assert!(adjust_brightness(&raster, f64::INFINITY).is_err());
        assert!(adjust_brightness(&raster, f64::NAN).is_err());
    }
}
