//! Rotation with canvas expansion and a white background.

use image::Pixel;
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};

use crate::error::{Error, Result};
use crate::image::Raster;

use super::{map_raster, Buffer, PixelMap};

/// Rotate a raster counter-clockwise by `degrees`.
///
/// The canvas grows to the bounding box of the rotated content, and every
/// output pixel without a source pixel is opaque white, which reads as the
/// paper around a photographed sheet. Negative angles rotate clockwise.
/// Sampling is nearest-neighbour, so no new grey levels appear along edges.
///
/// # Errors
///
/// Returns an error if `degrees` is not finite.
pub fn rotate(raster: &Raster, degrees: f32) -> Result<Raster> {
    if !degrees.is_finite() {
        return Err(Error::invalid("degrees", "must be finite"));
    }

    tracing::debug!("Rotating by {degrees} degrees");
    Ok(map_raster(raster, &mut RotateExpand { degrees }))
}

/// Canvas size needed to hold a `width` x `height` raster rotated by `degrees`.
///
/// The corners are rotated about the centre; each side spans from the floor of
/// the lowest corner coordinate to the ceiling of the highest.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn expanded_dimensions(width: u32, height: u32, degrees: f32) -> (u32, u32) {
    // Round to 15 decimals so 0 and 90 degrees stay exact.
    let trim = |v: f64| (v * 1e15).round() / 1e15;
    let (sin, cos) = f64::from(degrees).to_radians().sin_cos();
    let (sin, cos) = (trim(sin).abs(), trim(cos).abs());
    let (w, h) = (f64::from(width), f64::from(height));

    let span = |centre: f64, half: f64| {
        let size = (centre + half).ceil() - (centre - half).floor();
        size.max(1.0) as u32
    };

    (
        span(w / 2.0, w.mul_add(cos, h * sin) / 2.0),
        span(h / 2.0, w.mul_add(sin, h * cos) / 2.0),
    )
}

struct RotateExpand {
    degrees: f32,
}

impl PixelMap for RotateExpand {
    #[allow(clippy::cast_precision_loss)]
    fn map<P>(&mut self, buf: &Buffer<P>, _has_alpha: bool) -> Buffer<P>
    where
        P: Pixel<Subpixel = u8> + Send + Sync,
    {
        let (width, height) = buf.dimensions();
        let (out_w, out_h) = expanded_dimensions(width, height, self.degrees);
        let white = white::<P>();

        // Projection::rotate turns clockwise in image coordinates.
        let projection = Projection::translate(out_w as f32 / 2.0, out_h as f32 / 2.0)
            * Projection::rotate(-self.degrees.to_radians())
            * Projection::translate(-(width as f32) / 2.0, -(height as f32) / 2.0);

        let mut out = Buffer::<P>::from_pixel(out_w, out_h, white);
        warp_into(buf, &projection, Interpolation::Nearest, white, &mut out);
        out
    }
}

/// All channels at full scale, alpha included.
fn white<P: Pixel<Subpixel = u8>>() -> P {
    let full = [u8::MAX; 4];
    *P::from_slice(&full[..usize::from(P::CHANNEL_COUNT)])
}
