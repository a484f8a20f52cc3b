//! Additive Gaussian noise.

use image::Pixel;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};
use crate::image::Raster;

use super::{map_raster, to_u8, Buffer, PixelMap};

/// Add zero-mean Gaussian noise to every channel of every pixel.
///
/// `sigma` is a fraction of the 0-255 range, so `0.015` draws samples with a
/// standard deviation of about 3.8 intensity levels. Each value becomes
/// `clamp(round(v + n), 0, 255)` with an independent sample `n` per channel,
/// alpha included.
///
/// # Errors
///
/// Returns an error if `sigma` is negative or not finite.
pub fn add_noise<R: Rng + ?Sized>(raster: &Raster, sigma: f32, rng: &mut R) -> Result<Raster> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(Error::invalid("sigma", "must be a finite, non-negative number"));
    }

    let normal = Normal::new(0.0, sigma * 255.0)
        .map_err(|err| Error::invalid("sigma", err.to_string()))?;

    tracing::debug!("Adding gaussian noise, sigma = {sigma}");
    Ok(map_raster(raster, &mut GaussianNoise { normal, rng }))
}

struct GaussianNoise<'a, R: ?Sized> {
    normal: Normal<f32>,
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> PixelMap for GaussianNoise<'_, R> {
    fn map<P>(&mut self, buf: &Buffer<P>, _has_alpha: bool) -> Buffer<P>
    where
        P: Pixel<Subpixel = u8> + Send + Sync,
    {
        let mut out = buf.clone();

        for pixel in out.pixels_mut() {
            for value in pixel.channels_mut() {
                let sample = self.normal.sample(&mut *self.rng);
                *value = to_u8(f32::from(*value) + sample);
            }
        }

        out
    }
}
