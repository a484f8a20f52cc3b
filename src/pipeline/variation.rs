//! The fixed catalog of variations written for every run.

use std::fmt;

/// Noise level of the standalone noisy variation, as a fraction of 0-255.
pub const NOISE_LEVEL: f32 = 0.015;

/// One transform applied while building a variation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Counter-clockwise rotation in degrees with canvas expansion.
    Rotate(f32),
    /// Multiplicative brightness factor.
    Brightness(f64),
    /// Gaussian noise with the given sigma.
    Noise(f32),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotate(deg) => write!(f, "rotate {deg:+}°"),
            Self::Brightness(factor) => write!(f, "brightness x{factor}"),
            Self::Noise(sigma) => write!(f, "noise sigma={sigma}"),
        }
    }
}

/// A named output image. Variants are listed in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variation {
    /// Unmodified baseline.
    Original,
    /// Rotated 10 degrees counter-clockwise.
    Rotated10,
    /// Rotated 15 degrees clockwise.
    RotatedMinus15,
    /// Brightness at 60%.
    DimLighting,
    /// Brightness at 140%.
    BrightLighting,
    /// Gaussian noise.
    Noisy,
    /// Rotated 8 degrees, then brightness at 70%.
    RotatedDim,
}

impl Variation {
    /// Every variation, in the order they are written.
    pub const ALL: [Self; 7] = [
        Self::Original,
        Self::Rotated10,
        Self::RotatedMinus15,
        Self::DimLighting,
        Self::BrightLighting,
        Self::Noisy,
        Self::RotatedDim,
    ];

    /// File name without extension, prefixed with its two-digit position.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Original => "01_original",
            Self::Rotated10 => "02_rotated_10deg",
            Self::RotatedMinus15 => "03_rotated_minus15deg",
            Self::DimLighting => "04_dim_lighting",
            Self::BrightLighting => "05_bright_lighting",
            Self::Noisy => "06_noisy",
            Self::RotatedDim => "07_rotated_dim",
        }
    }

    /// Transforms applied to the source image, in order.
    #[must_use]
    pub const fn steps(self) -> &'static [Step] {
        match self {
            Self::Original => &[],
            Self::Rotated10 => &[Step::Rotate(10.0)],
            Self::RotatedMinus15 => &[Step::Rotate(-15.0)],
            Self::DimLighting => &[Step::Brightness(0.6)],
            Self::BrightLighting => &[Step::Brightness(1.4)],
            Self::Noisy => &[Step::Noise(NOISE_LEVEL)],
            // Rotation first: brightness also scales the white fill.
            Self::RotatedDim => &[Step::Rotate(8.0), Step::Brightness(0.7)],
        }
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}
