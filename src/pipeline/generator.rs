//! Variation generator: load once, transform, save.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use ::image::GenericImageView;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::image::{self, Raster};
use crate::transform;

use super::variation::{Step, Variation};

/// Default input image, relative to [`Config::root`].
pub const DEFAULT_INPUT: &str = "assets/test_sheet_filled.png";

/// Default output directory, relative to [`Config::root`].
pub const DEFAULT_OUTPUT_DIR: &str = "assets/gallery";

/// Configuration for a generator run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that relative `input` and `output_dir` paths are resolved against.
    pub root: PathBuf,

    /// Source image.
    pub input: PathBuf,

    /// Directory receiving the generated files.
    pub output_dir: PathBuf,

    /// Seed for the noise draw. None for a fresh draw every run.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the input or output path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(Error::invalid("input", "must not be empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::invalid("output_dir", "must not be empty"));
        }

        Ok(())
    }

    /// Input path with the root applied.
    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        self.root.join(&self.input)
    }

    /// Output directory with the root applied.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }
}

/// A variation that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub variation: Variation,
    pub path: PathBuf,
    pub dimensions: (u32, u32),
}

impl Generated {
    /// File name of the written image.
    #[must_use]
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map_or(Cow::Borrowed(""), |name| name.to_string_lossy())
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct Report {
    pub output_dir: PathBuf,
    pub files: Vec<Generated>,
}

/// Writes the fixed set of variations of one source image.
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Create a new generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing generator with config: {config:?}");

        Ok(Self { config })
    }

    /// The configuration this generator runs with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Generate every variation.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or an output cannot
    /// be written.
    pub fn run(&self) -> Result<Report> {
        self.run_with(|_| {})
    }

    /// Generate every variation, calling `on_saved` after each file is written.
    ///
    /// The output directory is created before the source is read, so a missing
    /// source leaves an empty directory behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or an output cannot
    /// be written. Files already written stay on disk.
    pub fn run_with<F>(&self, mut on_saved: F) -> Result<Report>
    where
        F: FnMut(&Generated),
    {
        let input = self.config.input_path();
        let output_dir = self.config.output_path();

        fs::create_dir_all(&output_dir).map_err(|source| Error::OutputDir {
            path: output_dir.clone(),
            source,
        })?;

        tracing::info!("Loading source image: {}", input.display());
        let source = image::load_image(&input)?;

        let mut rng = self
            .config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut files = Vec::with_capacity(Variation::ALL.len());
        for variation in Variation::ALL {
            let generated = render(&source, variation, &output_dir, &mut rng)?;
            on_saved(&generated);
            files.push(generated);
        }

        tracing::info!(
            "Wrote {} variations to {}",
            files.len(),
            output_dir.display()
        );

        Ok(Report { output_dir, files })
    }
}

/// Build one variation from the source and write it out.
fn render<R: Rng + ?Sized>(
    source: &Raster,
    variation: Variation,
    output_dir: &Path,
    rng: &mut R,
) -> Result<Generated> {
    tracing::info!("Generating {variation}");

    let raster = apply_steps(source, variation.steps(), rng)?;
    let path = image::save_image(&raster, output_dir, variation.file_stem())?;

    Ok(Generated {
        variation,
        path,
        dimensions: raster.dimensions(),
    })
}

/// Apply `steps` in order. The source is borrowed as-is when there are none.
fn apply_steps<'a, R: Rng + ?Sized>(
    source: &'a Raster,
    steps: &[Step],
    rng: &mut R,
) -> Result<Cow<'a, Raster>> {
    let mut raster = Cow::Borrowed(source);

    for step in steps {
        tracing::debug!("  {step}");
        let next = match *step {
            Step::Rotate(degrees) => transform::rotate(&raster, degrees)?,
            Step::Brightness(factor) => transform::adjust_brightness(&raster, factor)?,
            Step::Noise(sigma) => transform::add_noise(&raster, sigma, rng)?,
        };
        raster = Cow::Owned(next);
    }

    Ok(raster)
}
