//! # omr-variations
//!
//! Fabricates test fixtures for an optical-mark-recognition pipeline.
//!
//! One scanned answer sheet goes in; seven variations come out: the original,
//! two rotations on a white background, dim and bright lighting, Gaussian
//! noise, and a rotated + dimmed combination. Each variation is written as a
//! numbered PNG (`01_original.png` .. `07_rotated_dim.png`).
//!
//! ## Example
//!
//! ```no_run
//! use omr_variations::{Config, Generator};
//!
//! # fn main() -> omr_variations::Result<()> {
//! let config = Config {
//!     seed: Some(7),
//!     ..Config::default()
//! };
//! let report = Generator::new(config)?.run()?;
//!
//! for file in &report.files {
//!     println!("{}", file.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;
pub mod transform;

pub use error::{Error, Result};
pub use pipeline::{Config, Generated, Generator, Report, Variation};
