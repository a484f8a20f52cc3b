//! Variation catalog and the generator that writes it out.

mod generator;
mod variation;

pub use generator::{Config, Generated, Generator, Report, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
pub use variation::{Step, Variation, NOISE_LEVEL};
