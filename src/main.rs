//! omr-variations CLI - write rotated, re-lit and noisy copies of a test sheet.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use omr_variations::pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use omr_variations::{Config, Generator};

/// Generate test image variations for OMR pipeline validation.
///
/// With no arguments, reads `assets/test_sheet_filled.png` and writes seven
/// images to `assets/gallery/`, both relative to the crate directory.
#[derive(Parser, Debug)]
#[command(name = "omr-variations")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory that relative input and output paths are resolved against.
    #[arg(long, value_name = "DIR", default_value = env!("CARGO_MANIFEST_DIR"))]
    root: PathBuf,

    /// Source image.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory receiving the generated images.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Random seed for the noisy variation.
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("omr_variations={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<()> {
    let config = Config {
        root: args.root,
        input: args.input,
        output_dir: args.output_dir,
        seed: args.seed,
    };

    let generator = Generator::new(config).context("Invalid configuration")?;

    let report = generator
        .run_with(|generated| println!("✓ Created: {}", generated.file_name()))
        .context("Failed to generate variations")?;

    println!();
    println!(
        "✅ Successfully created {} test image variations!",
        report.files.len()
    );
    println!("   Location: {}", report.output_dir.display());

    Ok(())
}
