//! Image saving utilities.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::{Raster, OUTPUT_EXTENSION};

/// Save a raster as `<dir>/<stem>.png`, creating `dir` if it is missing.
///
/// The file is fully written and flushed before this returns.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot
/// be encoded.
pub fn save_image<P: AsRef<Path>>(raster: &Raster, dir: P, stem: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();

    fs::create_dir_all(dir).map_err(|source| Error::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(format!("{stem}.{OUTPUT_EXTENSION}"));

    raster.save(&path).map_err(|source| Error::ImageSave {
        path: path.clone(),
        source,
    })?;

    tracing::debug!("Wrote {}", path.display());
    Ok(path)
}
