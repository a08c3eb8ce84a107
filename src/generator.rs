use anyhow::{Context, Result};
use image::ImageFormat;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::assets::{PlaceholderAsset, PLACEHOLDER_ASSETS};
use crate::constants::paths;

/// Render `asset` and write it as PNG into `root/assets/images`, replacing any existing file
pub fn write_placeholder(root: &Path, asset: &PlaceholderAsset) -> Result<PathBuf> {
    let path = root.join(asset.relative_path());

    asset
        .render()
        .save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {} to {}", asset.name, path.display()))?;

    Ok(path)
}

/// Write every placeholder asset under `root`, icon first.
///
/// The output directory is not created. If it is missing the call fails
/// before either file is touched.
pub fn generate_placeholders(root: &Path) -> Result<Vec<PathBuf>> {
    let output_dir = root.join(paths::OUTPUT_DIR);

    // Checked up front so a missing directory leaves both files untouched,
    // rather than failing halfway through the writes.
    let metadata = fs::metadata(&output_dir)
        .with_context(|| format!("Cannot write placeholder images to {}", output_dir.display()))?;
    if !metadata.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", output_dir.display()),
        ))
        .context("Cannot write placeholder images");
    }

    let mut written = Vec::with_capacity(PLACEHOLDER_ASSETS.len());
    for asset in &PLACEHOLDER_ASSETS {
        written.push(write_placeholder(root, asset)?);
    }

    Ok(written)
}
