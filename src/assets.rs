use image::{Rgba, RgbaImage};
use std::path::PathBuf;

use crate::constants::{color, paths, sizes};

/// A square placeholder image and its file name inside the output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderAsset {
    pub name: &'static str,
    pub size: u32,
    pub file_name: &'static str,
}

pub const ICON: PlaceholderAsset = PlaceholderAsset {
    name: "icon",
    size: sizes::ICON,
    file_name: paths::ICON_FILE,
};

pub const FAVICON: PlaceholderAsset = PlaceholderAsset {
    name: "favicon",
    size: sizes::FAVICON,
    file_name: paths::FAVICON_FILE,
};

/// Assets in the order they are written
pub const PLACEHOLDER_ASSETS: [PlaceholderAsset; 2] = [ICON, FAVICON];

/// Allocate a `size` x `size` RGBA bitmap with every pixel set to the fill color
pub fn create_placeholder(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba(color::FILL_RGBA))
}

impl PlaceholderAsset {
    pub fn render(&self) -> RgbaImage {
        create_placeholder(self.size)
    }

    /// Path relative to the project root, always inside `paths::OUTPUT_DIR`
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(paths::OUTPUT_DIR).join(self.file_name)
    }
}
