/// Fixed values for the placeholder assets: fill color, sizes, output paths

pub mod color {
    /// Fill color for every pixel, fully opaque blue (#2563EB)
    pub const FILL_RGBA: [u8; 4] = [37, 99, 235, 255];
}

pub mod sizes {
    /// App icon edge length in pixels
    pub const ICON: u32 = 512;

    /// Browser favicon edge length in pixels
    pub const FAVICON: u32 = 32;
}

pub mod paths {
    /// Directory the assets are written into. Must already exist.
    pub const OUTPUT_DIR: &str = "assets/images";

    /// File names inside `OUTPUT_DIR`
    pub const ICON_FILE: &str = "icon.png";
    pub const FAVICON_FILE: &str = "favicon.png";
}

pub mod messages {
    /// Printed once, after both files have been written
    pub const SUCCESS: &str = "Images created successfully";
}
