//! Iconset generation for the `.icns` container.
//!
//! An iconset is a directory named `*.iconset` holding one PNG per entry of
//! [`ICONSET_SIZES`], named `icon_<label>.png`. `iconutil` packs it into a
//! single `.icns` file.
//!
//! | Label        | Pixels |
//! |--------------|--------|
//! | `16x16`      | 16     |
//! | `16x16@2x`   | 32     |
//! | `32x32`      | 32     |
//! | `32x32@2x`   | 64     |
//! | `128x128`    | 128    |
//! | `128x128@2x` | 256    |
//! | `256x256`    | 256    |
//! | `256x256@2x` | 512    |
//! | `512x512`    | 512    |
//! | `512x512@2x` | 1024   |

pub mod lookup;
pub mod raster;
pub mod staging;

pub use lookup::{IconLookup, SourceIcon, WorkspaceIconLookup};
pub use raster::{ImageEncoder, PngEncoder, rasterize};
pub use staging::StagingDir;

/// Directory name `iconutil` expects for its input.
pub const ICONSET_DIR_NAME: &str = "icon.iconset";

/// One entry of the iconset: edge length in pixels and its filename label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    /// Edge length of the square bitmap
    pub pixels: u32,
    /// Label used in the filename, e.g. `"16x16@2x"`
    pub label: &'static str,
}

impl IconSize {
    const fn new(pixels: u32, label: &'static str) -> Self {
        Self { pixels, label }
    }

    /// Filename of this entry inside the iconset.
    pub fn file_name(&self) -> String {
        format!("icon_{}.png", self.label)
    }
}

/// Every size `iconutil` expects, in the order they are generated.
pub const ICONSET_SIZES: [IconSize; 10] = [
    IconSize::new(16, "16x16"),
    IconSize::new(32, "16x16@2x"),
    IconSize::new(32, "32x32"),
    IconSize::new(64, "32x32@2x"),
    IconSize::new(128, "128x128"),
    IconSize::new(256, "128x128@2x"),
    IconSize::new(256, "256x256"),
    IconSize::new(512, "256x256@2x"),
    IconSize::new(512, "512x512"),
    IconSize::new(1024, "512x512@2x"),
];

/// Largest edge length in [`ICONSET_SIZES`]; the source icon is requested at this size.
pub const MAX_ICON_PIXELS: u32 = 1024;
