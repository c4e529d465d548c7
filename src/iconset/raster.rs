//! Resampling the source icon and encoding each size as PNG.

use super::{IconSize, SourceIcon};
use crate::error::Result;
use image::{ImageFormat, RgbaImage, imageops::FilterType};
use std::io::Cursor;

/// Encodes a bitmap into the byte stream stored in the iconset.
pub trait ImageEncoder {
    /// Encode `bitmap`. A failure skips this size only.
    fn encode(&self, bitmap: &RgbaImage) -> Result<Vec<u8>>;
}

/// Lossless PNG encoding, the format `iconutil` expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn encode(&self, bitmap: &RgbaImage) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        bitmap.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Resample `icon` to an exact `size.pixels` square.
///
/// Uses Lanczos3, which keeps edges sharp when downscaling.
pub fn rasterize(icon: &SourceIcon, size: &IconSize) -> RgbaImage {
    let source = icon.image();
    if source.dimensions() == (size.pixels, size.pixels) {
        return source.clone();
    }
    image::imageops::resize(source, size.pixels, size.pixels, FilterType::Lanczos3)
}
