//! Image decoding into RGBA8 pixels.

use anyhow::{Context, Result};
use fbmp_common::FbmpHeader;
use std::path::Path;

/// Decoded image: tightly packed RGBA8, row-major, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaPixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbaPixels {
    /// Wrap decoded pixels. `data` must be exactly `width × height × 4` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        FbmpHeader::new(width, height)
            .check_pixel_len(data.len())
            .with_context(|| format!("Decoded {}x{} image has bad pixel data", width, height))?;

        Ok(Self {
            width,
            height,
            data,
        })
    }
}

/// Loads an image file and normalizes it to 8-bit RGBA
///
/// Implementations must synthesize an opaque alpha (255) for sources
/// without an alpha channel.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<RgbaPixels>;
}

/// Decoder backed by the `image` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, path: &Path) -> Result<RgbaPixels> {
        let img =
            image::open(path).with_context(|| format!("Failed to load image: {}", path.display()))?;

        tracing::debug!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            img.width(),
            img.height(),
            img.color()
        );

        // Palette, grayscale, RGB and 16-bit sources all land here as RGBA8
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        RgbaPixels::new(width, height, rgba.into_raw())
    }
}
