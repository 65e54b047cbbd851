//! Whole-file FBMP image: encode from RGBA8, parse back

use std::path::Path;

use crate::pixels::{bgra_to_rgba, rgba_to_bgra};
use crate::{FbmpError, FbmpHeader};

/// An FBMP image held in memory: header plus tightly packed BGRA8 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FbmpImage {
    pub header: FbmpHeader,
    pub pixels: Vec<u8>,
}

impl FbmpImage {
    /// Build an image from decoded RGBA8 pixels
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, FbmpError> {
        let header = FbmpHeader::new(width, height);
        header.check_pixel_len(rgba.len())?;
        Ok(Self {
            header,
            pixels: rgba_to_bgra(rgba),
        })
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Parse a complete file. The body must be exactly `width × height × 4` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FbmpError> {
        let header = FbmpHeader::from_bytes(bytes)?;
        let body = &bytes[FbmpHeader::SIZE..];
        header.check_pixel_len(body.len())?;
        Ok(Self {
            header,
            pixels: body.to_vec(),
        })
    }

    /// Read and parse a `.fbmp` file
    pub fn read(path: &Path) -> Result<Self, FbmpError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize header and pixels into one buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FbmpHeader::SIZE + self.pixels.len());
        out.extend_from_slice(&self.header.to_bytes());
        out.extend_from_slice(&self.pixels);
        out
    }

    /// Consume the image, returning its pixels in RGBA8 order
    pub fn into_rgba(self) -> Vec<u8> {
        bgra_to_rgba(self.pixels)
    }
}
