//! FBMP file header (.fbmp)
//!
//! # Layout
//! ```text
//! 0x00: magic u32 (0x706D6266, bytes "fbmp")
//! 0x04: width u32
//! 0x08: height u32
//! 0x0C: pixel_data (BGRA8: width × height × 4 bytes, no row padding)
//! ```
//!
//! All integers are little-endian.

use crate::FbmpError;

/// Magic tag at offset 0, compared as a little-endian u32
pub const FBMP_MAGIC: u32 = 0x706D_6266;

/// File extension for FBMP files (without the dot)
pub const FBMP_EXT: &str = "fbmp";

/// FBMP header (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FbmpHeader {
    pub width: u32,
    pub height: u32,
}

impl FbmpHeader {
    pub const SIZE: usize = 12;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// BGRA8 pixel data size (4 bytes per pixel), `None` if it overflows `usize`
    pub fn pixel_data_size(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(4)
    }

    /// Check that a pixel buffer of `actual` bytes fills exactly these dimensions
    pub fn check_pixel_len(&self, actual: usize) -> Result<(), FbmpError> {
        let expected = self.pixel_data_size().ok_or(FbmpError::DimensionsTooLarge {
            width: self.width,
            height: self.height,
        })?;
        if actual != expected {
            return Err(FbmpError::SizeMismatch { expected, actual });
        }
        Ok(())
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&FBMP_MAGIC.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.width.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_le_bytes());
        bytes
    }

    /// Read header from bytes, checking the magic tag
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FbmpError> {
        if bytes.len() < Self::SIZE {
            return Err(FbmpError::TooShort { len: bytes.len() });
        }

        let magic = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        if magic != FBMP_MAGIC {
            return Err(FbmpError::BadMagic(magic));
        }

        Ok(Self {
            width: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            height: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        })
    }
}
