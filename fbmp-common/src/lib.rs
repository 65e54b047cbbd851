//! Shared types for the FBMP framebuffer bitmap format
//!
//! FBMP is an uncompressed pixel dump meant to be blitted straight into a
//! 32-bit BGRA framebuffer. This crate is used by:
//! - `image2fbmp` (converter CLI and library)
//! - any consumer that needs to read `.fbmp` files back
//!
//! # Modules
//!
//! - [`header`] - 12-byte file header (magic, width, height)
//! - [`pixels`] - RGBA ⇄ BGRA channel reorder
//! - [`image`] - whole-file FBMP image (encode and parse)

pub mod header;
pub mod image;
pub mod pixels;

pub use header::{FBMP_EXT, FBMP_MAGIC, FbmpHeader};
pub use image::FbmpImage;
pub use pixels::{bgra_to_rgba, rgba_to_bgra, swap_red_blue};

/// Errors produced while encoding or parsing FBMP data
#[derive(Debug, thiserror::Error)]
pub enum FbmpError {
    #[error("FBMP data too short: {len} bytes, header needs {}", FbmpHeader::SIZE)]
    TooShort { len: usize },

    #[error("Bad FBMP magic: {0:#010x}")]
    BadMagic(u32),

    #[error("Image dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("Pixel data size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
