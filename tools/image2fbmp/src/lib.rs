//! image2fbmp library
//!
//! Converts raster images (PNG, JPEG, GIF, BMP, TGA, TIFF, WebP, ICO, PNM)
//! to `.fbmp` framebuffer bitmaps. The binary in `main.rs` is a thin wrapper around [`convert`].

pub mod convert;
pub mod decode;

pub use convert::{ConvertError, Converter, convert, default_output_path};
pub use decode::{ImageCrateDecoder, ImageDecoder, RgbaPixels};

// Re-export the format crate for consumers reading files back
pub use fbmp_common;
