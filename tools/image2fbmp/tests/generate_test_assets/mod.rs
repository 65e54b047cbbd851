//! Generates small source images for the integration tests

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// 2×1 RGBA: opaque red, opaque blue
pub fn generate_red_blue_png(path: &Path) -> image::ImageResult<()> {
    RgbaImage::from_raw(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255])
        .expect("2x1 buffer")
        .save(path)
}

/// 4×4 RGB checkerboard, no alpha channel
pub fn generate_checkerboard_png(path: &Path) -> image::ImageResult<()> {
    RgbImage::from_fn(4, 4, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
    .save(path)
}

/// 5×3 grayscale gradient, no alpha channel
pub fn generate_gray_png(path: &Path) -> image::ImageResult<()> {
    GrayImage::from_fn(5, 3, |x, y| Luma([(x * 40 + y * 10) as u8])).save(path)
}

/// 3×2 RGBA with varying alpha
pub fn generate_translucent_png(path: &Path) -> image::ImageResult<()> {
    RgbaImage::from_fn(3, 2, |x, y| {
        Rgba([x as u8 * 50, y as u8 * 90, 200, (x * 60 + y * 30) as u8])
    })
    .save(path)
}

/// 6×4 palette-based GIF
pub fn generate_gif(path: &Path) -> image::ImageResult<()> {
    RgbaImage::from_fn(6, 4, |x, _| {
        if x < 3 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 255, 0, 255])
        }
    })
    .save(path)
}

/// 2×2 RGB with 16 bits per channel
pub fn generate_rgb16_png(path: &Path) -> image::ImageResult<()> {
    image::ImageBuffer::<Rgb<u16>, Vec<u16>>::from_pixel(2, 2, Rgb([65535, 0, 65535])).save(path)
}

/// 3×3 RGBA TIFF
pub fn generate_tiff(path: &Path) -> image::ImageResult<()> {
    RgbaImage::from_fn(3, 3, |x, y| Rgba([x as u8 * 80, y as u8 * 80, 17, 255])).save(path)
}
