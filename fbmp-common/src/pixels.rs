//! RGBA ⇄ BGRA channel reorder
//!
//! Both directions are the same operation: bytes 0 and 2 of every 4-byte
//! pixel trade places, green and alpha stay put.

/// Swap the red and blue bytes of every pixel in place
///
/// `pixels` must hold whole 4-byte pixels.
pub fn swap_red_blue(pixels: &mut [u8]) {
    debug_assert_eq!(pixels.len() % 4, 0, "pixel buffer is not a multiple of 4");
    for px in pixels.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}

/// Convert an RGBA8 buffer to BGRA8, reusing its allocation
pub fn rgba_to_bgra(mut rgba: Vec<u8>) -> Vec<u8> {
    swap_red_blue(&mut rgba);
    rgba
}

/// Convert a BGRA8 buffer back to RGBA8, reusing its allocation
pub fn bgra_to_rgba(mut bgra: Vec<u8>) -> Vec<u8> {
    swap_red_blue(&mut bgra);
    bgra
}
