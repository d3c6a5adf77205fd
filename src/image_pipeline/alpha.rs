//! Alpha binarization
//!
//! Collapses partial transparency into hard edges.

use image::RgbaImage;

/// Threshold for general-purpose edge cleanup.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Sets alpha below `threshold` to 0 and everything else to 255.
///
/// Color channels are left alone. Applying this twice with the same
/// threshold is the same as applying it once.
pub fn binarize_alpha(image: &mut RgbaImage, threshold: u8) {
    for pixel in image.pixels_mut() {
        pixel[3] = if pixel[3] < threshold { 0 } else { u8::MAX };
    }
}
