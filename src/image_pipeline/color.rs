//! Color model conversion module
//!
//! Converts RGBA rasters into planar HSV fields used for chroma-key
//! thresholding.

mod hsv;

pub use hsv::{Hsv, HsvField, rgb_to_hsv};
