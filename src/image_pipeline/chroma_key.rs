//! Chroma-key segmentation module
//!
//! Classifies background pixels by hue band, saturation floor and value
//! floor, then grows the background region to swallow anti-aliased fringes.

mod mask;
mod segmenter;
pub mod types;

pub use mask::BackgroundMask;
pub use segmenter::{ChromaKeySegmenter, hue_distance};
pub use types::{ChromaKeyParams, ChromaKeyParamsBuilder, Connectivity};
