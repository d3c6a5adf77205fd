//! Source image reading module
//!
//! This module decodes the sprite sheet into an RGBA raster.

mod reader;
mod image_reader;

pub use reader::SourceReader;
pub use image_reader::ImageCrateReader;
