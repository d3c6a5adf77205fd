//! PNG writing module
//!
//! This module encodes output icons as RGBA PNG files.

mod writer;
mod standard_png_writer;
pub mod types;

pub use writer::PngWriter;
pub use standard_png_writer::StandardPngWriter;
pub use types::PngCompression;
