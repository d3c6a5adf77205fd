//! Source reader backed by the `image` crate.
//!
//! Accepts any encoding the crate was built with (JPEG and PNG here) and
//! normalizes the result to 8-bit RGBA. Sources without an alpha channel
//! come out fully opaque.

use tracing::debug;

use image::RgbaImage;
use crate::image_pipeline::common::error::{Result, ExtractionError};
use crate::image_pipeline::source::reader::SourceReader;

pub struct ImageCrateReader;

impl SourceReader for ImageCrateReader {
    /// Decodes an encoded image held in memory.
    ///
    /// # Errors
    ///
    /// * `SourceUnreadable` - the bytes are not a supported image encoding,
    ///   or they decode to an image with a zero width or height.
    fn read_source(&self, data: &[u8]) -> Result<RgbaImage> {
        debug!("Decoding source image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ExtractionError::SourceUnreadable(e.to_string()))?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        if width == 0 || height == 0 {
            return Err(ExtractionError::SourceUnreadable(format!(
                "decoded image has no pixels ({}x{})",
                width, height
            )));
        }

        debug!("Decoded source: {}x{}", width, height);
        Ok(rgba)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;

    #[test]
    fn decodes_rgb_png_as_opaque_rgba() {
        let img = RgbImage::from_pixel(4, 3, Rgb([10, 200, 30]));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).unwrap();

        let decoded = ImageCrateReader.read_source(bytes.get_ref()).unwrap();

        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(2, 1).0, [10, 200, 30, 255]);
    }

    #[test]
    fn rejects_garbage_bytes() {
        let result = ImageCrateReader.read_source(b"definitely not an image");
        assert!(matches!(result, Err(ExtractionError::SourceUnreadable(_))));
    }

    #[test]
    fn rejects_empty_input() {
        let result = ImageCrateReader.read_source(&[]);
        assert!(matches!(result, Err(ExtractionError::SourceUnreadable(_))));
    }
}
