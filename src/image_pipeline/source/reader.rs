use image::RgbaImage;

use crate::image_pipeline::common::error::Result;

pub trait SourceReader {
    fn read_source(&self, data: &[u8]) -> Result<RgbaImage>;
}
