use image::RgbaImage;
use tracing::trace;

use crate::image_pipeline::chroma_key::mask::BackgroundMask;
use crate::image_pipeline::chroma_key::types::ChromaKeyParams;
use crate::image_pipeline::color::HsvField;

/// Shortest angular distance between two hues, in degrees.
#[inline]
pub fn hue_distance(hue: f32, center: f32) -> f32 {
    let diff = (hue - center).abs();
    diff.min(360.0 - diff)
}

pub struct ChromaKeySegmenter {
    params: ChromaKeyParams,
}

impl ChromaKeySegmenter {
    pub fn new(params: ChromaKeyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ChromaKeyParams {
        &self.params
    }

    /// Classifies every sample of `hsv` and dilates the result.
    ///
    /// Never mutates the raster the field was derived from.
    pub fn segment(&self, hsv: &HsvField) -> BackgroundMask {
        let p = &self.params;

        let bits: Vec<bool> = hsv
            .hue()
            .iter()
            .zip(hsv.saturation())
            .zip(hsv.value())
            .map(|((&h, &s), &v)| {
                hue_distance(h, p.hue_center) < p.hue_tolerance
                    && s > p.min_saturation
                    && v > p.min_value
            })
            .collect();

        let keyed = BackgroundMask::from_bits(hsv.width(), hsv.height(), bits);
        if p.dilation_iterations == 0 {
            return keyed;
        }

        let grown = keyed.dilate(p.dilation_iterations, p.connectivity);
        trace!(
            keyed = keyed.count(),
            dilated = grown.count(),
            "Background mask computed"
        );
        grown
    }

    /// Converts `image` to HSV, segments it and zeroes alpha under the mask.
    ///
    /// Returns the mask that was applied.
    pub fn remove_background(&self, image: &mut RgbaImage) -> BackgroundMask {
        let hsv = HsvField::from_rgba(image);
        let mask = self.segment(&hsv);
        mask.apply_to_alpha(image);
        mask
    }
}

impl Default for ChromaKeySegmenter {
    fn default() -> Self {
        Self::new(ChromaKeyParams::default())
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;
    use crate::image_pipeline::chroma_key::types::Connectivity;

    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn no_dilation() -> ChromaKeySegmenter {
        ChromaKeySegmenter::new(ChromaKeyParams::builder().dilation_iterations(0).build())
    }

    #[test]
    fn hue_distance_wraps_around() {
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(0.0, 120.0), 120.0);
        assert_eq!(hue_distance(180.0, 0.0), 180.0);
    }

    #[test]
    fn pure_green_is_background() {
        let img = RgbaImage::from_pixel(1, 1, GREEN);
        let mask = ChromaKeySegmenter::default().segment(&HsvField::from_rgba(&img));
        assert!(mask.is_background(0, 0));
    }

    #[test]
    fn red_is_foreground_at_any_saturation_or_value() {
        for pixel in [RED, Rgba([128, 0, 0, 255]), Rgba([255, 200, 200, 255])] {
            let img = RgbaImage::from_pixel(1, 1, pixel);
            let mask = no_dilation().segment(&HsvField::from_rgba(&img));
            assert!(!mask.is_background(0, 0), "{:?} was keyed", pixel);
        }
    }

    #[test]
    fn dull_or_dark_green_is_foreground() {
        // saturation ~ 20%
        let pale = RgbaImage::from_pixel(1, 1, Rgba([200, 250, 200, 255]));
        assert_eq!(no_dilation().segment(&HsvField::from_rgba(&pale)).count(), 0);

        // value ~ 40%
        let dark = RgbaImage::from_pixel(1, 1, Rgba([0, 100, 0, 255]));
        assert_eq!(no_dilation().segment(&HsvField::from_rgba(&dark)).count(), 0);
    }

    #[test]
    fn tolerance_is_exclusive() {
        // hue exactly 60 (yellow) sits 60 degrees from the key
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 0, 255]));
        let hsv = HsvField::from_rgba(&img);

        let tight = ChromaKeySegmenter::new(
            ChromaKeyParams::builder().hue_tolerance(60.0).dilation_iterations(0).build(),
        );
        assert!(!tight.segment(&hsv).is_background(0, 0));

        let loose = ChromaKeySegmenter::new(
            ChromaKeyParams::builder().hue_tolerance(60.5).dilation_iterations(0).build(),
        );
        assert!(loose.segment(&hsv).is_background(0, 0));
    }

    #[test]
    fn dilation_eats_foreground_fringe() {
        let mut img = RgbaImage::from_pixel(7, 1, RED);
        img.put_pixel(0, 0, GREEN);

        let segmenter = ChromaKeySegmenter::new(
            ChromaKeyParams::builder()
                .dilation_iterations(2)
                .connectivity(Connectivity::Four)
                .build(),
        );
        let mask = segmenter.segment(&HsvField::from_rgba(&img));

        assert_eq!(mask.count(), 3);
        assert!(mask.is_background(2, 0));
        assert!(!mask.is_background(3, 0));
    }

    #[test]
    fn degenerate_cells_yield_uniform_masks() {
        let all_green = RgbaImage::from_pixel(4, 4, GREEN);
        let mask = ChromaKeySegmenter::default().segment(&HsvField::from_rgba(&all_green));
        assert_eq!(mask.count(), 16);

        let all_red = RgbaImage::from_pixel(4, 4, RED);
        let mask = ChromaKeySegmenter::default().segment(&HsvField::from_rgba(&all_red));
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn remove_background_clears_alpha_under_mask() {
        let mut img = RgbaImage::from_pixel(3, 1, RED);
        img.put_pixel(0, 0, GREEN);

        let mask = no_dilation().remove_background(&mut img);

        assert_eq!(mask.count(), 1);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(1, 0)[3], 255);
    }
}
