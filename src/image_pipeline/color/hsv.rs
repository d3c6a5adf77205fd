//! RGB to HSV conversion.

use image::RgbaImage;

/// A single HSV sample.
///
/// Hue is in degrees `[0, 360)`, saturation and value are percentages
/// `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

/// Converts one 8-bit RGB triple to HSV.
///
/// When two or more channels share the maximum, blue takes precedence over
/// green and green over red when picking the hue sector.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == b {
        60.0 * ((r - g) / delta) + 240.0
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        (60.0 * ((g - b) / delta) + 360.0) % 360.0
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        hue,
        saturation: saturation * 100.0,
        value: max * 100.0,
    }
}

/// Planar HSV field with the same dimensions as its source raster.
///
/// Each plane is a contiguous row-major buffer of `width * height` samples.
#[derive(Debug, Clone)]
pub struct HsvField {
    width: u32,
    height: u32,
    hue: Vec<f32>,
    saturation: Vec<f32>,
    value: Vec<f32>,
}

impl HsvField {
    /// Converts every pixel of `image`. The alpha channel is ignored.
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let len = width as usize * height as usize;

        let mut hue = Vec::with_capacity(len);
        let mut saturation = Vec::with_capacity(len);
        let mut value = Vec::with_capacity(len);

        for pixel in image.as_raw().chunks_exact(4) {
            let hsv = rgb_to_hsv(pixel[0], pixel[1], pixel[2]);
            hue.push(hsv.hue);
            saturation.push(hsv.saturation);
            value.push(hsv.value);
        }

        Self {
            width,
            height,
            hue,
            saturation,
            value,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.hue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hue.is_empty()
    }

    pub fn hue(&self) -> &[f32] {
        &self.hue
    }

    pub fn saturation(&self) -> &[f32] {
        &self.saturation
    }

    pub fn value(&self) -> &[f32] {
        &self.value
    }

    pub fn get(&self, x: u32, y: u32) -> Hsv {
        let idx = y as usize * self.width as usize + x as usize;
        Hsv {
            hue: self.hue[idx],
            saturation: self.saturation[idx],
            value: self.value[idx],
        }
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn achromatic_pixels_have_no_hue_or_saturation() {
        for level in [0u8, 1, 64, 128, 200, 255] {
            let hsv = rgb_to_hsv(level, level, level);
            assert_eq!(hsv.hue, 0.0);
            assert_eq!(hsv.saturation, 0.0);
            assert!(approx(hsv.value, level as f32 / 255.0 * 100.0));
        }
    }

    #[test]
    fn primaries_land_on_their_sectors() {
        let red = rgb_to_hsv(255, 0, 0);
        assert!(approx(red.hue, 0.0));
        assert!(approx(red.saturation, 100.0));
        assert!(approx(red.value, 100.0));

        let green = rgb_to_hsv(0, 255, 0);
        assert!(approx(green.hue, 120.0));
        assert!(approx(green.saturation, 100.0));
        assert!(approx(green.value, 100.0));

        let blue = rgb_to_hsv(0, 0, 255);
        assert!(approx(blue.hue, 240.0));
    }

    #[test]
    fn red_sector_wraps_negative_hues() {
        // magenta-ish red: max = r, b > g gives a negative raw angle
        let hsv = rgb_to_hsv(255, 0, 128);
        assert!(hsv.hue > 300.0 && hsv.hue < 360.0);
    }

    #[test]
    fn ties_prefer_later_channels() {
        // yellow: r == g, green sector formula gives 60
        assert!(approx(rgb_to_hsv(255, 255, 0).hue, 60.0));
        // cyan: g == b, blue sector formula gives 180
        assert!(approx(rgb_to_hsv(0, 255, 255).hue, 180.0));
        // magenta: r == b, blue sector formula gives 300
        assert!(approx(rgb_to_hsv(255, 0, 255).hue, 300.0));
    }

    #[test]
    fn saturation_is_relative_to_max() {
        let hsv = rgb_to_hsv(100, 50, 50);
        assert!(approx(hsv.saturation, 50.0));
        assert!(approx(hsv.value, 100.0 / 255.0 * 100.0));
    }

    #[test]
    fn field_matches_per_pixel_conversion() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([0, 255, 0, 255]));
        img.put_pixel(2, 1, Rgba([255, 0, 0, 0]));

        let field = HsvField::from_rgba(&img);

        assert_eq!((field.width(), field.height()), (3, 2));
        assert_eq!(field.len(), 6);
        assert!(approx(field.get(0, 0).hue, 120.0));
        assert_eq!(field.get(2, 1), rgb_to_hsv(255, 0, 0));
    }
}
