//! Content trimming
//!
//! Crops a raster to its non-transparent content and re-pads it with a
//! uniform transparent margin.

use image::{Rgba, RgbaImage, imageops};

/// Inclusive-exclusive pixel rectangle `[left, right) x [top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Smallest box containing every pixel with alpha > 0, if any.
pub fn content_bounds(image: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        let b = bounds.get_or_insert(BoundingBox {
            left: x,
            top: y,
            right: x + 1,
            bottom: y + 1,
        });
        b.left = b.left.min(x);
        b.top = b.top.min(y);
        b.right = b.right.max(x + 1);
        b.bottom = b.bottom.max(y + 1);
    }

    bounds
}

/// Crops `image` to its content and pads `padding` transparent pixels on
/// every side.
///
/// A fully transparent image is returned as an unmodified copy.
pub fn trim_transparent(image: &RgbaImage, padding: u32) -> RgbaImage {
    let Some(bounds) = content_bounds(image) else {
        return image.clone();
    };

    let cropped = imageops::crop_imm(image, bounds.left, bounds.top, bounds.width(), bounds.height())
        .to_image();

    let mut padded = RgbaImage::from_pixel(
        bounds.width() + 2 * padding,
        bounds.height() + 2 * padding,
        Rgba([0, 0, 0, 0]),
    );
    imageops::replace(&mut padded, &cropped, padding as i64, padding as i64);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn fully_transparent_input_is_returned_unchanged() {
        let img = RgbaImage::from_pixel(9, 5, Rgba([0, 255, 0, 0]));

        assert_eq!(content_bounds(&img), None);
        assert_eq!(trim_transparent(&img, 10), img);
    }

    #[test]
    fn single_pixel_lands_at_padding_offset() {
        let mut img = RgbaImage::from_pixel(40, 30, CLEAR);
        let dot = Rgba([12, 34, 56, 255]);
        img.put_pixel(17, 23, dot);

        for padding in [0u32, 1, 5, 10] {
            let out = trim_transparent(&img, padding);
            assert_eq!(out.dimensions(), (1 + 2 * padding, 1 + 2 * padding));
            assert_eq!(*out.get_pixel(padding, padding), dot);
            assert_eq!(out.pixels().filter(|p| p[3] > 0).count(), 1);
        }
    }

    #[test]
    fn bounds_cover_all_visible_pixels() {
        let mut img = RgbaImage::from_pixel(20, 20, CLEAR);
        img.put_pixel(3, 15, Rgba([1, 1, 1, 1]));
        img.put_pixel(12, 4, Rgba([1, 1, 1, 255]));

        let bounds = content_bounds(&img).unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                left: 3,
                top: 4,
                right: 13,
                bottom: 16
            }
        );
        assert_eq!((bounds.width(), bounds.height()), (10, 12));
    }

    #[test]
    fn padding_ring_is_fully_clear() {
        let mut img = RgbaImage::from_pixel(10, 10, CLEAR);
        for y in 2..6 {
            for x in 3..8 {
                img.put_pixel(x, y, Rgba([200, 10, 10, 255]));
            }
        }

        let out = trim_transparent(&img, 4);
        assert_eq!(out.dimensions(), (5 + 8, 4 + 8));

        for (x, y, pixel) in out.enumerate_pixels() {
            let inside = (4..9).contains(&x) && (4..8).contains(&y);
            if inside {
                assert_eq!(pixel.0, [200, 10, 10, 255]);
            } else {
                assert_eq!(*pixel, CLEAR);
            }
        }
    }
}
