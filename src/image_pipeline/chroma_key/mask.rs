use image::RgbaImage;

use crate::image_pipeline::chroma_key::types::Connectivity;

/// Boolean background mask, row-major, `true` = background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BackgroundMask {
    /// An all-foreground mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    pub(crate) fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> Self {
        assert_eq!(
            bits.len(),
            width as usize * height as usize,
            "mask length mismatch: bits={} pixels={}x{}",
            bits.len(),
            width,
            height
        );
        Self { width, height, bits }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn is_background(&self, x: u32, y: u32) -> bool {
        self.bits[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, background: bool) {
        let idx = self.index(x, y);
        self.bits[idx] = background;
    }

    /// Number of background pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Grows the background region `iterations` times.
    ///
    /// A pass marks every pixel adjacent (under `connectivity`) to a
    /// background pixel. Pixels beyond the border count as foreground.
    pub fn dilate(&self, iterations: u32, connectivity: Connectivity) -> Self {
        let width = self.width as i64;
        let height = self.height as i64;
        let offsets = connectivity.offsets();

        let mut current = self.bits.clone();
        for _ in 0..iterations {
            let mut next = current.clone();
            let mut changed = false;

            for y in 0..height {
                for x in 0..width {
                    if !current[(y * width + x) as usize] {
                        continue;
                    }
                    for &(dx, dy) in offsets {
                        let nx = x + dx;
                        let ny = y + dy;
                        if nx < 0 || ny < 0 || nx >= width || ny >= height {
                            continue;
                        }
                        let n = (ny * width + nx) as usize;
                        if !next[n] {
                            next[n] = true;
                            changed = true;
                        }
                    }
                }
            }

            current = next;
            if !changed {
                break;
            }
        }

        Self {
            width: self.width,
            height: self.height,
            bits: current,
        }
    }

    /// Zeroes the alpha channel of every background pixel.
    ///
    /// Panics if `image` does not have the mask's dimensions.
    pub fn apply_to_alpha(&self, image: &mut RgbaImage) {
        assert_eq!(
            image.dimensions(),
            (self.width, self.height),
            "mask and image dimensions differ"
        );

        for (pixel, &background) in image.pixels_mut().zip(self.bits.iter()) {
            if background {
                pixel[3] = 0;
            }
        }
    }
}
