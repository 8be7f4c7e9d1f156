//! Validity masks derived from partially-redacted reference images.
//!
//! A pixel is valid when its intensity is strictly above the darkness
//! threshold. The valid region is then eroded once with a 5x5 square so the
//! anti-aliased rim of each black box is excluded as well.

use crate::raster::intensity;
use image::{GrayImage, Luma, RgbImage};
use imageproc::distance_transform::Norm;
use imageproc::morphology::erode;

/// Default intensity at or below which a pixel counts as redacted.
pub const DEFAULT_DARKNESS_THRESHOLD: u8 = 30;

/// Chebyshev radius of the erosion; radius 2 is a 5x5 square.
const EROSION_RADIUS: u8 = 2;

const VALID: u8 = 255;

/// Boolean pixel grid marking which reference pixels are usable.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidityMask {
    pixels: GrayImage,
    darkness_threshold: u8,
    valid_count: usize,
}

impl ValidityMask {
    /// Builds a mask with every pixel valid.
    pub fn all_valid(width: u32, height: u32) -> Self {
        Self::from_pixels(GrayImage::from_pixel(width, height, Luma([VALID])), 0)
    }

    fn from_pixels(pixels: GrayImage, darkness_threshold: u8) -> Self {
        let valid_count = pixels.as_raw().iter().filter(|&&v| v != 0).count();
        Self {
            pixels,
            darkness_threshold,
            valid_count,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Threshold this mask was built with; reused when the mask has to be
    /// recomputed at another comparison size.
    pub fn darkness_threshold(&self) -> u8 {
        self.darkness_threshold
    }

    /// Number of valid pixels.
    pub fn valid_count(&self) -> usize {
        self.valid_count
    }

    /// Returns whether `(x, y)` is valid; out-of-bounds pixels are not.
    pub fn is_valid(&self, x: u32, y: u32) -> bool {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| p.0[0] != 0)
            .unwrap_or(false)
    }

    /// Row-major validity flags, one byte per pixel (0 = invalid).
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

/// Derives the validity mask of a reference image.
///
/// An all-black image yields an all-false mask; that is a normal result and
/// downstream signals report it as an empty sample.
pub fn build_mask(image: &RgbImage, darkness_threshold: u8) -> ValidityMask {
    let gray = intensity(image);
    let mut valid = GrayImage::new(gray.width(), gray.height());
    for (dst, src) in valid.pixels_mut().zip(gray.pixels()) {
        dst.0[0] = if src.0[0] > darkness_threshold { VALID } else { 0 };
    }
    let eroded = erode(&valid, Norm::LInf, EROSION_RADIUS);
    ValidityMask::from_pixels(eroded, darkness_threshold)
}

#[cfg(test)]
mod tests {
    use super::{build_mask, ValidityMask, DEFAULT_DARKNESS_THRESHOLD};
    use image::{Rgb, RgbImage};

    #[test]
    fn all_black_image_has_no_valid_pixels() {
        let img = RgbImage::from_pixel(20, 16, Rgb([0, 0, 0]));
        let mask = build_mask(&img, DEFAULT_DARKNESS_THRESHOLD);
        assert_eq!(mask.dimensions(), (20, 16));
        assert_eq!(mask.valid_count(), 0);
    }

    #[test]
    fn bright_image_is_fully_valid() {
        let img = RgbImage::from_pixel(12, 9, Rgb([200, 210, 220]));
        let mask = build_mask(&img, DEFAULT_DARKNESS_THRESHOLD);
        assert_eq!(mask.valid_count(), 12 * 9);
        assert_eq!(mask.as_raw(), ValidityMask::all_valid(12, 9).as_raw());
        assert_eq!(mask.darkness_threshold(), DEFAULT_DARKNESS_THRESHOLD);
    }

    #[test]
    fn redaction_box_is_grown_by_two_pixels() {
        let mut img = RgbImage::from_pixel(30, 30, Rgb([240, 240, 240]));
        for y in 10..15 {
            for x in 10..20 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        let mask = build_mask(&img, DEFAULT_DARKNESS_THRESHOLD);
        assert!(!mask.is_valid(10, 10));
        assert!(!mask.is_valid(8, 12));
        assert!(!mask.is_valid(21, 16));
        assert!(mask.is_valid(7, 12));
        assert!(mask.is_valid(22, 12));
        assert!(mask.is_valid(15, 17));
        // box grown to 14x9 pixels
        assert_eq!(mask.valid_count(), 30 * 30 - 14 * 9);
    }

    #[test]
    fn threshold_is_exclusive() {
        let img = RgbImage::from_pixel(8, 8, Rgb([30, 30, 30]));
        assert_eq!(build_mask(&img, 30).valid_count(), 0);
        assert_eq!(build_mask(&img, 29).valid_count(), 64);
    }
}
