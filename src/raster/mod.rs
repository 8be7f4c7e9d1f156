//! Pixel-buffer helpers shared by the mask builder and the signals.
//!
//! All comparison work happens on `image::RgbImage` buffers and their
//! `GrayImage` intensity planes. Resizing never upscales beyond the smaller of
//! the two images being compared.

use crate::util::{RedactMatchError, RedactMatchResult};
use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};

pub mod io;

/// Number of bins used for hue histograms over the full hue circle.
pub(crate) const HUE_BINS: usize = 50;

/// Returns the element-wise minimum of two `(width, height)` pairs.
pub fn common_size(a: (u32, u32), b: (u32, u32)) -> RedactMatchResult<(u32, u32)> {
    let width = a.0.min(b.0);
    let height = a.1.min(b.1);
    if width == 0 || height == 0 {
        return Err(RedactMatchError::InvalidDimensions { width, height });
    }
    Ok((width, height))
}

/// Resizes an RGB image to exactly `width` x `height` (bilinear), or clones it
/// when it already has that size.
pub fn fit_to(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    imageops::resize(img, width, height, FilterType::Triangle)
}

/// Converts an RGB image to its single-channel intensity plane.
pub fn intensity(img: &RgbImage) -> GrayImage {
    imageops::grayscale(img)
}

/// Hue of an RGB pixel in degrees `[0, 360)`; achromatic pixels map to 0.
pub(crate) fn hue_degrees(rgb: [u8; 3]) -> f32 {
    let r = f32::from(rgb[0]);
    let g = f32::from(rgb[1]);
    let b = f32::from(rgb[2]);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta <= 0.0 {
        return 0.0;
    }
    let hue = if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        60.0 * (b - r) / delta + 120.0
    } else {
        60.0 * (r - g) / delta + 240.0
    };
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Histogram bin of a hue value for [`HUE_BINS`] bins.
pub(crate) fn hue_bin(hue_deg: f32) -> usize {
    let bin = (hue_deg / 360.0 * HUE_BINS as f32) as usize;
    bin.min(HUE_BINS - 1)
}
