//! Local-structure agreement from adaptive thresholding.

use crate::score::ComparisonPair;
use crate::signal::{masked_agreement, Signal, SignalResult};
use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;

/// Sigma of the Gaussian local mean; matches an 11-pixel block.
const BLOCK_SIGMA: f32 = 2.0;
/// Offset subtracted from the local mean before thresholding.
const BLOCK_OFFSET: i16 = 2;

/// Fraction of valid pixels on which the inverse adaptive-threshold maps of the
/// two images agree. The maps mark ink (text, rules, logos) as 255, so this
/// tracks where content blocks sit on the page.
pub struct LocalStructure;

impl Signal for LocalStructure {
    const NAME: &'static str = "layout";

    fn compute(pair: &ComparisonPair) -> SignalResult {
        let ink_ref = adaptive_threshold_inv(pair.reference_gray());
        let ink_cand = adaptive_threshold_inv(pair.candidate_gray());
        masked_agreement(&ink_ref, &ink_cand, pair.mask())
    }
}

/// 255 where a pixel is at least `BLOCK_OFFSET` darker than its Gaussian
/// neighbourhood mean, 0 elsewhere.
pub(crate) fn adaptive_threshold_inv(gray: &GrayImage) -> GrayImage {
    let local_mean = gaussian_blur_f32(gray, BLOCK_SIGMA);
    let mut out = GrayImage::new(gray.width(), gray.height());
    for ((dst, src), mean) in out.pixels_mut().zip(gray.pixels()).zip(local_mean.pixels()) {
        let delta = i16::from(src.0[0]) - i16::from(mean.0[0]);
        dst.0[0] = if delta > -BLOCK_OFFSET { 0 } else { 255 };
    }
    out
}
