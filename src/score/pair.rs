//! Reference/candidate images brought to a common comparison size.

use crate::mask::{build_mask, ValidityMask};
use crate::raster::{common_size, fit_to, intensity};
use crate::util::RedactMatchResult;
use image::{GrayImage, RgbImage};

/// Both images resized to the element-wise minimum of their sizes, with their
/// intensity planes and a validity mask of matching dimensions.
pub struct ComparisonPair {
    reference: RgbImage,
    candidate: RgbImage,
    reference_gray: GrayImage,
    candidate_gray: GrayImage,
    mask: ValidityMask,
}

impl ComparisonPair {
    /// Resizes both images and adapts the mask.
    ///
    /// The mask is reused when it already has the comparison size; otherwise it
    /// is rebuilt from the resized reference with the mask's own darkness
    /// threshold, since resizing moves the redaction box edges.
    pub fn prepare(
        reference: &RgbImage,
        candidate: &RgbImage,
        reference_mask: &ValidityMask,
    ) -> RedactMatchResult<Self> {
        let (width, height) = common_size(reference.dimensions(), candidate.dimensions())?;
        let reference = fit_to(reference, width, height);
        let candidate = fit_to(candidate, width, height);
        let mask = if reference_mask.dimensions() == (width, height) {
            reference_mask.clone()
        } else {
            build_mask(&reference, reference_mask.darkness_threshold())
        };
        let reference_gray = intensity(&reference);
        let candidate_gray = intensity(&candidate);
        Ok(Self {
            reference,
            candidate,
            reference_gray,
            candidate_gray,
            mask,
        })
    }

    pub fn width(&self) -> u32 {
        self.reference.width()
    }

    pub fn height(&self) -> u32 {
        self.reference.height()
    }

    pub fn reference(&self) -> &RgbImage {
        &self.reference
    }

    pub fn candidate(&self) -> &RgbImage {
        &self.candidate
    }

    pub fn reference_gray(&self) -> &GrayImage {
        &self.reference_gray
    }

    pub fn candidate_gray(&self) -> &GrayImage {
        &self.candidate_gray
    }

    pub fn mask(&self) -> &ValidityMask {
        &self.mask
    }
}
