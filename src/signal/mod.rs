//! Similarity signals fused by the scorer.
//!
//! Each signal compares the two images of a [`ComparisonPair`] while ignoring
//! pixels outside the validity mask, and returns a similarity where 1 means
//! identical. A signal that cannot produce a number reports a
//! [`ScoreComputationError`] instead of guessing.

use crate::mask::ValidityMask;
use crate::score::ComparisonPair;
use crate::util::math::{histogram_correlation, normalize_min_max};
use crate::util::ScoreComputationError;
use image::GrayImage;

mod edge;
mod grid;
mod histogram;
mod hue;
mod layout;

pub use edge::EdgeMap;
pub use grid::GridCorrelation;
pub use histogram::IntensityHistogram;
pub use hue::HueHistogram;
pub use layout::LocalStructure;

/// Result of evaluating one signal.
pub type SignalResult = Result<f32, ScoreComputationError>;

/// A single similarity measure over a prepared pair.
pub trait Signal {
    /// Short identifier used in diagnostics.
    const NAME: &'static str;

    /// Computes the similarity for the pair.
    fn compute(pair: &ComparisonPair) -> SignalResult;
}

/// `1 - sum(|a - b|) / (valid * 255)` over valid pixels of two binary maps.
pub(crate) fn masked_agreement(
    a: &GrayImage,
    b: &GrayImage,
    mask: &ValidityMask,
) -> SignalResult {
    let valid = mask.valid_count();
    if valid == 0 {
        return Err(ScoreComputationError::EmptySample);
    }
    let diff: u64 = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .zip(mask.as_raw())
        .filter(|(_, m)| **m != 0)
        .map(|((&va, &vb), _)| u64::from(va.abs_diff(vb)))
        .sum();
    let similarity = 1.0 - diff as f64 / (valid as f64 * 255.0);
    finite(similarity)
}

/// Correlates two histograms after min-max normalising each of them.
pub(crate) fn correlate_histograms(mut a: Vec<f64>, mut b: Vec<f64>) -> SignalResult {
    normalize_min_max(&mut a);
    normalize_min_max(&mut b);
    let r = histogram_correlation(&a, &b).ok_or(ScoreComputationError::UndefinedCorrelation)?;
    finite(r)
}

pub(crate) fn finite(value: f64) -> SignalResult {
    let value = value as f32;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoreComputationError::NonFinite)
    }
}
