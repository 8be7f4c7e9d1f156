//! Five-signal similarity scoring that ignores redacted pixels.
//!
//! The fused score is a fixed weighted sum of the signals in [`crate::signal`],
//! clamped to `[0, 1]`. A signal that fails contributes 0; scoring itself never
//! fails.

use crate::mask::ValidityMask;
use crate::signal::{
    EdgeMap, GridCorrelation, HueHistogram, IntensityHistogram, LocalStructure, Signal,
    SignalResult,
};
use crate::trace::{trace_span, trace_warn};
use crate::util::ScoreComputationError;
use image::RgbImage;

mod pair;

pub use pair::ComparisonPair;

/// Weight of the intensity histogram correlation.
pub const HISTOGRAM_WEIGHT: f32 = 0.20;
/// Weight of the edge-map agreement.
pub const EDGE_WEIGHT: f32 = 0.35;
/// Weight of the spatial grid correlation.
pub const GRID_WEIGHT: f32 = 0.25;
/// Weight of the hue histogram correlation.
pub const HUE_WEIGHT: f32 = 0.10;
/// Weight of the local-structure agreement.
pub const LAYOUT_WEIGHT: f32 = 0.10;

/// Per-signal outcomes of one comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalBreakdown {
    pub histogram: SignalResult,
    pub edges: SignalResult,
    pub grid: SignalResult,
    pub hue: SignalResult,
    pub layout: SignalResult,
}

impl SignalBreakdown {
    /// Every signal failed with the same reason.
    pub fn failed(reason: ScoreComputationError) -> Self {
        Self {
            histogram: Err(reason),
            edges: Err(reason),
            grid: Err(reason),
            hue: Err(reason),
            layout: Err(reason),
        }
    }

    /// Weighted sum of the signals, failures counted as 0, clamped to `[0, 1]`.
    pub fn fused(&self) -> f32 {
        let parts = [
            (self.histogram, HISTOGRAM_WEIGHT),
            (self.edges, EDGE_WEIGHT),
            (self.grid, GRID_WEIGHT),
            (self.hue, HUE_WEIGHT),
            (self.layout, LAYOUT_WEIGHT),
        ];
        let sum: f32 = parts
            .iter()
            .map(|(result, weight)| result.map(|v| v * weight).unwrap_or(0.0))
            .sum();
        if sum.is_finite() {
            sum.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Scores a candidate image against a reference image and its validity mask.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Fused similarity in `[0, 1]`.
    pub fn score(
        &self,
        reference: &RgbImage,
        candidate: &RgbImage,
        reference_mask: &ValidityMask,
    ) -> f32 {
        self.breakdown(reference, candidate, reference_mask).fused()
    }

    /// Evaluates every signal and keeps the individual outcomes.
    pub fn breakdown(
        &self,
        reference: &RgbImage,
        candidate: &RgbImage,
        reference_mask: &ValidityMask,
    ) -> SignalBreakdown {
        let _span = trace_span!(
            "score",
            width = candidate.width(),
            height = candidate.height()
        )
        .entered();
        let pair = match ComparisonPair::prepare(reference, candidate, reference_mask) {
            Ok(pair) => pair,
            Err(_) => return SignalBreakdown::failed(ScoreComputationError::EmptySample),
        };
        SignalBreakdown {
            histogram: evaluate::<IntensityHistogram>(&pair),
            edges: evaluate::<EdgeMap>(&pair),
            grid: evaluate::<GridCorrelation>(&pair),
            hue: evaluate::<HueHistogram>(&pair),
            layout: evaluate::<LocalStructure>(&pair),
        }
    }
}

fn evaluate<S: Signal>(pair: &ComparisonPair) -> SignalResult {
    let result = S::compute(pair);
    if let Err(err) = result {
        let reason = err.to_string();
        trace_warn!("signal_degraded", signal = S::NAME, reason = reason.as_str());
    }
    result
}

/// Scores `candidate` against `reference` with the default scorer.
pub fn score(reference: &RgbImage, candidate: &RgbImage, reference_mask: &ValidityMask) -> f32 {
    SimilarityScorer::new().score(reference, candidate, reference_mask)
}

#[cfg(test)]
mod tests {
    use super::{
        SignalBreakdown, EDGE_WEIGHT, GRID_WEIGHT, HISTOGRAM_WEIGHT, HUE_WEIGHT, LAYOUT_WEIGHT,
    };
    use crate::util::ScoreComputationError;

    #[test]
    fn weights_sum_to_one() {
        let sum = HISTOGRAM_WEIGHT + EDGE_WEIGHT + GRID_WEIGHT + HUE_WEIGHT + LAYOUT_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn failed_signals_contribute_zero() {
        let mut breakdown = SignalBreakdown::failed(ScoreComputationError::EmptySample);
        assert_eq!(breakdown.fused(), 0.0);
        breakdown.edges = Ok(1.0);
        assert!((breakdown.fused() - EDGE_WEIGHT).abs() < 1e-6);
    }

    #[test]
    fn fused_score_is_clamped() {
        let mut breakdown = SignalBreakdown::failed(ScoreComputationError::NonFinite);
        breakdown.histogram = Ok(-1.0);
        breakdown.hue = Ok(-1.0);
        assert_eq!(breakdown.fused(), 0.0);

        let high = SignalBreakdown {
            histogram: Ok(1.0),
            edges: Ok(1.0),
            grid: Ok(1.0),
            hue: Ok(1.0),
            layout: Ok(1.0),
        };
        assert!(high.fused() <= 1.0);
        assert!(high.fused() > 0.999);
    }
}
