//! Pluggable layout comparison backends.

use crate::mask::build_mask;
use crate::score::{SignalBreakdown, SimilarityScorer};
use crate::search::MatchConfig;
use crate::signal::SignalResult;
use crate::template::Template;
use crate::util::ComparisonError;
use image::RgbImage;

/// Verdict of one template/candidate comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    /// Confidence in `[0, 1]`.
    pub confidence: f32,
    /// Backend's own accept decision.
    pub is_match: bool,
    /// Human-readable explanation.
    pub reason: String,
}

/// Decides whether a candidate image has the layout of a template.
///
/// The pixel-statistics [`HeuristicComparator`] is the built-in backend. Other
/// backends (for instance a remote service asked to compare the two images)
/// are passed to the matcher explicitly. Thresholds come from the matcher's
/// [`MatchConfig`], never from the backend. A backend error only zeroes the
/// score of that one template.
pub trait LayoutComparator: Sync {
    fn compare(
        &self,
        template: &Template,
        candidate: &RgbImage,
        cfg: &MatchConfig,
    ) -> Result<Comparison, ComparisonError>;
}

/// Masked five-signal comparison of pixel statistics.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicComparator {
    scorer: SimilarityScorer,
}

impl HeuristicComparator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutComparator for HeuristicComparator {
    fn compare(
        &self,
        template: &Template,
        candidate: &RgbImage,
        cfg: &MatchConfig,
    ) -> Result<Comparison, ComparisonError> {
        let mask = build_mask(template.reference(), cfg.darkness_threshold);
        let breakdown = self.scorer.breakdown(template.reference(), candidate, &mask);
        let confidence = breakdown.fused();
        Ok(Comparison {
            confidence,
            is_match: confidence >= cfg.threshold,
            reason: describe(&breakdown),
        })
    }
}

fn describe(breakdown: &SignalBreakdown) -> String {
    let fmt = |result: &SignalResult| match result {
        Ok(value) => format!("{value:.3}"),
        Err(err) => format!("0 ({err})"),
    };
    format!(
        "histogram={} edges={} grid={} hue={} layout={}",
        fmt(&breakdown.histogram),
        fmt(&breakdown.edges),
        fmt(&breakdown.grid),
        fmt(&breakdown.hue),
        fmt(&breakdown.layout),
    )
}
