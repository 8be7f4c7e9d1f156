//! Grayscale intensity histogram correlation.

use crate::score::ComparisonPair;
use crate::signal::{correlate_histograms, Signal, SignalResult};
use crate::util::ScoreComputationError;

const INTENSITY_BINS: usize = 256;

/// Correlation of 256-bin intensity histograms over valid pixels.
pub struct IntensityHistogram;

impl Signal for IntensityHistogram {
    const NAME: &'static str = "histogram";

    fn compute(pair: &ComparisonPair) -> SignalResult {
        let mask = pair.mask();
        if mask.valid_count() == 0 {
            return Err(ScoreComputationError::EmptySample);
        }
        let mut hist_ref = vec![0.0f64; INTENSITY_BINS];
        let mut hist_cand = vec![0.0f64; INTENSITY_BINS];
        let samples = pair
            .reference_gray()
            .as_raw()
            .iter()
            .zip(pair.candidate_gray().as_raw())
            .zip(mask.as_raw());
        for ((&r, &c), &m) in samples {
            if m == 0 {
                continue;
            }
            hist_ref[usize::from(r)] += 1.0;
            hist_cand[usize::from(c)] += 1.0;
        }
        correlate_histograms(hist_ref, hist_cand)
    }
}
