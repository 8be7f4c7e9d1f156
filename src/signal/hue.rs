//! Hue histogram correlation.

use crate::raster::{hue_bin, hue_degrees, HUE_BINS};
use crate::score::ComparisonPair;
use crate::signal::{correlate_histograms, Signal, SignalResult};
use crate::util::ScoreComputationError;

/// Correlation of hue histograms (HSV hue, [`HUE_BINS`] bins) over valid pixels.
pub struct HueHistogram;

impl Signal for HueHistogram {
    const NAME: &'static str = "hue";

    fn compute(pair: &ComparisonPair) -> SignalResult {
        let mask = pair.mask();
        if mask.valid_count() == 0 {
            return Err(ScoreComputationError::EmptySample);
        }
        let mut hist_ref = vec![0.0f64; HUE_BINS];
        let mut hist_cand = vec![0.0f64; HUE_BINS];
        let pixels = pair
            .reference()
            .pixels()
            .zip(pair.candidate().pixels())
            .zip(mask.as_raw());
        for ((r, c), &m) in pixels {
            if m == 0 {
                continue;
            }
            hist_ref[hue_bin(hue_degrees(r.0))] += 1.0;
            hist_cand[hue_bin(hue_degrees(c.0))] += 1.0;
        }
        correlate_histograms(hist_ref, hist_cand)
    }
}
