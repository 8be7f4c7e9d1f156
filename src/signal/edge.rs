//! Edge-map agreement.

use crate::score::ComparisonPair;
use crate::signal::{masked_agreement, Signal, SignalResult};
use imageproc::edges::canny;

const CANNY_LOW: f32 = 50.0;
const CANNY_HIGH: f32 = 150.0;

/// Fraction of valid pixels on which the two Canny edge maps agree.
///
/// Edges are detected on the full images so that gradients across the mask
/// border are still found, and compared only where the mask is valid.
pub struct EdgeMap;

impl Signal for EdgeMap {
    const NAME: &'static str = "edges";

    fn compute(pair: &ComparisonPair) -> SignalResult {
        let edges_ref = canny(pair.reference_gray(), CANNY_LOW, CANNY_HIGH);
        let edges_cand = canny(pair.candidate_gray(), CANNY_LOW, CANNY_HIGH);
        masked_agreement(&edges_ref, &edges_cand, pair.mask())
    }
}
