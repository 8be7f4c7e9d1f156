//! Deterministic best-candidate selection.

use crate::candidate::{MatchCandidate, MatchResult};
use std::cmp::Ordering;

/// Descending score, then ascending registration order.
fn candidate_cmp_desc(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.order.cmp(&b.order))
}

/// Sorts candidates best-first with registration order breaking ties.
pub fn rank_candidates(candidates: &mut [MatchCandidate]) {
    candidates.sort_by(candidate_cmp_desc);
}

/// Picks the earliest-registered candidate holding the maximum score.
///
/// Returns [`MatchResult::NoMatch`] when that candidate scores below
/// `threshold` or was not accepted by its comparator. A score exactly equal to
/// the threshold is accepted.
pub fn select_best(candidates: &[MatchCandidate], threshold: f32) -> MatchResult {
    let best = candidates.iter().min_by(|a, b| candidate_cmp_desc(a, b));
    match best {
        Some(best) if best.accepted && best.score >= threshold => {
            MatchResult::Matched(best.clone())
        }
        _ => MatchResult::NoMatch,
    }
}
