//! Match candidates and best-match selection.
//!
//! Selection is a single-threaded reduction over the candidates of a full
//! sweep, so the result never depends on the order in which workers finished.

mod select;

pub use select::{rank_candidates, select_best};

use serde::Serialize;

/// Outcome of comparing a candidate image against one template.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub template_id: String,
    pub category: String,
    /// Confidence in `[0, 1]`.
    pub score: f32,
    /// Whether the comparator accepted the template at the configured threshold.
    pub accepted: bool,
    /// Registration index of the template in its repository.
    pub order: usize,
    /// Comparator's explanation of the score.
    pub reason: String,
}

/// Best match of a sweep, or none.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchResult {
    Matched(MatchCandidate),
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    pub fn candidate(&self) -> Option<&MatchCandidate> {
        match self {
            MatchResult::Matched(candidate) => Some(candidate),
            MatchResult::NoMatch => None,
        }
    }

    pub fn into_candidate(self) -> Option<MatchCandidate> {
        match self {
            MatchResult::Matched(candidate) => Some(candidate),
            MatchResult::NoMatch => None,
        }
    }
}
