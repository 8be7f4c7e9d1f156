//! Shared utility helpers.

pub mod error;
pub(crate) mod math;

pub use error::{
    ComparisonError, InvalidRegion, LoadError, LoadErrorKind, RedactMatchError, RedactMatchResult,
    ScoreComputationError,
};
