//! Redactmatch decides whether a document image shares the layout of a
//! partially-redacted reference template, and projects the template's
//! redaction regions onto it.
//!
//! The engine is deterministic pixel statistics: a validity mask excludes the
//! blacked-out areas of the reference, five masked similarity signals are
//! fused into one confidence, and the best template across a library is
//! chosen with a fixed threshold and first-registered tie-break. Parallel
//! sweeps are available behind the `rayon` feature and structured logging
//! behind `tracing`.

pub mod candidate;
pub mod lowlevel;
pub mod mask;
pub mod project;
pub mod raster;
pub mod redact;
pub mod score;
pub mod search;
pub mod signal;
pub mod template;
mod trace;
pub mod util;

pub use candidate::{MatchCandidate, MatchResult};
pub use mask::{build_mask, ValidityMask, DEFAULT_DARKNESS_THRESHOLD};
pub use project::project;
pub use raster::io::{load_rgb_image, save_rgb_image};
pub use redact::{apply_regions, masked_output_path};
pub use score::{score, SignalBreakdown, SimilarityScorer};
pub use search::{
    match_best, Comparison, HeuristicComparator, LayoutComparator, MatchConfig, MatchReport,
    RedactionPlan, TemplateMatcher, DEFAULT_THRESHOLD,
};
pub use template::{normalize_category, Region, Template, TemplateRepository};
pub use util::{
    ComparisonError, InvalidRegion, LoadError, LoadErrorKind, RedactMatchError, RedactMatchResult,
    ScoreComputationError,
};
