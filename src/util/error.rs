//! Error types for redactmatch.
//!
//! Only structural failures (bad dimensions, a missing template root) are
//! surfaced as [`RedactMatchError`]. Failures scoped to a single template or a
//! single similarity signal have their own types so callers can contain them.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for redactmatch operations.
pub type RedactMatchResult<T> = std::result::Result<T, RedactMatchError>;

/// Fatal errors returned by redactmatch operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RedactMatchError {
    /// Width or height is zero.
    #[error("invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },
    /// The template root directory does not exist.
    #[error("template root not found: {}", path.display())]
    RootNotFound { path: PathBuf },
    /// The template root exists but is not a directory.
    #[error("template root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
    /// Filesystem failure outside of a single template.
    #[error("i/o error at {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
    /// Image decoding or encoding failed.
    #[error("image I/O failed: {reason}")]
    ImageIo { reason: String },
}

/// A coordinate entry that violates the region invariants.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InvalidRegion {
    #[error("region origin ({x}, {y}) is negative")]
    NegativeOrigin { x: i64, y: i64 },
    #[error("region size {width}x{height} is not positive")]
    NonPositiveSize { width: i64, height: i64 },
    #[error("region value {value} does not fit in pixel coordinates")]
    OutOfRange { value: i64 },
}

/// Reason a single template was dropped during repository load.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadErrorKind {
    #[error("no reference image next to the coordinates file")]
    MissingImage,
    #[error("reference image could not be decoded: {reason}")]
    UnreadableImage { reason: String },
    #[error("coordinates file is malformed: {reason}")]
    MalformedCoordinates { reason: String },
    #[error("region #{index} is invalid: {source}")]
    InvalidRegion {
        index: usize,
        #[source]
        source: InvalidRegion,
    },
}

/// A template that was excluded from the repository, and why.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("skipped template {}: {kind}", path.display())]
pub struct LoadError {
    /// Coordinates file of the rejected template.
    pub path: PathBuf,
    pub kind: LoadErrorKind,
}

/// Numeric failure inside one similarity signal.
///
/// The scorer replaces the failing signal's value with 0 and keeps fusing the
/// remaining signals.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScoreComputationError {
    #[error("no valid pixels to sample")]
    EmptySample,
    #[error("correlation is undefined for constant input")]
    UndefinedCorrelation,
    #[error("no grid cell has enough valid coverage")]
    NoQualifyingCells,
    #[error("signal produced a non-finite value")]
    NonFinite,
}

/// Failure reported by a layout comparator backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("comparator backend failed: {reason}")]
pub struct ComparisonError {
    pub reason: String,
}

impl ComparisonError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
