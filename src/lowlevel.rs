//! Building blocks for custom comparison pipelines.
//!
//! These expose the prepared comparison pair, the individual signals and the
//! selection helpers behind [`TemplateMatcher`](crate::TemplateMatcher). Most
//! users should prefer [`score`](crate::score()) and
//! [`match_best`](crate::match_best()).

pub use crate::candidate::{rank_candidates, select_best};
pub use crate::raster::{common_size, fit_to, intensity};
pub use crate::score::{
    ComparisonPair, EDGE_WEIGHT, GRID_WEIGHT, HISTOGRAM_WEIGHT, HUE_WEIGHT, LAYOUT_WEIGHT,
};
pub use crate::signal::{
    EdgeMap, GridCorrelation, HueHistogram, IntensityHistogram, LocalStructure, Signal,
    SignalResult,
};
