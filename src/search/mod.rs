//! Best-match search over a template repository.
//!
//! The matcher scores the candidate against every template (the sweep never
//! stops early and never fails on a single template), then hands all
//! candidates to one deterministic selector.

mod comparator;
mod sweep;

pub use comparator::{Comparison, HeuristicComparator, LayoutComparator};

use crate::candidate::{select_best, MatchCandidate, MatchResult};
use crate::mask::DEFAULT_DARKNESS_THRESHOLD;
use crate::project::project;
use crate::template::{Region, TemplateRepository};
use crate::trace::{trace_event, trace_span};
use image::RgbImage;

/// Default minimum confidence for accepting a template.
pub const DEFAULT_THRESHOLD: f32 = 0.85;

/// Configuration for template matching.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchConfig {
    /// Minimum confidence (inclusive) for a match.
    pub threshold: f32,
    /// Intensity at or below which reference pixels count as redacted.
    pub darkness_threshold: u8,
    /// Score templates on the rayon pool (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            darkness_threshold: DEFAULT_DARKNESS_THRESHOLD,
            parallel: false,
        }
    }
}

/// A matched template with its regions projected onto the candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct RedactionPlan {
    pub candidate: MatchCandidate,
    /// Regions in the candidate image's pixel space.
    pub regions: Vec<Region>,
}

/// Full outcome of matching one candidate: every template's score plus the
/// redaction plan of the selected template, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchReport {
    /// Candidates in registration order.
    pub candidates: Vec<MatchCandidate>,
    pub plan: Option<RedactionPlan>,
}

/// Finds the template whose layout a candidate image shares.
pub struct TemplateMatcher<C = HeuristicComparator> {
    comparator: C,
    cfg: MatchConfig,
}

impl TemplateMatcher<HeuristicComparator> {
    /// Creates a matcher using the pixel-statistics comparator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for TemplateMatcher<HeuristicComparator> {
    fn default() -> Self {
        Self::with_comparator(HeuristicComparator::new(), MatchConfig::default())
    }
}

impl<C: LayoutComparator> TemplateMatcher<C> {
    /// Creates a matcher around an explicit comparator backend.
    pub fn with_comparator(comparator: C, cfg: MatchConfig) -> Self {
        Self { comparator, cfg }
    }

    /// Replaces the configuration; the comparator reads it on every call.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Scores `candidate` against every template, in registration order.
    pub fn sweep(&self, candidate: &RgbImage, repository: &TemplateRepository) -> Vec<MatchCandidate> {
        let _span = trace_span!("match_sweep", templates = repository.len()).entered();
        #[cfg(feature = "rayon")]
        {
            if self.cfg.parallel {
                return sweep::sweep_par(&self.comparator, repository, candidate, &self.cfg);
            }
        }
        sweep::sweep_seq(&self.comparator, repository, candidate, &self.cfg)
    }

    /// Best accepted template, ties going to the first registered.
    pub fn match_best(&self, candidate: &RgbImage, repository: &TemplateRepository) -> MatchResult {
        let candidates = self.sweep(candidate, repository);
        self.select(&candidates)
    }

    /// Matches `candidate` and projects the matched template's regions onto it.
    pub fn locate_regions(
        &self,
        candidate: &RgbImage,
        repository: &TemplateRepository,
    ) -> Option<RedactionPlan> {
        self.report(candidate, repository).plan
    }

    /// Like [`locate_regions`](Self::locate_regions), keeping the whole sweep.
    pub fn report(&self, candidate: &RgbImage, repository: &TemplateRepository) -> MatchReport {
        let candidates = self.sweep(candidate, repository);
        let plan = self
            .select(&candidates)
            .into_candidate()
            .and_then(|best| plan_for(best, candidate, repository));
        MatchReport { candidates, plan }
    }

    fn select(&self, candidates: &[MatchCandidate]) -> MatchResult {
        let result = select_best(candidates, self.cfg.threshold);
        match result.candidate() {
            Some(best) => {
                trace_event!(
                    "match_selected",
                    template = best.template_id.as_str(),
                    score = best.score
                );
            }
            None => {
                let best_score = candidates.iter().map(|c| c.score).fold(0.0f32, f32::max);
                trace_event!("no_match", best_score = best_score);
            }
        }
        result
    }
}

fn plan_for(
    best: MatchCandidate,
    candidate: &RgbImage,
    repository: &TemplateRepository,
) -> Option<RedactionPlan> {
    let template = repository.template_at(best.order)?;
    let (width, height) = candidate.dimensions();
    let regions = project(
        template.regions(),
        template.width(),
        template.height(),
        width,
        height,
    )
    .ok()?;
    Some(RedactionPlan {
        candidate: best,
        regions,
    })
}

/// Matches `candidate` against `repository` with the heuristic comparator.
pub fn match_best(
    candidate: &RgbImage,
    repository: &TemplateRepository,
    threshold: f32,
) -> MatchResult {
    TemplateMatcher::new()
        .with_config(MatchConfig {
            threshold,
            ..MatchConfig::default()
        })
        .match_best(candidate, repository)
}
