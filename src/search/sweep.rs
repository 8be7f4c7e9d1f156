//! Scoring a candidate against every template of a repository.

use crate::candidate::MatchCandidate;
use crate::search::comparator::LayoutComparator;
use crate::search::MatchConfig;
use crate::template::{Template, TemplateRepository};
use crate::trace::trace_warn;
use image::RgbImage;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Compares one template; a backend failure becomes a zero score.
pub(crate) fn evaluate<C: LayoutComparator + ?Sized>(
    comparator: &C,
    order: usize,
    template: &Template,
    candidate: &RgbImage,
    cfg: &MatchConfig,
) -> MatchCandidate {
    let (score, is_match, reason) = match comparator.compare(template, candidate, cfg) {
        Ok(cmp) if cmp.confidence.is_finite() => {
            (cmp.confidence.clamp(0.0, 1.0), cmp.is_match, cmp.reason)
        }
        Ok(cmp) => (0.0, false, format!("non-finite confidence: {}", cmp.reason)),
        Err(err) => {
            let reason = err.to_string();
            trace_warn!(
                "comparison_failed",
                template = template.id(),
                reason = reason.as_str()
            );
            (0.0, false, reason)
        }
    };
    MatchCandidate {
        template_id: template.id().to_string(),
        category: template.category().to_string(),
        score,
        accepted: is_match && score >= cfg.threshold,
        order,
        reason,
    }
}

/// Sequential sweep in registration order.
pub(crate) fn sweep_seq<C: LayoutComparator + ?Sized>(
    comparator: &C,
    repository: &TemplateRepository,
    candidate: &RgbImage,
    cfg: &MatchConfig,
) -> Vec<MatchCandidate> {
    repository
        .iter()
        .enumerate()
        .map(|(order, template)| evaluate(comparator, order, template, candidate, cfg))
        .collect()
}

/// Parallel sweep; output stays in registration order.
#[cfg(feature = "rayon")]
pub(crate) fn sweep_par<C: LayoutComparator + ?Sized>(
    comparator: &C,
    repository: &TemplateRepository,
    candidate: &RgbImage,
    cfg: &MatchConfig,
) -> Vec<MatchCandidate> {
    let templates: Vec<&Template> = repository.iter().collect();
    templates
        .par_iter()
        .enumerate()
        .map(|(order, template)| evaluate(comparator, order, template, candidate, cfg))
        .collect()
}
