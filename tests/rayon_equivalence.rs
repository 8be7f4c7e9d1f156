#![cfg(feature = "rayon")]

mod common;

use common::{add_noise, redacted_reference, render_document, INVOICE, RECEIPT};
use redactmatch::{MatchConfig, Template, TemplateMatcher, TemplateRepository};

fn library() -> TemplateRepository {
    let mut templates = Vec::new();
    for seed in 0..4u64 {
        let layout = if seed % 2 == 0 { &INVOICE } else { &RECEIPT };
        let (reference, regions) = redacted_reference(120, 150, layout, seed);
        templates.push(Template::new(format!("t{seed}"), "forms", reference, regions));
    }
    // Same pixels as t0 under a later category, so the sweep holds a tie.
    let (reference, regions) = redacted_reference(120, 150, &INVOICE, 0);
    templates.push(Template::new("t0_copy", "zz_forms", reference, regions));
    TemplateRepository::from_templates(templates)
}

#[test]
fn parallel_sweep_matches_sequential() {
    let repo = library();
    let mut candidate = render_document(150, 180, &INVOICE, 0);
    add_noise(&mut candidate, 4, 3);

    let seq = TemplateMatcher::new();
    let par = TemplateMatcher::new().with_config(MatchConfig {
        parallel: true,
        ..MatchConfig::default()
    });

    let seq_candidates = seq.sweep(&candidate, &repo);
    let par_candidates = par.sweep(&candidate, &repo);
    assert_eq!(seq_candidates, par_candidates);
    for (order, entry) in par_candidates.iter().enumerate() {
        assert_eq!(entry.order, order);
    }

    assert_eq!(
        seq.match_best(&candidate, &repo),
        par.match_best(&candidate, &repo)
    );
}
