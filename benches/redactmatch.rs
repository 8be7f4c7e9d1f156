use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use redactmatch::{
    apply_regions, build_mask, MatchConfig, Region, SimilarityScorer, Template, TemplateMatcher,
    TemplateRepository, DEFAULT_DARKNESS_THRESHOLD,
};
use std::hint::black_box;

fn make_document(width: u32, height: u32, shift: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, Rgb([242, 242, 236]));
    for y in 0..height {
        for x in 0..width {
            let line = (y + shift) % 18 < 3;
            let word = ((x / 9) ^ (y / 18) ^ shift) % 5 != 0;
            if y < 40 {
                img.put_pixel(x, y, Rgb([40, 90, 190]));
            } else if line && word {
                let v = 60 + ((x * 13) ^ (y * 7)) as u8 % 30;
                img.put_pixel(x, y, Rgb([v, v, v + 10]));
            }
        }
    }
    img
}

fn redacted(width: u32, height: u32, shift: u32) -> (RgbImage, Vec<Region>) {
    let mut img = make_document(width, height, shift);
    let regions = vec![
        Region::new(60, 120, 240, 24).unwrap(),
        Region::new(320, 400, 200, 30).unwrap(),
        Region::new(80, 620, 160, 20).unwrap(),
    ];
    apply_regions(&mut img, &regions);
    (img, regions)
}

fn bench_scoring(c: &mut Criterion) {
    let (reference, _) = redacted(600, 800, 0);
    let mask = build_mask(&reference, DEFAULT_DARKNESS_THRESHOLD);
    let same_size = make_document(600, 800, 0);
    let larger = make_document(900, 1200, 0);
    let scorer = SimilarityScorer::new();

    c.bench_function("build_mask_600x800", |b| {
        b.iter(|| black_box(build_mask(&reference, DEFAULT_DARKNESS_THRESHOLD)));
    });

    c.bench_function("score_same_size", |b| {
        b.iter(|| black_box(scorer.score(&reference, &same_size, &mask)));
    });

    c.bench_function("score_resized_candidate", |b| {
        b.iter(|| black_box(scorer.score(&reference, &larger, &mask)));
    });
}

fn bench_sweep(c: &mut Criterion) {
    let templates = (0..8u32).map(|i| {
        let (reference, regions) = redacted(600, 800, i * 5);
        Template::new(format!("t{i}"), "bench", reference, regions)
    });
    let repo = TemplateRepository::from_templates(templates);
    let candidate = make_document(600, 800, 10);

    let matcher = TemplateMatcher::new();
    c.bench_function("sweep_8_templates", |b| {
        b.iter(|| black_box(matcher.match_best(&candidate, &repo)));
    });

    if cfg!(feature = "rayon") {
        let matcher_par = TemplateMatcher::new().with_config(MatchConfig {
            parallel: true,
            ..MatchConfig::default()
        });
        c.bench_function("sweep_8_templates_parallel", |b| {
            b.iter(|| black_box(matcher_par.match_best(&candidate, &repo)));
        });
    }
}

criterion_group!(benches, bench_scoring, bench_sweep);
criterion_main!(benches);
