mod common;

use common::{redacted_reference, render_document, INVOICE, RECEIPT};
use image::Rgb;
use redactmatch::{
    apply_regions, load_rgb_image, masked_output_path, save_rgb_image, TemplateMatcher,
    TemplateRepository,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_match_and_redact_from_disk() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("templates");

    for (category, layout) in [("Invoices", &INVOICE), ("Receipts", &RECEIPT)] {
        let dir = root.join(category);
        fs::create_dir_all(&dir).unwrap();
        let (reference, regions) = redacted_reference(160, 200, layout, 12);
        save_rgb_image(&reference, dir.join("main.png")).unwrap();
        fs::write(dir.join("main.json"), serde_json::to_string(&regions).unwrap()).unwrap();
    }

    let repo = TemplateRepository::load(&root).unwrap();
    assert_eq!(repo.len(), 2);
    assert!(repo.load_errors().is_empty());

    let input = tmp.path().join("scan.png");
    save_rgb_image(&render_document(160, 200, &INVOICE, 12), &input).unwrap();
    let mut candidate = load_rgb_image(&input).unwrap();

    let plan = TemplateMatcher::new()
        .locate_regions(&candidate, &repo)
        .unwrap();
    assert_eq!(plan.candidate.category, "invoices");
    assert_eq!(plan.candidate.template_id, "main");

    apply_regions(&mut candidate, &plan.regions);
    let first = plan.regions[0];
    assert_eq!(*candidate.get_pixel(first.x(), first.y()), Rgb([0, 0, 0]));

    let out_dir = tmp.path().join("out");
    fs::create_dir_all(&out_dir).unwrap();
    let out = masked_output_path(&input, &out_dir);
    assert_eq!(out.file_name().unwrap(), "scan_masked.png");
    save_rgb_image(&candidate, &out).unwrap();
    let reloaded = load_rgb_image(&out).unwrap();
    assert_eq!(reloaded, candidate);
}
