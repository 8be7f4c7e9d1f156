use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use redactmatch::{project, RedactMatchError, Region};

fn random_regions(rng: &mut StdRng, width: u32, height: u32, count: usize) -> Vec<Region> {
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..width - 4);
            let y = rng.random_range(0..height - 4);
            let w = rng.random_range(2..=(width - x).min(200));
            let h = rng.random_range(2..=(height - y).min(120));
            Region::new(x.into(), y.into(), w.into(), h.into()).unwrap()
        })
        .collect()
}

fn assert_within_one(a: u32, b: u32) {
    assert!(a.abs_diff(b) <= 1, "{a} vs {b}");
}

#[test]
fn half_resolution_scenario() {
    let regions = [Region::new(100, 200, 300, 50).unwrap()];
    let out = project(&regions, 800, 1000, 400, 500).unwrap();
    assert_eq!(out, vec![Region::new(50, 100, 150, 25).unwrap()]);
}

#[test]
fn round_trip_stays_within_one_pixel() {
    let mut rng = StdRng::seed_from_u64(42);
    let pairs = [
        ((800, 1000), (600, 750)),
        ((640, 480), (1280, 960)),
        ((1000, 700), (750, 525)),
    ];
    for ((sw, sh), (dw, dh)) in pairs {
        let regions = random_regions(&mut rng, sw, sh, 40);
        let there = project(&regions, sw, sh, dw, dh).unwrap();
        let back = project(&there, dw, dh, sw, sh).unwrap();
        for (orig, round) in regions.iter().zip(&back) {
            assert_within_one(orig.x(), round.x());
            assert_within_one(orig.y(), round.y());
            assert_within_one(orig.width(), round.width());
            assert_within_one(orig.height(), round.height());
        }
    }
}

#[test]
fn upscale_by_two_is_exact_both_ways() {
    let mut rng = StdRng::seed_from_u64(7);
    let regions = random_regions(&mut rng, 640, 480, 25);
    let up = project(&regions, 640, 480, 1280, 960).unwrap();
    for (orig, scaled) in regions.iter().zip(&up) {
        assert_eq!(scaled.x(), orig.x() * 2);
        assert_eq!(scaled.width(), orig.width() * 2);
    }
    assert_eq!(project(&up, 1280, 960, 640, 480).unwrap(), regions);
}

#[test]
fn zero_dimensions_are_rejected() {
    let regions = [Region::new(0, 0, 5, 5).unwrap()];
    assert_eq!(
        project(&regions, 0, 10, 20, 20),
        Err(RedactMatchError::InvalidDimensions { width: 0, height: 10 })
    );
    assert_eq!(
        project(&regions, 10, 10, 20, 0),
        Err(RedactMatchError::InvalidDimensions { width: 20, height: 0 })
    );
}
