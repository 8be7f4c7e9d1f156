#![allow(dead_code)]

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use redactmatch::{apply_regions, Region};

/// Visual skeleton of a synthetic form: paper tone, header band, text lines.
pub struct Layout {
    pub paper: Rgb<u8>,
    pub header: Rgb<u8>,
    pub header_height: u32,
    pub line_offset: u32,
    pub line_spacing: u32,
    /// Horizontal extent of the text lines as fractions of the width.
    pub columns: (f32, f32),
}

pub const INVOICE: Layout = Layout {
    paper: Rgb([244, 244, 240]),
    header: Rgb([40, 90, 190]),
    header_height: 16,
    line_offset: 30,
    line_spacing: 14,
    columns: (0.05, 0.95),
};

pub const RECEIPT: Layout = Layout {
    paper: Rgb([225, 232, 245]),
    header: Rgb([200, 60, 60]),
    header_height: 34,
    line_offset: 47,
    line_spacing: 23,
    columns: (0.55, 0.95),
};

const INK: Rgb<u8> = Rgb([70, 70, 80]);

/// Renders a form; `seed` drives the word lengths along each line.
pub fn render_document(width: u32, height: u32, layout: &Layout, seed: u64) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut img = RgbImage::from_pixel(width, height, layout.paper);
    for y in 0..layout.header_height.min(height) {
        for x in 0..width {
            img.put_pixel(x, y, layout.header);
        }
    }

    let start = (width as f32 * layout.columns.0) as u32;
    let end = (width as f32 * layout.columns.1) as u32;
    let mut y = layout.line_offset;
    while y + 3 <= height {
        let mut x = start;
        while x < end {
            let word = rng.random_range(4..=14u32).min(end - x);
            for dy in 0..3 {
                for dx in 0..word {
                    img.put_pixel(x + dx, y + dy, INK);
                }
            }
            x += word + rng.random_range(3..=6u32);
        }
        y += layout.line_spacing;
    }
    img
}

/// Light per-channel noise over the whole image.
pub fn add_noise(img: &mut RgbImage, seed: u64, amplitude: u8) {
    let mut rng = StdRng::seed_from_u64(seed);
    for pixel in img.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let delta = rng.random_range(0..=amplitude);
            *channel = channel.saturating_sub(delta);
        }
    }
}

/// Three field boxes typical of the rendered forms.
pub fn field_regions(width: u32, height: u32) -> Vec<Region> {
    let w = width as i64;
    let h = height as i64;
    vec![
        Region::new(w / 10, h / 4, w / 3, 10).unwrap(),
        Region::new(w / 2, h / 2, w / 3, 12).unwrap(),
        Region::new(w / 8, h * 3 / 4, w / 4, 9).unwrap(),
    ]
}

/// A rendered form with its field boxes blacked out, plus those boxes.
pub fn redacted_reference(
    width: u32,
    height: u32,
    layout: &Layout,
    seed: u64,
) -> (RgbImage, Vec<Region>) {
    let mut img = render_document(width, height, layout, seed);
    let regions = field_regions(width, height);
    apply_regions(&mut img, &regions);
    (img, regions)
}
