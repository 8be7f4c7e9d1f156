//! Blacking out regions on an image.

use crate::template::Region;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Fills every region with black. Parts of a region outside the image are
/// ignored.
pub fn apply_regions(image: &mut RgbImage, regions: &[Region]) {
    for region in regions {
        if let Some(rect) = clip_to(region, image.width(), image.height()) {
            draw_filled_rect_mut(image, rect, BLACK);
        }
    }
}

/// The part of `region` inside a `width` x `height` image, if any.
fn clip_to(region: &Region, width: u32, height: u32) -> Option<Rect> {
    if region.x() >= width || region.y() >= height {
        return None;
    }
    let w = region.right().min(u64::from(width)) - u64::from(region.x());
    let h = region.bottom().min(u64::from(height)) - u64::from(region.y());
    let x = i32::try_from(region.x()).ok()?;
    let y = i32::try_from(region.y()).ok()?;
    let w = u32::try_from(w).ok()?;
    let h = u32::try_from(h).ok()?;
    Some(Rect::at(x, y).of_size(w, h))
}

/// `<output_dir>/<stem>_masked.<ext>` for an input file.
pub fn masked_output_path(original: &Path, output_dir: &Path) -> PathBuf {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match original.extension() {
        Some(ext) => format!("{stem}_masked.{}", ext.to_string_lossy()),
        None => format!("{stem}_masked"),
    };
    output_dir.join(name)
}
