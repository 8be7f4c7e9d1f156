//! Rescaling regions between pixel spaces.

use crate::template::Region;
use crate::util::{RedactMatchError, RedactMatchResult};

/// Projects regions from a `src_w` x `src_h` image onto a `dst_w` x `dst_h` one.
///
/// `x` and `width` scale by `dst_w / src_w`, `y` and `height` by
/// `dst_h / src_h`, each rounded to the nearest pixel. Results are not clipped
/// to the target, so a region may extend past it when aspect ratios differ.
/// A projected size never drops below one pixel.
pub fn project(
    regions: &[Region],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
) -> RedactMatchResult<Vec<Region>> {
    if src_w == 0 || src_h == 0 {
        return Err(RedactMatchError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }
    if dst_w == 0 || dst_h == 0 {
        return Err(RedactMatchError::InvalidDimensions {
            width: dst_w,
            height: dst_h,
        });
    }
    let sx = f64::from(dst_w) / f64::from(src_w);
    let sy = f64::from(dst_h) / f64::from(src_h);
    let scale = |v: u32, s: f64| (f64::from(v) * s).round() as i64;

    regions
        .iter()
        .map(|r| {
            Region::new(
                scale(r.x(), sx),
                scale(r.y(), sy),
                scale(r.width(), sx).max(1),
                scale(r.height(), sy).max(1),
            )
            .map_err(|_| RedactMatchError::InvalidDimensions {
                width: dst_w,
                height: dst_h,
            })
        })
        .collect()
}
