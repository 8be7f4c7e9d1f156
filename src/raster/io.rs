//! Loading and saving images via the `image` crate.

use crate::util::{RedactMatchError, RedactMatchResult};
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// File extensions accepted as reference or candidate images, in lookup order.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Returns true when `path` has one of [`IMAGE_EXTENSIONS`] (case-insensitive).
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Converts any decoded image to 8-bit RGB, dropping alpha.
pub fn rgb_from_dynamic(img: DynamicImage) -> RgbImage {
    img.into_rgb8()
}

/// Loads an image from disk as 8-bit RGB.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> RedactMatchResult<RgbImage> {
    let img = image::open(path.as_ref()).map_err(|err| RedactMatchError::ImageIo {
        reason: format!("{}: {err}", path.as_ref().display()),
    })?;
    Ok(rgb_from_dynamic(img))
}

/// Writes an RGB image; the format follows the path's extension.
pub fn save_rgb_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> RedactMatchResult<()> {
    img.save(path.as_ref())
        .map_err(|err| RedactMatchError::ImageIo {
            reason: format!("{}: {err}", path.as_ref().display()),
        })
}
