//! Reference templates and their redaction regions.

use image::RgbImage;

mod category;
mod region;
pub mod repository;

pub use category::normalize_category;
pub use region::{Region, RegionRecord};
pub use repository::{Category, TemplateRepository};

/// A partially-redacted reference image plus the regions blacked out on it.
///
/// Regions are in the reference image's native pixel space. Templates are
/// immutable once built.
#[derive(Clone, Debug)]
pub struct Template {
    id: String,
    category: String,
    reference: RgbImage,
    regions: Vec<Region>,
}

impl Template {
    /// Creates a template; `category` is normalized with [`normalize_category`].
    pub fn new(
        id: impl Into<String>,
        category: &str,
        reference: RgbImage,
        regions: Vec<Region>,
    ) -> Self {
        Self {
            id: id.into(),
            category: normalize_category(category),
            reference,
            regions,
        }
    }

    /// Identifier, the base name of the template's files.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn reference(&self) -> &RgbImage {
        &self.reference
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn width(&self) -> u32 {
        self.reference.width()
    }

    pub fn height(&self) -> u32 {
        self.reference.height()
    }
}
