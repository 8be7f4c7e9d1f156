//! Loading and holding the template library.
//!
//! On disk a library is one directory per category; inside it each
//! `<name>.json` coordinates file is paired with a `<name>.png` (or `.jpg`,
//! `.jpeg`) reference image. Directory entries are visited sorted by file name
//! so registration order, and therefore tie-breaking, is reproducible.

use crate::raster::io::{rgb_from_dynamic, IMAGE_EXTENSIONS};
use crate::template::{normalize_category, Region, RegionRecord, Template};
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::{LoadError, LoadErrorKind, RedactMatchError, RedactMatchResult};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Templates sharing one normalized category name, in registration order.
#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    templates: Vec<Template>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}

/// Immutable template library grouped by category.
///
/// The registration order of a template is its position in [`iter`](Self::iter):
/// categories in discovery order, templates in discovery order within each.
#[derive(Clone, Debug, Default)]
pub struct TemplateRepository {
    categories: Vec<Category>,
    load_errors: Vec<LoadError>,
}

impl TemplateRepository {
    /// Loads every category directory under `root`.
    ///
    /// Templates that cannot be loaded are skipped and reported through
    /// [`load_errors`](Self::load_errors). Only a missing or non-directory root
    /// is fatal.
    pub fn load<P: AsRef<Path>>(root: P) -> RedactMatchResult<Self> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(RedactMatchError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(RedactMatchError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        let _span = trace_span!("load_repository").entered();

        let mut repo = Self::default();
        for dir in sorted_entries(root).into_iter().filter(|p| p.is_dir()) {
            let name = dir
                .file_name()
                .map(|n| normalize_category(&n.to_string_lossy()))
                .unwrap_or_default();
            let coordinate_files = sorted_entries(&dir)
                .into_iter()
                .filter(|p| p.is_file() && is_coordinates_file(p));
            let mut loaded = 0usize;
            for json_path in coordinate_files {
                match load_template(&json_path, &name) {
                    Ok(template) => {
                        repo.register(template);
                        loaded += 1;
                    }
                    Err(kind) => repo.reject(LoadError {
                        path: json_path,
                        kind,
                    }),
                }
            }
            repo.ensure_category(&name);
            trace_event!("category_loaded", category = name.as_str(), templates = loaded);
        }
        Ok(repo)
    }

    /// Builds a repository from in-memory templates.
    ///
    /// Templates are grouped by category in first-seen order; within a category
    /// they keep their input order.
    pub fn from_templates<I: IntoIterator<Item = Template>>(templates: I) -> Self {
        let mut repo = Self::default();
        for template in templates {
            repo.register(template);
        }
        repo
    }

    fn ensure_category(&mut self, name: &str) -> &mut Category {
        let idx = match self.categories.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.categories.push(Category {
                    name: name.to_string(),
                    templates: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        &mut self.categories[idx]
    }

    fn register(&mut self, template: Template) {
        let name = template.category().to_string();
        self.ensure_category(&name).templates.push(template);
    }

    fn reject(&mut self, err: LoadError) {
        let path = err.path.display().to_string();
        let reason = err.kind.to_string();
        trace_warn!("template_skipped", path = path.as_str(), reason = reason.as_str());
        self.load_errors.push(err);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category; the name is normalized first.
    pub fn category(&self, name: &str) -> Option<&Category> {
        let name = normalize_category(name);
        self.categories.iter().find(|c| c.name == name)
    }

    /// All templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> + '_ {
        self.categories.iter().flat_map(|c| c.templates.iter())
    }

    /// Template at a registration index.
    pub fn template_at(&self, order: usize) -> Option<&Template> {
        self.iter().nth(order)
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.templates.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Templates skipped during [`load`](Self::load).
    pub fn load_errors(&self) -> &[LoadError] {
        &self.load_errors
    }
}

fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(err) => {
                let reason = err.to_string();
                trace_warn!("entry_unreadable", reason = reason.as_str());
                None
            }
        })
        .collect()
}

fn is_coordinates_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn paired_image(json_path: &Path) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| json_path.with_extension(ext))
        .find(|candidate| candidate.is_file())
}

fn load_template(json_path: &Path, category: &str) -> Result<Template, LoadErrorKind> {
    let image_path = paired_image(json_path).ok_or(LoadErrorKind::MissingImage)?;

    let text = fs::read_to_string(json_path).map_err(|err| LoadErrorKind::MalformedCoordinates {
        reason: err.to_string(),
    })?;
    let records: Vec<RegionRecord> =
        serde_json::from_str(&text).map_err(|err| LoadErrorKind::MalformedCoordinates {
            reason: err.to_string(),
        })?;
    let regions = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Region::try_from(record).map_err(|source| LoadErrorKind::InvalidRegion { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let reference = image::open(&image_path)
        .map(rgb_from_dynamic)
        .map_err(|err| LoadErrorKind::UnreadableImage {
            reason: err.to_string(),
        })?;

    let id = json_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Template::new(id, category, reference, regions))
}
