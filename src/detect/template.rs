//! Template catalog loading and management
//!
//! The catalog tolerates UI skin/version variance by carrying one reference
//! image per known appearance of the input box. Templates are versioned by
//! filename, not content hash; the default pair lives under `screenshots/`.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use image::GrayImage;

use super::error::{DetectError, DetectResult};

/// A named grayscale reference image of the target input box.
#[derive(Debug, Clone)]
pub struct Template {
    pub name: String,
    pub image: GrayImage,
}

impl Template {
    /// Load a template from disk, naming it by its file stem.
    pub fn load(path: &Path) -> DetectResult<Self> {
        let image = image::open(path)
            .map_err(|source| DetectError::TemplateLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_luma8();

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        log::debug!(
            "Loaded template '{}' ({}x{})",
            name,
            image.width(),
            image.height()
        );

        Ok(Self { name, image })
    }

    /// Build a template from an in-memory image, for tests and callers
    /// that manage their own assets.
    pub fn from_image(name: impl Into<String>, image: GrayImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// The set of templates the matcher tries, loaded lazily and all-or-nothing.
///
/// The first successful load is cached for the catalog's lifetime. A failed
/// load fails the whole attempt, caches nothing, and is retried on the next
/// call; partial catalogs are never matched against.
#[derive(Debug)]
pub struct TemplateCatalog {
    paths: Vec<PathBuf>,
    loaded: OnceLock<Vec<Template>>,
}

impl TemplateCatalog {
    /// A catalog that will load the given paths on first use.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            loaded: OnceLock::new(),
        }
    }

    /// A catalog with templates already in memory; never touches the
    /// filesystem.
    pub fn preloaded(templates: Vec<Template>) -> Self {
        let loaded = OnceLock::new();
        let _ = loaded.set(templates);
        Self {
            paths: Vec::new(),
            loaded,
        }
    }

    /// The loaded templates, loading them on the first call.
    pub fn templates(&self) -> DetectResult<&[Template]> {
        if let Some(templates) = self.loaded.get() {
            if templates.is_empty() {
                return Err(DetectError::EmptyCatalog);
            }
            return Ok(templates);
        }

        if self.paths.is_empty() {
            return Err(DetectError::EmptyCatalog);
        }

        let templates = self
            .paths
            .iter()
            .map(|path| Template::load(path))
            .collect::<DetectResult<Vec<_>>>()?;

        log::info!("Template catalog ready: {} templates", templates.len());
        Ok(self.loaded.get_or_init(|| templates))
    }
}
