//! Configuration for input-box detection

use std::path::PathBuf;

use super::region::SearchPolicy;
use super::shapes::ShapePredicate;

/// Default template catalog shipped alongside the binary.
pub const DEFAULT_TEMPLATE_PATHS: [&str; 2] = ["screenshots/input.png", "screenshots/input_new.png"];

/// Everything the detector needs up front, injectable so tests can
/// substitute synthetic templates and regions without touching the
/// filesystem.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Template image paths, tried in order; the whole catalog must load
    /// or the template strategy fails
    pub template_paths: Vec<PathBuf>,
    /// Minimum correlation score; matches must be strictly greater
    pub match_threshold: f32,
    /// Grayscale cutoff for binarization (inverted: darker pixels are
    /// foreground)
    pub binarize_threshold: u8,
    /// Gaussian blur sigma for the placeholder strategy; non-positive
    /// disables the blur
    pub blur_sigma: f32,
    /// Where template matching looks inside the screenshot
    pub search_policy: SearchPolicy,
    /// Shape filter for placeholder candidates (wide flat rectangles)
    pub input_box_shape: ShapePredicate,
    /// Shape filter for the arrow/send icon (near-square blobs)
    pub arrow_shape: ShapePredicate,
    /// Write stage-tagged PNG artifacts while detecting
    pub debug: bool,
    /// Directory for debug artifacts, created on first write
    pub debug_dir: PathBuf,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            template_paths: DEFAULT_TEMPLATE_PATHS.iter().map(PathBuf::from).collect(),
            match_threshold: 0.6,
            binarize_threshold: 200,
            blur_sigma: 1.1,
            search_policy: SearchPolicy::RightHalf,
            input_box_shape: ShapePredicate::input_box(),
            arrow_shape: ShapePredicate::arrow_icon(),
            debug: false,
            debug_dir: PathBuf::from("debug_screenshots"),
        }
    }
}

impl DetectorConfig {
    pub fn with_template_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.template_paths = paths;
        self
    }

    pub fn with_match_threshold(mut self, threshold: f32) -> Self {
        self.match_threshold = threshold;
        self
    }

    pub fn with_search_policy(mut self, policy: SearchPolicy) -> Self {
        self.search_policy = policy;
        self
    }

    pub fn with_blur_sigma(mut self, sigma: f32) -> Self {
        self.blur_sigma = sigma;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = dir.into();
        self
    }
}
