use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for detection operations.
pub type DetectResult<T> = Result<T, DetectError>;

/// The error type for the detection pipeline.
///
/// These errors never cross the public detection surface directly: the
/// detector logs them and reports [`Detection::Failed`](super::Detection)
/// with the rendered message, so callers that only care about presence can
/// treat every failure as "not found".
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Failed to load template {path:?}: {source}")]
    TemplateLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Template catalog has no entries to match against")]
    EmptyCatalog,

    #[error("Text recognition failed: {reason}")]
    Ocr { reason: String },

    #[error("No text extractor configured for placeholder detection")]
    NoTextExtractor,
}

impl DetectError {
    /// Wrap an OCR backend failure.
    pub fn ocr(reason: impl std::fmt::Display) -> Self {
        DetectError::Ocr {
            reason: reason.to_string(),
        }
    }
}
