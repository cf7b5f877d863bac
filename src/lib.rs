//! Locates a chat input box in screenshots.
//!
//! The caller supplies an already-captured image; the detector returns the
//! box geometry, a confidence value and a click position relative to that
//! image. Screen capture, window management and input injection are the
//! caller's business.

pub mod detect;

pub use detect::{
    ArrowDirection, BoundingBox, DetectError, DetectResult, Detection, DetectionStrategy,
    DetectorConfig, InputBox, InputBoxDetector, SearchPolicy, SearchRegion, ShapePredicate,
    Template, TemplateCatalog, TextExtractor,
};
