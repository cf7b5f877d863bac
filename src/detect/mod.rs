//! Visual input-box detection
//!
//! Takes a screenshot, returns where the chat input box sits and where to
//! click. Two strategies: placeholder-text scanning (contours + OCR) and
//! template matching against a catalog of known box appearances.

pub mod config;
pub mod debug;
pub mod detector;
pub mod error;
pub mod matcher;
pub mod ocr;
pub mod region;
pub mod shapes;
pub mod template;
pub mod types;


pub use config::DetectorConfig;
pub use detector::InputBoxDetector;
pub use error::{DetectError, DetectResult};
pub use ocr::TextExtractor;
pub use region::{SearchPolicy, SearchRegion};
pub use shapes::ShapePredicate;
pub use template::{Template, TemplateCatalog};
pub use types::{ArrowDirection, BoundingBox, Detection, DetectionStrategy, InputBox};
