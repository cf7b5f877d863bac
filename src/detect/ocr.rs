//! Text extraction over candidate regions
//!
//! The crate never implements OCR itself; it defines a seam over an
//! external engine and a wrapper that normalizes its output. Engine
//! failures are logged and reported as empty text, which callers already
//! treat as "no placeholder here".

use image::DynamicImage;

use super::error::DetectResult;

/// An OCR engine applied to cropped candidate regions.
pub trait TextExtractor: Send + Sync {
    /// Recognize text in the region. Errors are for engine failures only;
    /// an unreadable or textless region is `Ok` with an empty string.
    fn extract_text(&self, region: &DynamicImage) -> DetectResult<String>;
}

/// Run the extractor and normalize the outcome: surrounding whitespace is
/// trimmed and any engine error becomes the empty string.
pub fn extract_trimmed(extractor: &dyn TextExtractor, region: &DynamicImage) -> String {
    match extractor.extract_text(region) {
        Ok(text) => text.trim().to_string(),
        Err(err) => {
            log::debug!("Text extraction failed, treating as empty: {err}");
            String::new()
        }
    }
}

#[cfg(feature = "ocr-tesseract")]
pub use self::tesseract_impl::TesseractExtractor;

#[cfg(feature = "ocr-tesseract")]
mod tesseract_impl {
    use std::io::Cursor;

    use image::DynamicImage;
    use tesseract::Tesseract;

    use super::TextExtractor;
    use crate::detect::error::{DetectError, DetectResult};

    /// OCR via the system Tesseract installation.
    ///
    /// The engine is constructed per call; region crops are small and
    /// engine setup is cheap next to recognition itself.
    pub struct TesseractExtractor {
        language: String,
    }

    impl TesseractExtractor {
        pub fn new() -> Self {
            Self::with_language("eng")
        }

        pub fn with_language(language: impl Into<String>) -> Self {
            Self {
                language: language.into(),
            }
        }
    }

    impl Default for TesseractExtractor {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TextExtractor for TesseractExtractor {
        fn extract_text(&self, region: &DynamicImage) -> DetectResult<String> {
            let mut png = Vec::new();
            region
                .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
                .map_err(DetectError::ocr)?;

            let text = Tesseract::new(None, Some(&self.language))
                .map_err(DetectError::ocr)?
                .set_image_from_mem(&png)
                .map_err(DetectError::ocr)?
                .recognize()
                .map_err(DetectError::ocr)?
                .get_text()
                .map_err(DetectError::ocr)?;

            Ok(text)
        }
    }
}
