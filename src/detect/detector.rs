//! Input-box detection orchestration
//!
//! Composes the shape finder, the text extractor and the template matcher
//! into the two public detection strategies plus the arrow-icon lookup.
//! Every public operation catches internal failures and reports them as a
//! [`Detection::Failed`] value; nothing propagates to the caller.

use image::{DynamicImage, GrayImage};
use imageproc::filter::gaussian_blur_f32;

use super::config::DetectorConfig;
use super::debug::{
    COLOR_CANDIDATE, COLOR_CLICK, DebugSink, STAGE_BLURRED, STAGE_DETECTED_INPUT, STAGE_DETECTION,
    STAGE_GRAYSCALE, draw_box, draw_click_point, draw_label,
};
use super::error::{DetectError, DetectResult};
use super::matcher::{BestMatch, best_match_above};
use super::ocr::{TextExtractor, extract_trimmed};
use super::shapes::find_shape_candidates;
use super::template::{Template, TemplateCatalog};
use super::types::{
    ArrowDirection, BoundingBox, Candidate, Detection, DetectionStrategy, InputBox,
    PLACEHOLDER_CONFIDENCE,
};

/// Result text reported for template-match hits, which carry no OCR text.
const TEMPLATE_MATCH_TEXT: &str = "input_box";

/// Locates the chat input box in screenshots.
///
/// Stateless across calls apart from the lazily loaded template catalog;
/// detection is idempotent given identical input pixels, and shared
/// references are safe to use from multiple threads.
pub struct InputBoxDetector {
    config: DetectorConfig,
    catalog: TemplateCatalog,
    text_extractor: Option<Box<dyn TextExtractor>>,
    debug: DebugSink,
}

impl InputBoxDetector {
    /// A detector that loads its catalog from the configured paths on
    /// first use.
    pub fn new(config: DetectorConfig) -> Self {
        let catalog = TemplateCatalog::from_paths(config.template_paths.clone());
        Self::with_catalog(config, catalog)
    }

    /// A detector over an explicit catalog, e.g. preloaded synthetic
    /// templates.
    pub fn with_catalog(config: DetectorConfig, catalog: TemplateCatalog) -> Self {
        let debug = DebugSink::from_config(&config);
        Self {
            config,
            catalog,
            text_extractor: None,
            debug,
        }
    }

    /// Attach the OCR engine used by the placeholder strategy.
    pub fn with_text_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.text_extractor = Some(extractor);
        self
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Strategy B: match the template catalog against the search region.
    pub fn find_input_box(&self, image: &DynamicImage) -> Detection {
        match self.match_templates(image) {
            Ok(Some(input_box)) => Detection::Found(input_box),
            Ok(None) => Detection::NotFound,
            Err(err) => {
                log::warn!("Template detection failed: {err}");
                Detection::Failed(err.to_string())
            }
        }
    }

    fn match_templates(&self, image: &DynamicImage) -> DetectResult<Option<InputBox>> {
        let gray = image.to_luma8();
        self.debug.save_gray(&gray, STAGE_GRAYSCALE);

        let region = self
            .config
            .search_policy
            .resolve(gray.width(), gray.height());
        if !region.is_valid() {
            log::debug!("Search region is empty for a {}x{} frame", gray.width(), gray.height());
            return Ok(None);
        }
        let search = region.crop(&gray);

        // all-or-nothing: a single unreadable template fails the attempt
        let templates = self.catalog.templates()?;

        let mut best: Option<(BestMatch, &Template)> = None;
        for template in templates {
            let Some(found) = best_match_above(&search, template, self.config.match_threshold)
            else {
                continue;
            };
            let (x, y) = region.to_image_coords(found.x, found.y);
            log::debug!(
                "Template '{}' matched at ({x}, {y}) with score {:.3}",
                template.name,
                found.score
            );
            // strictly-greater replacement keeps the earlier catalog entry
            // on ties
            if best.as_ref().is_none_or(|(b, _)| found.score > b.score) {
                best = Some((found, template));
            }
        }

        let Some((found, template)) = best else {
            log::debug!("No input box matches found");
            return Ok(None);
        };

        let (x, y) = region.to_image_coords(found.x, found.y);
        let (width, height) = template.dimensions();
        let input_box = InputBox::from_bounds(
            BoundingBox::new(x, y, width, height),
            found.score,
            TEMPLATE_MATCH_TEXT.to_string(),
            DetectionStrategy::TemplateMatch,
        );

        if self.debug.is_enabled() {
            let mut overlay = image.to_rgb8();
            draw_box(&mut overlay, &input_box.bounds(), COLOR_CANDIDATE);
            draw_click_point(&mut overlay, input_box.click_position, COLOR_CLICK);
            self.debug.save_rgb(&overlay, STAGE_DETECTION);
        }

        Ok(Some(input_box))
    }

    /// Strategy A: scan for wide flat regions and pick the one with the
    /// longest recognized placeholder text.
    pub fn find_input_box_by_placeholder(&self, image: &DynamicImage) -> Detection {
        match self.placeholder_scan(image) {
            Ok(Some(input_box)) => Detection::Found(input_box),
            Ok(None) => Detection::NotFound,
            Err(err) => {
                log::warn!("Placeholder detection failed: {err}");
                Detection::Failed(err.to_string())
            }
        }
    }

    fn placeholder_scan(&self, image: &DynamicImage) -> DetectResult<Option<InputBox>> {
        let extractor = self
            .text_extractor
            .as_deref()
            .ok_or(DetectError::NoTextExtractor)?;

        let gray = image.to_luma8();
        let blurred = self.blur(&gray);
        self.debug.save_gray(&blurred, STAGE_BLURRED);

        let boxes = find_shape_candidates(
            &blurred,
            &self.config.input_box_shape,
            self.config.binarize_threshold,
        );

        // OCR runs on the original unblurred pixels
        let mut candidates = Vec::new();
        for bounds in boxes {
            let crop = image.crop_imm(bounds.x, bounds.y, bounds.width, bounds.height);
            let text = extract_trimmed(extractor, &crop);
            if text.is_empty() {
                continue;
            }
            log::debug!("Found input box with placeholder text: {text}");
            candidates.push(Candidate {
                bounds,
                confidence: PLACEHOLDER_CONFIDENCE,
                source_text: text,
                strategy: DetectionStrategy::Placeholder,
            });
        }

        // longest text wins; strictly-greater keeps the earliest candidate
        // in contour scan order on ties
        let mut winner: Option<&Candidate> = None;
        for candidate in &candidates {
            if winner.is_none_or(|w| candidate.source_text.len() > w.source_text.len()) {
                winner = Some(candidate);
            }
        }
        let Some(winner) = winner else {
            log::debug!("No placeholder candidates with text");
            return Ok(None);
        };

        let input_box = InputBox::from_bounds(
            winner.bounds,
            winner.confidence,
            winner.source_text.clone(),
            DetectionStrategy::Placeholder,
        );
        log::info!("Selected input box with text: {}", input_box.text);

        if self.debug.is_enabled() {
            let mut overlay = image.to_rgb8();
            for candidate in &candidates {
                draw_box(&mut overlay, &candidate.bounds, COLOR_CANDIDATE);
                draw_label(
                    &mut overlay,
                    candidate.bounds.x as i32,
                    candidate.bounds.y as i32 - 10,
                    &candidate.source_text,
                    COLOR_CANDIDATE,
                );
            }
            draw_click_point(&mut overlay, input_box.click_position, COLOR_CLICK);
            self.debug.save_rgb(&overlay, STAGE_DETECTED_INPUT);
        }

        Ok(Some(input_box))
    }

    /// Locate the arrow/send icon and return its center point.
    ///
    /// Known limitation: the `direction` argument is accepted and logged
    /// but does not influence selection; both variants return the first
    /// near-square candidate in contour scan order.
    pub fn find_arrow_icon(
        &self,
        image: &DynamicImage,
        direction: ArrowDirection,
    ) -> Option<(u32, u32)> {
        log::debug!("Arrow lookup for {direction:?} (direction does not affect the geometry)");

        let gray = image.to_luma8();
        find_shape_candidates(
            &gray,
            &self.config.arrow_shape,
            self.config.binarize_threshold,
        )
        .first()
        .map(BoundingBox::center)
    }

    fn blur(&self, gray: &GrayImage) -> GrayImage {
        if self.config.blur_sigma > 0.0 {
            gaussian_blur_f32(gray, self.config.blur_sigma)
        } else {
            gray.clone()
        }
    }
}
