//! Core data types for input-box detection

use serde::Serialize;

/// Fixed confidence reported by the placeholder-text strategy.
///
/// Placeholder hits carry no correlation score, so the original pipeline
/// reports this sentinel instead. It lives on a different scale than the
/// template strategy's [-1.0, 1.0] scores; compare confidences only between
/// results of the same [`DetectionStrategy`].
pub const PLACEHOLDER_CONFIDENCE: f32 = 100.0;

/// Which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStrategy {
    /// Contour candidates + OCR on the placeholder text
    Placeholder,
    /// Normalized cross-correlation against the template catalog
    TemplateMatch,
}

/// Direction variants for the send/arrow icon lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
}

/// An axis-aligned rectangle in full-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point, the natural click target for the box.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// A located input box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputBox {
    /// Left edge in full-image coordinates
    pub x: u32,
    /// Top edge in full-image coordinates
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Correlation score for template matches, [`PLACEHOLDER_CONFIDENCE`]
    /// for placeholder hits
    pub confidence: f32,
    /// Recognized placeholder text, or the fixed `"input_box"` marker for
    /// template matches
    pub text: String,
    /// Where a caller should click: the center of the box
    pub click_position: (u32, u32),
    /// Producer of this result; confidence scales differ per strategy
    pub strategy: DetectionStrategy,
}

impl InputBox {
    /// Build a result from a bounding box; the click position is its center.
    pub fn from_bounds(
        bounds: BoundingBox,
        confidence: f32,
        text: String,
        strategy: DetectionStrategy,
    ) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            confidence,
            text,
            click_position: bounds.center(),
            strategy,
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

/// Outcome of one detection attempt.
///
/// `Failed` means the pipeline could not run to completion (unreadable
/// template, missing text extractor); `NotFound` means it ran and nothing
/// matched. Callers that only care about presence collapse both with
/// [`Detection::into_found`].
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    Found(InputBox),
    NotFound,
    Failed(String),
}

impl Detection {
    pub fn is_found(&self) -> bool {
        matches!(self, Detection::Found(_))
    }

    /// The located box, treating failures like not-found.
    pub fn into_found(self) -> Option<InputBox> {
        match self {
            Detection::Found(input_box) => Some(input_box),
            Detection::NotFound | Detection::Failed(_) => None,
        }
    }
}

/// Intermediate candidate collected while scanning for shapes.
///
/// Candidates only live for the duration of one detection pass; the winning
/// candidate is converted into an [`InputBox`].
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Where the candidate sits, full-image coordinates
    pub bounds: BoundingBox,
    /// Score in the producing strategy's scale
    pub confidence: f32,
    /// Text recognized inside the candidate, empty for none
    pub source_text: String,
    /// Strategy that produced the candidate
    pub strategy: DetectionStrategy,
}
