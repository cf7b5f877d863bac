//! Normalized cross-correlation template matching

use image::GrayImage;
use imageproc::template_matching::{MatchTemplateMethod, find_extremes, match_template};

use super::template::Template;

/// Best-scoring offset of one template inside a search image.
///
/// Coordinates are local to the search image; callers translate them back
/// into full-frame coordinates via the search region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    pub x: u32,
    pub y: u32,
    /// Normalized cross-correlation score in [-1, 1]
    pub score: f32,
}

/// Slide a template over the search image and return the single best
/// alignment.
///
/// A template larger than the search image in either dimension cannot be
/// matched and is skipped with a log line; that is an expected outcome for
/// undersized frames, not an error.
pub fn best_match(search: &GrayImage, template: &Template) -> Option<BestMatch> {
    let (tw, th) = template.dimensions();
    if tw > search.width() || th > search.height() {
        log::debug!(
            "Skipping template '{}': {}x{} exceeds search area {}x{}",
            template.name,
            tw,
            th,
            search.width(),
            search.height()
        );
        return None;
    }

    let score_map = match_template(
        search,
        &template.image,
        MatchTemplateMethod::CrossCorrelationNormalized,
    );

    let extremes = find_extremes(&score_map);
    let (x, y) = extremes.max_value_location;

    Some(BestMatch {
        x,
        y,
        score: extremes.max_value,
    })
}

/// Best alignment, filtered by a strict acceptance threshold.
///
/// A score exactly at the threshold is rejected; degenerate zero-variance
/// windows can produce non-finite scores, which never qualify.
pub fn best_match_above(
    search: &GrayImage,
    template: &Template,
    threshold: f32,
) -> Option<BestMatch> {
    let found = best_match(search, template)?;

    if !found.score.is_finite() || found.score <= threshold {
        log::debug!(
            "Template '{}' best score {:.3} at ({}, {}) below threshold {:.3}",
            template.name,
            found.score,
            found.x,
            found.y,
            threshold
        );
        return None;
    }

    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    /// A distinctive mostly-dark patch. Plain normalized cross-correlation
    /// scores uniform regions high against bright-heavy templates, so the
    /// fixture keeps its bright fraction at one cell in five.
    fn checker_patch(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            if (x / 4 + y / 4) % 5 == 0 {
                Luma([230u8])
            } else {
                Luma([10u8])
            }
        })
    }

    fn paste(canvas: &mut GrayImage, patch: &GrayImage, x: u32, y: u32) {
        image::imageops::replace(canvas, patch, x as i64, y as i64);
    }

    #[test]
    fn recovers_a_pasted_patch_exactly() {
        let patch = checker_patch(24, 16);
        let mut canvas = GrayImage::from_pixel(200, 120, Luma([10u8]));
        paste(&mut canvas, &patch, 57, 33);

        let template = Template::from_image("patch", patch);
        let found = best_match(&canvas, &template).unwrap();

        assert_eq!((found.x, found.y), (57, 33));
        assert!(found.score > 0.99, "got {}", found.score);
    }

    #[test]
    fn oversized_template_is_skipped() {
        let search = GrayImage::new(20, 20);
        let template = Template::from_image("too_wide", GrayImage::new(21, 10));
        assert!(best_match(&search, &template).is_none());

        let template = Template::from_image("too_tall", GrayImage::new(10, 21));
        assert!(best_match(&search, &template).is_none());
    }

    #[test]
    fn threshold_is_strict() {
        let patch = checker_patch(24, 16);
        let mut canvas = GrayImage::from_pixel(200, 120, Luma([10u8]));
        paste(&mut canvas, &patch, 57, 33);
        let template = Template::from_image("patch", patch);

        let score = best_match(&canvas, &template).unwrap().score;

        // exactly at the best score: strictly-greater means rejection
        assert!(best_match_above(&canvas, &template, score).is_none());
        // just below: accepted
        let found = best_match_above(&canvas, &template, score - 1e-4).unwrap();
        assert_eq!((found.x, found.y), (57, 33));
    }

    #[test]
    fn dissimilar_frame_stays_under_the_default_threshold() {
        let template = Template::from_image("patch", checker_patch(24, 16));
        let canvas = GrayImage::from_pixel(200, 120, Luma([10u8]));

        assert!(best_match_above(&canvas, &template, 0.6).is_none());
    }
}
