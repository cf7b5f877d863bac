//! Contour-based shape candidate search
//!
//! Binarizes a grayscale frame, walks its external contours and keeps the
//! bounding boxes whose shape satisfies a predicate. Used for both the wide
//! flat input-box regions and the near-square arrow icons.

use image::GrayImage;
use imageproc::contours::{BorderType, Contour, find_contours};
use imageproc::contrast::{ThresholdType, threshold};

use super::types::BoundingBox;

/// Aspect-ratio and size filter applied to contour bounding boxes.
///
/// All bounds are strict: a box with `width == 3 * height` does not pass the
/// input-box predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePredicate {
    /// Lower bound on width/height (exclusive)
    pub min_aspect: f32,
    /// Upper bound on width/height (exclusive); `None` leaves it open
    pub max_aspect: Option<f32>,
    /// Lower bound on width in pixels (exclusive)
    pub min_width: u32,
}

impl ShapePredicate {
    /// Wide flat regions: aspect ratio above 3, wider than 100 px.
    pub fn input_box() -> Self {
        Self {
            min_aspect: 3.0,
            max_aspect: None,
            min_width: 100,
        }
    }

    /// Near-square regions: aspect ratio in (0.8, 1.2), wider than 10 px.
    pub fn arrow_icon() -> Self {
        Self {
            min_aspect: 0.8,
            max_aspect: Some(1.2),
            min_width: 10,
        }
    }

    pub fn matches(&self, width: u32, height: u32) -> bool {
        if height == 0 {
            return false;
        }
        let aspect = width as f32 / height as f32;
        aspect > self.min_aspect
            && self.max_aspect.is_none_or(|max| aspect < max)
            && width > self.min_width
    }
}

/// Binarize with an inverted threshold: pixels darker than or equal to the
/// cutoff become foreground (255), lighter pixels background (0). A light
/// UI background drops out and the dark box outlines remain.
pub fn binarize(gray: &GrayImage, cutoff: u8) -> GrayImage {
    threshold(gray, cutoff, ThresholdType::BinaryInverted)
}

/// Find foreground blobs whose bounding box satisfies the predicate.
///
/// Only external contours are considered; nested or touching regions
/// collapse into the enclosing candidate. An image with no foreground
/// pixels yields an empty vector, which callers treat the same as any
/// other "nothing found" outcome.
pub fn find_shape_candidates(
    gray: &GrayImage,
    shape: &ShapePredicate,
    binarize_cutoff: u8,
) -> Vec<BoundingBox> {
    let binary = binarize(gray, binarize_cutoff);
    let contours = find_contours::<u32>(&binary);

    contours
        .iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .filter_map(contour_bounds)
        .filter(|bounds| shape.matches(bounds.width, bounds.height))
        .collect()
}

/// Bounding box of a contour from its point extrema.
fn contour_bounds(contour: &Contour<u32>) -> Option<BoundingBox> {
    let first = contour.points.first()?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.x, first.y);

    for point in &contour.points[1..] {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Some(BoundingBox::new(
        min_x,
        min_y,
        max_x - min_x + 1,
        max_y - min_y + 1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn white_image(width: u32, height: u32) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([255u8]))
    }

    fn fill_dark_rect(image: &mut GrayImage, x: u32, y: u32, w: u32, h: u32) {
        for yy in y..y + h {
            for xx in x..x + w {
                image.put_pixel(xx, yy, Luma([0u8]));
            }
        }
    }

    #[test]
    fn pure_white_image_yields_no_candidates() {
        let image = white_image(200, 200);

        let boxes = find_shape_candidates(&image, &ShapePredicate::input_box(), 200);
        assert!(boxes.is_empty());

        let boxes = find_shape_candidates(&image, &ShapePredicate::arrow_icon(), 200);
        assert!(boxes.is_empty());
    }

    #[test]
    fn wide_dark_rectangle_is_found() {
        let mut image = white_image(400, 200);
        fill_dark_rect(&mut image, 50, 80, 250, 40);

        let boxes = find_shape_candidates(&image, &ShapePredicate::input_box(), 200);

        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0], BoundingBox::new(50, 80, 250, 40));
    }

    #[test]
    fn input_box_predicate_rejects_exact_triple_aspect() {
        let shape = ShapePredicate::input_box();

        // w == 3h exactly: strictly-greater required
        assert!(!shape.matches(300, 100));
        assert!(shape.matches(301, 100));
        // wide enough aspect but too narrow overall
        assert!(!shape.matches(100, 20));
        assert!(shape.matches(101, 20));
    }

    #[test]
    fn arrow_predicate_requires_near_square() {
        let shape = ShapePredicate::arrow_icon();

        assert!(shape.matches(20, 20));
        assert!(shape.matches(21, 20));
        // exact bounds are excluded
        assert!(!shape.matches(24, 30)); // 0.8 exactly
        assert!(!shape.matches(24, 20)); // 1.2 exactly
        // big enough shape, too small overall
        assert!(!shape.matches(10, 10));
        assert!(!shape.matches(0, 0));
    }

    #[test]
    fn binarize_keeps_the_cutoff_value_as_foreground() {
        let mut image = white_image(3, 1);
        image.put_pixel(0, 0, Luma([200u8])); // == cutoff: foreground
        image.put_pixel(1, 0, Luma([201u8])); // just above: background

        let binary = binarize(&image, 200);

        assert_eq!(binary.get_pixel(0, 0).0[0], 255);
        assert_eq!(binary.get_pixel(1, 0).0[0], 0);
        assert_eq!(binary.get_pixel(2, 0).0[0], 0);
    }

    #[test]
    fn nested_regions_collapse_into_the_outer_candidate() {
        let mut image = white_image(400, 200);
        fill_dark_rect(&mut image, 50, 80, 250, 40);
        // lighter hole inside the box; its boundary is not an external contour
        for xx in 100..200 {
            image.put_pixel(xx, 95, Luma([255u8]));
        }

        let boxes = find_shape_candidates(&image, &ShapePredicate::input_box(), 200);

        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0], BoundingBox::new(50, 80, 250, 40));
    }
}
