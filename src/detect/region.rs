//! Search region management for targeted template matching

use image::{GrayImage, imageops};

/// Where inside the screenshot the template matcher is allowed to look.
///
/// The production target UI is docked on the right edge, so the default
/// policy is [`SearchPolicy::RightHalf`]; restricting the scan both avoids
/// false positives from unrelated left-side UI and halves the correlation
/// work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchPolicy {
    /// Scan the entire screenshot
    FullFrame,
    /// Scan only the right half (`x >= width / 2`)
    RightHalf,
    /// Scan a fixed rectangle, clipped to the image bounds
    Fixed(SearchRegion),
}

impl SearchPolicy {
    /// Resolve the policy into a concrete region for an image of the given
    /// size.
    pub fn resolve(&self, image_width: u32, image_height: u32) -> SearchRegion {
        match *self {
            SearchPolicy::FullFrame => SearchRegion::new(0, 0, image_width, image_height),
            SearchPolicy::RightHalf => {
                let offset = image_width / 2;
                SearchRegion::new(offset, 0, image_width - offset, image_height)
            }
            SearchPolicy::Fixed(region) => region.clip_to(image_width, image_height),
        }
    }
}

/// An axis-aligned sub-rectangle of a screenshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SearchRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clip this region so it fits inside an image of the given size.
    pub fn clip_to(mut self, image_width: u32, image_height: u32) -> Self {
        self.x = self.x.min(image_width.saturating_sub(1));
        self.y = self.y.min(image_height.saturating_sub(1));
        self.width = self.width.min(image_width.saturating_sub(self.x));
        self.height = self.height.min(image_height.saturating_sub(self.y));
        self
    }

    /// Check if this region contains a point (in full-image coordinates).
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < (self.x + self.width) && y >= self.y && y < (self.y + self.height)
    }

    /// Get the center point of this region.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if this region is valid (non-zero dimensions).
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Copy the region's pixels out of a grayscale image.
    pub fn crop(&self, image: &GrayImage) -> GrayImage {
        imageops::crop_imm(image, self.x, self.y, self.width, self.height).to_image()
    }

    /// Translate a coordinate found inside this region back into full-image
    /// coordinates.
    pub fn to_image_coords(&self, local_x: u32, local_y: u32) -> (u32, u32) {
        (self.x + local_x, self.y + local_y)
    }
}
