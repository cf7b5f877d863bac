//! Stage-tagged debug artifacts
//!
//! A side channel only: every write failure is logged and swallowed, and
//! nothing here may change detection results. Artifacts land as PNGs in the
//! configured directory, one file per stage per call.

use std::fs;
use std::path::PathBuf;

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use super::config::DetectorConfig;
use super::types::BoundingBox;

pub const STAGE_GRAYSCALE: &str = "1_grayscale";
pub const STAGE_DETECTION: &str = "2_detection";
pub const STAGE_BLURRED: &str = "blurred_input";
pub const STAGE_DETECTED_INPUT: &str = "detected_input";

pub const COLOR_CANDIDATE: Rgb<u8> = Rgb([0, 255, 0]);
pub const COLOR_CLICK: Rgb<u8> = Rgb([255, 0, 0]);

/// Writes stage images when debug mode is on, otherwise does nothing.
#[derive(Debug, Clone)]
pub struct DebugSink {
    enabled: bool,
    dir: PathBuf,
}

impl DebugSink {
    pub fn from_config(config: &DetectorConfig) -> Self {
        Self {
            enabled: config.debug,
            dir: config.debug_dir.clone(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn save_gray(&self, image: &GrayImage, stage: &str) {
        if self.enabled {
            self.write(stage, |path| image.save(path));
        }
    }

    pub fn save_rgb(&self, image: &RgbImage, stage: &str) {
        if self.enabled {
            self.write(stage, |path| image.save(path));
        }
    }

    fn write<F>(&self, stage: &str, save: F)
    where
        F: FnOnce(&PathBuf) -> image::ImageResult<()>,
    {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            log::warn!("Could not create debug dir {:?}: {err}", self.dir);
            return;
        }
        let path = self.dir.join(format!("{stage}.png"));
        match save(&path) {
            Ok(()) => log::debug!("Saved debug image {:?}", path),
            Err(err) => log::warn!("Could not save debug image {:?}: {err}", path),
        }
    }
}

/// Hollow rectangle around a candidate box.
pub fn draw_box(image: &mut RgbImage, bounds: &BoundingBox, color: Rgb<u8>) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let rect = Rect::at(bounds.x as i32, bounds.y as i32).of_size(bounds.width, bounds.height);
    draw_hollow_rect_mut(image, rect, color);
}

/// Filled dot on the click position.
pub fn draw_click_point(image: &mut RgbImage, point: (u32, u32), color: Rgb<u8>) {
    draw_filled_circle_mut(image, (point.0 as i32, point.1 as i32), 5, color);
}

/// Render a text label with 8x8 bitmap glyphs, clipped to the image.
pub fn draw_label(image: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
    let mut cursor_x = x;
    for ch in text.chars() {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
            cursor_x += 8;
            continue;
        };
        for (row_idx, row) in glyph.iter().enumerate() {
            for col_idx in 0..8 {
                if (row >> col_idx) & 1 == 0 {
                    continue;
                }
                let px = cursor_x + col_idx;
                let py = y + row_idx as i32;
                if px >= 0 && py >= 0 && (px as u32) < image.width() && (py as u32) < image.height()
                {
                    image.put_pixel(px as u32, py as u32, color);
                }
            }
        }
        cursor_x += 8;
    }
}
