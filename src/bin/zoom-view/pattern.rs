//! Procedurally generated test bitmap.
//!
//! A checkerboard with grid lines makes it easy to see that the point under
//! the cursor stays put while zooming and that panning stops at the edges.

use crate::colors;
use crate::constants::{MAX_IMAGE_SIDE, TILE_SIZE};
use eframe::egui::Color32;
use thiserror::Error;

/// Errors that can occur when generating the test bitmap.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("image size {width}x{height} must be between 1 and {} on each side", MAX_IMAGE_SIDE)]
    InvalidSize { width: u32, height: u32 },
}

/// RGBA pixels ready for texture creation.
pub struct GeneratedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Generates a `width` x `height` checkerboard.
pub fn generate_checkerboard(width: u32, height: u32) -> Result<GeneratedImage, PatternError> {
    if !(1..=MAX_IMAGE_SIDE).contains(&width) || !(1..=MAX_IMAGE_SIDE).contains(&height) {
        return Err(PatternError::InvalidSize { width, height });
    }

    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&pixel_at(x, y).to_array());
        }
    }

    log::debug!("Generated {width}x{height} checkerboard");
    Ok(GeneratedImage {
        pixels,
        width,
        height,
    })
}

fn pixel_at(x: u32, y: u32) -> Color32 {
    let (tile_x, tile_y) = (x / TILE_SIZE, y / TILE_SIZE);
    let (in_x, in_y) = (x % TILE_SIZE, y % TILE_SIZE);

    let on_major = (in_x < 3 && tile_x % 5 == 0) || (in_y < 3 && tile_y % 5 == 0);
    if on_major {
        return colors::GRID_MAJOR;
    }
    if in_x == 0 || in_y == 0 {
        return colors::GRID_MINOR;
    }
    if (tile_x + tile_y) % 2 == 0 {
        colors::TILE_LIGHT
    } else {
        colors::TILE_DARK
    }
}
