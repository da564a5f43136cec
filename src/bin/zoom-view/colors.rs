//! Color constants for the generated bitmap and the zoom overlay.

use eframe::egui::Color32;

// Checkerboard tiles
pub const TILE_LIGHT: Color32 = Color32::from_rgb(226, 226, 232);
pub const TILE_DARK: Color32 = Color32::from_rgb(160, 168, 184);

// Grid lines every tile, heavier lines every fifth tile
pub const GRID_MINOR: Color32 = Color32::from_rgb(120, 120, 130);
pub const GRID_MAJOR: Color32 = Color32::from_rgb(200, 60, 60);

// Image border drawn over the viewport
pub const IMAGE_BORDER: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 160);
