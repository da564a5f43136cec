/// Height of the bottom status bar in pixels.
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

/// Zoom multiplier per scroll-wheel notch.
pub const ZOOM_SPEED: f32 = 1.2;

/// Default size of the generated test bitmap.
pub const DEFAULT_IMAGE_WIDTH: u32 = 2400;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 1600;

/// Largest side accepted for the generated test bitmap.
pub const MAX_IMAGE_SIDE: u32 = 8192;

/// Side length of one checkerboard tile in image pixels.
pub const TILE_SIZE: u32 = 100;

/// eframe storage key for the persisted zoom snapshot.
pub const SNAPSHOT_KEY: &str = "zoom_snapshot";
