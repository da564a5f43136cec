//! Zoom and pan interaction state for a displayed bitmap.
//!
//! The host reports the container size, the natural image size and raw input
//! (button presses, double taps, pinch/pan frames). [`ZoomTransformController`]
//! turns those into one clamped transform: an effective scale plus an offset
//! from the container center, which the host applies when drawing the bitmap.

pub mod animation;
pub mod config;
pub mod controller;
pub mod driver;
pub mod geometry;
pub mod snapshot;

pub use animation::{Animated, SpringSpec};
pub use config::{ConfigError, ZOOM_SCALE_TOLERANCE, ZoomConfig};
pub use controller::{ViewTransform, ZoomTransformController};
pub use driver::{Command, DriverError, ZoomDriver};
pub use geometry::{Size, Vec2};
pub use snapshot::{SnapshotError, ZoomSnapshot};
