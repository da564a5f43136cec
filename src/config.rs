use crate::animation::SpringSpec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How close the user scale must be to a bound to count as "at" that bound
/// when a double tap decides between zooming in and resetting.
pub const ZOOM_SCALE_TOLERANCE: f32 = 0.01;

/// Errors that can occur when building or loading a [`ZoomConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("zoom range is invalid: min {min} must be positive and not above max {max}")]
    InvalidZoomRange { min: f32, max: f32 },
    #[error("default zoom {default} is outside [{min}, {max}]")]
    DefaultZoomOutOfRange { default: f32, min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },
    #[error("{name} spring is invalid: {spec:?}")]
    InvalidSpring { name: &'static str, spec: SpringSpec },
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::de::SpannedError),
}

/// Zoom limits, step sizes and gesture toggles.
///
/// Supplied by the host when a controller is created or restored; never part
/// of a snapshot. Any subset of fields may be given in a RON file, the rest
/// fall back to [`ZoomConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Lowest user scale (1.0 = image fitted to the container)
    pub min_zoom: f32,
    /// Highest user scale
    pub max_zoom: f32,
    /// Scale that `reset` returns to, normally `min_zoom`
    pub default_zoom: f32,
    /// Increment used by zoom buttons and keys
    pub zoom_step: f32,
    /// Increment applied by a double tap
    pub double_tap_zoom_step: f32,
    /// Whether double tap toggles zoom
    pub double_tap_enabled: bool,
    /// Whether pinch/pan gestures are applied
    pub transform_enabled: bool,
    pub scale_spring: SpringSpec,
    pub offset_spring: SpringSpec,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 5.0,
            default_zoom: 1.0,
            zoom_step: 0.5,
            double_tap_zoom_step: 2.0,
            double_tap_enabled: true,
            transform_enabled: true,
            scale_spring: SpringSpec::default(),
            offset_spring: SpringSpec::pixels(),
        }
    }
}

impl ZoomConfig {
    /// Default configuration with the given zoom range, resetting to `min`.
    pub fn with_zoom_range(min: f32, max: f32) -> Self {
        Self {
            min_zoom: min,
            max_zoom: max,
            default_zoom: min,
            ..Self::default()
        }
    }

    /// Checks the invariants the controller relies on.
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("default_zoom", self.default_zoom),
            ("zoom_step", self.zoom_step),
            ("double_tap_zoom_step", self.double_tap_zoom_step),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name });
            }
        }

        if self.min_zoom <= 0.0 || self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.default_zoom) {
            return Err(ConfigError::DefaultZoomOutOfRange {
                default: self.default_zoom,
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }

        for (name, value) in [
            ("zoom_step", self.zoom_step),
            ("double_tap_zoom_step", self.double_tap_zoom_step),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, spec) in [
            ("scale", self.scale_spring),
            ("offset", self.offset_spring),
        ] {
            if !spec.is_valid() {
                return Err(ConfigError::InvalidSpring { name, spec });
            }
        }

        Ok(self)
    }

    /// Parses and validates a RON config.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()
    }

    /// Reads, parses and validates a RON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&source)?;
        log::debug!("Loaded zoom config from {}: {config:?}", path.display());
        Ok(config)
    }
}
