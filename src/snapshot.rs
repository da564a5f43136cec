//! Minimal restorable zoom state.
//!
//! A snapshot is the user scale plus the pan offset, nothing else. The
//! container and image sizes are re-reported by the host after re-creation
//! and the configuration is supplied again at restore.

use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] ron::de::SpannedError),
    #[error("snapshot holds an unusable state: {0:?}")]
    Invalid(ZoomSnapshot),
}

/// The `(scale, offset)` pair, persisted as three floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSnapshot {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ZoomSnapshot {
    pub fn new(scale: f32, offset: Vec2) -> Self {
        Self {
            scale,
            offset_x: offset.x,
            offset_y: offset.y,
        }
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.scale, self.offset_x, self.offset_y]
    }

    /// A snapshot can be restored when every value is finite and the scale is positive.
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0 && self.offset().is_finite()
    }

    pub fn to_ron(&self) -> Result<String, SnapshotError> {
        Ok(ron::to_string(self)?)
    }

    pub fn from_ron(source: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = ron::from_str(source)?;
        if !snapshot.is_valid() {
            return Err(SnapshotError::Invalid(snapshot));
        }
        Ok(snapshot)
    }
}

impl From<[f32; 3]> for ZoomSnapshot {
    fn from([scale, offset_x, offset_y]: [f32; 3]) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }
}

impl From<ZoomSnapshot> for [f32; 3] {
    fn from(snapshot: ZoomSnapshot) -> Self {
        snapshot.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_layout_is_scale_then_offset() {
        let snapshot = ZoomSnapshot::new(2.5, Vec2::new(-10.0, 42.0));
        assert_eq!(snapshot.to_array(), [2.5, -10.0, 42.0]);
        assert_eq!(ZoomSnapshot::from([2.5, -10.0, 42.0]), snapshot);
    }

    #[test]
    fn ron_text_survives_reload() {
        let snapshot = ZoomSnapshot::new(1.75, Vec2::new(12.5, -3.0));
        let text = snapshot.to_ron().unwrap();
        assert!(text.contains("scale"));
        assert_eq!(ZoomSnapshot::from_ron(&text).unwrap(), snapshot);
    }

    #[test]
    fn rejects_zero_scale() {
        let err = ZoomSnapshot::from_ron("(scale: 0.0, offset_x: 0.0, offset_y: 0.0)").unwrap_err();
        assert!(matches!(err, SnapshotError::Invalid(_)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            ZoomSnapshot::from_ron("not a snapshot"),
            Err(SnapshotError::Parse(_))
        ));
    }
}
