//! Zoom/pan state for one displayed bitmap.
//!
//! The controller keeps a user scale layered on top of a fit-to-container base
//! scale, plus a pan offset measured from the container center. Discrete
//! actions (buttons, reset, double tap) animate towards a clamped target;
//! continuous gestures write their result immediately so the image tracks the
//! fingers without latency.

use crate::animation::Animated;
use crate::config::{ZOOM_SCALE_TOLERANCE, ZoomConfig};
use crate::geometry::{Size, Vec2};
use crate::snapshot::ZoomSnapshot;
use log::{debug, trace, warn};
use std::time::Duration;

/// Everything a renderer needs to draw the bitmap for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// User scale, the value the zoom limits apply to
    pub scale: f32,
    /// Base fit scale multiplied by the user scale
    pub effective_scale: f32,
    /// Translation of the image center from the container center
    pub offset: Vec2,
    pub container_size: Size,
    pub image_size: Size,
    /// Whether an animation is still converging
    pub animating: bool,
}

impl ViewTransform {
    /// On-screen size of the bitmap.
    pub fn displayed_size(&self) -> Size {
        self.image_size.scale(self.effective_scale)
    }

    /// Top-left corner of the bitmap in container coordinates.
    pub fn image_origin(&self) -> Vec2 {
        self.container_size.center() + self.offset - self.displayed_size().center()
    }

    /// Maps an image pixel position to container coordinates.
    pub fn image_to_container(&self, image: Vec2) -> Vec2 {
        self.image_origin() + image * self.effective_scale
    }

    /// Maps a container position back to image pixels.
    pub fn container_to_image(&self, container: Vec2) -> Vec2 {
        (container - self.image_origin()) / self.effective_scale
    }
}

/// Work left over for when the scale animation settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnScaleSettled {
    Nothing,
    ClampOffset,
}

/// Zoom and pan state for one displayed bitmap.
///
/// Owned by a single writer: the host UI thread, or a [`crate::ZoomDriver`] task.
pub struct ZoomTransformController {
    config: ZoomConfig,
    container_size: Size,
    image_size: Size,
    scale: Animated<f32>,
    offset: Animated<Vec2>,
    on_scale_settled: OnScaleSettled,
}

impl ZoomTransformController {
    /// Creates a controller at `(default_zoom, 0,0)`.
    ///
    /// The configuration is expected to have passed [`ZoomConfig::validate`].
    pub fn new(config: ZoomConfig) -> Self {
        Self::with_state(config, config.default_zoom, Vec2::ZERO)
    }

    /// Re-creates a controller from a snapshot taken by [`Self::snapshot`].
    ///
    /// The scale is clamped into the (possibly changed) zoom range. The offset
    /// is kept as-is and gets clamped on the next interaction, once the host
    /// has reported container and image sizes again.
    pub fn restore(config: ZoomConfig, snapshot: ZoomSnapshot) -> Self {
        if !snapshot.is_valid() {
            warn!("Ignoring unusable zoom snapshot {snapshot:?}");
            return Self::new(config);
        }
        let scale = snapshot.scale.max(config.min_zoom).min(config.max_zoom);
        if scale != snapshot.scale {
            warn!(
                "Restored scale {} clamped to {scale} (range {}..={})",
                snapshot.scale, config.min_zoom, config.max_zoom
            );
        }
        Self::with_state(config, scale, snapshot.offset())
    }

    fn with_state(config: ZoomConfig, scale: f32, offset: Vec2) -> Self {
        Self {
            config,
            container_size: Size::ZERO,
            image_size: Size::ZERO,
            scale: Animated::new(scale, config.scale_spring),
            offset: Animated::new(offset, config.offset_spring),
            on_scale_settled: OnScaleSettled::Nothing,
        }
    }

    /// The configuration currently in effect.
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Swaps in a new configuration.
    ///
    /// Animations in flight are stopped, the scale is snapped into the new
    /// range and the offset is clamped for it.
    pub fn reconfigure(&mut self, config: ZoomConfig) {
        debug!("Reconfiguring zoom: {config:?}");
        self.config = config;
        self.scale.set_spec(config.scale_spring);
        self.offset.set_spec(config.offset_spring);
        self.on_scale_settled = OnScaleSettled::Nothing;

        let scale = self.clamp_scale(self.scale.value());
        self.scale.snap_to(scale);
        self.offset.snap_to(self.clamp_offset(self.offset.value(), scale));
    }

    /// Captures the state an animation in flight is heading to.
    pub fn snapshot(&self) -> ZoomSnapshot {
        ZoomSnapshot::new(self.scale.target(), self.offset.target())
    }

    /// Last viewport size reported by the host.
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Records the viewport size. The offset is not re-clamped here.
    pub fn set_container_size(&mut self, size: Size) {
        if size != self.container_size {
            trace!("Container size {size:?}");
            self.container_size = size;
        }
    }

    /// Natural size of the bitmap, zero until one is loaded.
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// Records the natural size of the loaded bitmap. The offset is not re-clamped here.
    pub fn set_image_size(&mut self, size: Size) {
        if size != self.image_size {
            debug!("Image size {size:?}");
            self.image_size = size;
        }
    }

    /// Center of the container, the origin of the offset.
    pub fn container_center(&self) -> Vec2 {
        self.container_size.center()
    }

    /// Scale that fits the whole image inside the container, or 1 while
    /// either size is unknown.
    pub fn base_scale(&self) -> f32 {
        if self.has_layout() {
            (self.container_size.width / self.image_size.width)
                .min(self.container_size.height / self.image_size.height)
        } else {
            1.0
        }
    }

    /// Base scale times the current user scale; what the bitmap is drawn at.
    pub fn effective_scale(&self) -> f32 {
        self.base_scale() * self.scale.value()
    }

    /// Current user scale, mid-animation included.
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Current pan offset from the container center.
    pub fn offset(&self) -> Vec2 {
        self.offset.value()
    }

    /// Scale the running animation is heading to.
    pub fn target_scale(&self) -> f32 {
        self.scale.target()
    }

    /// Offset the running animation is heading to.
    pub fn target_offset(&self) -> Vec2 {
        self.offset.target()
    }

    /// Whether scale or offset is still converging.
    pub fn is_animating(&self) -> bool {
        self.scale.is_running() || self.offset.is_running()
    }

    /// Everything needed to draw the current frame.
    pub fn view(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale(),
            effective_scale: self.effective_scale(),
            offset: self.offset(),
            container_size: self.container_size,
            image_size: self.image_size,
            animating: self.is_animating(),
        }
    }

    /// Largest allowed `|offset|` per axis at the given user scale.
    pub fn max_offset(&self, scale: f32) -> Vec2 {
        if !self.has_layout() {
            return Vec2::ZERO;
        }
        let scaled = self.image_size.scale(self.base_scale() * scale);
        Vec2::new(
            ((scaled.width - self.container_size.width) / 2.0).max(0.0),
            ((scaled.height - self.container_size.height) / 2.0).max(0.0),
        )
    }

    fn clamp_offset(&self, offset: Vec2, scale: f32) -> Vec2 {
        let max = self.max_offset(scale);
        offset.clamp(-max, max)
    }

    fn has_layout(&self) -> bool {
        !self.container_size.is_empty() && !self.image_size.is_empty()
    }

    fn clamp_scale(&self, scale: f32) -> f32 {
        scale.max(self.config.min_zoom).min(self.config.max_zoom)
    }

    /// Animates the user scale up by `step`, capped at `max_zoom`.
    pub fn zoom_in(&mut self, step: f32) {
        self.zoom_by(step);
    }

    /// Animates the user scale down by `step`, floored at `min_zoom`.
    pub fn zoom_out(&mut self, step: f32) {
        self.zoom_by(-step);
    }

    /// Animates the scale by `delta`, then snaps the offset into the new bounds.
    fn zoom_by(&mut self, delta: f32) {
        if !delta.is_finite() {
            warn!("Ignoring non-finite zoom step {delta}");
            return;
        }
        let target = self.clamp_scale(self.scale.value() + delta);
        debug!("Zoom {} -> {target}", self.scale.value());
        self.scale.animate_to(target);
        self.on_scale_settled = OnScaleSettled::ClampOffset;
    }

    /// Animates back to the default scale with no pan.
    pub fn reset(&mut self) {
        debug!("Reset to {}", self.config.default_zoom);
        self.animate_to(self.config.default_zoom, Vec2::ZERO);
    }

    /// Toggles between zooming in around `tap` and resetting.
    ///
    /// At (or within tolerance of) the maximum scale this goes back to the
    /// minimum with no pan. Otherwise it zooms in by the double-tap step,
    /// keeping the tapped point where it is on screen.
    pub fn on_double_tap(&mut self, tap: Vec2) {
        if !self.config.double_tap_enabled {
            trace!("Double tap disabled");
            return;
        }
        if !tap.is_finite() {
            warn!("Ignoring double tap at non-finite position {tap:?}");
            return;
        }

        let current = self.scale.value();
        let min = self.config.min_zoom;
        let max = self.config.max_zoom;

        if (current - max).abs() < ZOOM_SCALE_TOLERANCE {
            debug!("Double tap at max zoom, zooming out");
            self.animate_to(min, Vec2::ZERO);
            return;
        }

        let target = (current + self.config.double_tap_zoom_step).min(max);
        if (target - min).abs() < ZOOM_SCALE_TOLERANCE {
            self.animate_to(min, Vec2::ZERO);
            return;
        }

        let from_center = tap - self.container_center();
        let ratio = target / current;
        let offset = (self.offset.value() - from_center) * ratio + from_center;
        let offset = self.clamp_offset(offset, target);
        debug!("Double tap at {tap:?}: zoom {current} -> {target}, offset {offset:?}");
        self.animate_to(target, offset);
    }

    /// Applies one frame of a pinch/pan gesture.
    ///
    /// `pan` and `zoom_ratio` are deltas since the previous frame. The zoom
    /// pivots around `centroid`; the pan is added on top and the result is
    /// clamped, so over-panning stops at the edge instead of being rejected.
    pub fn on_transform(&mut self, centroid: Vec2, pan: Vec2, zoom_ratio: f32) {
        if !self.config.transform_enabled {
            trace!("Transform gestures disabled");
            return;
        }
        if !(centroid.is_finite() && pan.is_finite() && zoom_ratio.is_finite())
            || zoom_ratio <= 0.0
        {
            warn!(
                "Ignoring malformed gesture frame: centroid {centroid:?}, pan {pan:?}, zoom {zoom_ratio}"
            );
            return;
        }

        let current = self.scale.value();
        let scale = self.clamp_scale(current * zoom_ratio);
        let applied = scale / current;

        let from_center = centroid - self.container_center();
        let offset = from_center * (1.0 - applied) + self.offset.value() * applied + pan;
        let offset = self.clamp_offset(offset, scale);

        trace!("Gesture frame: scale {scale}, offset {offset:?}");
        self.on_scale_settled = OnScaleSettled::Nothing;
        self.scale.snap_to(scale);
        self.offset.snap_to(offset);
    }

    fn animate_to(&mut self, scale: f32, offset: Vec2) {
        self.on_scale_settled = OnScaleSettled::Nothing;
        self.scale.animate_to(scale);
        self.offset.animate_to(offset);
    }

    /// Advances animations by one frame. Returns whether anything is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let scale_settled = self.scale.step(dt);
        self.offset.step(dt);

        if scale_settled && self.on_scale_settled == OnScaleSettled::ClampOffset {
            self.on_scale_settled = OnScaleSettled::Nothing;
            let clamped = self.clamp_offset(self.offset.value(), self.scale.value());
            self.offset.snap_to(clamped);
        }

        self.is_animating()
    }

    /// Ticks until every animation has settled. Intended for hosts without a
    /// frame clock and for tests; gives up after `max_frames`.
    pub fn settle(&mut self, frame: Duration, max_frames: usize) -> bool {
        for _ in 0..max_frames {
            if !self.tick(frame) {
                return true;
            }
        }
        !self.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
        (a - b).abs() < tolerance
    }

    fn controller(min: f32, max: f32) -> ZoomTransformController {
        let mut controller = ZoomTransformController::new(ZoomConfig::with_zoom_range(min, max));
        controller.set_container_size(Size::new(400.0, 600.0));
        controller.set_image_size(Size::new(800.0, 1200.0));
        controller
    }

    fn settle(controller: &mut ZoomTransformController) {
        assert!(controller.settle(FRAME, 1_000), "animation did not settle");
    }

    #[test]
    fn base_scale_fits_image() {
        let controller = controller(1.0, 3.0);
        assert_eq!(controller.base_scale(), 0.5);
        assert_eq!(controller.effective_scale(), 0.5);
    }

    #[test]
    fn base_scale_uses_tighter_axis() {
        let mut controller = controller(1.0, 3.0);
        controller.set_image_size(Size::new(400.0, 300.0));
        assert_eq!(controller.base_scale(), 1.0);
        controller.set_image_size(Size::new(1600.0, 600.0));
        assert_eq!(controller.base_scale(), 0.25);
    }

    #[test]
    fn base_scale_is_one_without_layout() {
        let mut controller = ZoomTransformController::new(ZoomConfig::default());
        assert_eq!(controller.base_scale(), 1.0);
        controller.set_image_size(Size::new(800.0, 600.0));
        assert_eq!(controller.base_scale(), 1.0);
        assert_eq!(controller.effective_scale(), controller.scale());
    }

    #[test]
    fn transform_example() {
        let mut controller = controller(1.0, 3.0);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::new(10.0, 20.0), 1.5);
        assert_eq!(controller.scale(), 1.5);
        assert_eq!(controller.offset(), Vec2::new(10.0, 20.0));
        assert_eq!(controller.effective_scale(), 0.75);
        assert!(!controller.is_animating());
    }

    #[test]
    fn transform_pivots_around_off_center_centroid() {
        let mut controller = controller(1.0, 3.0);
        let centroid = Vec2::new(300.0, 400.0);
        let image_point = controller.view().container_to_image(centroid);

        controller.on_transform(centroid, Vec2::ZERO, 2.0);
        let after = controller.view().image_to_container(image_point);
        assert!(approx_eq(after.x, centroid.x, 1e-3));
        assert!(approx_eq(after.y, centroid.y, 1e-3));
    }

    #[test]
    fn transform_clamps_scale_and_uses_applied_ratio() {
        let mut controller = controller(1.0, 3.0);
        let centroid = Vec2::new(300.0, 300.0);
        controller.on_transform(centroid, Vec2::ZERO, 10.0);
        assert_eq!(controller.scale(), 3.0);
        // ratio applied is 3, so d * (1 - 3) with d = (100, 0)
        assert!(approx_eq(controller.offset().x, -200.0, 1e-3));
        assert_eq!(controller.offset().y, 0.0);
    }

    #[test]
    fn pan_is_truncated_at_the_edge() {
        let mut controller = controller(1.0, 3.0);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::ZERO, 2.0);
        // image is 800x1200 on screen, container 400x600
        assert_eq!(controller.max_offset(2.0), Vec2::new(200.0, 300.0));

        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::new(500.0, -50.0), 1.0);
        assert_eq!(controller.offset(), Vec2::new(200.0, -50.0));
    }

    #[test]
    fn pan_at_fit_scale_is_pinned() {
        let mut controller = controller(1.0, 3.0);
        controller.on_transform(Vec2::new(10.0, 10.0), Vec2::new(40.0, 40.0), 1.0);
        assert_eq!(controller.offset(), Vec2::ZERO);
    }

    #[test]
    fn zoom_in_clamps_at_max() {
        let mut controller = controller(1.0, 3.0);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::ZERO, 2.8);
        assert!(approx_eq(controller.scale(), 2.8, 1e-5));

        controller.zoom_in(0.5);
        assert_eq!(controller.target_scale(), 3.0);
        settle(&mut controller);
        assert_eq!(controller.scale(), 3.0);
    }

    #[test]
    fn zoom_out_clamps_at_min_and_snaps_offset() {
        let mut controller = controller(1.0, 3.0);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::ZERO, 3.0);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::new(300.0, 500.0), 1.0);
        assert_eq!(controller.offset(), Vec2::new(300.0, 500.0));

        controller.zoom_out(5.0);
        // the offset waits for the scale animation
        controller.tick(FRAME);
        assert_eq!(controller.offset(), Vec2::new(300.0, 500.0));

        settle(&mut controller);
        assert_eq!(controller.scale(), 1.0);
        assert_eq!(controller.offset(), Vec2::ZERO);
    }

    #[test]
    fn zoom_at_bound_still_animates() {
        let mut controller = controller(1.0, 3.0);
        controller.zoom_out(0.5);
        assert!(controller.is_animating());
        settle(&mut controller);
        assert_eq!(controller.scale(), 1.0);
    }

    #[test]
    fn repeated_zoom_in_retargets() {
        let mut controller = controller(1.0, 3.0);
        controller.zoom_in(0.5);
        controller.tick(FRAME);
        controller.zoom_in(0.5);
        // second press builds on the in-flight value, not on the first target
        assert!(controller.target_scale() < 2.0);
        assert!(controller.target_scale() > 1.5);
        settle(&mut controller);
        assert_eq!(controller.scale(), controller.target_scale());
    }

    #[test]
    fn reset_returns_to_default() {
        let mut controller = controller(1.0, 3.0);
        controller.on_transform(Vec2::new(100.0, 100.0), Vec2::new(30.0, 30.0), 2.5);
        controller.reset();
        settle(&mut controller);
        assert_eq!(controller.scale(), 1.0);
        assert_eq!(controller.offset(), Vec2::ZERO);
    }

    #[test]
    fn double_tap_zooms_around_tap() {
        let mut controller = controller(1.0, 5.0);
        let tap = Vec2::new(300.0, 450.0);
        let image_point = controller.view().container_to_image(tap);

        controller.on_double_tap(tap);
        assert_eq!(controller.target_scale(), 3.0);
        // d = (100, 150), r = 3: (0 - d) * 3 + d = -2d
        assert_eq!(controller.target_offset(), Vec2::new(-200.0, -300.0));

        settle(&mut controller);
        let after = controller.view().image_to_container(image_point);
        assert!(approx_eq(after.x, tap.x, 1e-2));
        assert!(approx_eq(after.y, tap.y, 1e-2));
    }

    #[test]
    fn double_tap_at_max_resets() {
        let mut controller = controller(1.0, 3.0);
        controller.on_transform(Vec2::new(100.0, 100.0), Vec2::ZERO, 3.0);
        assert_ne!(controller.offset(), Vec2::ZERO);

        controller.on_double_tap(Vec2::new(50.0, 50.0));
        assert_eq!(controller.target_scale(), 1.0);
        assert_eq!(controller.target_offset(), Vec2::ZERO);
        settle(&mut controller);
        assert_eq!(controller.scale(), 1.0);
        assert_eq!(controller.offset(), Vec2::ZERO);
    }

    #[test]
    fn double_tap_caps_at_max() {
        let mut controller = controller(1.0, 2.0);
        controller.on_double_tap(Vec2::new(250.0, 300.0));
        assert_eq!(controller.target_scale(), 2.0);
        settle(&mut controller);

        controller.on_double_tap(Vec2::new(250.0, 300.0));
        assert_eq!(controller.target_scale(), 1.0);
    }

    #[test]
    fn double_tap_landing_on_min_resets_offset() {
        let config = ZoomConfig {
            double_tap_zoom_step: 0.005,
            ..ZoomConfig::with_zoom_range(1.0, 3.0)
        };
        let mut controller = ZoomTransformController::new(config);
        controller.set_container_size(Size::new(400.0, 600.0));
        controller.set_image_size(Size::new(800.0, 1200.0));

        controller.on_double_tap(Vec2::new(10.0, 10.0));
        assert_eq!(controller.target_scale(), 1.0);
        assert_eq!(controller.target_offset(), Vec2::ZERO);
    }

    #[test]
    fn disabled_gestures_are_ignored() {
        let config = ZoomConfig {
            double_tap_enabled: false,
            transform_enabled: false,
            ..ZoomConfig::with_zoom_range(1.0, 3.0)
        };
        let mut controller = ZoomTransformController::new(config);
        controller.set_container_size(Size::new(400.0, 600.0));
        controller.set_image_size(Size::new(800.0, 1200.0));

        controller.on_double_tap(Vec2::new(10.0, 10.0));
        controller.on_transform(Vec2::new(10.0, 10.0), Vec2::new(5.0, 5.0), 2.0);
        assert!(!controller.is_animating());
        assert_eq!(controller.scale(), 1.0);

        // buttons keep working
        controller.zoom_in(1.0);
        assert_eq!(controller.target_scale(), 2.0);
    }

    #[test]
    fn malformed_gesture_frames_are_dropped() {
        let mut controller = controller(1.0, 3.0);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::ZERO, f32::NAN);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::ZERO, 0.0);
        controller.on_transform(Vec2::new(f32::INFINITY, 0.0), Vec2::ZERO, 1.5);
        controller.on_double_tap(Vec2::new(f32::NAN, 0.0));
        controller.zoom_in(f32::INFINITY);
        assert_eq!(controller.scale(), 1.0);
        assert_eq!(controller.offset(), Vec2::ZERO);
        assert!(!controller.is_animating());
    }

    #[test]
    fn gesture_interrupts_animation() {
        let mut controller = controller(1.0, 3.0);
        controller.reset();
        controller.zoom_in(1.0);
        controller.tick(FRAME);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::ZERO, 1.0);
        assert!(!controller.is_animating());
        assert_eq!(controller.target_scale(), controller.scale());
    }

    #[test]
    fn resize_does_not_reclamp_offset() {
        let mut controller = controller(1.0, 3.0);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::new(150.0, 100.0), 2.0);
        assert_eq!(controller.offset(), Vec2::new(150.0, 100.0));

        // a wide image leaves no vertical room at this scale
        controller.set_image_size(Size::new(1600.0, 600.0));
        assert_eq!(controller.max_offset(2.0), Vec2::new(200.0, 0.0));
        assert_eq!(controller.offset(), Vec2::new(150.0, 100.0));

        // next interaction clamps
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::ZERO, 1.0);
        assert_eq!(controller.offset(), Vec2::new(150.0, 0.0));
    }

    #[test]
    fn snapshot_reports_targets() {
        let mut controller = controller(1.0, 5.0);
        controller.on_double_tap(Vec2::new(300.0, 450.0));
        controller.tick(FRAME);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.scale, 3.0);
        assert_eq!(snapshot.offset(), Vec2::new(-200.0, -300.0));
    }

    #[test]
    fn restore_clamps_scale() {
        let config = ZoomConfig::with_zoom_range(1.0, 3.0);
        let restored = ZoomTransformController::restore(config, ZoomSnapshot::from([7.0, 5.0, -5.0]));
        assert_eq!(restored.scale(), 3.0);
        assert_eq!(restored.offset(), Vec2::new(5.0, -5.0));

        let fallback = ZoomTransformController::restore(config, ZoomSnapshot::from([f32::NAN, 0.0, 0.0]));
        assert_eq!(fallback.scale(), 1.0);
    }

    #[test]
    fn reconfigure_snaps_into_new_range() {
        let mut controller = controller(1.0, 5.0);
        controller.on_transform(Vec2::new(200.0, 300.0), Vec2::new(400.0, 0.0), 4.0);
        controller.reconfigure(ZoomConfig::with_zoom_range(1.0, 2.0));
        assert_eq!(controller.scale(), 2.0);
        assert_eq!(controller.offset(), Vec2::new(200.0, 0.0));
        assert!(!controller.is_animating());
    }

    #[test]
    fn view_maps_image_corners() {
        let controller = controller(1.0, 3.0);
        let view = controller.view();
        assert_eq!(view.displayed_size(), Size::new(400.0, 600.0));
        assert_eq!(view.image_origin(), Vec2::ZERO);
        assert_eq!(
            view.image_to_container(Vec2::new(800.0, 1200.0)),
            Vec2::new(400.0, 600.0)
        );
    }
}
