//! Damped spring animation for a single state variable.
//!
//! Each animated variable owns one [`Animated`] value. Issuing a new target
//! replaces whatever target was in flight and keeps the current velocity, so
//! rapid input retargets a single motion instead of queueing several.

use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};
use std::time::Duration;

/// Integration sub-step. Small enough to stay stable for stiff springs.
const MAX_SUB_STEP: f32 = 1.0 / 240.0;

/// Longest frame gap advanced in one `step` call.
const MAX_FRAME: f32 = 1.0;

/// Tuning for a spring animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringSpec {
    /// Spring constant. Higher values converge faster.
    pub stiffness: f32,
    /// 1.0 is critically damped (no overshoot), below 1.0 bounces.
    pub damping_ratio: f32,
    /// Distance from the target (and speed) under which the value settles.
    pub visibility_threshold: f32,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            stiffness: 400.0,
            damping_ratio: 1.0,
            visibility_threshold: 0.001,
        }
    }
}

impl SpringSpec {
    /// Default tuning for pixel offsets, where sub-pixel motion is invisible.
    pub fn pixels() -> Self {
        Self {
            visibility_threshold: 0.5,
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.stiffness.is_finite()
            && self.stiffness > 0.0
            && self.damping_ratio.is_finite()
            && self.damping_ratio > 0.0
            && self.visibility_threshold.is_finite()
            && self.visibility_threshold > 0.0
    }
}

/// A value a spring can drive.
pub trait Animatable:
    Copy + Default + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    fn magnitude(self) -> f32;
}

impl Animatable for f32 {
    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl Animatable for Vec2 {
    fn magnitude(self) -> f32 {
        self.length()
    }
}

/// A value that springs towards its target one frame at a time.
///
/// Idle until [`Animated::animate_to`]; [`Animated::step`] advances it.
#[derive(Debug, Clone)]
pub struct Animated<T> {
    value: T,
    velocity: T,
    target: T,
    running: bool,
    spec: SpringSpec,
}

impl<T: Animatable> Animated<T> {
    pub fn new(value: T, spec: SpringSpec) -> Self {
        Self {
            value,
            velocity: T::default(),
            target: value,
            running: false,
            spec,
        }
    }

    /// Current value.
    pub fn value(&self) -> T {
        self.value
    }

    /// Where the value is heading, or the value itself when idle.
    pub fn target(&self) -> T {
        self.target
    }

    pub fn velocity(&self) -> T {
        self.velocity
    }

    /// Whether the value is still moving towards its target.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_spec(&mut self, spec: SpringSpec) {
        self.spec = spec;
    }

    /// Starts (or retargets) an animation towards `target`.
    ///
    /// Animating to the current value is allowed; it settles on the next step.
    pub fn animate_to(&mut self, target: T) {
        self.target = target;
        self.running = true;
    }

    /// Writes `value` immediately, cancelling any animation in flight.
    pub fn snap_to(&mut self, value: T) {
        self.value = value;
        self.target = value;
        self.velocity = T::default();
        self.running = false;
    }

    /// Advances the spring by `dt`.
    ///
    /// Returns `true` on the step where the animation settles. A settled value
    /// equals the target exactly.
    pub fn step(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }

        let omega = self.spec.stiffness.sqrt();
        let damping = 2.0 * self.spec.damping_ratio * omega;

        let mut remaining = dt.as_secs_f32().min(MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUB_STEP);
            remaining -= h;

            let displacement = self.value - self.target;
            let acceleration =
                displacement * -self.spec.stiffness - self.velocity * damping;
            self.velocity = self.velocity + acceleration * h;
            self.value = self.value + self.velocity * h;

            if self.is_at_rest() {
                self.snap_to(self.target);
                return true;
            }
        }
        false
    }

    fn is_at_rest(&self) -> bool {
        let threshold = self.spec.visibility_threshold;
        (self.value - self.target).magnitude() < threshold
            && self.velocity.magnitude() < threshold * 10.0
    }
}
