//! Ambient motion of the whole field and the shared exponential approach.

use crate::constants::*;
use glam::{Vec2, Vec3};

/// How a per-frame approach factor is applied to a frame of length `dt`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interpolation {
    /// Close the same fraction every frame regardless of frame length.
    /// Morph speed then depends on the display refresh rate.
    PerFrame,
    /// Scale the factor so that one frame at `reference_hz` closes exactly
    /// the nominal fraction: `alpha = 1 - (1 - f)^(dt * hz)`.
    TimeScaled { reference_hz: f32 },
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation::TimeScaled {
            reference_hz: REFERENCE_HZ,
        }
    }
}

impl Interpolation {
    /// Number of reference frames `dt_sec` is worth.
    #[inline]
    pub fn frames(self, dt_sec: f32) -> f32 {
        match self {
            Interpolation::PerFrame => 1.0,
            Interpolation::TimeScaled { reference_hz } => (dt_sec * reference_hz).max(0.0),
        }
    }

    #[inline]
    pub fn alpha(self, factor: f32, dt_sec: f32) -> f32 {
        let factor = factor.clamp(0.0, 1.0);
        match self {
            Interpolation::PerFrame => factor,
            Interpolation::TimeScaled { .. } => 1.0 - (1.0 - factor).powf(self.frames(dt_sec)),
        }
    }
}

/// A value that only ever approaches its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follow {
    current: Vec3,
    target: Vec3,
}

impl Follow {
    pub const fn new(value: Vec3) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    #[inline]
    pub fn current(&self) -> Vec3 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    #[inline]
    pub fn step(&mut self, alpha: f32) {
        self.current += (self.target - self.current) * alpha;
    }
}

/// Idle spin, pointer tilt and breathing.
///
/// The spin accumulates separately from the tilt so the pointer damping does
/// not cancel the idle rotation.
#[derive(Clone, Debug, Default)]
pub struct AmbientMotion {
    spin: f32,
    tilt: Vec2,
    pointer_target: Vec2,
    elapsed: f32,
}

impl AmbientMotion {
    /// `recentered` is the pointer in pixels relative to the viewport centre.
    pub fn set_pointer(&mut self, recentered: Vec2) {
        // Vertical pointer motion tilts about X, horizontal about Y.
        self.pointer_target = Vec2::new(recentered.y, recentered.x) * POINTER_TILT_PER_PX;
    }

    pub fn pointer_target(&self) -> Vec2 {
        self.pointer_target
    }

    pub fn step(&mut self, dt_sec: f32, interpolation: Interpolation) {
        self.elapsed += dt_sec.max(0.0);
        self.spin += IDLE_SPIN_PER_FRAME * interpolation.frames(dt_sec);
        let alpha = interpolation.alpha(ROTATION_DAMPING, dt_sec);
        self.tilt += (self.pointer_target - self.tilt) * alpha;
    }

    /// Euler angles (XYZ) contributed by ambient motion.
    pub fn rotation(&self) -> Vec3 {
        Vec3::new(self.tilt.x, self.spin + self.tilt.y, 0.0)
    }

    pub fn scale(&self) -> f32 {
        1.0 + BREATH_AMPLITUDE * (self.elapsed * BREATH_RATE).sin()
    }
}
