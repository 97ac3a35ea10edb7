//! Scroll-scrubbed keyframe timeline and the discrete shape cues on it.
//!
//! Everything here is a pure function of scroll progress, so scrolling back
//! up retraces exactly the same path.

use crate::constants::*;
use crate::error::ConfigError;
use crate::shapes::ShapeId;
use glam::Vec3;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Scroll-driven parameters pushed into the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineState {
    pub camera_eye: Vec3,
    pub light_color: Vec3,
    pub field_rotation: Vec3,
}

impl TimelineState {
    pub fn lerp(&self, other: &TimelineState, t: f32) -> TimelineState {
        TimelineState {
            camera_eye: self.camera_eye.lerp(other.camera_eye, t),
            light_color: self.light_color.lerp(other.light_color, t),
            field_rotation: self.field_rotation.lerp(other.field_rotation, t),
        }
    }
}

/// Keyframes at equal spacing; phase `k` runs from keyframe `k` to `k + 1`.
#[derive(Clone, Debug)]
pub struct ScrollTimeline {
    keyframes: Vec<TimelineState>,
}

impl Default for ScrollTimeline {
    /// Intro, about, projects, contact.
    fn default() -> Self {
        Self {
            keyframes: vec![
                TimelineState {
                    camera_eye: CAMERA_START,
                    light_color: LIGHT_NEUTRAL,
                    field_rotation: Vec3::ZERO,
                },
                TimelineState {
                    camera_eye: Vec3::new(0.0, 0.0, 6.0),
                    light_color: LIGHT_PINK,
                    field_rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
                },
                TimelineState {
                    camera_eye: Vec3::new(2.0, 0.0, 8.0),
                    light_color: PALETTE[1],
                    field_rotation: Vec3::new(0.0, FRAC_PI_2, PI),
                },
                TimelineState {
                    camera_eye: Vec3::new(0.0, -2.0, 10.0),
                    light_color: PALETTE[2],
                    field_rotation: Vec3::new(-FRAC_PI_4, FRAC_PI_2, PI),
                },
            ],
        }
    }
}

impl ScrollTimeline {
    pub fn new(keyframes: Vec<TimelineState>) -> Result<Self, ConfigError> {
        if keyframes.len() < 2 {
            return Err(ConfigError::TimelineTooShort(keyframes.len()));
        }
        Ok(Self { keyframes })
    }

    #[inline]
    pub fn phase_count(&self) -> usize {
        self.keyframes.len() - 1
    }

    pub fn keyframes(&self) -> &[TimelineState] {
        &self.keyframes
    }

    /// Phase index and the local progress within it.
    pub fn phase_at(&self, progress: f32) -> (usize, f32) {
        let phases = self.phase_count();
        let scaled = progress.clamp(0.0, 1.0) * phases as f32;
        let phase = (scaled.floor() as usize).min(phases - 1);
        (phase, scaled - phase as f32)
    }

    pub fn sample(&self, progress: f32) -> TimelineState {
        let (phase, local) = self.phase_at(progress);
        self.keyframes[phase].lerp(&self.keyframes[phase + 1], local)
    }
}

/// A shape switch placed on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeCue {
    pub at: f32,
    pub before: ShapeId,
    pub after: ShapeId,
}

pub fn default_cues() -> Vec<ShapeCue> {
    vec![
        ShapeCue {
            at: 0.0,
            before: ShapeId::Sphere,
            after: ShapeId::Torus,
        },
        ShapeCue {
            at: 2.0 / 3.0,
            before: ShapeId::Torus,
            after: ShapeId::Plane,
        },
    ]
}

/// Remembers the last observed progress and reports every cue crossed since.
///
/// A cue at `at` counts as passed once progress is strictly greater than
/// `at`. Crossing forward yields `after`, crossing backward yields `before`,
/// one entry per cue in the order they were traversed.
#[derive(Clone, Debug)]
pub struct CueTracker {
    cues: Vec<ShapeCue>,
    last: f32,
}

impl Default for CueTracker {
    fn default() -> Self {
        Self::new(default_cues())
    }
}

impl CueTracker {
    pub fn new(mut cues: Vec<ShapeCue>) -> Self {
        cues.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { cues, last: 0.0 }
    }

    pub fn cues(&self) -> &[ShapeCue] {
        &self.cues
    }

    pub fn last_progress(&self) -> f32 {
        self.last
    }

    /// Shape implied by `progress` alone.
    pub fn shape_at(&self, progress: f32, base: ShapeId) -> ShapeId {
        self.cues
            .iter()
            .rev()
            .find(|c| progress > c.at)
            .map(|c| c.after)
            .unwrap_or(base)
    }

    pub fn advance(&mut self, progress: f32) -> SmallVec<[ShapeId; 4]> {
        let prev = self.last;
        self.last = progress;
        let mut out = SmallVec::new();
        if progress > prev {
            out.extend(
                self.cues
                    .iter()
                    .filter(|c| prev <= c.at && c.at < progress)
                    .map(|c| c.after),
            );
        } else if progress < prev {
            out.extend(
                self.cues
                    .iter()
                    .rev()
                    .filter(|c| progress <= c.at && c.at < prev)
                    .map(|c| c.before),
            );
        }
        out
    }
}
