//! The owned scene: point field, target sets, camera and light.
//!
//! A `FieldScene` is created once per mounted surface and stepped by exactly
//! one frame loop. The scroll controller only pushes targets into it (camera
//! eye, light colour, field rotation, active shape); the per-point buffers are
//! written by [`FieldScene::advance`] alone.

use crate::camera::CameraRig;
use crate::config::SceneConfig;
use crate::constants::LIGHT_NEUTRAL;
use crate::field::{palette_colors, PointField};
use crate::motion::{AmbientMotion, Follow};
use crate::shapes::{ShapeId, ShapeTargets};
use crate::timeline::TimelineState;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Per-frame bookkeeping returned by [`FieldScene::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub elapsed: f32,
    pub morph_alpha: f32,
}

/// Per-point sphere wobble for the current frame, evaluated as
/// `sin(phase + i)` from the precomputed `(sin i, cos i)` table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereWobble {
    pub sin_phase: f32,
    pub cos_phase: f32,
    pub amplitude: f32,
}

impl SphereWobble {
    /// Offset along every axis for a point whose basis is `(sin i, cos i)`.
    #[inline]
    pub fn offset(&self, basis: Vec2) -> f32 {
        self.amplitude * (self.sin_phase * basis.y + self.cos_phase * basis.x)
    }
}

pub struct FieldScene {
    config: SceneConfig,
    field: PointField,
    targets: ShapeTargets,
    active: ShapeId,
    motion: AmbientMotion,
    camera: CameraRig,
    light: Follow,
    scroll_rotation: Follow,
    // 0..1, eases toward 1 while the sphere is active
    wobble_weight: f32,
    elapsed: f32,
    frames: u64,
    disposed: bool,
}

impl FieldScene {
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let targets = ShapeTargets::generate(&config.field, &mut rng);
        let colors = palette_colors(config.field.count, &config.field.palette, &mut rng);
        let field = PointField::new(targets.get(config.initial_shape).to_vec(), colors);
        log::info!(
            "[scene] points={} shape={} interpolation={:?}",
            field.len(),
            config.initial_shape,
            config.interpolation
        );
        Self {
            active: config.initial_shape,
            config,
            field,
            targets,
            motion: AmbientMotion::default(),
            camera: CameraRig::default(),
            light: Follow::new(LIGHT_NEUTRAL),
            scroll_rotation: Follow::new(Vec3::ZERO),
            wobble_weight: 0.0,
            elapsed: 0.0,
            frames: 0,
            disposed: false,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }

    pub fn targets(&self) -> &ShapeTargets {
        &self.targets
    }

    pub fn active_shape(&self) -> ShapeId {
        self.active
    }

    /// Takes effect on the next frame; the morph itself is the per-frame
    /// interpolation, nothing is queued.
    pub fn set_active_shape(&mut self, shape: ShapeId) {
        if self.active != shape {
            log::debug!("[scene] morph {} -> {}", self.active, shape);
        }
        self.active = shape;
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn light(&self) -> Vec3 {
        self.light.current()
    }

    pub fn set_pointer(&mut self, recentered: Vec2) {
        self.motion.set_pointer(recentered);
    }

    /// Only the camera aspect changes; the field is left alone.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn push_timeline(&mut self, state: TimelineState) {
        self.camera.set_eye_target(state.camera_eye);
        self.light.set_target(state.light_color);
        self.scroll_rotation.set_target(state.field_rotation);
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Returns `true` the first time only.
    pub fn dispose(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.disposed = true;
        log::info!("[scene] disposed after {} frames", self.frames);
        true
    }

    /// One frame: ambient motion, then followers, then the per-point morph.
    /// Returns `None` once disposed.
    pub fn advance(&mut self, dt_sec: f32) -> Option<FrameStats> {
        if self.disposed {
            return None;
        }
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let interp = self.config.interpolation;
        self.elapsed += dt;
        self.frames += 1;

        self.motion.step(dt, interp);
        self.camera.step(interp.alpha(self.config.camera_follow, dt));
        self.light.step(interp.alpha(self.config.light_follow, dt));
        self.scroll_rotation
            .step(interp.alpha(self.config.camera_follow, dt));

        let alpha = interp.alpha(self.config.field.morph_factor, dt);
        self.field.step_toward(self.targets.get(self.active), alpha);
        let wobble_goal = if self.active == ShapeId::Sphere { 1.0 } else { 0.0 };
        self.wobble_weight += (wobble_goal - self.wobble_weight) * alpha;

        Some(FrameStats {
            frame: self.frames,
            elapsed: self.elapsed,
            morph_alpha: alpha,
        })
    }

    /// Display-only wobble on top of the morph state; `None` once it has
    /// faded out. The point positions themselves converge on the targets.
    pub fn sphere_wobble(&self) -> Option<SphereWobble> {
        let amplitude = self.config.field.sphere_noise * self.wobble_weight;
        if amplitude.abs() < 1e-6 {
            return None;
        }
        let phase = self.elapsed * self.config.field.sphere_noise_rate;
        let (sin_phase, cos_phase) = phase.sin_cos();
        Some(SphereWobble {
            sin_phase,
            cos_phase,
            amplitude,
        })
    }

    /// Euler angles (XYZ) of the whole field.
    pub fn rotation(&self) -> Vec3 {
        self.motion.rotation() + self.scroll_rotation.current()
    }

    pub fn scale(&self) -> f32 {
        self.motion.scale()
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation();
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale()),
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            Vec3::ZERO,
        )
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.view_proj()
    }
}
