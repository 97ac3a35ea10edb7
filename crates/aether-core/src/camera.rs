//! Camera description shared by the web and native frontends.

use crate::constants::*;
use crate::motion::Follow;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera whose eye chases a target position.
#[derive(Clone, Debug)]
pub struct CameraRig {
    eye: Follow,
    pub look_at: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: Follow::new(CAMERA_START),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl CameraRig {
    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye.current()
    }

    #[inline]
    pub fn eye_target(&self) -> Vec3 {
        self.eye.target()
    }

    pub fn set_eye_target(&mut self, eye: Vec3) {
        self.eye.set_target(eye);
    }

    pub fn step(&mut self, alpha: f32) {
        self.eye.step(alpha);
    }

    /// Zero-sized viewports are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.look_at, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
