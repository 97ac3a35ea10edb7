//! Runtime parameters for a mounted scene.
//!
//! Defaults come from `constants.rs`. Frontends may override a handful of
//! keys (the web build reads them from `data-*` attributes on the canvas).

use crate::constants::*;
use crate::error::ConfigError;
use crate::motion::Interpolation;
use crate::shapes::{ShapeId, SphereStyle};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub sphere_style: SphereStyle,
    pub sphere_radius: f32,
    pub sphere_noise: f32,
    pub sphere_noise_rate: f32,
    pub torus_major: f32,
    pub torus_minor: f32,
    pub torus_twist: f32,
    pub wave_columns: usize,
    pub wave_spacing: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub plane_extent: f32,
    pub plane_thickness: f32,
    pub plane_height: f32,
    pub palette: [Vec3; 3],
    pub morph_factor: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            sphere_style: SphereStyle::Volume,
            sphere_radius: SPHERE_RADIUS,
            sphere_noise: SPHERE_NOISE,
            sphere_noise_rate: SPHERE_NOISE_RATE,
            torus_major: TORUS_MAJOR_RADIUS,
            torus_minor: TORUS_MINOR_RADIUS,
            torus_twist: TORUS_TWIST,
            wave_columns: WAVE_COLUMNS,
            wave_spacing: WAVE_SPACING,
            wave_amplitude: WAVE_AMPLITUDE,
            wave_frequency: WAVE_FREQUENCY,
            plane_extent: PLANE_EXTENT,
            plane_thickness: PLANE_THICKNESS,
            plane_height: PLANE_HEIGHT,
            palette: PALETTE,
            morph_factor: MORPH_FACTOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub field: FieldParams,
    pub seed: u64,
    pub initial_shape: ShapeId,
    pub interpolation: Interpolation,
    pub camera_follow: f32,
    pub light_follow: f32,
    pub point_size: f32,
    pub opacity: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            field: FieldParams::default(),
            seed: DEFAULT_SEED,
            initial_shape: ShapeId::Sphere,
            interpolation: Interpolation::default(),
            camera_follow: CAMERA_FOLLOW,
            light_follow: LIGHT_FOLLOW,
            point_size: POINT_SIZE,
            opacity: POINT_OPACITY,
        }
    }
}

impl SceneConfig {
    /// Recognised keys: `particles`, `seed`, `shape`, `interpolation`
    /// (`frame` | `time`), `sphere` (`volume` | `surface`).
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "particles" => {
                let count: usize = value.trim().parse().map_err(|_| invalid())?;
                check_count(count)?;
                self.field.count = count;
            }
            "seed" => self.seed = value.trim().parse().map_err(|_| invalid())?,
            "shape" => self.initial_shape = value.parse()?,
            "interpolation" => {
                self.interpolation = match value.trim() {
                    "frame" => Interpolation::PerFrame,
                    "time" => Interpolation::default(),
                    _ => return Err(invalid()),
                }
            }
            "sphere" => {
                self.field.sphere_style = match value.trim() {
                    "volume" => SphereStyle::Volume,
                    "surface" => SphereStyle::Surface,
                    _ => return Err(invalid()),
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_count(self.field.count)
    }
}

fn check_count(count: usize) -> Result<(), ConfigError> {
    if (MIN_PARTICLE_COUNT..=MAX_PARTICLE_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(ConfigError::ParticleCount(count))
    }
}
