//! Analytic shape generators and the precomputed target sets.
//!
//! Every generator is a pure function of the point count (plus an RNG for the
//! jittered variants) and returns exactly `n` positions. Index `i` of every set
//! is the destination of point `i`; the sets are never reordered after
//! generation.

use crate::config::FieldParams;
use crate::error::ConfigError;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

const GOLDEN_FRACTION: f32 = 0.618_034;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Sphere,
    Torus,
    Wave,
    Plane,
}

impl ShapeId {
    pub const ALL: [ShapeId; 4] = [ShapeId::Sphere, ShapeId::Torus, ShapeId::Wave, ShapeId::Plane];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeId::Sphere => "sphere",
            ShapeId::Torus => "torus",
            ShapeId::Wave => "wave",
            ShapeId::Plane => "plane",
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" => Ok(ShapeId::Sphere),
            "torus" => Ok(ShapeId::Torus),
            "wave" => Ok(ShapeId::Wave),
            "plane" => Ok(ShapeId::Plane),
            other => Err(ConfigError::UnknownShape(other.to_string())),
        }
    }
}

/// How the sphere target is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SphereStyle {
    /// Uniform density inside the ball.
    #[default]
    Volume,
    /// Golden-angle spiral over the surface.
    Surface,
}

/// Uniform point-in-ball sampling: cube-root radius, uniform direction.
pub fn sphere_volume(n: usize, radius: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..n)
        .map(|_| {
            let r = radius * rng.gen::<f32>().cbrt();
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
        })
        .collect()
}

/// Fibonacci spiral over the sphere surface.
pub fn sphere_surface(n: usize, radius: f32) -> Vec<Vec3> {
    let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
    let inv_n = 1.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f32 + 0.5) * inv_n;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f32;
            Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius
        })
        .collect()
}

/// Parametric torus facing the camera. `twist` couples the minor angle to
/// the major angle, giving a knotted ribbon when non-zero.
pub fn torus(n: usize, major: f32, minor: f32, twist: f32) -> Vec<Vec3> {
    let inv_n = 1.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let u = (i as f32 + 0.5) * inv_n * TAU;
            let v = (i as f32 * GOLDEN_FRACTION).fract() * TAU + twist * u;
            let ring = major + minor * v.cos();
            Vec3::new(ring * u.cos(), ring * u.sin(), minor * v.sin())
        })
        .collect()
}

/// Grid sampled through a sum-of-sines height field.
pub fn wave_grid(
    n: usize,
    columns: usize,
    spacing: f32,
    amplitude: f32,
    frequency: f32,
) -> Vec<Vec3> {
    let columns = columns.max(1);
    let rows = n.div_ceil(columns);
    let half_cols = (columns / 2) as f32;
    let half_rows = (rows / 2) as f32;
    (0..n)
        .map(|i| {
            let x = ((i % columns) as f32 - half_cols) * spacing;
            let z = ((i / columns) as f32 - half_rows) * spacing;
            let y = (x * frequency).sin() * amplitude + (z * frequency).cos() * amplitude;
            Vec3::new(x, y, z)
        })
        .collect()
}

/// Flat horizontal slab with a little thickness jitter.
pub fn plane_slab(
    n: usize,
    extent: f32,
    thickness: f32,
    height: f32,
    rng: &mut impl Rng,
) -> Vec<Vec3> {
    let half = extent * 0.5;
    let half_t = thickness * 0.5;
    (0..n)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..=half),
                height + rng.gen_range(-half_t..=half_t),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}

/// One index-aligned target sequence per shape, all generated up front.
#[derive(Clone, Debug)]
pub struct ShapeTargets {
    sets: [Vec<Vec3>; 4],
    // (sin i, cos i) per index, for the sphere wobble
    phase_basis: Vec<Vec2>,
}

impl ShapeTargets {
    pub fn generate(params: &FieldParams, rng: &mut impl Rng) -> Self {
        let n = params.count;
        let sphere = match params.sphere_style {
            SphereStyle::Volume => sphere_volume(n, params.sphere_radius, rng),
            SphereStyle::Surface => sphere_surface(n, params.sphere_radius),
        };
        let torus = torus(n, params.torus_major, params.torus_minor, params.torus_twist);
        let wave = wave_grid(
            n,
            params.wave_columns,
            params.wave_spacing,
            params.wave_amplitude,
            params.wave_frequency,
        );
        let plane = plane_slab(
            n,
            params.plane_extent,
            params.plane_thickness,
            params.plane_height,
            rng,
        );
        // Order must follow ShapeId::index
        let phase_basis = (0..n)
            .map(|i| {
                let (sin, cos) = (i as f32).sin_cos();
                Vec2::new(sin, cos)
            })
            .collect();
        Self {
            sets: [sphere, torus, wave, plane],
            phase_basis,
        }
    }

    #[inline]
    pub fn get(&self, shape: ShapeId) -> &[Vec3] {
        &self.sets[shape.index()]
    }

    /// `(sin i, cos i)` for every point index, computed once.
    #[inline]
    pub fn phase_basis(&self) -> &[Vec2] {
        &self.phase_basis
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sets[0].len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
