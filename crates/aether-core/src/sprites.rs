//! Buffer layouts for the point sprites, shared by both frontends.
//!
//! Must stay in sync with `shaders/points.wgsl`.

use crate::scene::FieldScene;
use glam::{Mat4, Vec3, Vec4};

/// Unit quad as two triangles, corners in `[-0.5, 0.5]`.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    /// rgb tint, a = opacity
    pub light: [f32; 4],
    pub point_size: f32,
    pub _pad: [f32; 3],
}

impl SpriteUniforms {
    pub fn from_scene(scene: &FieldScene) -> Self {
        let camera = scene.camera();
        let (right, up) = billboard_axes(camera.view_matrix());
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: scene.model_matrix().to_cols_array_2d(),
            camera_right: right.to_array(),
            camera_up: up.to_array(),
            light: scene.light().extend(scene.config().opacity).to_array(),
            point_size: scene.config().point_size,
            _pad: [0.0; 3],
        }
    }
}

/// World-space right and up vectors of a view matrix (its first two rows).
pub fn billboard_axes(view: Mat4) -> (Vec4, Vec4) {
    let right = Vec4::new(view.x_axis.x, view.y_axis.x, view.z_axis.x, 0.0);
    let up = Vec4::new(view.x_axis.y, view.y_axis.y, view.z_axis.y, 0.0);
    (right, up)
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

pub const POINT_INSTANCE_STRIDE: u64 = std::mem::size_of::<PointInstance>() as u64;

/// Refills `out` with one instance per point, reusing its allocation.
/// The sphere wobble is added here so the morph state stays on its targets.
pub fn pack_instances(scene: &FieldScene, out: &mut Vec<PointInstance>) {
    let field = scene.field();
    let wobble = scene.sphere_wobble();
    let basis = scene.targets().phase_basis();
    out.clear();
    out.extend(
        field
            .positions()
            .iter()
            .zip(field.colors())
            .zip(basis)
            .map(|((p, c), b)| {
                let offset = wobble.map_or(0.0, |w| w.offset(*b));
                PointInstance {
                    position: (*p + Vec3::splat(offset)).to_array(),
                    size: 1.0,
                    color: c.extend(1.0).to_array(),
                }
            }),
    );
}
