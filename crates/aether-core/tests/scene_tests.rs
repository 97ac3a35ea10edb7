// Host-side tests for the scene: morph convergence, idempotence, teardown.
// Frames are simulated offline; no display is involved.

use aether_core::*;
use glam::{Vec2, Vec3};

const FRAME: f32 = 1.0 / 60.0;

fn scene_with(count: usize, interpolation: Interpolation) -> FieldScene {
    let mut config = SceneConfig::default();
    config.field.count = count;
    config.interpolation = interpolation;
    FieldScene::new(config)
}

fn run(scene: &mut FieldScene, frames: usize) {
    for _ in 0..frames {
        scene.advance(FRAME);
    }
}

#[test]
fn field_starts_on_the_initial_shape() {
    let scene = scene_with(2000, Interpolation::PerFrame);
    assert_eq!(scene.active_shape(), ShapeId::Sphere);
    assert_eq!(scene.field().len(), 2000);
    assert_eq!(scene.field().colors().len(), 2000);
    assert_eq!(scene.field().positions(), scene.targets().get(ShapeId::Sphere));
}

#[test]
fn morph_to_torus_settles_within_two_hundred_frames() {
    let mut scene = scene_with(2000, Interpolation::PerFrame);
    scene.set_active_shape(ShapeId::Torus);
    run(&mut scene, 200);
    let gap = scene
        .field()
        .max_axis_distance(scene.targets().get(ShapeId::Torus));
    assert!(
        gap < 0.01 * TORUS_MAJOR_RADIUS,
        "max per-axis gap {} after 200 frames",
        gap
    );
}

#[test]
fn morph_converges_geometrically() {
    let mut config = SceneConfig::default();
    config.field.count = 2000;
    config.field.morph_factor = 0.05;
    config.interpolation = Interpolation::PerFrame;
    let mut scene = FieldScene::new(config);
    scene.set_active_shape(ShapeId::Plane);
    let start_gap = scene
        .field()
        .max_axis_distance(scene.targets().get(ShapeId::Plane));
    assert!(start_gap > 1.0);

    run(&mut scene, 150);
    let gap = scene
        .field()
        .max_axis_distance(scene.targets().get(ShapeId::Plane));
    assert!(gap < 1e-3 * start_gap, "gap {} from {}", gap, start_gap);
}

#[test]
fn morph_back_to_sphere_settles_on_its_targets() {
    let mut scene = FieldScene::new(SceneConfig {
        field: FieldParams {
            count: 2000,
            ..FieldParams::default()
        },
        ..SceneConfig::default()
    });
    assert!(scene.config().field.sphere_noise > 0.0);
    scene.set_active_shape(ShapeId::Torus);
    run(&mut scene, 300);
    scene.set_active_shape(ShapeId::Sphere);
    run(&mut scene, 1000);
    let gap = scene
        .field()
        .max_axis_distance(scene.targets().get(ShapeId::Sphere));
    assert!(gap < 1e-3 * SPHERE_RADIUS, "max per-axis gap {}", gap);
}

#[test]
fn each_point_heads_for_its_own_index() {
    let mut scene = scene_with(2000, Interpolation::PerFrame);
    scene.set_active_shape(ShapeId::Wave);
    let before = scene.field().positions().to_vec();
    scene.advance(FRAME);
    let targets = scene.targets().get(ShapeId::Wave);
    let alpha = MORPH_FACTOR;
    for (i, p) in scene.field().positions().iter().enumerate() {
        let expected = before[i] + (targets[i] - before[i]) * alpha;
        assert!((*p - expected).abs().max_element() < 1e-4, "index {}", i);
    }
}

#[test]
fn repeated_set_active_shape_changes_nothing() {
    let mut once = scene_with(2000, Interpolation::PerFrame);
    let mut twice = scene_with(2000, Interpolation::PerFrame);

    once.set_active_shape(ShapeId::Torus);
    twice.set_active_shape(ShapeId::Torus);
    run(&mut once, 10);
    run(&mut twice, 10);
    twice.set_active_shape(ShapeId::Torus);
    twice.set_active_shape(ShapeId::Torus);
    run(&mut once, 10);
    run(&mut twice, 10);

    assert_eq!(once.field().positions(), twice.field().positions());
}

#[test]
fn targets_are_not_reordered_by_switching() {
    let mut scene = scene_with(2000, Interpolation::PerFrame);
    let snapshot: Vec<Vec<Vec3>> = ShapeId::ALL
        .iter()
        .map(|&s| scene.targets().get(s).to_vec())
        .collect();
    for shape in [ShapeId::Torus, ShapeId::Plane, ShapeId::Sphere, ShapeId::Wave] {
        scene.set_active_shape(shape);
        run(&mut scene, 5);
    }
    for (i, &shape) in ShapeId::ALL.iter().enumerate() {
        assert_eq!(scene.targets().get(shape), snapshot[i].as_slice());
    }
}

#[test]
fn time_scaled_matches_per_frame_at_reference_rate() {
    let mut per_frame = scene_with(2000, Interpolation::PerFrame);
    let mut scaled = scene_with(2000, Interpolation::default());
    per_frame.set_active_shape(ShapeId::Torus);
    scaled.set_active_shape(ShapeId::Torus);
    run(&mut per_frame, 60);
    run(&mut scaled, 60);
    for (a, b) in per_frame
        .field()
        .positions()
        .iter()
        .zip(scaled.field().positions())
    {
        assert!((*a - *b).abs().max_element() < 1e-3);
    }
}

#[test]
fn time_scaled_morph_is_refresh_rate_independent() {
    let mut at_60 = scene_with(2000, Interpolation::default());
    let mut at_120 = scene_with(2000, Interpolation::default());
    at_60.set_active_shape(ShapeId::Torus);
    at_120.set_active_shape(ShapeId::Torus);
    for _ in 0..60 {
        at_60.advance(1.0 / 60.0);
    }
    for _ in 0..120 {
        at_120.advance(1.0 / 120.0);
    }
    let targets = at_60.targets().get(ShapeId::Torus).to_vec();
    let g60 = at_60.field().max_axis_distance(&targets);
    let g120 = at_120.field().max_axis_distance(&targets);
    assert!((g60 - g120).abs() < 1e-2, "{} vs {}", g60, g120);
}

#[test]
fn per_frame_alpha_ignores_frame_length() {
    let i = Interpolation::PerFrame;
    assert_eq!(i.alpha(0.03, 1.0 / 30.0), 0.03);
    assert_eq!(i.alpha(0.03, 1.0 / 144.0), 0.03);
    let t = Interpolation::default();
    assert!((t.alpha(0.03, 1.0 / 60.0) - 0.03).abs() < 1e-5);
    assert!(t.alpha(0.03, 1.0 / 30.0) > 0.03);
    assert_eq!(t.alpha(0.03, 0.0), 0.0);
}

#[test]
fn ambient_rotation_is_visible_in_the_same_frame() {
    let mut scene = scene_with(2000, Interpolation::PerFrame);
    assert_eq!(scene.rotation(), Vec3::ZERO);
    scene.advance(FRAME);
    assert!((scene.rotation().y - IDLE_SPIN_PER_FRAME).abs() < 1e-6);
    let m = scene.model_matrix();
    assert_ne!(m, glam::Mat4::IDENTITY);
}

#[test]
fn pointer_pulls_tilt_with_damping() {
    let mut scene = scene_with(2000, Interpolation::PerFrame);
    scene.set_pointer(Vec2::new(0.0, 400.0));
    scene.advance(FRAME);
    let target = 400.0 * POINTER_TILT_PER_PX;
    let first = scene.rotation().x;
    assert!((first - target * ROTATION_DAMPING).abs() < 1e-7);
    run(&mut scene, 200);
    assert!((scene.rotation().x - target).abs() < 1e-5);
}

#[test]
fn breathing_scale_stays_close_to_one() {
    let mut scene = scene_with(2000, Interpolation::default());
    for _ in 0..600 {
        scene.advance(FRAME);
        let s = scene.scale();
        assert!((s - 1.0).abs() <= BREATH_AMPLITUDE + 1e-6);
    }
}

#[test]
fn camera_chases_pushed_target_without_snapping() {
    let mut scene = scene_with(2000, Interpolation::PerFrame);
    let timeline = ScrollTimeline::default();
    let state = timeline.sample(1.0 / 3.0);
    scene.push_timeline(state);
    assert_eq!(scene.camera().eye(), CAMERA_START);
    scene.advance(FRAME);
    let expected_z = CAMERA_START.z + (state.camera_eye.z - CAMERA_START.z) * CAMERA_FOLLOW;
    assert!((scene.camera().eye().z - expected_z).abs() < 1e-4);
    run(&mut scene, 400);
    assert!((scene.camera().eye() - state.camera_eye).length() < 1e-3);
    assert!((scene.light() - state.light_color).length() < 1e-3);
}

#[test]
fn resize_only_touches_camera_aspect() {
    let mut scene = scene_with(2000, Interpolation::PerFrame);
    run(&mut scene, 3);
    let positions = scene.field().positions().to_vec();
    let frames = scene.frame_count();
    scene.resize(1200, 600);
    assert!((scene.camera().aspect - 2.0).abs() < 1e-6);
    scene.resize(0, 600);
    assert!((scene.camera().aspect - 2.0).abs() < 1e-6);
    assert_eq!(scene.field().positions(), positions.as_slice());
    assert_eq!(scene.frame_count(), frames);
}

#[test]
fn dispose_is_idempotent_and_stops_frames() {
    let mut scene = scene_with(2000, Interpolation::PerFrame);
    run(&mut scene, 5);
    assert_eq!(scene.frame_count(), 5);
    assert!(scene.dispose());
    assert!(!scene.dispose());
    assert!(scene.advance(FRAME).is_none());
    assert!(scene.advance(FRAME).is_none());
    assert_eq!(scene.frame_count(), 5);
}

#[test]
fn non_finite_frame_time_is_treated_as_zero() {
    let mut scene = scene_with(2000, Interpolation::default());
    let before = scene.field().positions().to_vec();
    scene.set_active_shape(ShapeId::Torus);
    let stats = scene.advance(f32::NAN).unwrap();
    assert_eq!(stats.morph_alpha, 0.0);
    assert_eq!(scene.field().positions(), before.as_slice());
}

#[test]
fn handle_dispose_is_shared_and_guarded() {
    let handle = SceneHandle::new(scene_with(2000, Interpolation::PerFrame));
    let other = handle.clone();
    handle.set_active_shape(ShapeId::Plane);
    assert_eq!(other.active_shape(), ShapeId::Plane);
    assert!(other.dispose());
    assert!(!handle.dispose());
    assert!(handle.is_disposed());
    assert!(handle.with_scene_mut(|s| s.advance(FRAME)).is_none());
}
