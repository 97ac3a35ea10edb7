// Host-side tests for the analytic shape generators and target sets.

use aether_core::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn params(count: usize) -> FieldParams {
    FieldParams {
        count,
        ..FieldParams::default()
    }
}

#[test]
fn every_shape_has_exactly_n_targets() {
    for n in [MIN_PARTICLE_COUNT, 3000, MAX_PARTICLE_COUNT] {
        let mut rng = StdRng::seed_from_u64(7);
        let targets = ShapeTargets::generate(&params(n), &mut rng);
        assert_eq!(targets.len(), n);
        for shape in ShapeId::ALL {
            assert_eq!(targets.get(shape).len(), n, "shape {} at n={}", shape, n);
        }
        assert_eq!(targets.phase_basis().len(), n);
    }
}

#[test]
fn phase_basis_holds_sin_and_cos_of_the_index() {
    let mut rng = StdRng::seed_from_u64(7);
    let targets = ShapeTargets::generate(&params(MIN_PARTICLE_COUNT), &mut rng);
    for i in [0usize, 1, 250, MIN_PARTICLE_COUNT - 1] {
        let b = targets.phase_basis()[i];
        assert!((b.x - (i as f32).sin()).abs() < 1e-6, "index {}", i);
        assert!((b.y - (i as f32).cos()).abs() < 1e-6, "index {}", i);
    }
}

#[test]
fn surface_sphere_variant_also_has_n_targets() {
    let mut p = params(2500);
    p.sphere_style = SphereStyle::Surface;
    let mut rng = StdRng::seed_from_u64(1);
    let targets = ShapeTargets::generate(&p, &mut rng);
    assert_eq!(targets.get(ShapeId::Sphere).len(), 2500);
}

#[test]
fn sphere_volume_stays_inside_radius() {
    let mut rng = StdRng::seed_from_u64(3);
    let pts = sphere_volume(4000, 20.0, &mut rng);
    assert!(pts.iter().all(|p| p.length() <= 20.0 + 1e-3));
    // Cube-root radius keeps density roughly uniform: about half the points
    // sit outside r = 20 * 0.5^(1/3).
    let r_half = 20.0 * 0.5_f32.cbrt();
    let outside = pts.iter().filter(|p| p.length() > r_half).count();
    assert!(outside > 1700 && outside < 2300, "outside={}", outside);
}

#[test]
fn sphere_surface_points_lie_on_the_radius() {
    let pts = sphere_surface(2000, 12.0);
    for p in &pts {
        assert!((p.length() - 12.0).abs() < 1e-3, "len={}", p.length());
    }
    // Spiral covers both poles.
    let min_y = pts.iter().map(|p| p.y).fold(f32::MAX, f32::min);
    let max_y = pts.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    assert!(min_y < -11.9 && max_y > 11.9);
}

#[test]
fn torus_points_sit_on_the_tube() {
    for twist in [0.0, 2.0] {
        let pts = torus(2000, 14.0, 5.0, twist);
        for p in &pts {
            let ring = (p.x * p.x + p.y * p.y).sqrt() - 14.0;
            let tube = (ring * ring + p.z * p.z).sqrt();
            assert!((tube - 5.0).abs() < 1e-3, "tube={}", tube);
        }
    }
}

#[test]
fn wave_grid_is_bounded_by_its_amplitude() {
    let pts = wave_grid(4000, 100, 0.8, 5.0, 0.2);
    assert_eq!(pts.len(), 4000);
    assert!(pts.iter().all(|p| p.y.abs() <= 10.0 + 1e-4));
    // Row-major grid: neighbours along a row differ only in x.
    assert!((pts[1].x - pts[0].x - 0.8).abs() < 1e-5);
    assert_eq!(pts[1].z, pts[0].z);
    assert!((pts[100].z - pts[0].z - 0.8).abs() < 1e-5);
}

#[test]
fn wave_grid_handles_partial_last_row() {
    let pts = wave_grid(2050, 100, 0.8, 5.0, 0.2);
    assert_eq!(pts.len(), 2050);
}

#[test]
fn plane_slab_respects_thickness_and_extent() {
    let mut rng = StdRng::seed_from_u64(9);
    let pts = plane_slab(3000, 60.0, 1.2, -6.0, &mut rng);
    assert!(pts.iter().all(|p| (p.y + 6.0).abs() <= 0.6 + 1e-5));
    assert!(pts.iter().all(|p| p.x.abs() <= 30.0 && p.z.abs() <= 30.0));
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let a = ShapeTargets::generate(&params(2000), &mut StdRng::seed_from_u64(42));
    let b = ShapeTargets::generate(&params(2000), &mut StdRng::seed_from_u64(42));
    for shape in ShapeId::ALL {
        assert_eq!(a.get(shape), b.get(shape));
    }
    let c = ShapeTargets::generate(&params(2000), &mut StdRng::seed_from_u64(43));
    assert_ne!(a.get(ShapeId::Sphere), c.get(ShapeId::Sphere));
}

#[test]
fn shape_ids_parse_and_print() {
    for shape in ShapeId::ALL {
        assert_eq!(shape.as_str().parse::<ShapeId>().unwrap(), shape);
        assert_eq!(shape.to_string(), shape.as_str());
    }
    assert_eq!(" Torus ".parse::<ShapeId>().unwrap(), ShapeId::Torus);
    assert_eq!(
        "cube".parse::<ShapeId>(),
        Err(ConfigError::UnknownShape("cube".to_string()))
    );
}

#[test]
fn palette_colors_stay_inside_palette_hull() {
    let mut rng = StdRng::seed_from_u64(5);
    let colors = palette_colors(2000, &PALETTE, &mut rng);
    assert_eq!(colors.len(), 2000);
    let lo = PALETTE[0].min(PALETTE[1]).min(PALETTE[2]);
    let hi = PALETTE[0].max(PALETTE[1]).max(PALETTE[2]);
    for c in &colors {
        assert!(c.cmpge(lo - Vec3::splat(1e-5)).all() && c.cmple(hi + Vec3::splat(1e-5)).all());
    }
}
