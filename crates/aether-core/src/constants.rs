use glam::Vec3;

// Shared visual tuning constants used by both web and native frontends.

// Point field
pub const DEFAULT_PARTICLE_COUNT: usize = 4000;
pub const MIN_PARTICLE_COUNT: usize = 2000;
pub const MAX_PARTICLE_COUNT: usize = 4000;
pub const DEFAULT_SEED: u64 = 42;

// Sphere
pub const SPHERE_RADIUS: f32 = 20.0;
pub const SPHERE_NOISE: f32 = 0.5; // drawn wobble amplitude while the sphere is active
pub const SPHERE_NOISE_RATE: f32 = 0.6; // radians per second

// Torus
pub const TORUS_MAJOR_RADIUS: f32 = 14.0;
pub const TORUS_MINOR_RADIUS: f32 = 5.0;
pub const TORUS_TWIST: f32 = 2.0; // minor turns per major turn

// Wave grid
pub const WAVE_COLUMNS: usize = 100;
pub const WAVE_SPACING: f32 = 0.8;
pub const WAVE_AMPLITUDE: f32 = 5.0;
pub const WAVE_FREQUENCY: f32 = 0.2;

// Ground plane
pub const PLANE_EXTENT: f32 = 60.0;
pub const PLANE_THICKNESS: f32 = 1.2;
pub const PLANE_HEIGHT: f32 = -6.0;

// Morph: fraction of the remaining gap closed per reference frame
pub const MORPH_FACTOR: f32 = 0.03;
pub const REFERENCE_HZ: f32 = 60.0;

// Ambient motion
pub const IDLE_SPIN_PER_FRAME: f32 = 0.001; // radians
pub const POINTER_TILT_PER_PX: f32 = 0.000_025; // radians per recentered pixel
pub const ROTATION_DAMPING: f32 = 0.05;
pub const BREATH_AMPLITUDE: f32 = 0.03;
pub const BREATH_RATE: f32 = 0.8; // radians per second

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 30.0);
pub const CAMERA_FOLLOW: f32 = 0.05; // stands in for the one second scrub lag
pub const LIGHT_FOLLOW: f32 = 0.05;

// Sprites
pub const POINT_SIZE: f32 = 0.15;
pub const POINT_OPACITY: f32 = 0.8;

// Indigo, purple, cyan
pub const PALETTE: [Vec3; 3] = [
    Vec3::new(0.310, 0.275, 0.898),
    Vec3::new(0.545, 0.361, 0.965),
    Vec3::new(0.024, 0.714, 0.831),
];

pub const LIGHT_NEUTRAL: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const LIGHT_PINK: Vec3 = Vec3::new(1.0, 0.0, 0.3);

// Page layout
pub const SECTION_COUNT: usize = 4;
