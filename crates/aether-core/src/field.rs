use glam::Vec3;
use rand::Rng;

/// Fixed-length point cloud. Colours are assigned once and never change.
#[derive(Clone, Debug)]
pub struct PointField {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl PointField {
    pub fn new(positions: Vec<Vec3>, colors: Vec<Vec3>) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        Self { positions, colors }
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Move every point `alpha` of the way toward its own target, per axis.
    pub fn step_toward(&mut self, targets: &[Vec3], alpha: f32) {
        for (p, t) in self.positions.iter_mut().zip(targets) {
            *p += (*t - *p) * alpha;
        }
    }

    /// Largest single-axis gap between a point and its target.
    pub fn max_axis_distance(&self, targets: &[Vec3]) -> f32 {
        self.positions
            .iter()
            .zip(targets)
            .map(|(p, t)| (*t - *p).abs().max_element())
            .fold(0.0, f32::max)
    }
}

/// Two random lerps across a three colour palette.
pub fn palette_colors(n: usize, palette: &[Vec3; 3], rng: &mut impl Rng) -> Vec<Vec3> {
    (0..n)
        .map(|_| {
            palette[0]
                .lerp(palette[1], rng.gen::<f32>())
                .lerp(palette[2], rng.gen::<f32>())
        })
        .collect()
}
