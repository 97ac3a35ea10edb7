//! Staggered fade/slide-in for section text.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    QuadOut,
    CubicOut,
    QuartOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - inv * inv,
            Ease::CubicOut => 1.0 - inv * inv * inv,
            Ease::QuartOut => 1.0 - inv * inv * inv * inv,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    /// Starting downward offset in CSS pixels.
    pub offset_px: f32,
    pub duration: f32,
    pub stagger: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl RevealStyle {
    /// First paint of the intro section.
    pub const INTRO: RevealStyle = RevealStyle {
        offset_px: 50.0,
        duration: 1.5,
        stagger: 0.2,
        delay: 0.8,
        ease: Ease::QuartOut,
    };

    /// Replayed whenever a section becomes active.
    pub const SECTION: RevealStyle = RevealStyle {
        offset_px: 30.0,
        duration: 0.8,
        stagger: 0.1,
        delay: 0.0,
        ease: Ease::CubicOut,
    };

    pub fn sample(&self, elapsed: f32, node_index: usize) -> RevealFrame {
        let start = self.delay + self.stagger * node_index as f32;
        let t = if self.duration > 0.0 {
            (elapsed - start) / self.duration
        } else if elapsed >= start {
            1.0
        } else {
            0.0
        };
        let k = self.ease.apply(t);
        RevealFrame {
            opacity: k,
            offset_px: self.offset_px * (1.0 - k),
        }
    }

    /// Time until the last of `nodes` has settled.
    pub fn total_duration(&self, nodes: usize) -> f32 {
        self.delay + self.stagger * nodes.saturating_sub(1) as f32 + self.duration
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    pub offset_px: f32,
}

impl RevealFrame {
    pub const SETTLED: RevealFrame = RevealFrame {
        opacity: 1.0,
        offset_px: 0.0,
    };

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity)
    }

    pub fn transform_css(&self) -> String {
        format!("translateY({:.2}px)", self.offset_px)
    }
}

/// A reveal in flight over a fixed number of nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealRun {
    pub section: usize,
    pub style: RevealStyle,
    pub nodes: usize,
    pub started_at: f32,
}

impl RevealRun {
    pub fn is_finished(&self, now: f32) -> bool {
        now - self.started_at >= self.style.total_duration(self.nodes)
    }

    pub fn frame(&self, now: f32, node_index: usize) -> RevealFrame {
        self.style.sample(now - self.started_at, node_index)
    }
}
