//! Which page section owns the viewport centre.

/// Vertical extent of a section in document space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }

    /// `count` equal spans covering `[0, total)`.
    pub fn evenly(count: usize, total: f32) -> Vec<SectionSpan> {
        let height = if count == 0 { 0.0 } else { total / count as f32 };
        (0..count)
            .map(|i| SectionSpan {
                top: i as f32 * height,
                height,
            })
            .collect()
    }
}

/// Use measured spans when they stack down the page; otherwise (sections
/// layered on top of each other in a fixed overlay) divide the scroll height
/// evenly between them.
pub fn resolve_spans(measured: &[SectionSpan], scroll_height: f32) -> Vec<SectionSpan> {
    let stacked = measured.windows(2).all(|w| w[1].top > w[0].top)
        && measured.iter().all(|s| s.height > 0.0);
    if stacked {
        measured.to_vec()
    } else {
        SectionSpan::evenly(measured.len(), scroll_height)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    spans: Vec<SectionSpan>,
    active: Option<usize>,
}

impl SectionTracker {
    pub fn new(spans: Vec<SectionSpan>) -> Self {
        Self {
            spans,
            active: None,
        }
    }

    /// Re-measured layout; the active index is kept.
    pub fn set_spans(&mut self, spans: Vec<SectionSpan>) {
        self.spans = spans;
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Returns the newly active index when the centre line has entered a
    /// different section, from either direction.
    pub fn update(&mut self, viewport_center: f32) -> Option<usize> {
        let hit = self.spans.iter().position(|s| s.contains(viewport_center))?;
        if self.active == Some(hit) {
            return None;
        }
        self.active = Some(hit);
        Some(hit)
    }
}
