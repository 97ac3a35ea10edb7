/// Raw scroll metrics of the scrolling container, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f32,
    pub scroll_height: f32,
    pub viewport_height: f32,
}

impl ScrollSample {
    pub fn new(offset: f32, scroll_height: f32, viewport_height: f32) -> Self {
        Self {
            offset,
            scroll_height,
            viewport_height,
        }
    }

    #[inline]
    pub fn progress(&self) -> Option<f32> {
        scroll_progress(self.offset, self.scroll_height, self.viewport_height)
    }

    /// Document-space y of the viewport's horizontal centre line.
    #[inline]
    pub fn viewport_center(&self) -> f32 {
        self.offset + self.viewport_height * 0.5
    }
}

/// Normalised progress over the scrollable range, or `None` when the
/// document does not overflow its viewport.
pub fn scroll_progress(offset: f32, scroll_height: f32, viewport_height: f32) -> Option<f32> {
    let range = scroll_height - viewport_height;
    if !range.is_finite() || !offset.is_finite() || range < 1.0 {
        return None;
    }
    Some((offset / range).clamp(0.0, 1.0))
}
