//! Scroll timeline controller.
//!
//! Turns scroll samples into pushes on the bound [`SceneHandle`] and tells the
//! page layer which section just became active. The controller never touches
//! the per-point buffers.

use crate::handle::{HandleSlot, SceneHandle};
use crate::scroll::ScrollSample;
use crate::sections::{SectionSpan, SectionTracker};
use crate::shapes::ShapeId;
use crate::timeline::{CueTracker, ScrollTimeline};
use smallvec::SmallVec;

/// What a scroll sample changed, for the page layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollEffects {
    pub progress: Option<f32>,
    pub section: Option<usize>,
    pub shapes: SmallVec<[ShapeId; 4]>,
}

#[derive(Default)]
pub struct ScrollController {
    timeline: ScrollTimeline,
    cues: CueTracker,
    sections: SectionTracker,
    handle: Option<SceneHandle>,
}

impl ScrollController {
    pub fn new(timeline: ScrollTimeline, cues: CueTracker, sections: SectionTracker) -> Self {
        Self {
            timeline,
            cues,
            sections,
            handle: None,
        }
    }

    /// No-op until the slot has been filled; safe to call repeatedly.
    pub fn bind(&mut self, slot: &HandleSlot) -> bool {
        if self.handle.is_none() {
            if let Some(handle) = slot.get() {
                log::debug!("[scroll] bound to scene");
                self.handle = Some(handle.clone());
            }
        }
        self.handle.is_some()
    }

    pub fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    /// Drops the handle so no further pushes reach a disposed scene.
    pub fn unbind(&mut self) {
        self.handle = None;
    }

    pub fn set_section_spans(&mut self, spans: Vec<SectionSpan>) {
        self.sections.set_spans(spans);
    }

    pub fn active_section(&self) -> Option<usize> {
        self.sections.active()
    }

    pub fn timeline(&self) -> &ScrollTimeline {
        &self.timeline
    }

    /// Nothing fires without scrollable overflow. Otherwise section
    /// activation runs regardless of binding so the page still reveals its
    /// text without a renderer.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> ScrollEffects {
        let Some(progress) = sample.progress() else {
            return ScrollEffects::default();
        };
        let section = self.sections.update(sample.viewport_center());
        if let Some(index) = section {
            log::debug!("[scroll] section {} active", index);
        }
        let mut effects = ScrollEffects {
            progress: Some(progress),
            section: section,
            ..ScrollEffects::default()
        };
        let Some(handle) = self.handle.as_ref().filter(|h| !h.is_disposed()) else {
            return effects;
        };
        handle.push_timeline(self.timeline.sample(progress));
        effects.shapes = self.cues.advance(progress);
        for &shape in &effects.shapes {
            handle.set_active_shape(shape);
        }
        effects
    }
}
