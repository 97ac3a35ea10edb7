//! Page side of the scroll timeline: section/nav-dot activation, text reveal
//! and binding the controller to the scene once it exists.

use crate::constants::*;
use crate::dom::{self, ScrollSource};
use aether_core::{
    resolve_spans, CueTracker, HandleSlot, RevealFrame, RevealRun, RevealStyle, ScrollController,
    ScrollTimeline, SectionSpan, SectionTracker,
};
use instant::Instant;
use web_sys as web;

pub struct Page {
    source: ScrollSource,
    sections: Vec<web::HtmlElement>,
    nav_dots: Vec<web::Element>,
    reveal_nodes: Vec<Vec<web::HtmlElement>>,
    spans: Vec<SectionSpan>,
    controller: ScrollController,
    slot: HandleSlot,
    reveal: Option<RevealRun>,
    intro_played: bool,
    clock: Instant,
}

impl Page {
    pub fn new(window: &web::Window, document: &web::Document, slot: HandleSlot) -> Self {
        let sections: Vec<web::HtmlElement> = dom::query_all(document, SECTION_SELECTOR);
        let reveal_nodes = sections
            .iter()
            .map(|s| dom::query_all_in(s, REVEAL_SELECTOR))
            .collect();
        let nav_dots = dom::query_all(document, NAV_DOT_SELECTOR);
        let mut page = Self {
            source: ScrollSource::locate(window, document),
            sections,
            nav_dots,
            reveal_nodes,
            spans: Vec::new(),
            controller: ScrollController::new(
                ScrollTimeline::default(),
                CueTracker::default(),
                SectionTracker::default(),
            ),
            slot,
            reveal: None,
            intro_played: false,
            clock: Instant::now(),
        };
        page.measure();
        log::info!(
            "[page] sections={} nav_dots={}",
            page.sections.len(),
            page.nav_dots.len()
        );
        page
    }

    pub fn source(&self) -> &ScrollSource {
        &self.source
    }

    pub fn nav_dots(&self) -> &[web::Element] {
        &self.nav_dots
    }

    /// Re-reads section geometry; called at start and on resize.
    pub fn measure(&mut self) {
        let measured = dom::measure_spans(&self.sections);
        let scroll_height = self.source.sample().scroll_height;
        self.spans = resolve_spans(&measured, scroll_height);
        self.controller.set_section_spans(self.spans.clone());
    }

    /// Binds as soon as the scene handle appears and replays the current
    /// scroll position into it.
    pub fn poll_binding(&mut self) {
        if !self.controller.is_bound() && self.controller.bind(&self.slot) {
            self.on_scroll();
        }
    }

    pub fn unbind(&mut self) {
        self.controller.unbind();
    }

    pub fn on_scroll(&mut self) {
        self.controller.bind(&self.slot);
        let effects = self.controller.on_scroll(self.source.sample());
        if !effects.shapes.is_empty() {
            log::debug!("[page] shape cues {:?}", effects.shapes);
        }
        if let Some(index) = effects.section {
            self.activate(index);
        }
    }

    pub fn scroll_to_section(&self, index: usize) {
        if let Some(span) = self.spans.get(index) {
            self.source.smooth_scroll_to(span.top);
        }
    }

    fn activate(&mut self, index: usize) {
        log::debug!("[page] section {} active", index);
        let sections: Vec<web::Element> = self.sections.iter().map(|s| s.clone().into()).collect();
        dom::set_exclusive_active(&sections, index);
        dom::set_exclusive_active(&self.nav_dots, index);

        // A run cut short leaves its nodes visible.
        if let Some(prev) = self.reveal.take() {
            self.paint(prev.section, |_| RevealFrame::SETTLED);
        }
        let style = if !self.intro_played && index == INTRO_SECTION {
            RevealStyle::INTRO
        } else {
            RevealStyle::SECTION
        };
        self.intro_played = true;
        let nodes = self.reveal_nodes.get(index).map_or(0, Vec::len);
        if nodes == 0 {
            return;
        }
        let run = RevealRun {
            section: index,
            style,
            nodes,
            started_at: self.now(),
        };
        self.reveal = Some(run);
        self.tick_reveal();
    }

    /// Advances the running reveal; called once per animation frame.
    pub fn tick_reveal(&mut self) {
        let Some(run) = self.reveal else {
            return;
        };
        let now = self.now();
        if run.is_finished(now) {
            self.paint(run.section, |_| RevealFrame::SETTLED);
            self.reveal = None;
        } else {
            self.paint(run.section, |i| run.frame(now, i));
        }
    }

    fn paint(&self, section: usize, frame_for: impl Fn(usize) -> RevealFrame) {
        let Some(nodes) = self.reveal_nodes.get(section) else {
            return;
        };
        for (i, node) in nodes.iter().enumerate() {
            let frame = frame_for(i);
            let style = node.style();
            _ = style.set_property("opacity", &frame.opacity_css());
            _ = style.set_property("transform", &frame.transform_css());
        }
    }

    #[inline]
    fn now(&self) -> f32 {
        self.clock.elapsed().as_secs_f32()
    }
}
