use crate::constants::*;
use crate::input;
use aether_core::{ScrollSample, SectionSpan};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(
            rect.width(),
            rect.height(),
            w.device_pixel_ratio(),
            MAX_DEVICE_PIXEL_RATIO,
        );
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
}

#[inline]
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

pub fn collect<T: JsCast>(list: Option<web::NodeList>) -> Vec<T> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_all<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    collect(document.query_selector_all(selector).ok())
}

pub fn query_all_in<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    collect(root.query_selector_all(selector).ok())
}

/// Marks `elements[index]` active and clears every sibling.
pub fn set_exclusive_active(elements: &[web::Element], index: usize) {
    for (i, el) in elements.iter().enumerate() {
        _ = el.class_list().toggle_with_force(ACTIVE_CLASS, i == index);
    }
}

pub fn measure_spans(sections: &[web::HtmlElement]) -> Vec<SectionSpan> {
    sections
        .iter()
        .map(|s| SectionSpan {
            top: s.offset_top() as f32,
            height: s.offset_height() as f32,
        })
        .collect()
}

/// Where the page scrolls: the content wrapper when the layout has one,
/// otherwise the document itself.
#[derive(Clone)]
pub enum ScrollSource {
    Container(web::Element),
    Document(web::Window, web::Document),
}

impl ScrollSource {
    pub fn locate(window: &web::Window, document: &web::Document) -> Self {
        match document.query_selector(SCROLL_CONTAINER_SELECTOR).ok().flatten() {
            Some(el) => ScrollSource::Container(el),
            None => ScrollSource::Document(window.clone(), document.clone()),
        }
    }

    /// Target that receives this source's `scroll` events.
    pub fn event_target(&self) -> web::EventTarget {
        match self {
            ScrollSource::Container(el) => el.clone().unchecked_into(),
            ScrollSource::Document(w, _) => w.clone().unchecked_into(),
        }
    }

    pub fn sample(&self) -> ScrollSample {
        match self {
            ScrollSource::Container(el) => ScrollSample::new(
                el.scroll_top() as f32,
                el.scroll_height() as f32,
                el.client_height() as f32,
            ),
            ScrollSource::Document(w, d) => {
                let offset = w.scroll_y().unwrap_or(0.0) as f32;
                let scroll_height = d
                    .document_element()
                    .map(|e| e.scroll_height() as f32)
                    .unwrap_or(0.0);
                let (_, viewport_h) = viewport_size();
                ScrollSample::new(offset, scroll_height, viewport_h)
            }
        }
    }

    pub fn smooth_scroll_to(&self, top: f32) {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top as f64);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        match self {
            ScrollSource::Container(el) => el.scroll_to_with_scroll_to_options(&opts),
            ScrollSource::Document(w, _) => w.scroll_to_with_scroll_to_options(&opts),
        }
    }
}
