use crate::dom;
use crate::input;
use crate::page::Page;
use aether_core::SceneHandle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// An installed DOM listener. Dropping it removes the listener, so the
/// closure lives exactly as long as the mount that owns it.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub struct Wiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub handle: SceneHandle,
    pub page: Rc<RefCell<Page>>,
}

/// Installs every listener the mount needs. Failures are logged and skipped;
/// the field keeps its ambient motion without them.
pub fn wire_all(w: &Wiring) -> Vec<Listener> {
    let mut listeners = Vec::new();
    let results = [
        ("resize", wire_resize(w)),
        ("mousemove", wire_pointer(w)),
        ("scroll", wire_scroll(w)),
    ];
    for (kind, result) in results {
        match result {
            Ok(l) => listeners.push(l),
            Err(e) => log::warn!("[events] {} listener not installed: {:?}", kind, e),
        }
    }
    listeners.extend(wire_nav_dots(w));
    listeners
}

fn wire_resize(w: &Wiring) -> Result<Listener, JsValue> {
    let canvas = w.canvas.clone();
    let page = w.page.clone();
    Listener::new(w.window.as_ref(), "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas);
        page.borrow_mut().measure();
    })
}

fn wire_pointer(w: &Wiring) -> Result<Listener, JsValue> {
    let handle = w.handle.clone();
    Listener::new(w.window.as_ref(), "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (vw, vh) = dom::viewport_size();
        let p = input::recenter(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
        handle.with_scene_mut(|scene| scene.set_pointer(p));
    })
}

fn wire_scroll(w: &Wiring) -> Result<Listener, JsValue> {
    let page = w.page.clone();
    let target = page.borrow().source().event_target();
    Listener::new(&target, "scroll", move |_| {
        page.borrow_mut().on_scroll();
    })
}

fn wire_nav_dots(w: &Wiring) -> Vec<Listener> {
    let dots: Vec<web::Element> = w.page.borrow().nav_dots().to_vec();
    dots.iter()
        .enumerate()
        .filter_map(|(pos, dot)| {
            let index = input::parse_section_index(
                dot.get_attribute(crate::constants::NAV_DOT_INDEX_ATTR).as_deref(),
            )
            .unwrap_or(pos);
            let page = w.page.clone();
            Listener::new(dot.as_ref(), "click", move |_| {
                page.borrow().scroll_to_section(index);
            })
            .map_err(|e| log::warn!("[events] nav dot {} not wired: {:?}", index, e))
            .ok()
        })
        .collect()
}
