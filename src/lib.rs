#![cfg(target_arch = "wasm32")]
use aether_core::{FieldScene, HandleSlot, MountRegistry, SceneHandle, ShapeId};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod page;
mod render;

use constants::CANVAS_ID;
use page::Page;

/// Everything a live surface owns. Dropping the listeners removes them from
/// the DOM; stopping the loop releases the GPU state.
struct Mounted {
    surface_id: String,
    handle: SceneHandle,
    page: Rc<RefCell<Page>>,
    frame_loop: frame::FrameLoop,
    listeners: Vec<events::Listener>,
}

impl Mounted {
    /// The surface id must already be released from `MOUNTS`.
    fn dispose(self) {
        self.frame_loop.stop();
        drop(self.listeners);
        self.page.borrow_mut().unbind();
        self.handle.dispose();
        log::info!("[mount] {} released", self.surface_id);
    }
}

thread_local! {
    static MOUNTS: RefCell<MountRegistry<Mounted>> = RefCell::new(MountRegistry::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aether-web starting");

    spawn_local(async move {
        mount_surface(CANVAS_ID.to_string()).await;
    });
    Ok(())
}

/// Mounts the background onto the canvas with id `surface_id`. Resolves to
/// `false` when there is no such canvas or it already carries a live scene;
/// call `dispose` first to mount the same canvas again.
#[wasm_bindgen(js_name = mount)]
pub async fn mount_surface(surface_id: String) -> bool {
    let mounted = match mount(&surface_id).await {
        Ok(Some(m)) => m,
        Ok(None) => return false,
        Err(e) => {
            log::error!("init error: {:?}", e);
            return false;
        }
    };
    match MOUNTS.with(|m| m.borrow_mut().attach(&surface_id, mounted)) {
        Ok(()) => true,
        Err(orphan) => {
            log::warn!("[mount] {} disposed during setup", surface_id);
            orphan.dispose();
            false
        }
    }
}

/// Switches the morph target by name (`sphere`, `torus`, `wave`, `plane`)
/// on every mounted surface.
#[wasm_bindgen]
pub fn set_shape(name: &str) -> bool {
    let shape = match name.parse::<ShapeId>() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("set_shape: {}", e);
            return false;
        }
    };
    MOUNTS.with(|m| {
        let mounts = m.borrow();
        let mut any = false;
        for mounted in mounts.mounted() {
            mounted.handle.set_active_shape(shape);
            any = true;
        }
        any
    })
}

#[wasm_bindgen]
pub fn active_shape() -> Option<String> {
    MOUNTS.with(|m| {
        m.borrow()
            .mounted()
            .next()
            .map(|m| m.handle.active_shape().as_str().to_string())
    })
}

/// Tears down one surface, or every surface when `surface_id` is omitted.
/// Returns `false` when nothing was mounted.
#[wasm_bindgen]
pub fn dispose(surface_id: Option<String>) -> bool {
    let released = MOUNTS.with(|m| {
        let mut mounts = m.borrow_mut();
        match surface_id.as_deref() {
            Some(id) if mounts.is_mounted(id) => {
                Some(mounts.release(id).into_iter().collect::<Vec<_>>())
            }
            Some(_) => None,
            None => Some(mounts.drain()),
        }
    });
    match released {
        Some(list) => {
            let any = !list.is_empty();
            for mounted in list {
                mounted.dispose();
            }
            any || surface_id.is_some()
        }
        None => false,
    }
}

/// Mounts the field onto the canvas with id `surface_id`. Returns `None`
/// (and starts nothing) when the page has no such canvas.
async fn mount(surface_id: &str) -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let Some(canvas) = dom::find_canvas(&document, surface_id) else {
        log::warn!("[mount] no #{} canvas; background disabled", surface_id);
        return Ok(None);
    };
    if let Err(e) = MOUNTS.with(|m| m.borrow_mut().claim(surface_id)) {
        log::warn!("[mount] {}", e);
        return Ok(None);
    }

    let config = config::read_config(&canvas);
    let point_count = config.field.count;
    dom::sync_canvas_backing_size(&canvas);

    let mut scene = FieldScene::new(config);
    scene.resize(canvas.width(), canvas.height());
    let handle = SceneHandle::new(scene);

    let slot = HandleSlot::new();
    let page = Rc::new(RefCell::new(Page::new(&window, &document, slot.clone())));
    // Sections and reveal run before the renderer is ready.
    page.borrow_mut().on_scroll();

    let listeners = events::wire_all(&events::Wiring {
        window: window.clone(),
        canvas: canvas.clone(),
        handle: handle.clone(),
        page: page.clone(),
    });

    let gpu = frame::init_gpu(&canvas, point_count).await;
    if slot.fill(handle.clone()).is_err() {
        log::warn!("[mount] scene handle already published");
    }

    let frame_loop = frame::start_loop(frame::FrameContext {
        handle: handle.clone(),
        page: page.clone(),
        canvas,
        gpu,
        last_instant: Instant::now(),
    });
    log::info!("[mount] {} live", surface_id);

    Ok(Some(Mounted {
        surface_id: surface_id.to_string(),
        handle,
        page,
        frame_loop,
        listeners,
    }))
}
