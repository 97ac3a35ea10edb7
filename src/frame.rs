use crate::constants::MAX_FRAME_DT_SEC;
use crate::input;
use crate::page::Page;
use crate::render;
use aether_core::SceneHandle;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub handle: SceneHandle,
    pub page: Rc<RefCell<Page>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Ambient motion and the morph step run inside `advance`; drawing
    /// follows so this frame shows the rotation it just computed.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = input::clamp_frame_dt(
            now.duration_since(self.last_instant).as_secs_f32(),
            MAX_FRAME_DT_SEC,
        );
        self.last_instant = now;

        {
            let mut page = self.page.borrow_mut();
            page.poll_binding();
            page.tick_reveal();
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        let stats = self.handle.with_scene_mut(|scene| {
            scene.resize(w, h);
            scene.advance(dt_sec)
        });
        if stats.is_none() {
            return false;
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            let result = self.handle.with_scene(|scene| g.render(scene));
            if let Err(e) = result {
                log::error!("render error: {:?}", e);
            }
        }
        true
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    point_count: usize,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, point_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// A running requestAnimationFrame loop. `stop` cancels the pending request,
/// and releases the frame closure (and with it the GPU state).
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Returns `false` when the loop had already stopped.
    pub fn stop(&self) -> bool {
        if self.stopped.replace(true) {
            return false;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        true
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let stopped_tick = stopped.clone();
    let mut frame_ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if stopped_tick.get() {
            return;
        }
        if !frame_ctx.frame() {
            // Scene disposed from elsewhere: stop requesting frames.
            stopped_tick.set(true);
            return;
        }
        raf_id_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    raf_id.set(request_frame(&tick));
    FrameLoop {
        raf_id,
        stopped,
        tick,
    }
}
