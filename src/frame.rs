use crate::render::CanvasPainter;
use instant::Instant;
use rand::rngs::StdRng;
use starfield_core::{LayoutSnapshot, ResizeOutcome, StarfieldEngine};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the callbacks touch, shared through one `Rc<RefCell<_>>`.
pub struct FrameContext {
    pub engine: StarfieldEngine<StdRng>,
    pub painter: CanvasPainter,
    pub started: Instant,
}

impl FrameContext {
    pub fn new(engine: StarfieldEngine<StdRng>, painter: CanvasPainter) -> Self {
        Self {
            engine,
            painter,
            started: Instant::now(),
        }
    }

    /// Time since start-up; the engine's clock for pacing and throttling.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn frame(&mut self) {
        let now = self.now();
        _ = self.engine.frame(now, &mut self.painter);
    }

    pub fn on_layout(&mut self, layout: &LayoutSnapshot) {
        if self.engine.on_layout(layout) == ResizeOutcome::Resized && !self.engine.is_animated() {
            self.engine.render_static(&mut self.painter);
        }
    }

    pub fn render_static(&mut self) {
        self.engine.render_static(&mut self.painter);
    }
}

/// requestAnimationFrame loop. At most one callback is outstanding; the loop
/// ends once `alive` is cleared by the owning background.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, alive: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Ok(mut ctx) = frame_ctx_tick.try_borrow_mut() else {
            // still armed; try again next frame
            log::warn!("[frame] context busy, skipping callback");
            request(&tick_clone);
            return;
        };
        ctx.engine.begin_callback();
        if !alive.get() {
            log::info!("[frame] loop stopped");
            // the closure holds its own slot; empty it after this call returns
            let slot = tick_clone.clone();
            wasm_bindgen_futures::spawn_local(async move {
                drop(slot.borrow_mut().take());
            });
            return;
        }
        ctx.frame();
        if ctx.engine.request_frame() {
            request(&tick_clone);
        }
    }) as Box<dyn FnMut()>));

    if frame_ctx.borrow_mut().engine.request_frame() {
        request(&tick);
    }
}

fn request(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
