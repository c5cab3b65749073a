#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::{Catalog, DeviceProfile, EngineConfig, StarfieldEngine};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod device;
mod dom;
mod events;
mod frame;
mod measure;
mod render;

/// A running background: the shared frame context plus everything that
/// keeps it wired to the page. Dropping it detaches all listeners and stops
/// the animation loop.
struct Background {
    _ctx: Rc<RefCell<frame::FrameContext>>,
    _subscriptions: Vec<events::Subscription>,
    _observer: Option<events::ObserverHandle>,
    alive: Rc<Cell<bool>>,
}

impl Drop for Background {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Background>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    wasm_bindgen_futures::spawn_local(async move {
        if let Some(document) = dom::window_document() {
            dom::dom_ready(&document).await;
        }
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tears down the current background (if any) and builds a fresh one, e.g.
/// after a client-side navigation replaced the body.
#[wasm_bindgen]
pub fn restart() {
    if let Err(e) = init() {
        log::error!("restart error: {:?}", e);
    }
}

/// Validates the page's catalog records and returns them normalized: blank
/// strings dropped, ranks checked, order and duplicates preserved.
#[wasm_bindgen]
pub fn normalize_catalog(json: &str) -> Result<String, JsValue> {
    let catalog = Catalog::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!(
        "[catalog] {} records ({} ranked)",
        catalog.len(),
        catalog.ranked().len()
    );
    catalog
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn init() -> anyhow::Result<()> {
    if let Some(old) = ACTIVE.with(|a| a.borrow_mut().take()) {
        drop(old);
        log::info!("[engine] previous background released");
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let signals = device::probe(&window);
    let profile = DeviceProfile::classify(&signals);
    log::info!(
        "[profile] {:?} (touch points {}, coarse {}, cores {})",
        profile.tier,
        signals.max_touch_points,
        signals.coarse_pointer,
        signals.hardware_concurrency
    );
    let mode = profile.preferred_surface_mode();

    let canvas = dom::create_layer(&document, mode)?;
    let painter = render::CanvasPainter::new(canvas, mode)?;
    let layout = dom::layout_snapshot(&window, &document, painter.measured_layer());
    let engine = StarfieldEngine::new(
        profile,
        mode,
        &layout,
        EngineConfig::default(),
        StdRng::from_entropy(),
    );
    let animated = engine.is_animated();
    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(engine, painter)));
    let alive = Rc::new(Cell::new(true));

    let (mut subscriptions, observer) = events::wire_layout_handlers(&window, &document, &ctx)?;
    if animated {
        subscriptions.extend(events::wire_input_handlers(&window, &ctx)?);
        frame::start_loop(ctx.clone(), alive.clone());
    } else {
        ctx.borrow_mut().render_static();
    }

    ACTIVE.with(|a| {
        *a.borrow_mut() = Some(Background {
            _ctx: ctx,
            _subscriptions: subscriptions,
            _observer: observer,
            alive,
        });
    });
    Ok(())
}
