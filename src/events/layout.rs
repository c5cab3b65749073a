use super::Subscription;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Content-size observer on `<body>`; disconnected when dropped.
pub struct ObserverHandle {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web::ResizeObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn relayout(ctx: &Rc<RefCell<FrameContext>>) {
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let Ok(mut c) = ctx.try_borrow_mut() else {
        log::trace!("[surface] layout event while busy; next one will catch up");
        return;
    };
    let snapshot = dom::layout_snapshot(&window, &document, c.painter.measured_layer());
    c.on_layout(&snapshot);
}

/// Window resize, scroll and body size changes all feed the surface manager.
pub fn wire_layout_handlers(
    window: &web::Window,
    document: &web::Document,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<(Vec<Subscription>, Option<ObserverHandle>)> {
    let mut subs = Vec::new();

    let ctx_resize = ctx.clone();
    subs.push(Subscription::listen(window, "resize", true, move |_| {
        relayout(&ctx_resize);
    })?);

    let ctx_scroll = ctx.clone();
    subs.push(Subscription::listen(window, "scroll", true, move |_| {
        let y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        if let Ok(mut c) = ctx_scroll.try_borrow_mut() {
            c.engine.on_scroll(y as f32);
        }
    })?);

    let observer = match document.body() {
        Some(body) => {
            let ctx_observe = ctx.clone();
            let closure = Closure::wrap(Box::new(
                move |_entries: js_sys::Array, _obs: web::ResizeObserver| {
                    relayout(&ctx_observe);
                },
            )
                as Box<dyn FnMut(js_sys::Array, web::ResizeObserver)>);
            match web::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
                Ok(observer) => {
                    observer.observe(&body);
                    Some(ObserverHandle {
                        observer,
                        _closure: closure,
                    })
                }
                Err(e) => {
                    // older engines: window resize still covers viewport changes
                    log::warn!("[surface] ResizeObserver unavailable: {:?}", e);
                    None
                }
            }
        }
        None => None,
    };

    Ok((subs, observer))
}
