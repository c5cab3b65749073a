use super::Subscription;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Vec<Subscription>> {
    let mut subs = Vec::new();
    subs.push(wire_pointermove(window, ctx)?);
    for kind in ["touchstart", "touchmove"] {
        subs.push(wire_touch(window, ctx, kind)?);
    }
    for kind in ["touchend", "touchcancel"] {
        subs.push(wire_touch_release(window, ctx, kind)?);
    }
    Ok(subs)
}

fn wire_pointermove(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Subscription> {
    let ctx = ctx.clone();
    Subscription::listen(window, "pointermove", true, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        // touch pointers go through the throttled touch path
        if ev.pointer_type() == "touch" {
            return;
        }
        if let Ok(mut c) = ctx.try_borrow_mut() {
            c.engine
                .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}

fn wire_touch(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
    kind: &'static str,
) -> anyhow::Result<Subscription> {
    let ctx = ctx.clone();
    Subscription::listen(window, kind, true, move |ev: web::Event| {
        let Some(touch) = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0))
        else {
            return;
        };
        if let Ok(mut c) = ctx.try_borrow_mut() {
            let now = c.now();
            c.engine
                .on_touch_move(touch.client_x() as f32, touch.client_y() as f32, now);
        }
    })
}

fn wire_touch_release(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
    kind: &'static str,
) -> anyhow::Result<Subscription> {
    let ctx = ctx.clone();
    Subscription::listen(window, kind, true, move |ev: web::Event| {
        let remaining = ev
            .dyn_ref::<web::TouchEvent>()
            .map(|t| t.touches().length())
            .unwrap_or(0);
        if remaining > 0 {
            return;
        }
        if let Ok(mut c) = ctx.try_borrow_mut() {
            c.engine.on_touch_end();
        }
    })
}
