use crate::constants::COARSE_POINTER_QUERY;
use starfield_core::DeviceSignals;
use web_sys as web;

/// Reads the environment once for profile classification. Missing readings
/// stay at their defaults, which classify as desktop.
pub fn probe(window: &web::Window) -> DeviceSignals {
    let navigator = window.navigator();
    let (viewport_width, viewport_height) = match window.screen() {
        Ok(s) => (
            s.width().unwrap_or(0) as f32,
            s.height().unwrap_or(0) as f32,
        ),
        Err(_) => (0.0, 0.0),
    };
    let viewport_width = inner_or(window.inner_width().ok(), viewport_width);
    let viewport_height = inner_or(window.inner_height().ok(), viewport_height);
    let coarse_pointer = window
        .match_media(COARSE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    DeviceSignals {
        viewport_width,
        viewport_height,
        max_touch_points: navigator.max_touch_points().max(0) as u32,
        coarse_pointer,
        user_agent: navigator.user_agent().unwrap_or_default(),
        hardware_concurrency: navigator.hardware_concurrency().max(0.0) as u32,
    }
}

fn inner_or(v: Option<wasm_bindgen::JsValue>, fallback: f32) -> f32 {
    v.and_then(|v| v.as_f64())
        .map(|v| v as f32)
        .filter(|v| *v > 0.0)
        .unwrap_or(fallback)
}
