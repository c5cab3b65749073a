use crate::constants::{layer_style, CANVAS_ID, READY_STATE_LOADING};
use crate::measure::{measure_without_layer, LayerHeight};
use starfield_core::{LayoutSnapshot, SurfaceMode};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolves once the document has finished parsing, so `<body>` exists.
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != READY_STATE_LOADING {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Current layout readings. Document height is `None` until the body has
/// been laid out, and the engine falls back to the viewport then. Pass the
/// layer when it is document-relative so its own height is not measured.
pub fn layout_snapshot(
    window: &web::Window,
    document: &web::Document,
    layer: Option<&web::HtmlCanvasElement>,
) -> LayoutSnapshot {
    let viewport_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    LayoutSnapshot {
        viewport_width,
        viewport_height,
        document_height: measure_without_layer(layer, || scroll_heights(document)),
        scroll_y,
    }
}

fn scroll_heights(document: &web::Document) -> (i32, i32) {
    let root = document
        .document_element()
        .map(|el| el.scroll_height())
        .unwrap_or(0);
    let body = document.body().map(|b| b.scroll_height()).unwrap_or(0);
    (root, body)
}

impl LayerHeight for web::HtmlCanvasElement {
    fn height_style(&self) -> String {
        self.style().get_property_value("height").unwrap_or_default()
    }

    fn set_height_style(&self, value: &str) {
        _ = self.style().set_property("height", value);
    }
}

/// Removes any layer left by an earlier instance and prepends a fresh,
/// non-interactive canvas to `<body>`.
pub fn create_layer(
    document: &web::Document,
    mode: SurfaceMode,
) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(existing) = document.get_element_by_id(CANVAS_ID) {
        existing.remove();
        log::info!("[surface] replaced existing #{}", CANVAS_ID);
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("aria-hidden", "true");
    apply_layer_style(&canvas, mode, 0);
    body.prepend_with_node_1(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn apply_layer_style(canvas: &web::HtmlCanvasElement, mode: SurfaceMode, height_px: u32) {
    let fixed = mode == SurfaceMode::ViewportFixed;
    _ = canvas.set_attribute("style", &layer_style(fixed, height_px));
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}
