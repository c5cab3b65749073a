// Document-height measurement that keeps the background layer out of the
// reading.
//
// A document-relative layer is an absolutely positioned canvas as tall as
// the surface, so it props up `scrollHeight` on its own. Measuring with the
// layer collapsed lets the surface shrink when page content does.

/// Inline height of the layer, read and replaced around a measurement.
pub trait LayerHeight {
    fn height_style(&self) -> String;
    fn set_height_style(&self, value: &str);
}

pub const COLLAPSED_HEIGHT: &str = "0px";

/// Larger of the root and body scroll heights; `None` before layout.
pub fn content_height(root_scroll: i32, body_scroll: i32) -> Option<f32> {
    let h = root_scroll.max(body_scroll);
    (h > 0).then_some(h as f32)
}

/// Collapses `layer` (if any), takes `(root, body)` scroll heights from
/// `read`, then restores the layer's previous height.
pub fn measure_without_layer<L: LayerHeight>(
    layer: Option<&L>,
    read: impl FnOnce() -> (i32, i32),
) -> Option<f32> {
    let saved = layer.map(|l| {
        let previous = l.height_style();
        l.set_height_style(COLLAPSED_HEIGHT);
        (l, previous)
    });
    let (root, body) = read();
    if let Some((l, previous)) = saved {
        l.set_height_style(&previous);
    }
    content_height(root, body)
}
