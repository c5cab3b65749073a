/// Canvas layer and palette constants for the web front-end.
///
/// Colors are kept as RGB triples so alpha can be applied per point; the
/// painter formats them into CSS strings.
// Layer element
pub const CANVAS_ID: &str = "bg-canvas";
pub const BACKGROUND_CSS: &str = "#050507";
pub const LAYER_Z_INDEX: i32 = -1;

// Star fill (#a78bfa)
pub const STAR_RGB: [u8; 3] = [167, 139, 250];
// Glow and grid lines (#8b5cf6)
pub const GLOW_RGB: [u8; 3] = [139, 92, 246];
pub const GRID_LINE_ALPHA: f32 = 0.03;
pub const GRID_LINE_WIDTH: f64 = 1.0;

// `document.readyState` while the HTML is still being parsed
pub const READY_STATE_LOADING: &str = "loading";

// Media query for coarse pointers (touch screens)
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

/// Inline style for the layer; document-relative layers scroll with the page.
pub fn layer_style(fixed: bool, height_px: u32) -> String {
    let (position, height) = if fixed {
        ("fixed", "100%".to_string())
    } else {
        ("absolute", format!("{}px", height_px))
    };
    format!(
        "position:{position};top:0;left:0;width:100%;height:{height};z-index:{LAYER_Z_INDEX};pointer-events:none;background:{BACKGROUND_CSS};"
    )
}
