//! Surface sizing and the visible band.
//!
//! [`ViewportState`] is the engine's view of the host layout. It only changes
//! through [`ViewportState::apply_layout`], which decides whether a layout
//! event is a real resize or noise (mobile browser chrome sliding in and out).

use crate::constants::{
    BAND_MARGIN, HEIGHT_NOISE_THRESHOLD, MAX_SURFACE_AREA, MAX_SURFACE_EXTENT,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceMode {
    /// Surface matches the window and stays pinned while the page scrolls.
    ViewportFixed,
    /// Surface spans the whole document and scrolls with it.
    DocumentRelative,
}

/// Layout readings taken by the host on a resize/observer callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutSnapshot {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// `None` while the document has not been laid out yet.
    pub document_height: Option<f32>,
    pub scroll_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeOutcome {
    Unchanged,
    Resized,
}

/// Vertical slice of the surface computed this frame, in surface px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub top: f32,
    pub bottom: f32,
}

impl Band {
    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom
    }

    pub fn expand(&self, margin: f32, limit: f32) -> Band {
        Band {
            top: (self.top - margin).max(0.0),
            bottom: (self.bottom + margin).min(limit),
        }
    }
}

/// Axis-aligned rectangle in surface px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    /// Surface height: the viewport, or the whole document in document mode.
    pub height: f32,
    pub viewport_height: f32,
    pub scroll_offset: f32,
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

impl ViewportState {
    pub fn new(mode: SurfaceMode, layout: &LayoutSnapshot) -> Self {
        let viewport_height = sanitize(layout.viewport_height);
        let width = sanitize(layout.viewport_width).min(MAX_SURFACE_EXTENT);
        Self {
            width,
            height: target_height(mode, layout, width),
            viewport_height,
            scroll_offset: sanitize(layout.scroll_y),
        }
    }

    /// Folds a layout reading into the state. Scroll and viewport height are
    /// always tracked; the surface size only changes on a real resize.
    pub fn apply_layout(&mut self, mode: SurfaceMode, layout: &LayoutSnapshot) -> ResizeOutcome {
        self.scroll_offset = sanitize(layout.scroll_y);
        self.viewport_height = sanitize(layout.viewport_height);
        let width = sanitize(layout.viewport_width).min(MAX_SURFACE_EXTENT);
        let height = target_height(mode, layout, width);

        let width_changed = width != self.width;
        let height_changed = match mode {
            SurfaceMode::ViewportFixed => height != self.height,
            SurfaceMode::DocumentRelative => (height - self.height).abs() > HEIGHT_NOISE_THRESHOLD,
        };
        if !width_changed && !height_changed {
            return ResizeOutcome::Unchanged;
        }
        self.width = width;
        self.height = height;
        ResizeOutcome::Resized
    }

    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.scroll_offset = sanitize(scroll_y);
    }

    /// Region of the surface worth computing this frame.
    pub fn visible_band(&self, mode: SurfaceMode) -> Band {
        match mode {
            SurfaceMode::ViewportFixed => Band {
                top: 0.0,
                bottom: self.height,
            },
            SurfaceMode::DocumentRelative => {
                let top = (self.scroll_offset - BAND_MARGIN).max(0.0);
                let bottom =
                    (self.scroll_offset + self.viewport_height + BAND_MARGIN).min(self.height);
                Band {
                    top: top.min(bottom),
                    bottom,
                }
            }
        }
    }

    pub fn band_rect(&self, band: Band) -> Rect {
        Rect {
            x: 0.0,
            y: band.top,
            width: self.width,
            height: band.height(),
        }
    }

    /// Offset added to client-space pointer coordinates to land on the surface.
    pub fn pointer_offset(&self, mode: SurfaceMode) -> f32 {
        match mode {
            SurfaceMode::ViewportFixed => 0.0,
            SurfaceMode::DocumentRelative => self.scroll_offset,
        }
    }

    /// Integer backing-store size for the canvas.
    pub fn surface_px(&self) -> (u32, u32) {
        (self.width.ceil() as u32, self.height.ceil() as u32)
    }
}

fn target_height(mode: SurfaceMode, layout: &LayoutSnapshot, width: f32) -> f32 {
    let viewport = sanitize(layout.viewport_height);
    let height = match mode {
        SurfaceMode::ViewportFixed => viewport,
        SurfaceMode::DocumentRelative => match layout.document_height.map(sanitize) {
            Some(h) if h > 0.0 => h.max(viewport),
            _ => viewport,
        },
    };
    let height = height.min(MAX_SURFACE_EXTENT);
    // whole rows only, so the rounded-up backing store stays inside the area
    if width > 0.0 {
        height.min((MAX_SURFACE_AREA / width.ceil()).floor())
    } else {
        height
    }
}
