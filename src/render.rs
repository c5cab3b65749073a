use crate::constants::{rgba, GLOW_RGB, GRID_LINE_ALPHA, GRID_LINE_WIDTH, STAR_RGB};
use crate::dom;
use starfield_core::constants::{CIRCLE_RADIUS_FACTOR, STAR_INNER_FACTOR, STAR_OUTER_FACTOR};
use starfield_core::{GridLines, Painter, PointShape, PointSprite, Rect, SurfaceMode};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Offscreen copy of the grid lines, redrawn only when the lattice changes.
struct LineLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    generation: Option<u64>,
}

pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    mode: SurfaceMode,
    line_layer: Option<LineLayer>,
}

impl CanvasPainter {
    pub fn new(canvas: web::HtmlCanvasElement, mode: SurfaceMode) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            mode,
            line_layer: None,
        })
    }

    /// The layer to collapse while measuring the document; only a
    /// document-relative layer takes part in page height.
    pub fn measured_layer(&self) -> Option<&web::HtmlCanvasElement> {
        (self.mode == SurfaceMode::DocumentRelative).then_some(&self.canvas)
    }

    /// The layer holds one vertical tile of lines starting on a row line.
    /// Lines repeat every `spacing`, so the tile can be placed at any row.
    fn ensure_line_layer(&mut self, lines: &GridLines) -> Option<&LineLayer> {
        if self.line_layer.is_none() {
            let document = dom::window_document()?;
            let canvas = document
                .create_element("canvas")
                .ok()?
                .dyn_into::<web::HtmlCanvasElement>()
                .ok()?;
            let ctx = dom::context_2d(&canvas)
                .map_err(|e| log::warn!("[render] line layer unavailable: {:?}", e))
                .ok()?;
            self.line_layer = Some(LineLayer {
                canvas,
                ctx,
                generation: None,
            });
        }
        let layer = self.line_layer.as_mut()?;
        let tile_h = tile_height(lines);
        if layer.generation != Some(lines.generation) || (layer.canvas.height() as f32) < tile_h {
            layer.canvas.set_width(lines.width.ceil().max(1.0) as u32);
            layer.canvas.set_height(tile_h.ceil().max(1.0) as u32);
            let tile = Rect {
                x: 0.0,
                y: 0.0,
                width: lines.width,
                height: tile_h,
            };
            stroke_lines(&layer.ctx, lines, tile);
            layer.generation = Some(lines.generation);
            log::debug!(
                "[render] line layer rebuilt ({:.0}x{:.0}, generation {})",
                lines.width,
                tile_h,
                lines.generation
            );
        }
        self.line_layer.as_ref()
    }
}

fn tile_height(lines: &GridLines) -> f32 {
    ((lines.clip.height / lines.spacing).ceil() + 1.0) * lines.spacing
}

/// Strokes the lattice lines that cross `clip`.
fn stroke_lines(ctx: &web::CanvasRenderingContext2d, lines: &GridLines, clip: Rect) {
    let s = lines.spacing as f64;
    if s <= 0.0 {
        return;
    }
    let top = clip.y as f64;
    let bottom = (clip.y + clip.height) as f64;
    let width = lines.width as f64;
    ctx.set_stroke_style_str(&rgba(GLOW_RGB, GRID_LINE_ALPHA));
    ctx.set_line_width(GRID_LINE_WIDTH);
    ctx.begin_path();
    let mut x = 0.0;
    while x <= width {
        ctx.move_to(x, top);
        ctx.line_to(x, bottom);
        x += s;
    }
    let mut y = (top / s).ceil() * s;
    while y <= bottom {
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        y += s;
    }
    ctx.stroke();
}

/// Four-pointed star built from quadratic curves around the origin.
fn star_path(ctx: &web::CanvasRenderingContext2d, size: f64) {
    let inner = size * STAR_INNER_FACTOR as f64;
    let outer = size * STAR_OUTER_FACTOR as f64;
    ctx.begin_path();
    ctx.move_to(0.0, -outer);
    ctx.quadratic_curve_to(inner, -inner, outer, 0.0);
    ctx.quadratic_curve_to(inner, inner, 0.0, outer);
    ctx.quadratic_curve_to(-inner, inner, -outer, 0.0);
    ctx.quadratic_curve_to(-inner, -inner, 0.0, -outer);
}

impl Painter for CanvasPainter {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width.max(1));
        self.canvas.set_height(height.max(1));
        dom::apply_layer_style(&self.canvas, self.mode, height);
    }

    fn clear(&mut self, rect: Rect) {
        self.ctx.clear_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn grid_lines(&mut self, lines: &GridLines) {
        if !lines.cacheable {
            stroke_lines(&self.ctx, lines, lines.clip);
            return;
        }
        let ctx = self.ctx.clone();
        match self.ensure_line_layer(lines) {
            Some(layer) => {
                let c = lines.clip;
                if c.width < 1.0 || c.height < 1.0 {
                    return;
                }
                let s = lines.spacing as f64;
                let (x, y, w, h) = (c.x as f64, c.y as f64, c.width as f64, c.height as f64);
                let tile_top = (y / s).floor() * s;
                _ = ctx.draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    &layer.canvas,
                    x,
                    y - tile_top,
                    w,
                    h,
                    x,
                    y,
                    w,
                    h,
                );
            }
            None => stroke_lines(&ctx, lines, lines.clip),
        }
    }

    fn point(&mut self, sprite: &PointSprite) {
        let ctx = &self.ctx;
        let size = sprite.size as f64;
        ctx.save();
        _ = ctx.translate(sprite.x as f64, sprite.y as f64);
        match sprite.shape {
            PointShape::Star => star_path(ctx, size),
            PointShape::Circle => {
                ctx.begin_path();
                _ = ctx.arc(0.0, 0.0, size * CIRCLE_RADIUS_FACTOR as f64, 0.0, TAU);
            }
        }
        ctx.set_fill_style_str(&rgba(STAR_RGB, sprite.alpha));
        ctx.fill();

        if let Some(glow) = sprite.glow {
            if let Ok(gradient) = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, glow.radius as f64)
            {
                _ = gradient.add_color_stop(0.0, &rgba(GLOW_RGB, glow.alpha));
                _ = gradient.add_color_stop(1.0, &rgba(GLOW_RGB, 0.0));
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill();
            }
        }
        ctx.restore();
    }
}
