use crate::field::PointSprite;
use crate::viewport::Rect;

/// Faint lines through every lattice column and row.
///
/// `generation` changes whenever the lattice is rebuilt, so a painter that
/// keeps the lines in an offscreen layer knows when to redraw it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLines {
    pub spacing: f32,
    pub width: f32,
    pub height: f32,
    pub clip: Rect,
    pub generation: u64,
    pub cacheable: bool,
}

/// Drawing backend. The web front-end implements this over a 2D canvas;
/// tests record the calls.
pub trait Painter {
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self, rect: Rect);
    fn grid_lines(&mut self, lines: &GridLines);
    fn point(&mut self, sprite: &PointSprite);
}
