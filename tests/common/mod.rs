// Shared test double: a painter that records every call.
#![allow(dead_code)]

use starfield_core::{GridLines, Painter, PointSprite, Rect};

#[derive(Default)]
pub struct RecordingPainter {
    pub resizes: Vec<(u32, u32)>,
    pub clears: Vec<Rect>,
    pub lines: Vec<GridLines>,
    pub points: Vec<PointSprite>,
}

impl RecordingPainter {
    pub fn reset_frame(&mut self) {
        self.clears.clear();
        self.lines.clear();
        self.points.clear();
    }
}

impl Painter for RecordingPainter {
    fn resize(&mut self, width: u32, height: u32) {
        self.resizes.push((width, height));
    }

    fn clear(&mut self, rect: Rect) {
        self.clears.push(rect);
    }

    fn grid_lines(&mut self, lines: &GridLines) {
        self.lines.push(*lines);
    }

    fn point(&mut self, sprite: &PointSprite) {
        self.points.push(*sprite);
    }
}
