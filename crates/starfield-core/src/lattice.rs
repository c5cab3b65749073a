use crate::viewport::Band;
use glam::Vec2;
use rand::Rng;
use std::ops::RangeInclusive;

/// Evenly spaced points covering the surface. Points are never stored per
/// frame; the full-surface list is cached once and dropped on resize.
#[derive(Clone, Debug)]
pub struct Lattice {
    spacing: f32,
    width: f32,
    height: f32,
    generation: u64,
    cached: Option<Vec<Vec2>>,
}

impl Lattice {
    pub fn new(spacing: f32, width: f32, height: f32) -> Self {
        Self {
            spacing: spacing.max(1.0),
            width,
            height,
            generation: 0,
            cached: None,
        }
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn extent(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Bumped on every resize; layers derived from the lattice compare it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.cached = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Lattice coordinate for index `i`. Flash anchors go through this too so
    /// exact comparisons line up with the iterated points.
    #[inline]
    pub fn coord(&self, i: u32) -> f32 {
        i as f32 * self.spacing
    }

    pub fn columns(&self) -> RangeInclusive<u32> {
        0..=(self.width / self.spacing).floor() as u32
    }

    pub fn rows_in(&self, band: Band) -> RangeInclusive<u32> {
        let top = band.top.max(0.0);
        let bottom = band.bottom.min(self.height);
        // empty whenever bottom < top: ceil(top) > floor(bottom)
        let first = (top / self.spacing).ceil() as u32;
        let last = (bottom / self.spacing).floor() as u32;
        first..=last
    }

    pub fn full_band(&self) -> Band {
        Band {
            top: 0.0,
            bottom: self.height,
        }
    }

    /// Every point on the surface, built on first use.
    pub fn points(&mut self) -> &[Vec2] {
        if self.cached.is_none() {
            let mut pts = Vec::new();
            for row in self.rows_in(self.full_band()) {
                let y = self.coord(row);
                for col in self.columns() {
                    pts.push(Vec2::new(self.coord(col), y));
                }
            }
            log::debug!(
                "[lattice] cached {} points at spacing {:.1}",
                pts.len(),
                self.spacing
            );
            self.cached = Some(pts);
        }
        self.cached.as_deref().unwrap_or(&[])
    }

    /// Visits the points of `band` row by row without allocating.
    pub fn for_each_in(&self, band: Band, mut f: impl FnMut(u32, u32, Vec2)) {
        for row in self.rows_in(band) {
            let y = self.coord(row);
            for col in self.columns() {
                f(col, row, Vec2::new(self.coord(col), y));
            }
        }
    }

    pub fn count_in(&self, band: Band) -> usize {
        let rows = self.rows_in(band);
        let cols = self.columns();
        if rows.is_empty() {
            return 0;
        }
        (rows.end() - rows.start() + 1) as usize * (cols.end() - cols.start() + 1) as usize
    }

    /// Uniformly random lattice point inside `band`, if it holds any.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R, band: Band) -> Option<Vec2> {
        let rows = self.rows_in(band);
        if rows.is_empty() {
            return None;
        }
        let col = rng.gen_range(self.columns());
        let row = rng.gen_range(rows);
        Some(Vec2::new(self.coord(col), self.coord(row)))
    }
}
