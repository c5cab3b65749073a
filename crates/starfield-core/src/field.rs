//! Per-point visuals for the lattice.
//!
//! Each point is evaluated independently from animation time, the smoothed
//! pointer and any flash anchored on it:
//!
//! * ambient breathing, a travelling sine wave mapped into the base alpha range
//! * flash boost, the event's sine envelope times its scale
//! * pointer boost, a polynomial falloff inside a fixed radius
//!
//! Alpha is clamped to \[0, 1\] at the end; size is left unbounded.

use crate::constants::*;
use crate::flash::FlashEvent;
use crate::profile::PointShape;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Falloff {
    Quadratic,
    Cubic,
}

impl Falloff {
    #[inline]
    pub fn apply(self, u: f32) -> f32 {
        match self {
            Falloff::Quadratic => u * u,
            Falloff::Cubic => u * u * u,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub base_size: f32,
    pub alpha_min: f32,
    pub alpha_range: f32,
    pub freq: f32,
    pub kx: f32,
    pub ky: f32,
    pub wave_warmup: f32,
    pub pointer_radius: f32,
    pub pointer_size_gain: f32,
    pub pointer_alpha_gain: f32,
    pub falloff: Falloff,
    pub flash_size_gain: f32,
    pub flash_alpha_gain: f32,
}

impl FieldParams {
    pub fn for_spacing(spacing: f32) -> Self {
        Self {
            base_size: spacing * BASE_SIZE_FRACTION,
            ..Self::default()
        }
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            base_size: BASE_SPACING * BASE_SIZE_FRACTION,
            alpha_min: ALPHA_BASE_MIN,
            alpha_range: ALPHA_BASE_RANGE,
            freq: BREATH_FREQ,
            kx: BREATH_KX,
            ky: BREATH_KY,
            wave_warmup: WAVE_WARMUP,
            pointer_radius: POINTER_RADIUS,
            pointer_size_gain: POINTER_SIZE_GAIN,
            pointer_alpha_gain: POINTER_ALPHA_GAIN,
            falloff: Falloff::Cubic,
            flash_size_gain: FLASH_SIZE_GAIN,
            flash_alpha_gain: FLASH_ALPHA_GAIN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointVisual {
    pub size: f32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub radius: f32,
    pub alpha: f32,
}

/// A point ready to be painted, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSprite {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub alpha: f32,
    pub shape: PointShape,
    pub glow: Option<Glow>,
}

impl PointSprite {
    pub fn new(pos: Vec2, visual: PointVisual, shape: PointShape, glow: bool) -> Self {
        let glow = (glow && visual.alpha > GLOW_THRESHOLD).then(|| Glow {
            radius: visual.size * GLOW_RADIUS_FACTOR,
            alpha: visual.alpha * GLOW_ALPHA_FACTOR,
        });
        Self {
            x: pos.x,
            y: pos.y,
            size: visual.size,
            alpha: visual.alpha,
            shape,
            glow,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GridField {
    pub params: FieldParams,
}

impl GridField {
    pub fn new(params: FieldParams) -> Self {
        Self { params }
    }

    /// Ambient wave at `(x, y)`, always in \[0, 1\].
    ///
    /// The spatial phase ramps in over `wave_warmup`, so at `t = 0` every
    /// point sits at the same rest value and the travelling wave develops
    /// from there.
    #[inline]
    pub fn breathing(&self, x: f32, y: f32, t: f32) -> f32 {
        let p = &self.params;
        let ramp = if p.wave_warmup > 0.0 {
            (t / p.wave_warmup).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let wave = (t * p.freq + (x * p.kx + y * p.ky) * ramp).sin();
        ((wave + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Falloff factor in \[0, 1\]; 1 with the pointer exactly on the point.
    #[inline]
    pub fn pointer_factor(&self, x: f32, y: f32, pointer: Vec2) -> f32 {
        let r = self.params.pointer_radius;
        let d2 = Vec2::new(x, y).distance_squared(pointer);
        if !(d2 < r * r) {
            return 0.0;
        }
        let u = 1.0 - d2.sqrt() / r;
        self.params.falloff.apply(u)
    }

    pub fn compute_visual(
        &self,
        x: f32,
        y: f32,
        t: f32,
        pointer: Vec2,
        flash: Option<&FlashEvent>,
    ) -> PointVisual {
        let p = &self.params;
        let mut size = p.base_size;
        let mut alpha = p.alpha_min + self.breathing(x, y, t) * p.alpha_range;

        if let Some(ev) = flash {
            let boost = ev.boost();
            size += boost * p.flash_size_gain;
            alpha += boost * p.flash_alpha_gain;
        }

        let factor = self.pointer_factor(x, y, pointer);
        if factor > 0.0 {
            size += factor * p.pointer_size_gain;
            alpha += factor * p.pointer_alpha_gain;
        }

        PointVisual {
            size,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Fixed visual for the static field: `noise_a`/`noise_b` in \[0, 1) pick
    /// size and alpha inside their ambient ranges.
    pub fn static_visual(&self, noise_a: f32, noise_b: f32) -> PointVisual {
        let p = &self.params;
        let scale = STATIC_SIZE_MIN + (STATIC_SIZE_MAX - STATIC_SIZE_MIN) * noise_a;
        PointVisual {
            size: p.base_size * scale,
            alpha: (p.alpha_min + p.alpha_range * noise_b).clamp(0.0, 1.0),
        }
    }
}
