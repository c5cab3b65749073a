//! One-time device classification.
//!
//! The web front-end probes the browser once at start-up and hands the raw
//! readings to [`DeviceProfile::classify`]. Anything missing or contradictory
//! lands on the desktop profile, which only costs fidelity, never correctness.

use crate::constants::BASE_SPACING;
use crate::viewport::SurfaceMode;
use std::time::Duration;

/// Raw environment readings taken from the host at start-up.
#[derive(Clone, Debug, Default)]
pub struct DeviceSignals {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub max_touch_points: u32,
    pub coarse_pointer: bool,
    pub user_agent: String,
    /// Logical cores as reported by the host; 0 when unknown.
    pub hardware_concurrency: u32,
}

const MOBILE_UA_HINTS: &[&str] = &["Android", "iPhone", "iPad", "iPod", "Mobile", "Opera Mini"];
const SMALL_SCREEN_PX: f32 = 768.0;
const TINY_SCREEN_PX: f32 = 360.0;
const LOW_CORE_COUNT: u32 = 2;

impl DeviceSignals {
    pub fn has_touch(&self) -> bool {
        self.max_touch_points > 0
    }

    pub fn mobile_user_agent(&self) -> bool {
        MOBILE_UA_HINTS.iter().any(|h| self.user_agent.contains(h))
    }

    fn short_side(&self) -> Option<f32> {
        let w = self.viewport_width;
        let h = self.viewport_height;
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return None;
        }
        Some(w.min(h))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceTier {
    Desktop,
    /// Touch device: reduced frame rate and cheaper point rendering.
    Mobile,
    /// Static single pass, no animation loop and no input tracking.
    Minimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointShape {
    Star,
    Circle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceProfile {
    pub tier: DeviceTier,
    pub is_constrained: bool,
    pub target_frame_rate: u32,
    pub spacing: f32,
    pub pointer_throttle: Duration,
    pub max_concurrent_events: usize,
    pub lerp_factor: f32,
    pub spawn_probability: f32,
    pub point_shape: PointShape,
    pub glow: bool,
    pub cache_grid_lines: bool,
    pub animated: bool,
}

impl DeviceProfile {
    pub fn desktop() -> Self {
        Self {
            tier: DeviceTier::Desktop,
            is_constrained: false,
            target_frame_rate: 60,
            spacing: BASE_SPACING,
            pointer_throttle: Duration::from_millis(16),
            max_concurrent_events: 8,
            lerp_factor: 0.12,
            spawn_probability: 0.08,
            point_shape: PointShape::Star,
            glow: true,
            cache_grid_lines: false,
            animated: true,
        }
    }

    pub fn mobile() -> Self {
        Self {
            tier: DeviceTier::Mobile,
            is_constrained: true,
            target_frame_rate: 30,
            spacing: BASE_SPACING * 1.4,
            pointer_throttle: Duration::from_millis(32),
            max_concurrent_events: 3,
            lerp_factor: 0.2,
            spawn_probability: 0.05,
            point_shape: PointShape::Circle,
            glow: false,
            cache_grid_lines: true,
            animated: true,
        }
    }

    pub fn minimal() -> Self {
        Self {
            tier: DeviceTier::Minimal,
            max_concurrent_events: 0,
            spawn_probability: 0.0,
            animated: false,
            ..Self::mobile()
        }
    }

    /// Picks a profile from host readings.
    pub fn classify(signals: &DeviceSignals) -> Self {
        let small_screen = signals
            .short_side()
            .map(|s| s <= SMALL_SCREEN_PX)
            .unwrap_or(false);
        let constrained = signals.has_touch()
            && (signals.coarse_pointer || signals.mobile_user_agent() || small_screen);
        if !constrained {
            return Self::desktop();
        }
        let low_cores =
            signals.hardware_concurrency > 0 && signals.hardware_concurrency <= LOW_CORE_COUNT;
        let tiny_screen = signals
            .viewport_width
            .is_finite()
            .then_some(signals.viewport_width)
            .map(|w| w > 0.0 && w < TINY_SCREEN_PX)
            .unwrap_or(false);
        if low_cores || tiny_screen {
            Self::minimal()
        } else {
            Self::mobile()
        }
    }

    /// Surface strategy that suits this profile: constrained devices let the
    /// layer scroll natively with the document instead of redrawing per scroll.
    pub fn preferred_surface_mode(&self) -> SurfaceMode {
        if self.is_constrained {
            SurfaceMode::DocumentRelative
        } else {
            SurfaceMode::ViewportFixed
        }
    }

    pub fn frame_interval(&self) -> Duration {
        let fps = self.target_frame_rate.max(1);
        Duration::from_secs_f64(1.0 / fps as f64)
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::desktop()
    }
}
