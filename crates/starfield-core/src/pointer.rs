//! Pointer and touch tracking with throttling and exponential smoothing.

use crate::constants::FAR_AWAY;
use glam::Vec2;
use std::time::Duration;

/// Client-space pointer position: the latest reading and the lagged copy
/// used by the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        let far = Vec2::from(FAR_AWAY);
        Self {
            raw: far,
            smoothed: far,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InputTracker {
    state: PointerState,
    lerp: f32,
    throttle: Duration,
    last_touch: Option<Duration>,
}

impl InputTracker {
    pub fn new(lerp: f32, throttle: Duration) -> Self {
        Self {
            state: PointerState::default(),
            // outside (0, 1) the smoothing would overshoot or never move
            lerp: lerp.clamp(0.01, 0.99),
            throttle,
            last_touch: None,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn lerp_factor(&self) -> f32 {
        self.lerp
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.state.raw = Vec2::new(x, y);
        }
    }

    /// Accepts at most one touch reading per throttle window; anything inside
    /// the window is dropped. Returns whether the reading was taken.
    pub fn on_touch_move(&mut self, x: f32, y: f32, now: Duration) -> bool {
        if let Some(last) = self.last_touch {
            if now.saturating_sub(last) < self.throttle {
                return false;
            }
        }
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        self.last_touch = Some(now);
        self.state.raw = Vec2::new(x, y);
        true
    }

    /// Releases the target so influence fades out instead of freezing.
    pub fn on_touch_end(&mut self) {
        self.state.raw = Vec2::from(FAR_AWAY);
        self.last_touch = None;
    }

    /// One processed frame of smoothing.
    pub fn step(&mut self) -> Vec2 {
        let s = &mut self.state;
        s.smoothed += (s.raw - s.smoothed) * self.lerp;
        s.smoothed
    }
}
