use crate::constants::{FRAME_TOLERANCE_MS, TIME_STEP_60FPS};
use std::time::Duration;

/// Caps the processed frame rate independently of the display refresh rate.
///
/// The host calls [`poll`](Self::poll) from every animation callback; only
/// callbacks that land after a full interval do work. `last` advances in whole
/// intervals so a 60 Hz display feeding a 30 fps target settles into every
/// other callback rather than drifting.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    interval: Duration,
    last: Option<Duration>,
    pending: bool,
    processed: u64,
    skipped: u64,
}

impl FrameScheduler {
    pub fn new(target_fps: u32) -> Self {
        let fps = target_fps.max(1);
        Self {
            interval: Duration::from_secs_f64(1.0 / fps as f64),
            last: None,
            pending: false,
            processed: 0,
            skipped: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            self.processed += 1;
            return true;
        };
        let elapsed = now.saturating_sub(last);
        let tolerance = Duration::from_secs_f64(FRAME_TOLERANCE_MS / 1000.0);
        if elapsed + tolerance < self.interval {
            self.skipped += 1;
            return false;
        }
        let interval_ns = self.interval.as_nanos().max(1);
        let rem = Duration::from_nanos((elapsed.as_nanos() % interval_ns) as u64);
        // a callback slightly early (within tolerance) leaves rem ~ interval
        let rem = if elapsed < self.interval { Duration::ZERO } else { rem };
        self.last = Some(now.saturating_sub(rem));
        self.processed += 1;
        true
    }

    /// Marks an animation callback as requested. Returns `false` when one is
    /// already outstanding, in which case the caller must not request another.
    pub fn arm(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Clears the outstanding flag at the top of the animation callback.
    pub fn fire(&mut self) {
        self.pending = false;
    }

    pub fn is_armed(&self) -> bool {
        self.pending
    }

    pub fn processed_frames(&self) -> u64 {
        self.processed
    }

    pub fn skipped_frames(&self) -> u64 {
        self.skipped
    }

    /// Animation time advanced per processed frame, so the wave speed stays
    /// the same at any target rate.
    pub fn time_step(&self) -> f32 {
        TIME_STEP_60FPS * 60.0 * self.interval.as_secs_f32()
    }
}
