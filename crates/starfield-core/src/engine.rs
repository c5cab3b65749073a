use crate::field::{Falloff, FieldParams, GridField, PointSprite, PointVisual};
use crate::flash::EventSpawner;
use crate::lattice::Lattice;
use crate::paint::{GridLines, Painter};
use crate::pointer::InputTracker;
use crate::profile::DeviceProfile;
use crate::scheduler::FrameScheduler;
use crate::viewport::{Band, LayoutSnapshot, ResizeOutcome, SurfaceMode, ViewportState};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub falloff: Falloff,
    pub grid_lines: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            falloff: Falloff::Cubic,
            grid_lines: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub points: usize,
    pub active_events: usize,
    pub time: f32,
}

/// The whole background: one instance per page, driven by host callbacks.
pub struct StarfieldEngine<R: Rng> {
    profile: DeviceProfile,
    mode: SurfaceMode,
    viewport: ViewportState,
    lattice: Lattice,
    field: GridField,
    tracker: InputTracker,
    spawner: EventSpawner,
    scheduler: FrameScheduler,
    rng: R,
    noise_seed: u64,
    time: f32,
    grid_lines: bool,
    surface_dirty: bool,
}

impl<R: Rng> StarfieldEngine<R> {
    pub fn new(
        profile: DeviceProfile,
        mode: SurfaceMode,
        layout: &LayoutSnapshot,
        config: EngineConfig,
        mut rng: R,
    ) -> Self {
        let viewport = ViewportState::new(mode, layout);
        let lattice = Lattice::new(profile.spacing, viewport.width, viewport.height);
        let field = GridField::new(FieldParams {
            falloff: config.falloff,
            ..FieldParams::for_spacing(lattice.spacing())
        });
        let noise_seed = rng.gen();
        log::info!(
            "[engine] tier={:?} mode={:?} surface={:.0}x{:.0} spacing={:.1} fps={}",
            profile.tier,
            mode,
            viewport.width,
            viewport.height,
            lattice.spacing(),
            profile.target_frame_rate
        );
        Self {
            tracker: InputTracker::new(profile.lerp_factor, profile.pointer_throttle),
            spawner: EventSpawner::new(profile.max_concurrent_events, profile.spawn_probability),
            scheduler: FrameScheduler::new(profile.target_frame_rate),
            profile,
            mode,
            viewport,
            lattice,
            field,
            rng,
            noise_seed,
            time: 0.0,
            grid_lines: config.grid_lines,
            surface_dirty: true,
        }
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn mode(&self) -> SurfaceMode {
        self.mode
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn field(&self) -> &GridField {
        &self.field
    }

    pub fn spawner(&self) -> &EventSpawner {
        &self.spawner
    }

    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_animated(&self) -> bool {
        self.profile.animated
    }

    /// Layout change from the host (window resize or content size observer).
    pub fn on_layout(&mut self, layout: &LayoutSnapshot) -> ResizeOutcome {
        let outcome = self.viewport.apply_layout(self.mode, layout);
        if outcome == ResizeOutcome::Resized {
            self.lattice.resize(self.viewport.width, self.viewport.height);
            self.surface_dirty = true;
            log::debug!(
                "[surface] resize -> {:.0}x{:.0} (generation {})",
                self.viewport.width,
                self.viewport.height,
                self.lattice.generation()
            );
        }
        outcome
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.viewport.set_scroll(scroll_y);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.profile.animated {
            self.tracker.on_pointer_move(x, y);
        }
    }

    pub fn on_touch_move(&mut self, x: f32, y: f32, now: Duration) -> bool {
        self.profile.animated && self.tracker.on_touch_move(x, y, now)
    }

    pub fn on_touch_end(&mut self) {
        self.tracker.on_touch_end();
    }

    /// Marks an animation callback as requested; `false` means one is
    /// already pending and the host must not request another.
    pub fn request_frame(&mut self) -> bool {
        self.profile.animated && self.scheduler.arm()
    }

    /// Called first thing inside the animation callback.
    pub fn begin_callback(&mut self) {
        self.scheduler.fire();
    }

    pub fn visible_band(&self) -> Band {
        self.viewport.visible_band(self.mode)
    }

    /// Smoothed pointer in surface coordinates.
    pub fn pointer_on_surface(&self) -> Vec2 {
        let offset = self.viewport.pointer_offset(self.mode);
        self.tracker.state().smoothed + Vec2::new(0.0, offset)
    }

    /// Visual of the point at `pos` with the current time, pointer and flashes.
    pub fn visual_at(&self, pos: Vec2) -> PointVisual {
        let flash = self.spawner.event_at(pos.x, pos.y);
        self.field
            .compute_visual(pos.x, pos.y, self.time, self.pointer_on_surface(), flash)
    }

    /// One animation callback. Returns `None` when the callback was skipped by
    /// the frame cap or the profile does not animate.
    pub fn frame(&mut self, now: Duration, painter: &mut dyn Painter) -> Option<FrameStats> {
        if !self.profile.animated || !self.scheduler.poll(now) {
            return None;
        }
        self.tracker.step();
        let band = self.visible_band();
        self.spawner.tick(&mut self.rng, &self.lattice, band);

        self.sync_surface(painter);
        painter.clear(self.viewport.band_rect(band));
        self.draw_lines(painter, band);

        let pointer = self.pointer_on_surface();
        let t = self.time;
        let shape = self.profile.point_shape;
        let glow = self.profile.glow;
        let field = &self.field;
        let spawner = &self.spawner;
        let mut points = 0usize;
        let mut draw = |pos: Vec2| {
            let flash = spawner.event_at(pos.x, pos.y);
            let visual = field.compute_visual(pos.x, pos.y, t, pointer, flash);
            painter.point(&PointSprite::new(pos, visual, shape, glow));
            points += 1;
        };
        match self.mode {
            SurfaceMode::ViewportFixed => {
                for &pos in self.lattice.points() {
                    draw(pos);
                }
            }
            SurfaceMode::DocumentRelative => {
                self.lattice.for_each_in(band, |_, _, pos| draw(pos));
            }
        }

        let stats = FrameStats {
            points,
            active_events: self.spawner.len(),
            time: t,
        };
        self.time += self.scheduler.time_step();
        log::trace!(
            "[frame] t={:.2} points={} flashes={}",
            stats.time,
            stats.points,
            stats.active_events
        );
        Some(stats)
    }

    /// Single pass over the whole surface with fixed per-point variety, for
    /// profiles that do not animate. Call again after an accepted resize.
    pub fn render_static(&mut self, painter: &mut dyn Painter) -> FrameStats {
        self.sync_surface(painter);
        let band = self.lattice.full_band();
        painter.clear(self.viewport.band_rect(band));
        self.draw_lines(painter, band);

        let shape = self.profile.point_shape;
        let seed = self.noise_seed;
        let field = &self.field;
        let mut points = 0usize;
        self.lattice.for_each_in(band, |col, row, pos| {
            let (a, b) = point_noise(seed, col, row);
            let visual = field.static_visual(a, b);
            painter.point(&PointSprite::new(pos, visual, shape, false));
            points += 1;
        });
        log::info!("[engine] static field rendered ({} points)", points);
        FrameStats {
            points,
            active_events: 0,
            time: self.time,
        }
    }

    fn sync_surface(&mut self, painter: &mut dyn Painter) {
        if self.surface_dirty {
            let (w, h) = self.viewport.surface_px();
            painter.resize(w, h);
            self.surface_dirty = false;
        }
    }

    fn draw_lines(&self, painter: &mut dyn Painter, band: Band) {
        if !self.grid_lines {
            return;
        }
        let (width, height) = self.lattice.extent();
        painter.grid_lines(&GridLines {
            spacing: self.lattice.spacing(),
            width,
            height,
            clip: self.viewport.band_rect(band),
            generation: self.lattice.generation(),
            cacheable: self.profile.cache_grid_lines,
        });
    }
}

/// Two stable values in \[0, 1) for a lattice cell (splitmix64 finalizer).
pub fn point_noise(seed: u64, col: u32, row: u32) -> (f32, f32) {
    let mut z = seed
        ^ (col as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (row as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    let a = (z >> 40) as f32 / (1u64 << 24) as f32;
    let b = ((z >> 16) & 0xFF_FFFF) as f32 / (1u64 << 24) as f32;
    (a, b)
}
