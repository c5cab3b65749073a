use crate::constants::{
    FLASH_MAX_AGE, FLASH_MAX_SCALE, FLASH_MIN_AGE, FLASH_MIN_SCALE, SPAWN_MARGIN,
};
use crate::lattice::Lattice;
use crate::viewport::Band;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::PI;

/// Short-lived brightness bump anchored to one lattice point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlashEvent {
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub age: u32,
    pub max_age: u32,
    pub scale: f32,
}

impl FlashEvent {
    /// Sine envelope: 0 at birth, 1 at mid-life, 0 at death.
    pub fn intensity(&self) -> f32 {
        if self.max_age == 0 || self.age > self.max_age {
            return 0.0;
        }
        let phase = self.age as f32 / self.max_age as f32;
        (PI * phase).sin().max(0.0)
    }

    /// Envelope scaled by this event's strength.
    pub fn boost(&self) -> f32 {
        self.intensity() * self.scale
    }

    #[inline]
    pub fn is_at(&self, x: f32, y: f32) -> bool {
        self.anchor_x == x && self.anchor_y == y
    }
}

#[derive(Clone, Debug)]
pub struct EventSpawner {
    events: SmallVec<[FlashEvent; 8]>,
    cap: usize,
    probability: f32,
}

impl EventSpawner {
    pub fn new(cap: usize, probability: f32) -> Self {
        Self {
            events: SmallVec::new(),
            cap,
            probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn events(&self) -> &[FlashEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Ages and retires events, then maybe spawns one inside `band` (widened
    /// by a margin so flashes can drift into view). Returns the new event.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        lattice: &Lattice,
        band: Band,
    ) -> Option<FlashEvent> {
        for ev in self.events.iter_mut() {
            ev.age += 1;
        }
        self.events.retain(|ev| ev.age <= ev.max_age);

        if self.events.len() >= self.cap || self.probability <= 0.0 {
            return None;
        }
        if rng.gen::<f32>() >= self.probability {
            return None;
        }
        let (_, height) = lattice.extent();
        let anchor = lattice.random_point(rng, band.expand(SPAWN_MARGIN, height))?;
        let ev = FlashEvent {
            anchor_x: anchor.x,
            anchor_y: anchor.y,
            age: 0,
            max_age: rng.gen_range(FLASH_MIN_AGE..=FLASH_MAX_AGE),
            scale: rng.gen_range(FLASH_MIN_SCALE..=FLASH_MAX_SCALE),
        };
        log::trace!(
            "[flash] spawn at ({:.0},{:.0}) life={} scale={:.2}",
            ev.anchor_x,
            ev.anchor_y,
            ev.max_age,
            ev.scale
        );
        self.events.push(ev);
        Some(ev)
    }

    /// Linear scan; the set is capped to a handful of events.
    pub fn event_at(&self, x: f32, y: f32) -> Option<&FlashEvent> {
        self.events.iter().find(|ev| ev.is_at(x, y))
    }
}
