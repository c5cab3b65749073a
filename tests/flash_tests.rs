// Host-side tests for flash events and the spawner.

use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::constants::{FLASH_MAX_AGE, FLASH_MAX_SCALE, FLASH_MIN_AGE, FLASH_MIN_SCALE, SPAWN_MARGIN};
use starfield_core::{Band, EventSpawner, FlashEvent, Lattice};

fn flash(age: u32, max_age: u32) -> FlashEvent {
    FlashEvent {
        anchor_x: 0.0,
        anchor_y: 0.0,
        age,
        max_age,
        scale: 1.0,
    }
}

#[test]
fn intensity_is_zero_at_both_ends() {
    assert_eq!(flash(0, 100).intensity(), 0.0);
    assert!(flash(100, 100).intensity() < 1e-6);
}

#[test]
fn intensity_peaks_at_half_life() {
    let peak = flash(50, 100).intensity();
    assert!((peak - 1.0).abs() < 1e-6);
    for age in 0..=100 {
        assert!(flash(age, 100).intensity() <= peak + 1e-6);
    }
}

#[test]
fn degenerate_events_have_no_intensity() {
    assert_eq!(flash(0, 0).intensity(), 0.0);
    assert_eq!(flash(120, 100).intensity(), 0.0);
}

#[test]
fn boost_scales_intensity() {
    let mut ev = flash(50, 100);
    ev.scale = 2.0;
    assert!((ev.boost() - 2.0).abs() < 1e-5);
}

#[test]
fn spawner_never_exceeds_cap() {
    let lattice = Lattice::new(35.0, 1000.0, 800.0);
    let band = lattice.full_band();
    let mut rng = StdRng::seed_from_u64(7);
    let mut spawner = EventSpawner::new(3, 1.0);
    let mut reached_cap = false;
    for _ in 0..1000 {
        spawner.tick(&mut rng, &lattice, band);
        assert!(spawner.len() <= 3);
        reached_cap |= spawner.len() == 3;
    }
    assert!(reached_cap);
}

#[test]
fn zero_cap_never_spawns() {
    let lattice = Lattice::new(35.0, 1000.0, 800.0);
    let mut rng = StdRng::seed_from_u64(1);
    let mut spawner = EventSpawner::new(0, 1.0);
    for _ in 0..500 {
        assert!(spawner.tick(&mut rng, &lattice, lattice.full_band()).is_none());
    }
    assert!(spawner.is_empty());
}

#[test]
fn zero_probability_never_spawns() {
    let lattice = Lattice::new(35.0, 1000.0, 800.0);
    let mut rng = StdRng::seed_from_u64(1);
    let mut spawner = EventSpawner::new(8, 0.0);
    for _ in 0..500 {
        spawner.tick(&mut rng, &lattice, lattice.full_band());
    }
    assert!(spawner.is_empty());
}

#[test]
fn spawned_events_sit_on_lattice_points() {
    let lattice = Lattice::new(35.0, 1000.0, 800.0);
    let mut rng = StdRng::seed_from_u64(42);
    let mut spawner = EventSpawner::new(8, 1.0);
    for _ in 0..300 {
        if let Some(ev) = spawner.tick(&mut rng, &lattice, lattice.full_band()) {
            let col = (ev.anchor_x / 35.0).round() as u32;
            let row = (ev.anchor_y / 35.0).round() as u32;
            assert_eq!(ev.anchor_x, lattice.coord(col));
            assert_eq!(ev.anchor_y, lattice.coord(row));
            assert!(lattice.columns().contains(&col));
            assert!((FLASH_MIN_AGE..=FLASH_MAX_AGE).contains(&ev.max_age));
            assert!(ev.scale >= FLASH_MIN_SCALE && ev.scale <= FLASH_MAX_SCALE);
            assert!(spawner.event_at(ev.anchor_x, ev.anchor_y).is_some());
        }
    }
}

#[test]
fn spawns_stay_near_visible_band() {
    let lattice = Lattice::new(49.0, 390.0, 6000.0);
    let band = Band {
        top: 2900.0,
        bottom: 3944.0,
    };
    let mut rng = StdRng::seed_from_u64(3);
    let mut spawner = EventSpawner::new(3, 1.0);
    for _ in 0..500 {
        if let Some(ev) = spawner.tick(&mut rng, &lattice, band) {
            assert!(ev.anchor_y >= band.top - SPAWN_MARGIN);
            assert!(ev.anchor_y <= band.bottom + SPAWN_MARGIN);
        }
    }
}

#[test]
fn events_retire_after_their_lifetime() {
    let lattice = Lattice::new(35.0, 1000.0, 800.0);
    let mut rng = StdRng::seed_from_u64(11);
    let mut spawner = EventSpawner::new(1, 1.0);
    let first = spawner
        .tick(&mut rng, &lattice, lattice.full_band())
        .expect("certain spawn");
    for _ in 0..first.max_age {
        assert!(spawner.tick(&mut rng, &lattice, lattice.full_band()).is_none());
    }
    assert_eq!(spawner.events()[0].age, first.max_age);

    // past its lifetime: retired, and the freed slot is refilled this tick
    let next = spawner.tick(&mut rng, &lattice, lattice.full_band());
    assert!(next.is_some());
    assert_eq!(spawner.len(), 1);
    assert_eq!(spawner.events()[0].age, 0);
}
