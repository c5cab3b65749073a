// Host-side tests for pointer smoothing and touch throttling.

use glam::Vec2;
use starfield_core::constants::FAR_AWAY;
use starfield_core::InputTracker;
use std::time::Duration;

#[test]
fn starts_far_away() {
    let tracker = InputTracker::new(0.12, Duration::from_millis(16));
    let s = tracker.state();
    assert_eq!(s.raw, Vec2::from(FAR_AWAY));
    assert_eq!(s.smoothed, Vec2::from(FAR_AWAY));
}

#[test]
fn smoothing_approaches_without_overshoot() {
    let mut tracker = InputTracker::new(0.12, Duration::from_millis(16));
    let target = Vec2::new(200.0, 300.0);
    tracker.on_pointer_move(target.x, target.y);
    let mut prev = tracker.state().smoothed;
    for _ in 0..200 {
        let next = tracker.step();
        assert!(next.distance(target) <= prev.distance(target));
        assert!(next.x <= target.x && next.y <= target.y);
        prev = next;
    }
    assert!(prev.distance(target) < 1.0);
}

#[test]
fn single_step_moves_by_lerp_fraction() {
    let mut tracker = InputTracker::new(0.2, Duration::from_millis(32));
    tracker.on_pointer_move(0.0, 0.0);
    let s = tracker.step();
    assert!((s.x - (-1000.0 * 0.8)).abs() < 1e-3);
    assert!((s.y - (-1000.0 * 0.8)).abs() < 1e-3);
}

#[test]
fn lerp_is_clamped() {
    assert_eq!(InputTracker::new(0.0, Duration::ZERO).lerp_factor(), 0.01);
    assert_eq!(InputTracker::new(1.5, Duration::ZERO).lerp_factor(), 0.99);
}

#[test]
fn touch_inside_throttle_window_is_dropped() {
    let mut tracker = InputTracker::new(0.2, Duration::from_millis(32));
    assert!(tracker.on_touch_move(10.0, 10.0, Duration::from_millis(0)));
    assert!(!tracker.on_touch_move(50.0, 50.0, Duration::from_millis(10)));
    assert_eq!(tracker.state().raw, Vec2::new(10.0, 10.0));
    assert!(!tracker.on_touch_move(50.0, 50.0, Duration::from_millis(31)));
    assert!(tracker.on_touch_move(60.0, 70.0, Duration::from_millis(32)));
    assert_eq!(tracker.state().raw, Vec2::new(60.0, 70.0));
}

#[test]
fn touch_end_releases_target() {
    let mut tracker = InputTracker::new(0.2, Duration::from_millis(32));
    tracker.on_touch_move(100.0, 100.0, Duration::from_millis(5));
    for _ in 0..50 {
        tracker.step();
    }
    tracker.on_touch_end();
    assert_eq!(tracker.state().raw, Vec2::from(FAR_AWAY));
    let before = tracker.state().smoothed;
    let after = tracker.step();
    assert!(after.distance(Vec2::from(FAR_AWAY)) < before.distance(Vec2::from(FAR_AWAY)));

    // throttle window restarts after release
    assert!(tracker.on_touch_move(1.0, 1.0, Duration::from_millis(6)));
}

#[test]
fn non_finite_coordinates_are_ignored() {
    let mut tracker = InputTracker::new(0.12, Duration::from_millis(16));
    tracker.on_pointer_move(5.0, 5.0);
    tracker.on_pointer_move(f32::NAN, 1.0);
    assert_eq!(tracker.state().raw, Vec2::new(5.0, 5.0));
    assert!(!tracker.on_touch_move(f32::INFINITY, 0.0, Duration::from_secs(1)));
}
