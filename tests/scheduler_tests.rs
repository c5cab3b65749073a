// Host-side tests for the frame-rate cap.

use starfield_core::FrameScheduler;
use std::time::Duration;

fn at(secs: f64) -> Duration {
    Duration::from_secs_f64(secs)
}

#[test]
fn first_callback_is_processed() {
    let mut s = FrameScheduler::new(30);
    assert!(s.poll(at(12.5)));
    assert_eq!(s.processed_frames(), 1);
}

#[test]
fn thirty_fps_on_sixty_hz_display() {
    let mut s = FrameScheduler::new(30);
    for i in 0..60 {
        s.poll(at(i as f64 / 60.0));
    }
    let processed = s.processed_frames();
    assert!((29..=31).contains(&processed), "processed {processed}");
    assert_eq!(processed + s.skipped_frames(), 60);
}

#[test]
fn sixty_fps_on_high_refresh_display() {
    let mut s = FrameScheduler::new(60);
    for i in 0..120 {
        s.poll(at(i as f64 / 120.0));
    }
    let processed = s.processed_frames();
    assert!((59..=61).contains(&processed), "processed {processed}");
}

#[test]
fn slow_display_processes_every_callback() {
    let mut s = FrameScheduler::new(60);
    for i in 0..30 {
        assert!(s.poll(at(i as f64 / 30.0)));
    }
    assert_eq!(s.skipped_frames(), 0);
}

#[test]
fn jittery_callbacks_do_not_drift() {
    let mut s = FrameScheduler::new(30);
    // callbacks a hair early still count within the tolerance
    let jitter = [0.0, 0.0333, 0.0666, 0.1, 0.1332, 0.1667];
    for t in jitter {
        assert!(s.poll(at(t)), "callback at {t} should run");
    }
}

#[test]
fn arm_guards_against_duplicate_requests() {
    let mut s = FrameScheduler::new(60);
    assert!(!s.is_armed());
    assert!(s.arm());
    assert!(!s.arm());
    assert!(s.is_armed());
    s.fire();
    assert!(!s.is_armed());
    assert!(s.arm());
}

#[test]
fn time_step_keeps_wave_speed() {
    let fast = FrameScheduler::new(60).time_step();
    let slow = FrameScheduler::new(30).time_step();
    assert!((fast - 0.01).abs() < 1e-6);
    assert!((slow - 0.02).abs() < 1e-6);
}

#[test]
fn zero_rate_is_treated_as_one() {
    let s = FrameScheduler::new(0);
    assert_eq!(s.interval(), Duration::from_secs(1));
}
