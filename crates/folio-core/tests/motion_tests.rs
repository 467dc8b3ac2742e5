// Host-side tests for the follower spring, blob drift, and reveal stagger.

use folio_core::{
    stagger_delay, BlobDrift, FollowerSpring, BLOB_DRIFTS, FOLLOWER_PRESSED_SCALE,
};
use glam::Vec2;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn spring_snaps_to_the_first_target() {
    let mut spring = FollowerSpring::default();
    spring.step(Vec2::new(320.0, 540.0), false, FRAME);
    assert_eq!(spring.position(), Vec2::new(320.0, 540.0));
}

#[test]
fn spring_converges_to_a_fixed_target() {
    let mut spring = FollowerSpring::default();
    spring.step(Vec2::ZERO, false, FRAME);
    let target = Vec2::new(100.0, 50.0);
    for _ in 0..300 {
        spring.step(target, false, FRAME);
    }
    assert!(
        spring.position().distance(target) < 1.0,
        "spring stuck at {:?}",
        spring.position()
    );
}

#[test]
fn spring_stays_finite_across_a_long_frame_gap() {
    let mut spring = FollowerSpring::default();
    spring.step(Vec2::ZERO, false, FRAME);
    // a tab switch can hand us a multi-second delta
    spring.step(Vec2::new(500.0, 500.0), false, 10.0);
    assert!(spring.position().is_finite());
    for _ in 0..300 {
        spring.step(Vec2::new(500.0, 500.0), false, FRAME);
    }
    assert!(spring.position().distance(Vec2::new(500.0, 500.0)) < 1.0);
}

#[test]
fn pressed_scale_swells_and_releases() {
    let mut spring = FollowerSpring::default();
    spring.step(Vec2::ZERO, false, FRAME);
    for _ in 0..60 {
        spring.step(Vec2::ZERO, true, FRAME);
    }
    assert!((spring.scale() - FOLLOWER_PRESSED_SCALE).abs() < 0.05);
    for _ in 0..60 {
        spring.step(Vec2::ZERO, false, FRAME);
    }
    assert!((spring.scale() - 1.0).abs() < 0.05);
}

#[test]
fn blob_drift_is_zero_at_period_boundaries() {
    let drift = BlobDrift {
        amplitude: Vec2::new(100.0, -100.0),
        period_secs: 20.0,
    };
    assert!(drift.offset_at(0.0).abs_diff_eq(Vec2::ZERO, 1e-4));
    assert!(drift.offset_at(20.0).abs_diff_eq(Vec2::ZERO, 1e-4));
    assert!(drift.offset_at(40.0).abs_diff_eq(Vec2::ZERO, 1e-4));
}

#[test]
fn blob_drift_peaks_at_half_period() {
    let drift = BlobDrift {
        amplitude: Vec2::new(100.0, -100.0),
        period_secs: 20.0,
    };
    assert!(drift
        .offset_at(10.0)
        .abs_diff_eq(Vec2::new(100.0, -100.0), 1e-4));
}

#[test]
fn blob_drift_loops_cleanly() {
    for drift in &BLOB_DRIFTS {
        let a = drift.offset_at(3.7);
        let b = drift.offset_at(3.7 + drift.period_secs);
        assert!(a.abs_diff_eq(b, 1e-3), "{a:?} vs {b:?}");
    }
}

#[test]
fn stagger_delays_increase_with_index() {
    assert_eq!(stagger_delay(0), 0.0);
    let mut prev = stagger_delay(0);
    for i in 1..8 {
        let d = stagger_delay(i);
        assert!(d > prev);
        prev = d;
    }
    assert!((stagger_delay(3) - 0.3).abs() < 1e-6);
}
