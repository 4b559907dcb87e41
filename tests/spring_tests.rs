// Host-side tests for the spring follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod spring {
    include!("../src/core/spring.rs");
}

use constants::*;
use glam::Vec2;
use spring::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn run(s: &mut Spring, frames: usize) -> (f32, f32) {
    let mut lo = s.current();
    let mut hi = s.current();
    for _ in 0..frames {
        s.tick(FRAME);
        lo = lo.min(s.current());
        hi = hi.max(s.current());
    }
    (lo, hi)
}

#[test]
fn step_response_overshoot_is_bounded_for_every_preset() {
    let presets = [
        CURSOR_DOT_SPRING,
        CURSOR_RING_SPRING,
        CURSOR_SCALE_SPRING,
        TILT_SPRING,
        HOVER_SCALE_SPRING,
        MAGNETIC_SPRING,
        PROGRESS_SPRING,
    ];
    for p in presets {
        let mut s = Spring::new(SpringConfig::from_preset(p), 0.0);
        s.set_target(100.0);
        let (lo, hi) = run(&mut s, 300);
        assert!(hi <= 120.0, "preset {:?} overshot to {}", p, hi);
        assert!(lo >= 0.0, "preset {:?} moved backwards to {}", p, lo);
    }
}

#[test]
fn retargeting_mid_flight_never_teleports() {
    let mut s = Spring::new(SpringConfig::from_preset(CURSOR_DOT_SPRING), 0.0);
    let targets = [0.0f32, 40.0, 80.0, 20.0, 60.0];
    let mut prev = s.current();
    for t in targets {
        s.set_target(t);
        for _ in 0..3 {
            s.tick(FRAME);
            let step = (s.current() - prev).abs();
            assert!(step < 40.0, "moved {} px in one frame", step);
            assert!(s.current() > -16.0 && s.current() < 96.0);
            prev = s.current();
        }
    }
}

#[test]
fn settles_on_final_target_within_three_seconds() {
    let mut s = Spring::new(SpringConfig::from_preset(CURSOR_RING_SPRING), 0.0);
    for t in [40.0, 80.0, 20.0, 60.0] {
        s.set_target(t);
        s.tick(FRAME);
    }
    let mut frames = 0;
    while s.tick(FRAME) {
        frames += 1;
        assert!(frames < 3 * 60, "still moving after 3 s");
    }
    assert_eq!(s.current(), 60.0);
    assert_eq!(s.velocity(), 0.0);
    assert!(s.at_rest());
}

#[test]
fn resting_spring_does_not_tick() {
    let mut s = Spring::new(SpringConfig::from_preset(TILT_SPRING), 5.0);
    assert!(!s.tick(FRAME));
    s.set_target(5.0);
    assert!(!s.tick(FRAME));
    assert_eq!(s.current(), 5.0);
}

#[test]
fn non_finite_targets_are_ignored() {
    let mut s = Spring::new(SpringConfig::from_preset(TILT_SPRING), 1.0);
    s.set_target(f32::NAN);
    s.set_target(f32::INFINITY);
    assert_eq!(s.target(), 1.0);
    s.jump_to(f32::NAN);
    assert_eq!(s.current(), 1.0);
}

#[test]
fn long_stalls_are_capped() {
    let cfg = SpringConfig::from_preset(CURSOR_DOT_SPRING);
    let mut stalled = Spring::new(cfg, 0.0);
    let mut capped = Spring::new(cfg, 0.0);
    stalled.set_target(100.0);
    capped.set_target(100.0);
    stalled.tick(Duration::from_secs(5));
    capped.tick(Duration::from_secs_f32(SPRING_MAX_DT_SEC));
    assert!((stalled.current() - capped.current()).abs() < 1e-4);
}

#[test]
fn jump_to_places_without_velocity() {
    let mut s = Spring::new(SpringConfig::from_preset(CURSOR_DOT_SPRING), 0.0);
    s.set_target(50.0);
    s.tick(FRAME);
    s.jump_to(10.0);
    assert_eq!(s.current(), 10.0);
    assert_eq!(s.target(), 10.0);
    assert!(s.at_rest());
}

#[test]
fn damping_ratio_matches_hand_computation() {
    let cfg = SpringConfig::new(100.0, 20.0, 1.0);
    assert!((cfg.damping_ratio() - 1.0).abs() < 1e-6);
    let over = SpringConfig::from_preset(PROGRESS_SPRING);
    assert!(over.damping_ratio() > 1.0);
}

#[test]
fn vec2_springs_move_axes_independently() {
    let mut v = SpringVec2::new(SpringConfig::from_preset(CURSOR_DOT_SPRING), Vec2::ZERO);
    v.set_target(Vec2::new(100.0, 0.0));
    v.tick(FRAME);
    assert!(v.current().x > 0.0);
    assert_eq!(v.current().y, 0.0);
    while v.tick(FRAME) {}
    assert_eq!(v.current(), Vec2::new(100.0, 0.0));
    assert!(v.at_rest());
}
