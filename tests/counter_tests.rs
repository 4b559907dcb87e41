// Host-side tests for the count-up animator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod counter {
    include!("../src/core/counter.rs");
}

use counter::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn run_to_end(c: &mut CountUp) -> Vec<f64> {
    let mut seen = vec![c.value()];
    while c.tick(FRAME) {
        seen.push(c.value());
    }
    seen.push(c.value());
    seen
}

#[test]
fn integer_target_lands_exactly() {
    let mut c = CountUp::new(135.0, Duration::from_secs(2));
    assert!(c.trigger());
    let seen = run_to_end(&mut c);
    assert_eq!(c.value(), 135.0);
    assert_eq!(c.text(), "135");
    assert!(c.finished());
    for w in seen.windows(2) {
        assert!(w[1] >= w[0], "count went backwards: {:?}", w);
    }
    assert!(seen.iter().all(|v| v.fract() == 0.0));
}

#[test]
fn fractional_target_lands_exactly() {
    let mut c = CountUp::new(3.5, Duration::from_secs(2));
    c.trigger();
    run_to_end(&mut c);
    assert_eq!(c.value(), 3.5);
    assert_eq!(c.text(), "3.5");
}

#[test]
fn counts_only_once() {
    let mut c = CountUp::new(10.0, Duration::from_millis(100));
    assert!(c.trigger());
    run_to_end(&mut c);
    assert!(!c.trigger());
    assert!(!c.tick(FRAME));
    assert_eq!(c.value(), 10.0);
}

#[test]
fn does_nothing_until_triggered() {
    let mut c = CountUp::new(50.0, Duration::from_secs(1));
    assert!(!c.tick(FRAME));
    assert!(!c.started());
    assert_eq!(c.text(), "0");
}

#[test]
fn zero_duration_finishes_on_trigger() {
    let mut c = CountUp::new(42.0, Duration::ZERO);
    c.trigger();
    assert!(c.finished());
    assert_eq!(c.value(), 42.0);
}

#[test]
fn non_finite_target_becomes_zero() {
    let c = CountUp::new(f64::NAN, Duration::from_secs(1));
    assert_eq!(c.target(), 0.0);
}

#[test]
fn easing_is_front_loaded() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert!(ease_out_quart(0.5) > 0.9);
    assert_eq!(ease_out_quart(2.0), 1.0);
}

#[test]
fn display_rounding_depends_on_target() {
    assert_eq!(display_value(134.9, 135.0), 134.0);
    assert_eq!(display_value(3.46, 3.5), 3.5);
    assert_eq!(display_value(1.23, 3.5), 1.2);
}

#[test]
fn formatting_drops_trailing_zero() {
    assert_eq!(format_count(2.0), "2");
    assert_eq!(format_count(3.5), "3.5");
    assert_eq!(format_count(135.0), "135");
}
