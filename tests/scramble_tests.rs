// Host-side tests for the hover scramble effect.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scramble {
    include!("../src/core/scramble.rs");
}

use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scramble::*;
use std::time::Duration;

#[test]
fn resolves_left_to_right_into_original() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = Scramble::new("Hi there");
    s.start();
    let mut frames = Vec::new();
    while s.active() {
        frames.push(s.step(&mut rng));
    }
    assert_eq!(frames.last().map(String::as_str), Some("Hi there"));
    // iteration advances by half a character per step
    assert_eq!(frames.len(), 17);
    for (n, frame) in frames.iter().enumerate() {
        let resolved = (n as f32 * SCRAMBLE_ITERATION_STEP).ceil() as usize;
        let got: Vec<char> = frame.chars().collect();
        let want: Vec<char> = "Hi there".chars().collect();
        assert_eq!(got.len(), want.len());
        assert_eq!(&got[..resolved.min(want.len())], &want[..resolved.min(want.len())]);
    }
}

#[test]
fn spaces_are_never_scrambled() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = Scramble::new("a b c");
    s.start();
    let frame = s.step(&mut rng);
    let chars: Vec<char> = frame.chars().collect();
    assert_eq!(chars[1], ' ');
    assert_eq!(chars[3], ' ');
    assert!(chars
        .iter()
        .all(|c| *c == ' ' || SCRAMBLE_GLYPHS.contains(&(*c as u8))));
}

#[test]
fn stop_restores_original() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = Scramble::new("Rust");
    s.start();
    s.step(&mut rng);
    assert_eq!(s.stop(), "Rust");
    assert!(!s.active());
    assert_eq!(s.tick(Duration::from_millis(100), &mut rng), None);
}

#[test]
fn tick_runs_whole_steps_and_carries_remainder() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut s = Scramble::new("abcdef");
    s.start();
    assert_eq!(s.tick(Duration::from_millis(20), &mut rng), None);
    // 20 + 20 ms crosses one 30 ms step
    assert!(s.tick(Duration::from_millis(20), &mut rng).is_some());
    let mut last = None;
    for _ in 0..100 {
        if let Some(f) = s.tick(Duration::from_millis(16), &mut rng) {
            last = Some(f);
        }
    }
    assert!(!s.active());
    assert_eq!(last.as_deref(), Some("abcdef"));
}

#[test]
fn restart_begins_from_scratch() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut s = Scramble::new("xyz");
    s.start();
    while s.active() {
        s.step(&mut rng);
    }
    s.start();
    assert!(s.active());
    assert_eq!(s.original(), "xyz");
}
