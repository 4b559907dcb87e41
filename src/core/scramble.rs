// Hover "decode" effect: random glyphs resolve left to right into the
// original text.

use super::constants::{SCRAMBLE_GLYPHS, SCRAMBLE_ITERATION_STEP, SCRAMBLE_STEP_MS};
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Scramble {
    text: Vec<char>,
    iteration: f32,
    active: bool,
    carry: Duration,
}

impl Scramble {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            iteration: 0.0,
            active: false,
            carry: Duration::ZERO,
        }
    }

    pub fn original(&self) -> String {
        self.text.iter().collect()
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        self.active = true;
        self.iteration = 0.0;
        self.carry = Duration::ZERO;
    }

    /// Stop and return the text to restore.
    pub fn stop(&mut self) -> String {
        self.active = false;
        self.original()
    }

    /// One 30 ms step: render the current frame, then advance.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let frame: String = self
            .text
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if c == ' ' || (i as f32) < self.iteration {
                    c
                } else {
                    SCRAMBLE_GLYPHS[rng.gen_range(0..SCRAMBLE_GLYPHS.len())] as char
                }
            })
            .collect();
        if self.iteration >= self.text.len() as f32 {
            self.active = false;
        }
        self.iteration += SCRAMBLE_ITERATION_STEP;
        frame
    }

    /// Frame-driven variant: runs as many 30 ms steps as fit into `dt` and
    /// returns the latest frame if any step ran.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: Duration, rng: &mut R) -> Option<String> {
        if !self.active {
            return None;
        }
        let step = Duration::from_millis(SCRAMBLE_STEP_MS);
        self.carry += dt;
        let mut latest = None;
        while self.active && self.carry >= step {
            self.carry -= step;
            latest = Some(self.step(rng));
        }
        latest
    }
}
