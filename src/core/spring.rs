// Spring-damped value followers.
//
// A [`Spring`] chases a target with damped-oscillator dynamics. Targets may
// change every few milliseconds; the position only ever moves by
// integration, so it never jumps.

use super::constants::{
    SPRING_DEFAULT_REST_DELTA, SPRING_MAX_DT_SEC, SPRING_MAX_SUBSTEP_SEC,
    SPRING_REST_SPEED_FACTOR,
};
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: SPRING_DEFAULT_REST_DELTA,
        }
    }

    pub const fn from_preset(preset: (f32, f32, f32)) -> Self {
        Self::new(preset.0, preset.1, preset.2)
    }

    pub const fn with_rest_delta(mut self, rest_delta: f32) -> Self {
        self.rest_delta = rest_delta;
        self
    }

    /// Damping ratio; 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        let denom = 2.0 * (self.stiffness * self.mass.max(f32::EPSILON)).sqrt();
        if denom > 0.0 {
            self.damping / denom
        } else {
            f32::INFINITY
        }
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    target: f32,
    current: f32,
    velocity: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            target: initial,
            current: initial,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Place the value without animating.
    pub fn jump_to(&mut self, value: f32) {
        if value.is_finite() {
            self.target = value;
            self.current = value;
            self.velocity = 0.0;
        }
    }

    pub fn at_rest(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }

    /// Advance by `dt`. Returns `true` while still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.at_rest() {
            return false;
        }
        let mut remaining = dt.as_secs_f32().min(SPRING_MAX_DT_SEC);
        let cfg = self.config;
        let mass = cfg.mass.max(f32::EPSILON);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_SUBSTEP_SEC);
            let force = -cfg.stiffness * (self.current - self.target) - cfg.damping * self.velocity;
            self.velocity += force / mass * h;
            self.current += self.velocity * h;
            remaining -= h;
        }

        let rest_speed = cfg.rest_delta * SPRING_REST_SPEED_FACTOR;
        if (self.current - self.target).abs() < cfg.rest_delta && self.velocity.abs() < rest_speed {
            self.current = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Two independent springs sharing one config, for screen positions.
#[derive(Clone, Debug)]
pub struct SpringVec2 {
    x: Spring,
    y: Spring,
}

impl SpringVec2 {
    pub fn new(config: SpringConfig, initial: Vec2) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn jump_to(&mut self, value: Vec2) {
        self.x.jump_to(value.x);
        self.y.jump_to(value.y);
    }

    pub fn current(&self) -> Vec2 {
        Vec2::new(self.x.current(), self.y.current())
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn at_rest(&self) -> bool {
        self.x.at_rest() && self.y.at_rest()
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        let mx = self.x.tick(dt);
        let my = self.y.tick(dt);
        mx || my
    }
}
