// Pointer-relative tilt and magnetic offsets.

use super::constants::*;
use super::spring::{Spring, SpringConfig, SpringVec2};
use glam::Vec2;
use std::time::Duration;

/// Element bounds in viewport coordinates (as from `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Rotation in degrees `(rotate_x, rotate_y)` for a pointer over `rect`.
///
/// Offsets are normalised by half the element size, so the edges map to
/// `±amount`. Positive `rotate_y` tips the right edge away.
pub fn tilt_rotation(rect: Rect, pointer: Vec2, amount: f32) -> (f32, f32) {
    if rect.is_degenerate() || !pointer.is_finite() {
        return (0.0, 0.0);
    }
    let amount = amount.abs();
    let d = pointer - rect.center();
    let rx = -(d.y / (rect.height * 0.5)) * amount;
    let ry = (d.x / (rect.width * 0.5)) * amount;
    (rx.clamp(-amount, amount), ry.clamp(-amount, amount))
}

/// Translation pulling an element toward the pointer.
pub fn magnetic_offset(rect: Rect, pointer: Vec2, strength: f32) -> Vec2 {
    if rect.is_degenerate() || !pointer.is_finite() {
        return Vec2::ZERO;
    }
    (pointer - rect.center()) * strength
}

#[derive(Clone, Debug)]
pub struct TiltState {
    rotate_x: Spring,
    rotate_y: Spring,
    scale: Spring,
    amount: f32,
    hover_scale: f32,
    hovered: bool,
}

impl TiltState {
    pub fn new(amount: f32, hover_scale: f32) -> Self {
        let tilt = SpringConfig::from_preset(TILT_SPRING);
        let hover = SpringConfig::from_preset(HOVER_SCALE_SPRING).with_rest_delta(0.0005);
        Self {
            rotate_x: Spring::new(tilt, 0.0),
            rotate_y: Spring::new(tilt, 0.0),
            scale: Spring::new(hover, 1.0),
            amount,
            hover_scale,
            hovered: false,
        }
    }

    pub fn enter(&mut self) {
        self.hovered = true;
        self.scale.set_target(self.hover_scale);
    }

    pub fn move_to(&mut self, rect: Rect, pointer: Vec2) {
        let (rx, ry) = tilt_rotation(rect, pointer, self.amount);
        self.rotate_x.set_target(rx);
        self.rotate_y.set_target(ry);
    }

    pub fn leave(&mut self) {
        self.hovered = false;
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
        self.scale.set_target(1.0);
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn rotation(&self) -> (f32, f32) {
        (self.rotate_x.current(), self.rotate_y.current())
    }

    pub fn target_rotation(&self) -> (f32, f32) {
        (self.rotate_x.target(), self.rotate_y.target())
    }

    pub fn scale(&self) -> f32 {
        self.scale.current()
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        let a = self.rotate_x.tick(dt);
        let b = self.rotate_y.tick(dt);
        let c = self.scale.tick(dt);
        a || b || c
    }

    /// CSS transform for the current frame.
    pub fn css_transform(&self) -> String {
        let (rx, ry) = self.rotation();
        format!(
            "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
            rx,
            ry,
            self.scale()
        )
    }
}

impl Default for TiltState {
    fn default() -> Self {
        Self::new(TILT_DEFAULT_AMOUNT_DEG, TILT_DEFAULT_HOVER_SCALE)
    }
}

#[derive(Clone, Debug)]
pub struct MagneticState {
    offset: SpringVec2,
    strength: f32,
}

impl MagneticState {
    pub fn new(strength: f32) -> Self {
        Self {
            offset: SpringVec2::new(SpringConfig::from_preset(MAGNETIC_SPRING), Vec2::ZERO),
            strength,
        }
    }

    pub fn move_to(&mut self, rect: Rect, pointer: Vec2) {
        self.offset
            .set_target(magnetic_offset(rect, pointer, self.strength));
    }

    pub fn leave(&mut self) {
        self.offset.set_target(Vec2::ZERO);
    }

    pub fn offset(&self) -> Vec2 {
        self.offset.current()
    }

    pub fn target_offset(&self) -> Vec2 {
        self.offset.target()
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        self.offset.tick(dt)
    }

    pub fn css_transform(&self) -> String {
        let o = self.offset();
        format!("translate({:.2}px, {:.2}px)", o.x, o.y)
    }
}
