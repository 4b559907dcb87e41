// Scroll-driven state: progress fraction, header visibility and the
// active navigation section.

use super::constants::*;
use super::spring::{Spring, SpringConfig};
use std::time::Duration;

/// `top / (scroll_height - viewport_height)` clamped into `[0, 1]`.
/// Content that fits in the viewport has no progress.
pub fn scroll_fraction(top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if !(range > 0.0) || !top.is_finite() {
        return 0.0;
    }
    (top / range).clamp(0.0, 1.0)
}

#[derive(Clone, Debug)]
pub struct ScrollProgress {
    raw: f64,
    smoothed: Spring,
}

impl Default for ScrollProgress {
    fn default() -> Self {
        let cfg = SpringConfig::from_preset(PROGRESS_SPRING).with_rest_delta(PROGRESS_REST_DELTA);
        Self {
            raw: 0.0,
            smoothed: Spring::new(cfg, 0.0),
        }
    }
}

impl ScrollProgress {
    pub fn update(&mut self, top: f64, scroll_height: f64, viewport_height: f64) {
        self.raw = scroll_fraction(top, scroll_height, viewport_height);
        self.smoothed.set_target(self.raw as f32);
    }

    #[inline]
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Smoothed value, clamped so transient overshoot never leaves `[0, 1]`.
    pub fn smoothed(&self) -> f32 {
        self.smoothed.current().clamp(0.0, 1.0)
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        self.smoothed.tick(dt)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Show/hide decision for a fixed header.
#[derive(Clone, Debug)]
pub struct HeaderVisibility {
    last_y: f64,
    direction: Direction,
    visible: bool,
    threshold: f64,
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self {
            last_y: 0.0,
            direction: Direction::Up,
            visible: true,
            threshold: 0.0,
        }
    }
}

impl HeaderVisibility {
    /// Movements of at most `threshold` px leave the direction unchanged.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            ..Self::default()
        }
    }

    /// Feed one scroll sample; returns the new visibility.
    pub fn sample(&mut self, y: f64) -> bool {
        if !y.is_finite() {
            return self.visible;
        }
        let dy = y - self.last_y;
        if dy > self.threshold {
            self.direction = Direction::Down;
            self.last_y = y;
        } else if dy < -self.threshold {
            self.direction = Direction::Up;
            self.last_y = y;
        }
        self.visible = y < HEADER_ALWAYS_VISIBLE_BELOW_PX || self.direction == Direction::Up;
        self.visible
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }
}

#[inline]
pub fn header_is_solid(y: f64) -> bool {
    y > HEADER_SOLID_AFTER_PX
}

/// Section bounds relative to the viewport top.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section under the marker line, else the last one already scrolled
/// past it, else `None`.
pub fn active_section(sections: &[SectionBounds], viewport_height: f64) -> Option<&str> {
    let marker = viewport_height * ACTIVE_SECTION_MARKER;
    if let Some(s) = sections
        .iter()
        .find(|s| s.top <= marker && marker < s.top + s.height)
    {
        return Some(&s.id);
    }
    sections
        .iter()
        .rev()
        .find(|s| s.top <= marker)
        .map(|s| s.id.as_str())
}
