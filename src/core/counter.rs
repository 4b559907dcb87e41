// One-shot eased count-up from zero to a target.

use std::time::Duration;

#[inline]
pub fn ease_out_quart(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

#[inline]
fn is_integer(v: f64) -> bool {
    v.fract() == 0.0
}

/// Value shown for an intermediate raw value: floored for integer targets,
/// one decimal otherwise.
pub fn display_value(raw: f64, target: f64) -> f64 {
    if is_integer(target) {
        raw.floor()
    } else {
        (raw * 10.0).round() / 10.0
    }
}

/// `135` → "135", `3.5` → "3.5", `2.0` → "2".
pub fn format_count(value: f64) -> String {
    if is_integer(value) {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[derive(Clone, Debug)]
pub struct CountUp {
    target: f64,
    duration: Duration,
    elapsed: Duration,
    started: bool,
    finished: bool,
    value: f64,
}

impl CountUp {
    pub fn new(target: f64, duration: Duration) -> Self {
        Self {
            target: if target.is_finite() { target } else { 0.0 },
            duration,
            elapsed: Duration::ZERO,
            started: false,
            finished: false,
            value: 0.0,
        }
    }

    /// Start the animation. Only the first call has any effect.
    pub fn trigger(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        if self.duration.is_zero() {
            self.finish();
        }
        true
    }

    fn finish(&mut self) {
        self.value = self.target;
        self.finished = true;
    }

    /// Advance by `dt`. Returns `true` while the animation is running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.started || self.finished {
            return false;
        }
        self.elapsed += dt;
        let p = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        if p >= 1.0 {
            self.finish();
            return false;
        }
        self.value = display_value(ease_out_quart(p) * self.target, self.target);
        true
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn text(&self) -> String {
        format_count(self.value)
    }
}
