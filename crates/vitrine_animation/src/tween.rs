//! Time-based tweens
//!
//! A tween interpolates a scalar from `from` to `to` over a fixed duration.
//! Used for programmatic smooth scrolling, where an interrupted animation is
//! retargeted from its current sampled value.

use crate::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    /// Create a tween starting at `start_ms`. Durations below 1ms are raised
    /// to 1ms.
    pub fn new(from: f32, to: f32, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1.0),
            easing,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in 0.0..=1.0
    pub fn progress(&self, now_ms: f64) -> f32 {
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    /// Value at `now_ms`. Returns exactly `to` once the tween is done.
    pub fn sample(&self, now_ms: f64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    /// Restart toward `new_to`, beginning from the current sampled value
    pub fn retarget(&mut self, now_ms: f64, new_to: f32, duration_ms: f64) {
        let current = self.sample(now_ms);
        *self = Self::new(current, new_to, now_ms, duration_ms, self.easing);
    }
}
