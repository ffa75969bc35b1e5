//! Fling momentum
//!
//! After a drag is released the content keeps moving under an exponentially
//! decaying velocity. Each frame moves by `velocity * step_scale`, then the
//! velocity is multiplied by `decay`. The fling ends once `|velocity|` is at
//! or below `threshold`.

/// Fling tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingConfig {
    /// Converts a px/ms velocity into a per-frame step
    pub step_scale: f32,
    /// Per-frame velocity multiplier, in (0, 1)
    pub decay: f32,
    /// Velocity magnitude at or below which the fling stops
    pub threshold: f32,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            step_scale: 100.0,
            decay: 0.95,
            threshold: 0.1,
        }
    }
}

impl FlingConfig {
    /// Clamp values so that every fling terminates
    pub fn sanitized(self) -> Self {
        Self {
            step_scale: self.step_scale,
            decay: self.decay.clamp(0.0, 0.999),
            threshold: self.threshold.max(1e-4),
        }
    }
}

/// A decaying fling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fling {
    velocity: f32,
    config: FlingConfig,
}

impl Fling {
    pub fn new(velocity: f32, config: FlingConfig) -> Self {
        Self {
            velocity,
            config: config.sanitized(),
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Advance one frame and return the offset delta for that frame
    pub fn step(&mut self) -> f32 {
        let delta = self.velocity * self.config.step_scale;
        self.velocity *= self.config.decay;
        delta
    }

    /// Whether another frame should be requested
    pub fn is_active(&self) -> bool {
        self.velocity.abs() > self.config.threshold
    }

    /// Total distance the fling will still travel, stepping until it stops
    pub fn remaining_distance(&self) -> f32 {
        let mut rest = *self;
        let mut total = 0.0;
        loop {
            total += rest.step();
            if !rest.is_active() {
                return total;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames_until_stop(initial: f32) -> usize {
        let mut fling = Fling::new(initial, FlingConfig::default());
        let mut frames = 0;
        loop {
            fling.step();
            frames += 1;
            if !fling.is_active() {
                return frames;
            }
        }
    }

    #[test]
    fn test_first_step_scales_velocity() {
        let mut fling = Fling::new(-1.0, FlingConfig::default());
        let delta = fling.step();
        assert!((delta + 100.0).abs() < 1e-4);
        assert!((fling.velocity() + 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_strictly_decreases() {
        let mut fling = Fling::new(2.0, FlingConfig::default());
        let mut last = fling.velocity().abs();
        while fling.is_active() {
            fling.step();
            let now = fling.velocity().abs();
            assert!(now < last);
            assert!((now / last - 0.95).abs() < 1e-4);
            last = now;
        }
        assert!(fling.velocity().abs() <= 0.1);
    }

    #[test]
    fn test_terminates_within_bounded_frames() {
        // 2.0 * 0.95^n <= 0.1  =>  n = 59
        assert_eq!(frames_until_stop(2.0), 59);
        assert!(frames_until_stop(-2.0) <= 90);
        assert!(frames_until_stop(10.0) <= 120);
    }

    #[test]
    fn test_slow_fling_stops_after_one_frame() {
        assert_eq!(frames_until_stop(0.1), 1);
    }

    #[test]
    fn test_sanitized_decay_always_terminates() {
        let config = FlingConfig {
            decay: 1.5,
            ..Default::default()
        };
        let mut fling = Fling::new(1.0, config);
        let mut frames = 0;
        while fling.is_active() && frames < 100_000 {
            fling.step();
            frames += 1;
        }
        assert!(!fling.is_active());
    }

    #[test]
    fn test_remaining_distance_matches_stepping() {
        let fling = Fling::new(1.0, FlingConfig::default());
        let mut stepped = fling;
        let mut total = 0.0;
        loop {
            total += stepped.step();
            if !stepped.is_active() {
                break;
            }
        }
        assert!((fling.remaining_distance() - total).abs() < 1e-3);
    }
}
