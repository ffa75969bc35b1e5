//! Frame clocks
//!
//! A [`FrameClock`] is the time source a host uses to drive widget ticks.
//! [`ManualClock`] is a virtual clock for deterministic replay and tests.

/// Display refresh interval at 60fps, in milliseconds
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// A source of monotonic milliseconds
pub trait FrameClock {
    fn now_ms(&self) -> f64;
}

/// A virtual clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    position_ms: f64,
    frame_ms: f64,
}

impl ManualClock {
    /// Create a clock at t=0 stepping at 60fps
    pub fn new() -> Self {
        Self {
            position_ms: 0.0,
            frame_ms: FRAME_INTERVAL_MS,
        }
    }

    /// Create a clock with a custom frame interval.
    ///
    /// The interval is clamped to 1ms..=1000ms.
    pub fn with_frame_interval(frame_ms: f64) -> Self {
        Self {
            position_ms: 0.0,
            frame_ms: frame_ms.clamp(1.0, 1000.0),
        }
    }

    pub fn frame_interval(&self) -> f64 {
        self.frame_ms
    }

    /// Move forward by `delta_ms`. Negative deltas are ignored.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        self.position_ms += delta_ms.max(0.0);
        self.position_ms
    }

    /// Move forward by one frame and return the new time
    pub fn step_frame(&mut self) -> f64 {
        self.advance(self.frame_ms)
    }

    /// Jump to an absolute position (never before zero)
    pub fn seek(&mut self, position_ms: f64) {
        self.position_ms = position_ms.max(0.0);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.position_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_steps_frames() {
        let mut clock = ManualClock::with_frame_interval(16.0);
        assert_eq!(clock.now_ms(), 0.0);
        assert_eq!(clock.step_frame(), 16.0);
        assert_eq!(clock.step_frame(), 32.0);
    }

    #[test]
    fn test_manual_clock_ignores_rewind() {
        let mut clock = ManualClock::new();
        clock.advance(100.0);
        clock.advance(-50.0);
        assert_eq!(clock.now_ms(), 100.0);

        clock.seek(-10.0);
        assert_eq!(clock.now_ms(), 0.0);
    }

    #[test]
    fn test_frame_interval_is_clamped() {
        assert_eq!(ManualClock::with_frame_interval(0.0).frame_interval(), 1.0);
        assert_eq!(ManualClock::with_frame_interval(5000.0).frame_interval(), 1000.0);
    }
}
