//! Scroll surface
//!
//! Headless stand-in for the native scroll primitive. Writes are clamped to
//! `[0, max_offset]` and report whether the offset actually moved, which is
//! when a native scroller would fire a scroll event. Programmatic smooth
//! scrolls run here as an eased tween advanced once per frame.

use vitrine_animation::{Easing, Tween};

use crate::config::CarouselConfig;

#[derive(Debug, Clone)]
pub struct ScrollSurface {
    offset: f32,
    max_offset: f32,
    smooth: Option<Tween>,
    smooth_enabled: bool,
    smooth_ms: f64,
    easing: Easing,
}

impl ScrollSurface {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            smooth: None,
            smooth_enabled: config.smooth_scroll,
            smooth_ms: config.smooth_scroll_ms,
            easing: config.smooth_scroll_easing,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Update the scrollable range. The current offset is re-clamped.
    pub fn set_max_offset(&mut self, max_offset: f32) -> bool {
        self.max_offset = max_offset.max(0.0);
        self.set_offset(self.offset)
    }

    /// Write an absolute offset. Returns true if it moved.
    pub fn set_offset(&mut self, value: f32) -> bool {
        let clamped = if value.is_nan() {
            self.offset
        } else {
            value.clamp(0.0, self.max_offset)
        };
        if clamped == self.offset {
            return false;
        }
        tracing::trace!(from = self.offset, to = clamped, "scroll offset");
        self.offset = clamped;
        true
    }

    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.set_offset(self.offset + delta)
    }

    /// Programmatic scroll to `target`.
    ///
    /// With smooth scrolling enabled this starts (or retargets) the eased
    /// animation and returns false; the offset then moves on later frames.
    /// Otherwise it jumps and returns whether the offset moved.
    pub fn scroll_to(&mut self, target: f32, now_ms: f64) -> bool {
        let target = target.clamp(0.0, self.max_offset);
        if !self.smooth_enabled {
            self.smooth = None;
            return self.set_offset(target);
        }
        if target == self.offset {
            self.smooth = None;
            return false;
        }
        match self.smooth.as_mut() {
            Some(tween) => tween.retarget(now_ms, target, self.smooth_ms),
            None => {
                self.smooth = Some(Tween::new(
                    self.offset,
                    target,
                    now_ms,
                    self.smooth_ms,
                    self.easing,
                ))
            }
        }
        tracing::debug!(from = self.offset, to = target, "smooth scroll started");
        false
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth.is_some()
    }

    /// Target of the running smooth scroll
    pub fn smooth_target(&self) -> Option<f32> {
        self.smooth.map(|t| t.target())
    }

    /// Stop a running smooth scroll where it is. Returns true if one was
    /// running.
    pub fn cancel_smooth(&mut self) -> bool {
        self.smooth.take().is_some()
    }

    /// Advance the smooth scroll to `now_ms`. Returns true if the offset
    /// moved.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let Some(tween) = self.smooth else {
            return false;
        };
        let value = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.smooth = None;
        }
        self.set_offset(value)
    }
}
