//! Carousel configuration

use serde::{Deserialize, Serialize};
use vitrine_animation::{Easing, FlingConfig};

use crate::asset::DEFAULT_ASSET_HOST;

/// Tuning for the carousel interaction engine (`[carousel]` in `vitrine.toml`)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Quiet period after the last scroll event before reconciling (ms)
    pub settle_delay_ms: f64,
    /// Delay between reconciling and emitting the visual change (ms)
    pub visual_delay_ms: f64,
    /// Gap between items, in the same units as item width
    pub gap: f32,
    /// Scroll distance per unit of pointer travel while dragging
    pub drag_sensitivity: f32,
    /// Fling step: px/ms velocity to px per frame
    pub momentum_step_scale: f32,
    /// Fling velocity multiplier per frame
    pub momentum_decay: f32,
    /// Fling stops once |velocity| falls to this (px/ms)
    pub momentum_threshold: f32,
    /// Animate programmatic scrolls instead of jumping
    pub smooth_scroll: bool,
    /// Duration of a programmatic smooth scroll (ms)
    pub smooth_scroll_ms: f64,
    pub smooth_scroll_easing: Easing,
    /// Settle on the nearest item once a gesture ends
    pub snap_on_release: bool,
    /// Host prefix for image assets
    pub asset_host: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 50.0,
            visual_delay_ms: 50.0,
            gap: 16.0,
            drag_sensitivity: 1.5,
            momentum_step_scale: 100.0,
            momentum_decay: 0.95,
            momentum_threshold: 0.1,
            smooth_scroll: true,
            smooth_scroll_ms: 300.0,
            smooth_scroll_easing: Easing::EaseInOutCubic,
            snap_on_release: true,
            asset_host: DEFAULT_ASSET_HOST.to_string(),
        }
    }
}

impl CarouselConfig {
    /// Config with instant programmatic scrolls and no release snapping.
    /// Offsets then follow input exactly, which keeps scripted checks simple.
    pub fn immediate() -> Self {
        Self {
            smooth_scroll: false,
            snap_on_release: false,
            ..Default::default()
        }
    }

    pub fn fling(&self) -> FlingConfig {
        FlingConfig {
            step_scale: self.momentum_step_scale,
            decay: self.momentum_decay,
            threshold: self.momentum_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_widget_constants() {
        let config = CarouselConfig::default();
        assert_eq!(config.settle_delay_ms, 50.0);
        assert_eq!(config.visual_delay_ms, 50.0);
        assert_eq!(config.gap, 16.0);
        assert_eq!(config.drag_sensitivity, 1.5);
        assert_eq!(config.fling(), FlingConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{ "gap": 24.0, "smooth_scroll_easing": "linear" }"#).unwrap();
        assert_eq!(config.gap, 24.0);
        assert_eq!(config.smooth_scroll_easing, Easing::Linear);
        assert_eq!(config.settle_delay_ms, 50.0);
        assert!(config.snap_on_release);
    }
}
