//! Replay scenario definition

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use vitrine_carousel::MediaDescriptor;

/// Scripted input for both widgets
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Carousel items, used when no store is given
    #[serde(default)]
    pub items: Vec<MediaDescriptor>,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse scenario")
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid scenario {}", path.display()))
    }
}

/// One scripted input. Steps are instantaneous; only `wait` moves the clock.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// First item laid out at `width`
    Layout { width: f32 },
    /// Native horizontal scroll by `delta`
    Scroll { delta: f32 },
    DragStart { x: f32 },
    DragMove { x: f32 },
    DragEnd,
    PointerLeave,
    /// Indicator click
    Indicator { index: usize },
    /// Let `ms` of virtual time pass, frame by frame
    Wait { ms: f64 },
    /// Replace the search text
    Type { text: String },
    /// Mic button click
    Mic,
    /// Recognizer results; each string is the best alternative of one result
    SpeechResult { transcripts: Vec<String> },
    SpeechEnd,
    SpeechError { message: String },
    /// Fail the replay unless the carousel's active index is `index`
    AssertActive { index: usize },
}
