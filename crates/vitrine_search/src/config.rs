//! Search widget configuration

use serde::{Deserialize, Serialize};

use crate::speech::RecognizerSettings;

pub const DEFAULT_PLACEHOLDER: &str = "Search the web store";

/// `[search]` in `vitrine.toml`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last edit before a search is emitted (ms)
    pub debounce_ms: f64,
    pub placeholder: String,
    /// Recognition language tag
    pub lang: String,
    /// Keep listening after the first final result
    pub continuous: bool,
    /// Deliver partial transcripts while the user is still speaking
    pub interim_results: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1200.0,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            lang: "en-US".to_string(),
            continuous: false,
            interim_results: true,
        }
    }
}

impl SearchConfig {
    pub fn recognizer_settings(&self) -> RecognizerSettings {
        RecognizerSettings {
            continuous: self.continuous,
            lang: self.lang.clone(),
            interim_results: self.interim_results,
        }
    }
}
