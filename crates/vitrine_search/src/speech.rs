//! Speech recognition backends
//!
//! The widget talks to dictation through [`SpeechRecognizer`]. Hosts adapt
//! their platform recognizer to it and forward its callbacks (results, end,
//! error) to the [`SearchBar`](crate::SearchBar).

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Recognizer parameters applied once at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerSettings {
    pub continuous: bool,
    pub lang: String,
    pub interim_results: bool,
}

/// A pluggable dictation backend
pub trait SpeechRecognizer {
    fn configure(&mut self, settings: &RecognizerSettings);

    /// Begin listening. Results arrive asynchronously through the host.
    fn start(&mut self) -> Result<()>;

    /// Ask the backend to stop. It reports end through the host when done.
    fn stop(&mut self);
}

/// One candidate transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub transcript: String,
    #[serde(default)]
    pub confidence: f32,
}

impl Alternative {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            confidence: 1.0,
        }
    }
}

/// One recognized segment; the first alternative is the most likely
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub is_final: bool,
}

impl RecognitionResult {
    /// Single-alternative result
    pub fn best(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![Alternative::new(transcript)],
            is_final: false,
        }
    }
}

/// Join the best alternative of every result, in order
pub fn transcript(results: &[RecognitionResult]) -> String {
    results
        .iter()
        .filter_map(|r| r.alternatives.first())
        .map(|a| a.transcript.as_str())
        .collect()
}

/// Calls observed by a [`ScriptedRecognizer`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognizerLog {
    pub settings: Option<RecognizerSettings>,
    pub starts: usize,
    pub stops: usize,
}

/// Backend for replay and tests: records calls and optionally refuses to
/// start. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRecognizer {
    log: Rc<RefCell<RecognizerLog>>,
    start_error: Option<String>,
}

impl ScriptedRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose `start` always fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            start_error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn log(&self) -> RecognizerLog {
        self.log.borrow().clone()
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn configure(&mut self, settings: &RecognizerSettings) {
        self.log.borrow_mut().settings = Some(settings.clone());
    }

    fn start(&mut self) -> Result<()> {
        if let Some(message) = &self.start_error {
            return Err(SearchError::Start(message.clone()));
        }
        self.log.borrow_mut().starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.log.borrow_mut().stops += 1;
    }
}
