//! Search bar widget
//!
//! A text query with a debounced search output and optional voice dictation.
//! Typing and dictation both replace the value and restart the debounce;
//! only the value present when the debounce fires is searched.

use std::collections::VecDeque;

use serde::Serialize;
use vitrine_animation::{Debouncer, Scheduler};
use vitrine_core::events::event_types::{ACTIVATE, TEXT_INPUT};
use vitrine_core::{Event, EventData, StateTransitions, Widget};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::speech::{transcript, RecognitionResult, SpeechRecognizer};
use crate::voice::{voice_events, VoiceState};

pub const UNSUPPORTED_ALERT: &str = "Speech recognition is not supported in your browser.";
pub const RECOGNITION_ALERT: &str = "Error during voice recognition. Please try again.";

/// Output for the host page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SearchOutput {
    /// Run a search for this query
    Search(String),
    /// Dictation started or stopped
    Listening(bool),
    /// Show a blocking message to the user
    Alert(String),
}

pub struct SearchBar {
    config: SearchConfig,
    value: String,
    placeholder: String,
    needs_render: bool,
    voice: VoiceState,
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    scheduler: Scheduler<String>,
    debounce: Debouncer,
    outbox: VecDeque<SearchOutput>,
}

impl SearchBar {
    /// A search bar without dictation
    pub fn new(config: SearchConfig) -> Self {
        Self {
            value: String::new(),
            placeholder: config.placeholder.clone(),
            needs_render: true,
            voice: VoiceState::Unsupported,
            recognizer: None,
            scheduler: Scheduler::new(),
            debounce: Debouncer::new(config.debounce_ms),
            outbox: VecDeque::new(),
            config,
        }
    }

    /// A search bar dictating through `recognizer`
    pub fn with_recognizer(config: SearchConfig, mut recognizer: Box<dyn SpeechRecognizer>) -> Self {
        recognizer.configure(&config.recognizer_settings());
        let mut bar = Self::new(config);
        bar.recognizer = Some(recognizer);
        bar.voice = VoiceState::Idle;
        bar
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Change the placeholder. Returns true, and marks the widget for
    /// re-render, only when the value differs.
    pub fn set_placeholder(&mut self, placeholder: &str) -> bool {
        if self.placeholder == placeholder {
            return false;
        }
        self.placeholder = placeholder.to_string();
        self.needs_render = true;
        true
    }

    /// Consume the re-render flag
    pub fn take_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    pub fn voice_state(&self) -> VoiceState {
        self.voice
    }

    pub fn is_mic_visible(&self) -> bool {
        self.voice != VoiceState::Unsupported
    }

    /// The "Listening..." overlay
    pub fn is_overlay_visible(&self) -> bool {
        self.voice == VoiceState::Listening
    }

    /// Whether a search is waiting on the debounce
    pub fn is_search_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    /// The user edited the query
    pub fn on_input(&mut self, text: &str, now_ms: f64) {
        self.fire_due(now_ms);
        self.set_value(text.to_string(), now_ms);
    }

    /// The mic button was pressed
    pub fn on_mic(&mut self, now_ms: f64) {
        self.fire_due(now_ms);
        let Some(recognizer) = self.recognizer.as_mut() else {
            self.fail(SearchError::Unsupported);
            return;
        };

        if self.voice == VoiceState::Listening {
            tracing::debug!("stopping dictation");
            recognizer.stop();
            return;
        }

        self.voice.send(voice_events::LISTEN);
        self.outbox.push_back(SearchOutput::Listening(true));
        if let Err(err) = recognizer.start() {
            self.stop_listening();
            self.fail(err);
        }
    }

    /// The backend delivered results. Each call carries every result of the
    /// session so far.
    pub fn on_speech_result(&mut self, results: &[RecognitionResult], now_ms: f64) {
        self.fire_due(now_ms);
        if self.voice != VoiceState::Listening {
            tracing::trace!("speech result outside a dictation session ignored");
            return;
        }
        let text = transcript(results);
        tracing::trace!(%text, "dictated");
        self.set_value(text, now_ms);
    }

    /// The backend finished recognizing
    pub fn on_speech_end(&mut self, now_ms: f64) {
        self.fire_due(now_ms);
        if self.voice.send(voice_events::END) {
            self.outbox.push_back(SearchOutput::Listening(false));
        }
    }

    /// The backend reported an error
    pub fn on_speech_error(&mut self, message: &str, now_ms: f64) {
        self.fire_due(now_ms);
        if self.stop_listening() {
            self.fail(SearchError::Recognition(message.to_string()));
        } else {
            tracing::debug!(message, "speech error outside a dictation session ignored");
        }
    }

    /// Drain outputs in emission order
    pub fn take_outputs(&mut self) -> Vec<SearchOutput> {
        self.outbox.drain(..).collect()
    }

    fn set_value(&mut self, value: String, now_ms: f64) {
        self.value = value;
        self.debounce
            .trigger(&mut self.scheduler, now_ms, self.value.clone());
    }

    fn stop_listening(&mut self) -> bool {
        if !self.voice.send(voice_events::ERROR) {
            return false;
        }
        self.outbox.push_back(SearchOutput::Listening(false));
        true
    }

    /// Log a dictation failure and tell the user
    fn fail(&mut self, err: SearchError) {
        tracing::warn!(%err, "dictation failed");
        let message = match err {
            SearchError::Unsupported => UNSUPPORTED_ALERT,
            SearchError::Start(_) | SearchError::Recognition(_) => RECOGNITION_ALERT,
        };
        self.outbox.push_back(SearchOutput::Alert(message.to_string()));
    }

    fn fire_due(&mut self, now_ms: f64) {
        while let Some(fired) = self.scheduler.pop_due(now_ms) {
            if !self.debounce.acknowledge(fired.id) {
                continue;
            }
            tracing::debug!(query = %fired.payload, "search");
            self.outbox.push_back(SearchOutput::Search(fired.payload));
        }
    }
}

impl Widget for SearchBar {
    fn handle_event(&mut self, event: &Event) {
        match (event.event_type, &event.data) {
            (TEXT_INPUT, EventData::TextInput { text }) => self.on_input(text, event.timestamp),
            (ACTIVATE, _) => self.on_mic(event.timestamp),
            _ => self.fire_due(event.timestamp),
        }
    }

    fn tick(&mut self, now_ms: f64) -> bool {
        self.fire_due(now_ms);
        !self.scheduler.is_idle()
    }
}
