//! Vitrine Search
//!
//! Headless search bar for the storefront page:
//!
//! - **Debounced queries**: edits restart a timer; the last value is searched
//! - **Voice dictation**: a pluggable [`SpeechRecognizer`] fills the query
//! - **Alerts**: user-facing messages when dictation is unavailable or fails

pub mod config;
pub mod error;
pub mod search_bar;
pub mod speech;
pub mod voice;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use search_bar::{SearchBar, SearchOutput, RECOGNITION_ALERT, UNSUPPORTED_ALERT};
pub use speech::{
    transcript, Alternative, RecognitionResult, RecognizerLog, RecognizerSettings,
    ScriptedRecognizer, SpeechRecognizer,
};
pub use voice::VoiceState;
