//! Search bar driven through host events
//!
//! These tests verify that:
//! - text input and dictation share one debounce
//! - the recognizer is configured once with the dictation settings
//! - every voice failure path ends idle with an alert

use pretty_assertions::assert_eq;
use vitrine_core::{Event, Widget};
use vitrine_search::{
    RecognitionResult, RecognizerSettings, ScriptedRecognizer, SearchBar, SearchConfig,
    SearchOutput, VoiceState, RECOGNITION_ALERT,
};

fn dictating_bar(config: SearchConfig) -> (SearchBar, ScriptedRecognizer) {
    let recognizer = ScriptedRecognizer::new();
    let bar = SearchBar::with_recognizer(config, Box::new(recognizer.clone()));
    (bar, recognizer)
}

#[test]
fn test_recognizer_configured_for_single_utterance() {
    let (bar, recognizer) = dictating_bar(SearchConfig::default());
    assert_eq!(
        recognizer.log().settings,
        Some(RecognizerSettings {
            continuous: false,
            lang: "en-US".to_string(),
            interim_results: true,
        })
    );
    assert!(bar.is_mic_visible());
    assert_eq!(bar.voice_state(), VoiceState::Idle);
}

#[test]
fn test_events_drive_typing_and_mic() {
    let (mut bar, recognizer) = dictating_bar(SearchConfig::default());

    bar.handle_event(&Event::text_input("mars", 0.0));
    bar.handle_event(&Event::activate(0, 500.0));
    assert_eq!(recognizer.log().starts, 1);

    // Dictation overrides the typed value before the debounce fires
    bar.on_speech_result(&[RecognitionResult::best("jupiter")], 800.0);
    bar.on_speech_end(800.0);

    let mut now = 800.0;
    while bar.tick(now) {
        now += 16.0;
    }
    assert!(now >= 2000.0);
    assert_eq!(
        bar.take_outputs(),
        vec![
            SearchOutput::Listening(true),
            SearchOutput::Listening(false),
            SearchOutput::Search("jupiter".to_string()),
        ]
    );
}

#[test]
fn test_custom_debounce() {
    let config = SearchConfig {
        debounce_ms: 200.0,
        ..Default::default()
    };
    let mut bar = SearchBar::new(config);
    bar.handle_event(&Event::text_input("venus", 0.0));
    // A later unrelated event delivers the due search
    bar.handle_event(&Event::scroll(0.0, 0.0, 250.0));
    assert_eq!(bar.take_outputs(), vec![SearchOutput::Search("venus".to_string())]);
    assert!(!bar.is_search_pending());
}

#[test]
fn test_results_after_session_are_ignored() {
    let (mut bar, _recognizer) = dictating_bar(SearchConfig::default());
    bar.on_mic(0.0);
    bar.on_speech_error("aborted", 5.0);
    bar.on_speech_result(&[RecognitionResult::best("late")], 10.0);
    assert_eq!(bar.value(), "");
    assert!(!bar.is_search_pending());
    assert_eq!(
        bar.take_outputs().last(),
        Some(&SearchOutput::Alert(RECOGNITION_ALERT.to_string()))
    );
}

#[test]
fn test_search_output_serializes_tagged() {
    let json = serde_json::to_string(&SearchOutput::Search("moon".into())).unwrap();
    assert_eq!(json, r#"{"type":"search","value":"moon"}"#);
}
