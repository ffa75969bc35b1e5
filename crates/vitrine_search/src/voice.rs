//! Dictation state machine

use vitrine_core::StateTransitions;

/// Dictation events
pub mod voice_events {
    /// Mic button pressed while idle
    pub const LISTEN: u32 = 200;
    /// Backend reported the end of recognition
    pub const END: u32 = 201;
    /// Backend reported an error, or refused to start
    pub const ERROR: u32 = 202;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VoiceState {
    /// No backend; the mic control is hidden
    Unsupported,
    #[default]
    Idle,
    Listening,
}

impl StateTransitions for VoiceState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use voice_events::*;
        match (self, event) {
            (VoiceState::Idle, LISTEN) => Some(VoiceState::Listening),
            (VoiceState::Listening, END) => Some(VoiceState::Idle),
            (VoiceState::Listening, ERROR) => Some(VoiceState::Idle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::voice_events::*;
    use super::*;

    #[test]
    fn test_unsupported_is_terminal() {
        let mut state = VoiceState::Unsupported;
        for event in [LISTEN, END, ERROR] {
            assert!(!state.send(event));
        }
        assert_eq!(state, VoiceState::Unsupported);
    }

    #[test]
    fn test_listen_cycle() {
        let mut state = VoiceState::default();
        assert!(state.send(LISTEN));
        assert!(!state.send(LISTEN));
        assert!(state.send(ERROR));
        assert_eq!(state, VoiceState::Idle);
        assert!(!state.send(END));
    }
}
