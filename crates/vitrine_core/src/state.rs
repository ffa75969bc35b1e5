//! Widget interaction states
//!
//! Widgets define their own state enums and map events to transitions with
//! pattern matching:
//!
//! ```
//! use vitrine_core::state::StateTransitions;
//! use vitrine_core::events::event_types::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
//! enum Press {
//!     #[default]
//!     Released,
//!     Held,
//! }
//!
//! impl StateTransitions for Press {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Press::Released, POINTER_DOWN) => Some(Press::Held),
//!             (Press::Held, POINTER_UP | POINTER_LEAVE) => Some(Press::Released),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut state = Press::Released;
//! assert!(state.send(POINTER_DOWN));
//! assert_eq!(state, Press::Held);
//! assert!(!state.send(POINTER_DOWN));
//! assert!(state.send(POINTER_LEAVE));
//! ```

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state types that handle event transitions
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;

    /// Apply an event in place. Returns true if the state changed.
    fn send(&mut self, event: u32) -> bool {
        match self.on_event(event) {
            Some(next) if next != *self => {
                tracing::debug!(from = ?*self, to = ?next, event, "state transition");
                *self = next;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOGGLE: u32 = 1;
    const NOOP: u32 = 2;
    const STAY: u32 = 3;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Switch {
        Off,
        On,
    }

    impl StateTransitions for Switch {
        fn on_event(&self, event: u32) -> Option<Self> {
            match (self, event) {
                (Switch::Off, TOGGLE) => Some(Switch::On),
                (Switch::On, TOGGLE) => Some(Switch::Off),
                (s, STAY) => Some(*s),
                _ => None,
            }
        }
    }

    #[test]
    fn test_send_applies_transition() {
        let mut s = Switch::Off;
        assert!(s.send(TOGGLE));
        assert_eq!(s, Switch::On);
        assert!(s.send(TOGGLE));
        assert_eq!(s, Switch::Off);
    }

    #[test]
    fn test_send_ignores_unknown_and_self_transitions() {
        let mut s = Switch::On;
        assert!(!s.send(NOOP));
        assert!(!s.send(STAY));
        assert_eq!(s, Switch::On);
    }
}
