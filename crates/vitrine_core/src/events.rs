//! Input events
//!
//! Platform-agnostic events fed into widgets by the host. Timestamps are
//! milliseconds on the host's monotonic clock (e.g. `performance.now()`).

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_LEAVE: EventType = 5;
    /// Discrete activation of a control (indicator dot, mic button)
    pub const ACTIVATE: EventType = 8;
    /// Text input event (the full current value of a text field)
    pub const TEXT_INPUT: EventType = 22;
    /// Native scroll input (wheel, trackpad) applied as a delta
    pub const SCROLL: EventType = 30;
    /// First layout pass reported the size of a rendered item
    pub const LAYOUT: EventType = 40;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    /// Host timestamp in milliseconds
    pub timestamp: f64,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
    },
    Scroll {
        delta_x: f32,
        delta_y: f32,
    },
    /// Index of the activated control within its group
    Activate {
        index: usize,
    },
    TextInput {
        text: String,
    },
    Layout {
        width: f32,
        height: f32,
    },
    None,
}

impl Event {
    /// Pointer event of the given type at page coordinates `(x, y)`
    pub fn pointer(event_type: EventType, x: f32, y: f32, timestamp: f64) -> Self {
        Self {
            event_type,
            data: EventData::Pointer { x, y },
            timestamp,
        }
    }

    /// Pointer left the widget. Carries no position.
    pub fn pointer_leave(timestamp: f64) -> Self {
        Self {
            event_type: event_types::POINTER_LEAVE,
            data: EventData::None,
            timestamp,
        }
    }

    pub fn scroll(delta_x: f32, delta_y: f32, timestamp: f64) -> Self {
        Self {
            event_type: event_types::SCROLL,
            data: EventData::Scroll { delta_x, delta_y },
            timestamp,
        }
    }

    pub fn activate(index: usize, timestamp: f64) -> Self {
        Self {
            event_type: event_types::ACTIVATE,
            data: EventData::Activate { index },
            timestamp,
        }
    }

    pub fn text_input(text: impl Into<String>, timestamp: f64) -> Self {
        Self {
            event_type: event_types::TEXT_INPUT,
            data: EventData::TextInput { text: text.into() },
            timestamp,
        }
    }

    pub fn layout(width: f32, height: f32, timestamp: f64) -> Self {
        Self {
            event_type: event_types::LAYOUT,
            data: EventData::Layout { width, height },
            timestamp,
        }
    }

    /// Horizontal pointer position, if this is a pointer event
    pub fn pointer_x(&self) -> Option<f32> {
        match self.data {
            EventData::Pointer { x, .. } => Some(x),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_x_only_for_pointer_data() {
        let down = Event::pointer(event_types::POINTER_DOWN, 120.0, 4.0, 0.0);
        assert_eq!(down.pointer_x(), Some(120.0));

        let leave = Event::pointer_leave(5.0);
        assert_eq!(leave.event_type, event_types::POINTER_LEAVE);
        assert_eq!(leave.pointer_x(), None);
    }

    #[test]
    fn test_constructors_tag_event_types() {
        assert_eq!(Event::scroll(1.0, 0.0, 0.0).event_type, event_types::SCROLL);
        assert_eq!(Event::activate(2, 0.0).event_type, event_types::ACTIVATE);
        assert_eq!(Event::text_input("a", 0.0).event_type, event_types::TEXT_INPUT);
        assert_eq!(Event::layout(300.0, 200.0, 0.0).event_type, event_types::LAYOUT);
    }
}
