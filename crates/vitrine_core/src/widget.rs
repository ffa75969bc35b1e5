//! Base widget trait

use crate::events::Event;

/// Base trait for all headless widgets
///
/// Hosts forward input with [`Widget::handle_event`] and call
/// [`Widget::tick`] once per display refresh.
pub trait Widget {
    /// Handle an input event
    fn handle_event(&mut self, event: &Event);

    /// Advance timers and animations to `now_ms`.
    ///
    /// Returns true while the widget still needs frames (animations running
    /// or timers pending).
    fn tick(&mut self, now_ms: f64) -> bool;
}
