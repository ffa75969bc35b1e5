//! Vitrine Core
//!
//! Foundational primitives shared by the Vitrine storefront widgets:
//!
//! - **Events**: platform-agnostic pointer, scroll, activation and text input
//! - **State transitions**: enum-based interaction states driven by events
//! - **Widget contract**: the `handle_event` / `tick` surface hosts drive

pub mod events;
pub mod state;
pub mod widget;

pub use events::{Event, EventData, EventType};
pub use state::StateTransitions;
pub use widget::Widget;
