//! Vitrine Animation System
//!
//! Time-driven building blocks for headless widgets.
//!
//! # Features
//!
//! - **Scheduler**: cancellable one-shot timers and a next-frame request slot
//! - **Debouncer**: "cancel previous, schedule new" over a single timer handle
//! - **Frame clocks**: a virtual, frame-stepped clock for replay and tests
//! - **Tweens**: eased scalar transitions for programmatic smooth scrolling
//! - **Fling momentum**: exponentially decaying post-release velocity

pub mod clock;
pub mod debounce;
pub mod easing;
pub mod momentum;
pub mod scheduler;
pub mod tween;

pub use clock::{FrameClock, ManualClock, FRAME_INTERVAL_MS};
pub use debounce::Debouncer;
pub use easing::Easing;
pub use momentum::{Fling, FlingConfig};
pub use scheduler::{Fired, Scheduler, TimerId};
pub use tween::Tween;
