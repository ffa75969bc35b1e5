//! Drag-momentum engine
//!
//! A pointer drag moves the content directly; releasing it hands over to a
//! decaying fling. The engine only computes offsets and deltas, the carousel
//! writes them to the scroll surface.
//!
//! ```text
//!            POINTER_DOWN              FLING
//!   Idle ───────────────▶ Dragging ──────────▶ Momentum
//!    ▲  ◀───────────────     │                  │  │
//!    │   POINTER_LEAVE /     │ POINTER_DOWN     │  │
//!    │   POINTER_UP (still)  ◀──────────────────┘  │
//!    └─────────────────────────────────────────────┘
//!                        SETTLED
//! ```

use vitrine_animation::{Fling, FlingConfig};
use vitrine_core::events::event_types::{POINTER_DOWN, POINTER_LEAVE, POINTER_UP};
use vitrine_core::StateTransitions;

/// Engine-internal events
pub mod drag_events {
    /// Released with a non-zero velocity
    pub const FLING: u32 = 100;
    /// Fling velocity decayed below the threshold
    pub const SETTLED: u32 = 101;
    /// Cancelled by a programmatic scroll
    pub const CANCEL: u32 = 102;
}

/// Drag engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    Momentum,
}

impl StateTransitions for DragPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use drag_events::*;
        match (self, event) {
            (DragPhase::Idle, POINTER_DOWN) => Some(DragPhase::Dragging),
            (DragPhase::Momentum, POINTER_DOWN) => Some(DragPhase::Dragging),
            (DragPhase::Dragging, POINTER_LEAVE) => Some(DragPhase::Idle),
            (DragPhase::Dragging, POINTER_UP) => Some(DragPhase::Idle),
            (DragPhase::Dragging, FLING) => Some(DragPhase::Momentum),
            (DragPhase::Momentum, SETTLED) => Some(DragPhase::Idle),
            (DragPhase::Dragging | DragPhase::Momentum, CANCEL) => Some(DragPhase::Idle),
            _ => None,
        }
    }
}

/// State captured at drag start and updated per pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_offset: f32,
    pub pointer_origin_x: f32,
    pub last_pointer_x: Option<f32>,
    pub last_sample_ms: Option<f64>,
    /// Signed px/ms, from the latest pair of samples
    pub velocity: f32,
}

impl DragSession {
    fn new(origin_offset: f32, pointer_origin_x: f32) -> Self {
        Self {
            origin_offset,
            pointer_origin_x,
            last_pointer_x: None,
            last_sample_ms: None,
            velocity: 0.0,
        }
    }

    /// Record a pointer sample. Velocity is measured against the previous
    /// sample only; a non-positive time step keeps the last velocity.
    fn record(&mut self, x: f32, now_ms: f64) {
        if let (Some(last_x), Some(last_ms)) = (self.last_pointer_x, self.last_sample_ms) {
            let dt = now_ms - last_ms;
            if dt > 0.0 {
                self.velocity = ((x - last_x) as f64 / dt) as f32;
            }
        }
        self.last_pointer_x = Some(x);
        self.last_sample_ms = Some(now_ms);
    }
}

/// Outcome of releasing the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// No drag was in progress
    Ignored,
    /// Released without velocity; the engine is idle
    Settled,
    /// Fling started. `delta` is the first step, applied at release.
    Fling { delta: f32 },
}

#[derive(Debug, Clone)]
pub struct DragEngine {
    phase: DragPhase,
    session: Option<DragSession>,
    fling: Option<Fling>,
    sensitivity: f32,
    fling_config: FlingConfig,
}

impl DragEngine {
    pub fn new(sensitivity: f32, fling_config: FlingConfig) -> Self {
        Self {
            phase: DragPhase::Idle,
            session: None,
            fling: None,
            sensitivity,
            fling_config,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Current velocity: the drag estimate while dragging, the decaying
    /// fling velocity during momentum, zero otherwise
    pub fn velocity(&self) -> f32 {
        match self.phase {
            DragPhase::Dragging => self.session.map_or(0.0, |s| s.velocity),
            DragPhase::Momentum => self.fling.map_or(0.0, |f| f.velocity()),
            DragPhase::Idle => 0.0,
        }
    }

    /// Pointer pressed at `pointer_x` while the surface sits at `offset`.
    /// Cancels any running fling.
    pub fn start(&mut self, pointer_x: f32, offset: f32) {
        if !self.phase.send(POINTER_DOWN) {
            // Already dragging: a second press restarts the session
            tracing::trace!("drag restarted");
        }
        self.fling = None;
        self.session = Some(DragSession::new(offset, pointer_x));
    }

    /// Pointer moved while captured. Returns the offset the content should
    /// move to, or None when not dragging.
    pub fn sample(&mut self, pointer_x: f32, now_ms: f64) -> Option<f32> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        let sensitivity = self.sensitivity;
        let session = self.session.as_mut()?;
        let walk = (pointer_x - session.pointer_origin_x) * sensitivity;
        session.record(pointer_x, now_ms);
        Some(session.origin_offset - walk)
    }

    /// Pointer left the widget: abort without momentum. Returns true if a
    /// drag was aborted.
    pub fn leave(&mut self) -> bool {
        if !self.phase.send(POINTER_LEAVE) {
            return false;
        }
        self.session = None;
        tracing::debug!("drag aborted");
        true
    }

    /// Pointer released
    pub fn release(&mut self) -> Release {
        if self.phase != DragPhase::Dragging {
            return Release::Ignored;
        }
        let velocity = self.session.take().map_or(0.0, |s| s.velocity);
        if velocity == 0.0 {
            self.phase.send(POINTER_UP);
            return Release::Settled;
        }

        self.phase.send(drag_events::FLING);
        let mut fling = Fling::new(velocity, self.fling_config);
        tracing::debug!(
            velocity,
            projected = fling.remaining_distance(),
            "fling started"
        );
        let delta = fling.step();
        self.continue_or_settle(fling);
        Release::Fling { delta }
    }

    /// One animation frame of momentum. Returns the offset delta, or None
    /// when no fling is running.
    pub fn frame(&mut self) -> Option<f32> {
        if self.phase != DragPhase::Momentum {
            return None;
        }
        let mut fling = self.fling.take()?;
        let delta = fling.step();
        self.continue_or_settle(fling);
        Some(delta)
    }

    /// Drop any drag or fling in progress. Returns true if something was
    /// cancelled.
    pub fn cancel(&mut self) -> bool {
        self.session = None;
        self.fling = None;
        self.phase.send(drag_events::CANCEL)
    }

    fn continue_or_settle(&mut self, fling: Fling) {
        if fling.is_active() {
            self.fling = Some(fling);
        } else {
            self.fling = None;
            self.phase.send(drag_events::SETTLED);
        }
    }
}
