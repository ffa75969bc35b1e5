//! Scroll-sync engine
//!
//! Keeps the active index consistent with the scroll offset. Every scroll
//! notification restarts a settle timer; only when the offset has been quiet
//! for the settle delay does the engine reconcile:
//!
//! ```text
//! candidate = clamp(round(offset / (width + gap)), 0, len - 1)
//! ```
//!
//! A changed index is committed immediately, while the visual switch is
//! deferred by a second, independent delay so fast scrolling doesn't flicker
//! the active styling.

use vitrine_animation::{Debouncer, Scheduler, TimerId};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::viewport::Viewport;

/// A committed active index change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveChange {
    pub active: usize,
    pub previous: usize,
}

/// Timers owned by the sync engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTimer {
    /// Scrolling has paused; reconcile
    Settle,
    /// Apply the active styling for a committed change
    VisualApply(ActiveChange),
}

#[derive(Debug, Clone)]
pub struct ScrollSync {
    settle: Debouncer,
    visual_delay_ms: f64,
}

impl ScrollSync {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            settle: Debouncer::new(config.settle_delay_ms),
            visual_delay_ms: config.visual_delay_ms.max(0.0),
        }
    }

    /// A scroll notification arrived: (re)start the settle timer
    pub fn on_scroll(&mut self, viewport: &Viewport, scheduler: &mut Scheduler<SyncTimer>, now_ms: f64) {
        if viewport.is_empty() {
            return;
        }
        self.settle.trigger(scheduler, now_ms, SyncTimer::Settle);
    }

    /// Whether a settle timer is pending
    pub fn is_settling(&self) -> bool {
        self.settle.is_armed()
    }

    /// Settle timer `id` fired at `now_ms`
    pub fn on_settle(
        &mut self,
        id: TimerId,
        viewport: &mut Viewport,
        offset: f32,
        scheduler: &mut Scheduler<SyncTimer>,
        now_ms: f64,
    ) -> Result<Option<ActiveChange>> {
        if !self.settle.acknowledge(id) {
            tracing::trace!("stale settle timer ignored");
            return Ok(None);
        }
        self.reconcile(viewport, offset, scheduler, now_ms)
    }

    /// Recompute the active index from `offset`.
    ///
    /// Returns the committed change, if any, after scheduling its visual
    /// apply. Fails with `NoGeometry` before the items are measured.
    pub fn reconcile(
        &mut self,
        viewport: &mut Viewport,
        offset: f32,
        scheduler: &mut Scheduler<SyncTimer>,
        now_ms: f64,
    ) -> Result<Option<ActiveChange>> {
        if viewport.is_empty() {
            return Err(CarouselError::EmptyCatalog);
        }
        let candidate = viewport
            .nearest_index(offset)
            .ok_or(CarouselError::NoGeometry)?;

        let Some(previous) = viewport.set_active_index(candidate) else {
            tracing::trace!(offset, index = candidate, "reconciled, unchanged");
            return Ok(None);
        };

        let change = ActiveChange {
            active: candidate,
            previous,
        };
        tracing::debug!(offset, active = change.active, previous, "active index changed");
        scheduler.schedule(now_ms, self.visual_delay_ms, SyncTimer::VisualApply(change));
        Ok(Some(change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::MediaDescriptor;

    fn setup(n: usize) -> (ScrollSync, Viewport, Scheduler<SyncTimer>) {
        let mut viewport = Viewport::new(
            (0..n)
                .map(|i| MediaDescriptor::image(format!("{i}.webp")))
                .collect(),
        );
        viewport.measure(300.0, 16.0);
        (
            ScrollSync::new(&CarouselConfig::default()),
            viewport,
            Scheduler::new(),
        )
    }

    #[test]
    fn test_burst_of_scrolls_settles_once() {
        let (mut sync, mut viewport, mut scheduler) = setup(5);
        for t in [0.0, 10.0, 20.0, 30.0] {
            sync.on_scroll(&viewport, &mut scheduler, t);
        }
        assert_eq!(scheduler.pending(), 1);
        assert!(scheduler.pop_due(79.0).is_none());

        let fired = scheduler.pop_due(80.0).unwrap();
        assert_eq!(fired.payload, SyncTimer::Settle);
        let change = sync
            .on_settle(fired.id, &mut viewport, 948.0, &mut scheduler, fired.due_ms)
            .unwrap();
        assert_eq!(
            change,
            Some(ActiveChange {
                active: 3,
                previous: 0
            })
        );
        assert_eq!(viewport.active_index(), 3);
        assert!(!sync.is_settling());

        // Visual apply follows after its own delay
        assert!(scheduler.pop_due(129.0).is_none());
        let visual = scheduler.pop_due(130.0).unwrap();
        assert_eq!(visual.payload, SyncTimer::VisualApply(change.unwrap()));
    }

    #[test]
    fn test_unchanged_index_schedules_no_visual_apply() {
        let (mut sync, mut viewport, mut scheduler) = setup(5);
        let first = sync.reconcile(&mut viewport, 632.0, &mut scheduler, 0.0).unwrap();
        assert!(first.is_some());
        let second = sync.reconcile(&mut viewport, 640.0, &mut scheduler, 10.0).unwrap();
        assert!(second.is_none());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_reconcile_without_geometry_is_rejected() {
        let mut viewport = Viewport::new(vec![MediaDescriptor::image("a.webp")]);
        let mut sync = ScrollSync::new(&CarouselConfig::default());
        let mut scheduler = Scheduler::new();
        assert_eq!(
            sync.reconcile(&mut viewport, 100.0, &mut scheduler, 0.0),
            Err(CarouselError::NoGeometry)
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_empty_viewport_schedules_nothing() {
        let (mut sync, viewport, mut scheduler) = setup(0);
        sync.on_scroll(&viewport, &mut scheduler, 0.0);
        assert_eq!(scheduler.pending(), 0);
        assert!(!sync.is_settling());
    }

    #[test]
    fn test_stale_settle_timer_is_ignored() {
        let (mut sync, mut viewport, mut scheduler) = setup(5);
        sync.on_scroll(&viewport, &mut scheduler, 0.0);
        let stale = scheduler.pop_due(50.0).unwrap();
        sync.on_scroll(&viewport, &mut scheduler, 60.0);
        // A different timer id than the armed one
        let result = sync.on_settle(stale.id, &mut viewport, 948.0, &mut scheduler, 50.0);
        assert_eq!(result, Ok(None));
        assert_eq!(viewport.active_index(), 0);
    }

    #[test]
    fn test_offsets_past_the_ends_clamp() {
        let (mut sync, mut viewport, mut scheduler) = setup(5);
        sync.reconcile(&mut viewport, 99_999.0, &mut scheduler, 0.0).unwrap();
        assert_eq!(viewport.active_index(), 4);
        sync.reconcile(&mut viewport, -500.0, &mut scheduler, 0.0).unwrap();
        assert_eq!(viewport.active_index(), 0);
    }
}
