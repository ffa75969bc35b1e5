//! Carousel widget
//!
//! Owns the viewport, the scroll surface and both interaction engines, and
//! routes host input between them. Hosts feed events through
//! [`Widget::handle_event`], call [`Widget::tick`] every frame, and drain
//! [`PresentationEvent`]s with [`Carousel::take_events`].
//!
//! Precedence between input channels:
//! - navigation cancels a drag session or running fling
//! - a new drag-start cancels a fling and any smooth scroll
//! - wheel scrolling cancels a smooth scroll only

use std::collections::VecDeque;

use serde::Serialize;
use vitrine_animation::Scheduler;
use vitrine_core::events::event_types::*;
use vitrine_core::{Event, EventData, Widget};

use crate::asset::{Catalog, MediaDescriptor};
use crate::config::CarouselConfig;
use crate::drag::{DragEngine, DragPhase, Release};
use crate::error::{CarouselError, Result};
use crate::navigation;
use crate::surface::ScrollSurface;
use crate::sync::{ActiveChange, ScrollSync, SyncTimer};
use crate::viewport::{Item, ItemExtent, Viewport};

/// Output for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PresentationEvent {
    /// Restyle `active` as active and `previous` as inactive
    ActiveChanged { active: usize, previous: usize },
}

impl From<ActiveChange> for PresentationEvent {
    fn from(change: ActiveChange) -> Self {
        PresentationEvent::ActiveChanged {
            active: change.active,
            previous: change.previous,
        }
    }
}

pub struct Carousel {
    config: CarouselConfig,
    viewport: Viewport,
    surface: ScrollSurface,
    sync: ScrollSync,
    drag: DragEngine,
    scheduler: Scheduler<SyncTimer>,
    outbox: VecDeque<PresentationEvent>,
    presented_index: usize,
    /// Latest host time seen; earlier timestamps are treated as this instant
    now_ms: f64,
}

impl Carousel {
    pub fn new(descriptors: Vec<MediaDescriptor>, config: CarouselConfig) -> Self {
        let viewport = Viewport::new(descriptors);
        if viewport.is_empty() {
            tracing::debug!("carousel mounted without items, interaction disabled");
        }
        Self {
            surface: ScrollSurface::new(&config),
            sync: ScrollSync::new(&config),
            drag: DragEngine::new(config.drag_sensitivity, config.fling()),
            scheduler: Scheduler::new(),
            outbox: VecDeque::new(),
            presented_index: 0,
            now_ms: 0.0,
            viewport,
            config,
        }
    }

    /// Mount the entry selected by `query`. An unresolvable entry mounts an
    /// empty, static carousel.
    pub fn from_catalog(catalog: &Catalog, query: &str, config: CarouselConfig) -> Self {
        let descriptors = match catalog.resolve_query(query, &config.asset_host) {
            Ok(descriptors) => descriptors,
            Err(err) => {
                tracing::warn!(%err, query, "carousel assets unavailable");
                Vec::new()
            }
        };
        Self::new(descriptors, config)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// True when there are no items; all input is ignored
    pub fn is_static(&self) -> bool {
        self.viewport.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        self.viewport.items()
    }

    /// Index committed by the last reconciliation
    pub fn active_index(&self) -> usize {
        self.viewport.active_index()
    }

    /// Index whose active styling has been applied
    pub fn presented_index(&self) -> usize {
        self.presented_index
    }

    /// Active flag per indicator, following the presented index
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.viewport.len()).map(move |i| i == self.presented_index)
    }

    pub fn scroll_offset(&self) -> f32 {
        self.surface.offset()
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.surface.is_smooth_scrolling()
    }

    pub fn measured_extent(&self) -> Option<ItemExtent> {
        self.viewport.measured_extent()
    }

    /// Number of pending timers
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// The first item was laid out with `width`
    pub fn on_layout(&mut self, width: f32, now_ms: f64) {
        if self.is_static() {
            return;
        }
        let now_ms = self.advance_clock(now_ms);
        self.fire_due(now_ms);
        if self.viewport.measure(width, self.config.gap).is_none() {
            tracing::trace!(width, "layout without usable width");
            return;
        }
        let max = self.viewport.max_offset();
        let moved = self.surface.set_max_offset(max);
        self.after_write(moved, now_ms);
    }

    /// Scroll to item `index`.
    ///
    /// Returns the target offset. Cancels any drag or fling in progress.
    pub fn navigate(&mut self, index: usize, now_ms: f64) -> Result<f32> {
        let now_ms = self.advance_clock(now_ms);
        self.fire_due(now_ms);
        if self.viewport.is_empty() {
            return Err(CarouselError::EmptyCatalog);
        }
        let (target, moved) = navigation::navigate(&self.viewport, &mut self.surface, index, now_ms)?;
        if self.drag.cancel() {
            tracing::debug!(index, "navigation cancelled drag");
        }
        self.after_write(moved, now_ms);
        if self.surface.is_smooth_scrolling() {
            self.scheduler.request_frame();
        }
        Ok(target)
    }

    /// Indicator `index` clicked. Rejections are logged and dropped.
    pub fn activate_indicator(&mut self, index: usize, now_ms: f64) {
        if let Err(err) = self.navigate(index, now_ms) {
            tracing::warn!(%err, index, "indicator activation rejected");
        }
    }

    /// Drain presentation events in emission order
    pub fn take_events(&mut self) -> Vec<PresentationEvent> {
        self.outbox.drain(..).collect()
    }

    /// Host clocks may deliver events slightly out of order
    fn advance_clock(&mut self, now_ms: f64) -> f64 {
        if now_ms < self.now_ms {
            tracing::trace!(now_ms, latest = self.now_ms, "stale timestamp");
        }
        self.now_ms = self.now_ms.max(now_ms);
        self.now_ms
    }

    fn wheel(&mut self, delta: f32, now_ms: f64) {
        self.surface.cancel_smooth();
        let moved = self.surface.scroll_by(delta);
        self.after_write(moved, now_ms);
    }

    fn drag_start(&mut self, x: f32, now_ms: f64) {
        if self.surface.cancel_smooth() {
            tracing::debug!("drag cancelled smooth scroll");
        }
        self.drag.start(x, self.surface.offset());
        tracing::trace!(x, now_ms, offset = self.surface.offset(), "drag start");
    }

    fn drag_move(&mut self, x: f32, now_ms: f64) {
        if let Some(offset) = self.drag.sample(x, now_ms) {
            let moved = self.surface.set_offset(offset);
            self.after_write(moved, now_ms);
        }
    }

    fn drag_end(&mut self, now_ms: f64) {
        match self.drag.release() {
            Release::Ignored => {}
            Release::Settled => self.gesture_finished(now_ms),
            Release::Fling { delta } => {
                let moved = self.surface.scroll_by(delta);
                self.after_write(moved, now_ms);
                if self.drag.phase() == DragPhase::Momentum {
                    self.scheduler.request_frame();
                } else {
                    self.gesture_finished(now_ms);
                }
            }
        }
    }

    /// A drag or fling has come to rest
    fn gesture_finished(&mut self, now_ms: f64) {
        if !self.config.snap_on_release {
            return;
        }
        let Some(extent) = self.viewport.measured_extent() else {
            return;
        };
        let offset = self.surface.offset();
        let index = extent.nearest_index(offset, self.viewport.len());
        let target = extent.offset_of(index);
        if target == offset {
            return;
        }
        tracing::trace!(index, target, "snap");
        let moved = self.surface.scroll_to(target, now_ms);
        self.after_write(moved, now_ms);
        if self.surface.is_smooth_scrolling() {
            self.scheduler.request_frame();
        }
    }

    /// Every offset change reaches the sync engine as a scroll notification
    fn after_write(&mut self, moved: bool, now_ms: f64) {
        if moved {
            self.sync.on_scroll(&self.viewport, &mut self.scheduler, now_ms);
        }
    }

    fn fire_due(&mut self, now_ms: f64) {
        while let Some(fired) = self.scheduler.pop_due(now_ms) {
            match fired.payload {
                SyncTimer::Settle => {
                    let offset = self.surface.offset();
                    match self.sync.on_settle(
                        fired.id,
                        &mut self.viewport,
                        offset,
                        &mut self.scheduler,
                        fired.due_ms,
                    ) {
                        Ok(_) => {}
                        Err(CarouselError::NoGeometry) => {
                            tracing::trace!("settled before layout, waiting for next scroll");
                        }
                        Err(err) => tracing::warn!(%err, "reconciliation failed"),
                    }
                }
                SyncTimer::VisualApply(change) => {
                    self.presented_index = change.active;
                    tracing::debug!(active = change.active, previous = change.previous, "active styling applied");
                    self.outbox.push_back(change.into());
                }
            }
        }
    }

    fn run_frame(&mut self, now_ms: f64) {
        let moved = self.surface.advance(now_ms);
        self.after_write(moved, now_ms);

        if self.drag.phase() == DragPhase::Momentum {
            if let Some(delta) = self.drag.frame() {
                let moved = self.surface.scroll_by(delta);
                self.after_write(moved, now_ms);
            }
            if self.drag.phase() == DragPhase::Idle {
                tracing::debug!(offset = self.surface.offset(), "fling finished");
                self.gesture_finished(now_ms);
            }
        }

        if self.surface.is_smooth_scrolling() || self.drag.phase() == DragPhase::Momentum {
            self.scheduler.request_frame();
        }
    }
}

impl Widget for Carousel {
    fn handle_event(&mut self, event: &Event) {
        if self.is_static() {
            return;
        }
        let now_ms = self.advance_clock(event.timestamp);
        self.fire_due(now_ms);

        match (event.event_type, &event.data) {
            (LAYOUT, EventData::Layout { width, .. }) => self.on_layout(*width, now_ms),
            (SCROLL, EventData::Scroll { delta_x, .. }) => self.wheel(*delta_x, now_ms),
            (POINTER_DOWN, _) => {
                if let Some(x) = event.pointer_x() {
                    self.drag_start(x, now_ms);
                }
            }
            (POINTER_MOVE, _) => {
                if let Some(x) = event.pointer_x() {
                    self.drag_move(x, now_ms);
                }
            }
            (POINTER_UP, _) => self.drag_end(now_ms),
            (POINTER_LEAVE, _) => {
                self.drag.leave();
            }
            (ACTIVATE, EventData::Activate { index }) => self.activate_indicator(*index, now_ms),
            _ => {}
        }
    }

    fn tick(&mut self, now_ms: f64) -> bool {
        if self.is_static() {
            return false;
        }
        let now_ms = self.advance_clock(now_ms);
        self.fire_due(now_ms);
        if self.scheduler.take_frame_request() {
            self.run_frame(now_ms);
            // Writes during the frame may have armed timers due right now
            self.fire_due(now_ms);
        }
        self.scheduler.frame_requested() || !self.scheduler.is_idle()
    }
}
