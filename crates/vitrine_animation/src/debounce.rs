//! Debounced timers
//!
//! A debouncer owns at most one pending timer. Triggering it cancels the
//! previous timer before scheduling a new one, so only the last trigger in a
//! burst fires.

use crate::scheduler::{Scheduler, TimerId};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: f64,
    handle: Option<TimerId>,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            handle: None,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Cancel the pending timer (if any) and schedule `payload` afresh
    pub fn trigger<T>(&mut self, scheduler: &mut Scheduler<T>, now_ms: f64, payload: T) -> TimerId {
        if let Some(previous) = self.handle.take() {
            scheduler.cancel(previous);
        }
        let id = scheduler.schedule(now_ms, self.delay_ms, payload);
        self.handle = Some(id);
        id
    }

    /// Cancel the pending timer without rescheduling
    pub fn cancel<T>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(id) = self.handle.take() {
            scheduler.cancel(id);
        }
    }

    /// Whether a timer is pending
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Acknowledge that timer `id` fired. Returns false for a stale timer
    /// that this debouncer no longer owns.
    pub fn acknowledge(&mut self, id: TimerId) -> bool {
        if self.handle == Some(id) {
            self.handle = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_trigger_wins() {
        let mut scheduler = Scheduler::new();
        let mut d = Debouncer::new(50.0);

        d.trigger(&mut scheduler, 0.0, "a");
        d.trigger(&mut scheduler, 20.0, "b");
        let last = d.trigger(&mut scheduler, 40.0, "c");

        assert_eq!(scheduler.pending(), 1);
        // Nothing due at the first trigger's deadline
        assert!(scheduler.pop_due(50.0).is_none());

        let fired = scheduler.pop_due(90.0).unwrap();
        assert_eq!(fired.payload, "c");
        assert_eq!(fired.id, last);
        assert!(d.acknowledge(fired.id));
        assert!(!d.is_armed());
    }

    #[test]
    fn test_cancel_disarms() {
        let mut scheduler = Scheduler::new();
        let mut d = Debouncer::new(10.0);
        d.trigger(&mut scheduler, 0.0, ());
        assert!(d.is_armed());
        d.cancel(&mut scheduler);
        assert!(!d.is_armed());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_acknowledge_rejects_foreign_timer() {
        let mut scheduler = Scheduler::new();
        let mut d = Debouncer::new(10.0);
        let other = scheduler.schedule(0.0, 5.0, ());
        d.trigger(&mut scheduler, 0.0, ());
        assert!(!d.acknowledge(other));
        assert!(d.is_armed());
    }
}
