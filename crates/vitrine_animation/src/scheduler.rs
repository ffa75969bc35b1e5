//! Timer and frame scheduler
//!
//! One-shot timers keyed by [`TimerId`], plus a single "next frame" request
//! slot. Everything runs on the caller's thread: the host advances time by
//! calling [`Scheduler::pop_due`] from its frame tick.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TimerId;
}

struct Timer<T> {
    due_ms: f64,
    /// Scheduling order, breaks ties between timers due at the same instant
    seq: u64,
    payload: T,
}

/// A fired timer
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<T> {
    pub id: TimerId,
    /// The instant the timer was due. Callbacks treat this as "now".
    pub due_ms: f64,
    pub payload: T,
}

/// Scheduler holding pending timers and the frame request flag
pub struct Scheduler<T> {
    timers: SlotMap<TimerId, Timer<T>>,
    next_seq: u64,
    frame_requested: bool,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            next_seq: 0,
            frame_requested: false,
        }
    }

    /// Schedule `payload` to fire `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(Timer {
            due_ms: now_ms + delay_ms.max(0.0),
            seq,
            payload,
        })
    }

    /// Cancel a pending timer, returning its payload if it had not fired
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|t| t.payload)
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_idle(&self) -> bool {
        self.timers.is_empty() && !self.frame_requested
    }

    /// Remove and return the earliest timer due at or before `now_ms`.
    ///
    /// Call in a loop: a fired callback may schedule further timers that are
    /// already due.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<Fired<T>> {
        let id = self.earliest()?;
        if self.timers[id].due_ms > now_ms {
            return None;
        }
        let timer = self.timers.remove(id)?;
        Some(Fired {
            id,
            due_ms: timer.due_ms,
            payload: timer.payload,
        })
    }

    /// Ask for a callback on the next display refresh
    pub fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Consume the pending frame request
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    fn earliest(&self) -> Option<TimerId> {
        self.timers
            .iter()
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(id, _)| id)
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fire_all<T>(s: &mut Scheduler<T>, now_ms: f64) -> Vec<T> {
        std::iter::from_fn(|| s.pop_due(now_ms)).map(|f| f.payload).collect()
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(0.0, 30.0, "late");
        s.schedule(0.0, 10.0, "early");

        assert!(s.pop_due(5.0).is_none());

        assert_eq!(fire_all(&mut s, 100.0), vec!["early", "late"]);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule(0.0, 50.0, 1);
        s.schedule(0.0, 50.0, 2);
        s.schedule(0.0, 50.0, 3);

        assert_eq!(fire_all(&mut s, 50.0), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut s = Scheduler::new();
        let id = s.schedule(0.0, 10.0, ());
        assert_eq!(s.pending(), 1);
        assert_eq!(s.cancel(id), Some(()));
        assert_eq!(s.pending(), 0);
        assert!(s.pop_due(100.0).is_none());
        // Cancelling twice is harmless
        assert_eq!(s.cancel(id), None);
    }

    #[test]
    fn test_fired_reports_due_time() {
        let mut s = Scheduler::new();
        s.schedule(100.0, 50.0, ());
        let fired = s.pop_due(400.0).unwrap();
        assert_eq!(fired.due_ms, 150.0);
    }

    #[test]
    fn test_negative_delay_fires_immediately() {
        let mut s = Scheduler::new();
        s.schedule(20.0, -5.0, ());
        assert!(s.pop_due(19.0).is_none());
        assert_eq!(s.pop_due(20.0).map(|f| f.due_ms), Some(20.0));
    }

    #[test]
    fn test_timer_scheduled_while_firing_fires_in_same_pass() {
        let mut s = Scheduler::new();
        s.schedule(0.0, 50.0, "settle");
        let mut fired = Vec::new();
        while let Some(f) = s.pop_due(200.0) {
            if f.payload == "settle" {
                s.schedule(f.due_ms, 50.0, "apply");
            }
            fired.push((f.payload, f.due_ms));
        }
        assert_eq!(fired, vec![("settle", 50.0), ("apply", 100.0)]);
        assert!(s.is_idle());
    }

    #[test]
    fn test_frame_request_is_consumed() {
        let mut s: Scheduler<()> = Scheduler::new();
        assert!(s.is_idle());
        s.request_frame();
        assert!(!s.is_idle());
        assert!(s.take_frame_request());
        assert!(!s.take_frame_request());
    }
}
