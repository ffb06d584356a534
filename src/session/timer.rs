// SPDX-License-Identifier: MPL-2.0
//! Cancellable single-shot timers.
//!
//! Timers are plain data: the queue only knows deadlines. Whoever owns the
//! queue passes the current [`Instant`] to [`TimerQueue::expire`] and acts
//! on what comes back, so callbacks always run on the owner's context and
//! tests can drive time explicitly.

use std::time::{Duration, Instant};

/// Opaque handle to a scheduled timer.
///
/// Handles are never reused within a queue, so cancelling a handle that has
/// already fired or been cancelled is a harmless no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Entry<K> {
    handle: TimerHandle,
    kind: K,
    deadline: Instant,
}

/// Pending timers keyed by handle, each tagged with a caller-defined kind.
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: Copy> TimerQueue<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire `delay` after `now`.
    pub fn schedule(&mut self, kind: K, now: Instant, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            kind,
            deadline: now + delay,
        });
        handle
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    /// Deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, handle: TimerHandle) -> Option<Instant> {
        self.entries
            .iter()
            .find(|entry| entry.handle == handle)
            .map(|entry| entry.deadline)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn expire(&mut self, now: Instant) -> Vec<(TimerHandle, K)> {
        let mut due: Vec<Entry<K>> = Vec::new();
        self.entries.retain(|entry| {
            if entry.deadline <= now {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| (entry.deadline, entry.handle));
        due.into_iter()
            .map(|entry| (entry.handle, entry.kind))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        A,
        B,
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn timer_fires_at_deadline_not_before() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(Kind::A, start, ms(100));

        assert!(queue.expire(start + ms(99)).is_empty());
        assert_eq!(queue.expire(start + ms(100)), vec![(handle, Kind::A)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn cancel_is_idempotent() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(Kind::A, start, ms(10));

        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        assert!(queue.expire(start + ms(50)).is_empty());
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        let fired = queue.schedule(Kind::A, start, ms(10));
        let pending = queue.schedule(Kind::B, start, ms(500));

        assert_eq!(queue.expire(start + ms(10)).len(), 1);
        assert!(!queue.cancel(fired));
        assert!(queue.is_pending(pending));
    }

    #[test]
    fn expire_returns_earliest_first() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        let late = queue.schedule(Kind::A, start, ms(300));
        let early = queue.schedule(Kind::B, start, ms(100));

        assert_eq!(queue.next_deadline(), Some(start + ms(100)));
        assert_eq!(
            queue.expire(start + ms(400)),
            vec![(early, Kind::B), (late, Kind::A)]
        );
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn handles_are_not_reused() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        let first = queue.schedule(Kind::A, start, ms(1));
        queue.cancel(first);
        let second = queue.schedule(Kind::A, start, ms(1));
        assert_ne!(first, second);
        assert!(!queue.is_pending(first));
        assert_eq!(queue.deadline(second), Some(start + ms(1)));
    }
}
