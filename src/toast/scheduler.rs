// SPDX-License-Identifier: MPL-2.0
//! Time source and cancelable timers for the presenter.
//!
//! Everything runs on the UI thread: timers are entries in a [`Timeline`] that
//! the owner drains on each tick. Time comes from a [`Clock`], so tests can use
//! a [`ManualClock`] and advance virtual time instead of sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Virtual time that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give another
/// to the presenter.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    due: Instant,
    event: E,
}

/// One-shot timers carrying an event of type `E`.
#[derive(Debug)]
pub struct Timeline<E> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> Timeline<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire once `due` has been reached.
    pub fn schedule(&mut self, due: Instant, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due, event });
        id
    }

    /// Cancels a pending timer.
    ///
    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes and returns the events of every timer due at `now`, earliest
    /// first. Timers due at the same instant fire in scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<E> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.due <= now);
        self.entries = pending;

        due.sort_by_key(|entry| (entry.due, entry.id.0));
        due.into_iter().map(|entry| entry.event).collect()
    }

    /// Returns when the next timer fires.
    #[cfg(test)]
    fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    #[cfg(test)]
    fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
