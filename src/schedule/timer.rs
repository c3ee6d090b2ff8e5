//! One-shot timers.
//!
//! `Scheduler` holds payloads keyed by deadline. Timers due at the same tick
//! fire in the order they were scheduled. Every scheduled timer gets a
//! `TimerId` that can cancel it before it fires.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::clock::Tick;

/// Cancellation token for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A timer that has come due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TimerId,
    pub deadline: Tick,
    pub payload: T,
}

/// Pending one-shot timers ordered by `(deadline, id)`.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    pending: BTreeMap<(Tick, TimerId), T>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Tick, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((deadline, id), payload);
        id
    }

    /// Cancel a pending timer. Returns its payload if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let key = self.pending.keys().find(|(_, timer)| *timer == id).copied()?;
        self.pending.remove(&key)
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Tick) -> Option<Fired<T>> {
        let (&(deadline, id), _) = self.pending.iter().next()?;
        if deadline > now {
            return None;
        }
        let payload = self.pending.remove(&(deadline, id))?;
        Some(Fired {
            id,
            deadline,
            payload,
        })
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Tick> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.keys().any(|(_, timer)| *timer == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
