//! Pending entry queue shared by producers and the worker
//!
//! A single mutex guards the pending buffer together with the stop flag,
//! and a condition variable wakes the worker. Draining swaps the whole
//! buffer for an empty one inside the critical section, so producers
//! never observe a partially detached queue.

use super::log_entry::LogEntry;
use super::overflow_policy::should_drop;
use parking_lot::{Condvar, Mutex};
use std::mem;

/// Result of offering an entry to the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Appended at the tail; the worker has been signalled
    Queued,
    /// Dropped by the overflow policy
    Overflow,
    /// Rejected because stop was requested
    Stopped,
}

/// Why [`EntryQueue::wait_for_work_or_stop`] returned
#[derive(Debug, PartialEq, Eq)]
pub enum Wake {
    /// Everything that was pending, in insertion order
    Work(Vec<LogEntry>),
    /// Stop was requested and nothing is pending
    Stopped,
}

#[derive(Debug, Default)]
struct QueueState {
    entries: Vec<LogEntry>,
    stopping: bool,
}

#[derive(Debug, Default)]
pub struct EntryQueue {
    state: Mutex<QueueState>,
    available: Condvar,
}

impl EntryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer an entry subject to the stop flag and the overflow policy.
    ///
    /// Both checks happen under the same lock as the append, so an entry
    /// reported as [`PushOutcome::Queued`] is guaranteed to be drained
    /// before the worker can observe stop.
    pub fn push(&self, entry: LogEntry, max_depth: usize) -> PushOutcome {
        let mut state = self.state.lock();
        if state.stopping {
            return PushOutcome::Stopped;
        }
        if should_drop(entry.level(), state.entries.len(), max_depth) {
            return PushOutcome::Overflow;
        }
        state.entries.push(entry);
        drop(state);

        self.available.notify_one();
        PushOutcome::Queued
    }

    /// Append at the tail without consulting the stop flag or overflow policy.
    pub fn append(&self, entry: LogEntry) {
        self.state.lock().entries.push(entry);
        self.available.notify_one();
    }

    /// Detach everything pending and reset the queue to empty.
    pub fn drain_all(&self) -> Vec<LogEntry> {
        mem::take(&mut self.state.lock().entries)
    }

    /// Block until entries are pending or stop has been requested.
    ///
    /// Pending entries win over stop: the worker keeps receiving
    /// [`Wake::Work`] until the queue is empty, and only then
    /// [`Wake::Stopped`].
    pub fn wait_for_work_or_stop(&self) -> Wake {
        let mut state = self.state.lock();
        while state.entries.is_empty() && !state.stopping {
            self.available.wait(&mut state);
        }

        if state.entries.is_empty() {
            Wake::Stopped
        } else {
            Wake::Work(mem::take(&mut state.entries))
        }
    }

    /// Set the stop flag and wake the worker.
    ///
    /// Returns `true` only for the call that actually set the flag.
    pub fn request_stop(&self) -> bool {
        let mut state = self.state.lock();
        let first = !state.stopping;
        state.stopping = true;
        drop(state);

        self.available.notify_all();
        first
    }

    pub fn is_stopping(&self) -> bool {
        self.state.lock().stopping
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }
}
