//! Logger metrics for observability
//!
//! Every silent drop in the pipeline (level filter, overflow policy,
//! post-stop rejection) is counted here, so the absence of a line can be
//! told apart from a lost one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters describing what happened to emitted entries
///
/// # Example
///
/// ```
/// use rust_alog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_accepted();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.accepted_count(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries appended to the queue
    accepted: AtomicU64,

    /// Lines handed to the sink successfully
    written: AtomicU64,

    /// Entries filtered by level before an entry was built
    filtered: AtomicU64,

    /// Drained entries skipped because the level was lowered meanwhile
    skipped_at_drain: AtomicU64,

    /// Entries dropped by the overflow policy
    dropped: AtomicU64,

    /// Entries rejected because the logger was stopping
    rejected_after_stop: AtomicU64,

    /// Sink writes that returned an error or panicked
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            accepted: AtomicU64::new(0),
            written: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            skipped_at_drain: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            rejected_after_stop: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn accepted_count(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn skipped_at_drain_count(&self) -> u64 {
        self.skipped_at_drain.load(Ordering::Relaxed)
    }

    /// Get the number of entries dropped by the overflow policy
    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected_after_stop_count(&self) -> u64 {
        self.rejected_after_stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failure_count(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record an accepted entry, returning the previous count
    #[inline]
    pub fn record_accepted(&self) -> u64 {
        self.accepted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_skipped_at_drain(&self) -> u64 {
        self.skipped_at_drain.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an overflow drop, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected_after_stop(&self) -> u64 {
        self.rejected_after_stop.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Overflow drops as a percentage (0.0 - 100.0) of entries that got
    /// past the level filter.
    ///
    /// Returns 0.0 if nothing has been emitted.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.accepted_count() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.accepted.store(0, Ordering::Relaxed);
        self.written.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.skipped_at_drain.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
        self.rejected_after_stop.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            accepted: AtomicU64::new(self.accepted_count()),
            written: AtomicU64::new(self.written_count()),
            filtered: AtomicU64::new(self.filtered_count()),
            skipped_at_drain: AtomicU64::new(self.skipped_at_drain_count()),
            dropped: AtomicU64::new(self.dropped_count()),
            rejected_after_stop: AtomicU64::new(self.rejected_after_stop_count()),
            write_failures: AtomicU64::new(self.write_failure_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.accepted_count(), 0);
        assert_eq!(metrics.written_count(), 0);
        assert_eq!(metrics.filtered_count(), 0);
        assert_eq!(metrics.skipped_at_drain_count(), 0);
        assert_eq!(metrics.dropped_count(), 0);
        assert_eq!(metrics.rejected_after_stop_count(), 0);
        assert_eq!(metrics.write_failure_count(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_dropped(), 0);
        assert_eq!(metrics.record_dropped(), 1);
        assert_eq!(metrics.dropped_count(), 2);
    }

    #[test]
    fn test_drop_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.drop_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_accepted();
        }
        for _ in 0..10 {
            metrics.record_dropped();
        }

        let rate = metrics.drop_rate();
        assert!((9.9..=10.1).contains(&rate), "Drop rate was {}", rate);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_accepted();
        metrics.record_filtered();
        metrics.record_write_failure();

        metrics.reset();

        assert_eq!(metrics.accepted_count(), 0);
        assert_eq!(metrics.filtered_count(), 0);
        assert_eq!(metrics.write_failure_count(), 0);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();

        let snapshot = metrics.clone();
        metrics.record_written();

        assert_eq!(snapshot.written_count(), 1);
        assert_eq!(metrics.written_count(), 2);
    }
}
