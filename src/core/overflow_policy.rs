//! Overflow policy for the pending entry queue
//!
//! The queue has a soft depth limit. Once the number of pending entries
//! exceeds it, routine entries (Warning, Info, Debug) are dropped while
//! Error and Fatal entries are always accepted.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Default soft limit on pending entries
pub const DEFAULT_MAX_QUEUE_DEPTH: usize = 10_000;

/// Priority level for log preservation during overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogPriority {
    /// Warning, Info, Debug: dropped under backpressure
    Normal = 0,
    /// Error, Fatal: never dropped
    Critical = 1,
}

impl Default for LogPriority {
    fn default() -> Self {
        LogPriority::Normal
    }
}

impl fmt::Display for LogPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogPriority::Normal => write!(f, "Normal"),
            LogPriority::Critical => write!(f, "Critical"),
        }
    }
}

/// Callback type for overflow notifications
///
/// Called when entries are dropped due to queue overflow.
/// The parameter is the total count of dropped entries so far.
pub type OverflowCallback = Arc<dyn Fn(u64) + Send + Sync>;

/// Decide whether an entry at `level` must be dropped given `queued`
/// pending entries and a soft limit of `max_depth`.
///
/// The comparison is strict (`queued > max_depth`), so a queue may hold
/// `max_depth + 1` routine entries before the policy starts dropping.
#[inline]
pub fn should_drop(level: LogLevel, queued: usize, max_depth: usize) -> bool {
    queued > max_depth && level.priority() != LogPriority::Critical
}

/// Alert on the first drop and on every thousandth after that
#[inline]
pub(crate) fn should_alert(total_dropped: u64) -> bool {
    total_dropped == 1 || total_dropped % 1000 == 0
}
