//! Timestamp formatting utilities
//!
//! Entries are stamped with local time; this module decides how that
//! instant is rendered at the start of each output line.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime pattern of the default line timestamp: `2025-01-08 10:30:45.123`
pub const CLASSIC_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_alog::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let instant = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Classic.format(&instant), "2025-01-08 10:30:45.000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45.123` in local time
    #[default]
    Classic,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// Patterns that chrono cannot render fall back to [`TimestampFormat::Classic`].
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Classic => datetime.format(CLASSIC_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::with_capacity(pattern.len() + 16);
                if write!(out, "{}", datetime.format(pattern)).is_err() {
                    return datetime.format(CLASSIC_PATTERN).to_string();
                }
                out
            }
        }
    }

    /// Check that a custom pattern is non-empty and understood by chrono
    pub fn is_valid(&self) -> bool {
        match self {
            TimestampFormat::Custom(pattern) => {
                !pattern.is_empty()
                    && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
            }
            _ => true,
        }
    }
}
