//! Log entry structure

use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};

/// One immutable log event.
///
/// Entries are created by the emitting thread, owned by the queue until
/// the worker drains them, then rendered and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
    level: LogLevel,
    message: String,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so an entry always renders as exactly one line.
    fn sanitize_message(message: String) -> String {
        if !message.contains(|c: char| matches!(c, '\n' | '\r' | '\t')) {
            return message;
        }
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Create an entry stamped with the current local time
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self::at(Local::now(), level, message)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(timestamp: DateTime<Local>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: Self::sanitize_message(message.into()),
        }
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the output line: `[<timestamp>][<Level>]<message>`
    pub fn render(&self, timestamp_format: &TimestampFormat) -> String {
        let timestamp = timestamp_format.format(&self.timestamp);
        let mut line =
            String::with_capacity(timestamp.len() + self.message.len() + 4 + self.level.to_str().len());
        line.push('[');
        line.push_str(&timestamp);
        line.push_str("][");
        line.push_str(self.level.to_str());
        line.push(']');
        line.push_str(&self.message);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_line_format() {
        let ts = Local
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
            .single()
            .expect("unambiguous local time");
        let entry = LogEntry::at(ts, LogLevel::Warning, "disk almost full");
        assert_eq!(
            entry.render(&TimestampFormat::Classic),
            "[2024-03-09 07:05:01.000][Warning]disk almost full"
        );
    }

    #[test]
    fn test_message_is_sanitized() {
        let entry = LogEntry::new(LogLevel::Info, "line one\nERROR fake\tentry\r");
        assert_eq!(entry.message(), "line one\\nERROR fake\\tentry\\r");
        assert!(!entry.render(&TimestampFormat::Classic).contains('\n'));
    }

    #[test]
    fn test_accessors() {
        let entry = LogEntry::new(LogLevel::Error, String::from("boom"));
        assert_eq!(entry.level(), LogLevel::Error);
        assert_eq!(entry.message(), "boom");
        assert!(*entry.timestamp() <= Local::now());
    }
}
