//! Log level definitions

use super::overflow_policy::LogPriority;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verbosity threshold of a log entry.
///
/// Lower values are more severe: `Fatal < Error < Warning < Info < Debug`.
/// A logger configured at some level admits every entry whose level is
/// less than or equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Fatal = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    #[default]
    Debug = 4,
}

impl LogLevel {
    /// All levels, most severe first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "Fatal",
            LogLevel::Error => "Error",
            LogLevel::Warning => "Warning",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
        }
    }

    /// Returns `true` if `self` carries more detail than `threshold`,
    /// i.e. an entry at `self` is filtered out by a logger set to `threshold`.
    #[inline]
    pub fn is_more_verbose_than(self, threshold: LogLevel) -> bool {
        self > threshold
    }

    /// Preservation class used by the overflow policy
    #[inline]
    pub fn priority(self) -> LogPriority {
        match self {
            LogLevel::Fatal | LogLevel::Error => LogPriority::Critical,
            LogLevel::Warning | LogLevel::Info | LogLevel::Debug => LogPriority::Normal,
        }
    }

    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Fatal,
            1 => LogLevel::Error,
            2 => LogLevel::Warning,
            3 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Fatal => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Warning => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fatal" => Ok(LogLevel::Fatal),
            "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_by_verbosity() {
        assert!(LogLevel::Fatal < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }

    #[test]
    fn test_is_more_verbose_than() {
        assert!(LogLevel::Debug.is_more_verbose_than(LogLevel::Warning));
        assert!(!LogLevel::Warning.is_more_verbose_than(LogLevel::Warning));
        assert!(!LogLevel::Fatal.is_more_verbose_than(LogLevel::Error));
    }

    #[test]
    fn test_names() {
        assert_eq!(LogLevel::Warning.to_string(), "Warning");
        assert_eq!(LogLevel::Fatal.to_str(), "Fatal");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("Debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_u8_conversion() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level.as_u8()), level);
        }
    }

    #[test]
    fn test_priority() {
        assert_eq!(LogLevel::Fatal.priority(), LogPriority::Critical);
        assert_eq!(LogLevel::Error.priority(), LogPriority::Critical);
        assert_eq!(LogLevel::Warning.priority(), LogPriority::Normal);
        assert_eq!(LogLevel::Debug.priority(), LogPriority::Normal);
    }
}
