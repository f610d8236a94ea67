//! Logger configuration
//!
//! Plain data that can be built in code or loaded from JSON by whatever
//! embeds the logger.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::overflow_policy::DEFAULT_MAX_QUEUE_DEPTH;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Default name of the background worker thread
pub const DEFAULT_WORKER_THREAD_NAME: &str = "alog-worker";

/// Startup configuration of a [`Logger`](crate::Logger)
///
/// # Example
///
/// ```
/// use rust_alog::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{ "level": "Warning", "max_queue_depth": 256 }"#).unwrap();
/// assert_eq!(config.level, LogLevel::Warning);
/// assert_eq!(config.max_queue_depth, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Most verbose level that is still emitted
    pub level: LogLevel,
    /// Soft limit on pending entries before routine entries are dropped
    pub max_queue_depth: usize,
    pub timestamp_format: TimestampFormat,
    pub worker_thread_name: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            max_queue_depth: DEFAULT_MAX_QUEUE_DEPTH,
            timestamp_format: TimestampFormat::default(),
            worker_thread_name: DEFAULT_WORKER_THREAD_NAME.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.worker_thread_name.trim().is_empty() {
            return Err(LoggerError::config(
                "LoggerConfig",
                "worker_thread_name must not be empty",
            ));
        }
        if !self.timestamp_format.is_valid() {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("unsupported timestamp format: {:?}", self.timestamp_format),
            ));
        }
        Ok(())
    }
}
