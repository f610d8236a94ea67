//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod overflow_policy;
pub mod queue;
pub mod sink;
pub mod timestamp;
mod worker;

pub use config::{LoggerConfig, DEFAULT_WORKER_THREAD_NAME};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use overflow_policy::{LogPriority, OverflowCallback, DEFAULT_MAX_QUEUE_DEPTH};
pub use queue::{EntryQueue, PushOutcome, Wake};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
pub use worker::WorkerState;
