//! # rust_alog
//!
//! An in-process asynchronous leveled logger.
//!
//! Emitting threads append entries to a shared queue and return
//! immediately; a single background worker drains the entire queue in one
//! step and writes the entries to a [`Sink`] in the order they were
//! accepted.
//!
//! ## Features
//!
//! - **Non-blocking emit**: producers hold a lock only for an O(1) append
//! - **Two-stage level filter**: checked at emit and again at drain
//! - **Overflow policy**: routine entries are dropped past a soft queue
//!   depth, Error and Fatal entries never are
//! - **Flush on stop**: [`Logger::stop`] returns only after every accepted
//!   entry has been written
//!
//! ```
//! use rust_alog::prelude::*;
//! use rust_alog::{info, warning};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone());
//!
//! info!(logger, "listening on port {}", 8080);
//! warning!(logger, "{} retries left", 2);
//! logger.stop();
//!
//! assert_eq!(sink.len(), 2);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{ConsoleSink, MemorySink, WriterSink};
    pub use crate::core::{
        LogEntry, LogLevel, LogPriority, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, OverflowCallback, Result, Sink, TimestampFormat, WorkerState,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

#[cfg(feature = "file")]
pub use crate::sinks::FileSink;
pub use crate::sinks::{ConsoleSink, MemorySink, WriterSink};
pub use crate::core::{
    EntryQueue, LogEntry, LogLevel, LogPriority, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, OverflowCallback, PushOutcome, Result, Sink, TimestampFormat, Wake,
    WorkerState, DEFAULT_MAX_QUEUE_DEPTH, DEFAULT_SHUTDOWN_TIMEOUT,
};
