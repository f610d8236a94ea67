//! Logging macros for ergonomic log message formatting.
//!
//! The macros hand `format_args!` to [`Logger::log_fmt`](crate::Logger::log_fmt),
//! so arguments are never formatted for a level that is filtered out.
//!
//! # Examples
//!
//! ```
//! use rust_alog::prelude::*;
//! use rust_alog::info;
//!
//! let logger = Logger::new(MemorySink::new());
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! logger.stop();
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_alog::prelude::*;
/// # let logger = Logger::new(MemorySink::new());
/// use rust_alog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, format_args!($($arg)+))
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use rust_alog::prelude::*;
/// # let logger = Logger::new(MemorySink::new());
/// use rust_alog::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_alog::prelude::*;
/// # let logger = Logger::new(MemorySink::new());
/// use rust_alog::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_alog::prelude::*;
/// # let logger = Logger::new(MemorySink::new());
/// use rust_alog::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_alog::prelude::*;
/// # let logger = Logger::new(MemorySink::new());
/// use rust_alog::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_alog::prelude::*;
/// # let logger = Logger::new(MemorySink::new());
/// use rust_alog::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::sinks::MemorySink;

    fn messages(sink: &MemorySink) -> Vec<String> {
        sink.lines()
            .into_iter()
            .map(|line| line.rsplit_once(']').map(|(_, msg)| msg.to_string()).unwrap())
            .collect()
    }

    #[test]
    fn test_level_macros() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone());

        log!(logger, LogLevel::Info, "plain");
        fatal!(logger, "fatal {}", 1);
        error!(logger, "error {}", 2);
        warning!(logger, "warning {}", 3);
        info!(logger, "info {}", 4);
        debug!(logger, "debug {}", 5);
        logger.stop();

        assert_eq!(
            messages(&sink),
            ["plain", "fatal 1", "error 2", "warning 3", "info 4", "debug 5"]
        );
    }

    #[test]
    fn test_macros_respect_level() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone());
        logger.set_level(LogLevel::Warning);

        info!(logger, "hidden {}", 1);
        debug!(logger, "hidden {}", 2);
        warning!(logger, "shown");
        logger.stop();

        assert_eq!(messages(&sink), ["shown"]);
    }

    #[test]
    fn test_macros_work_through_arc() {
        let sink = MemorySink::new();
        let logger = std::sync::Arc::new(Logger::new(sink.clone()));
        info!(logger, "via arc");
        logger.stop();
        assert_eq!(sink.len(), 1);
    }
}
