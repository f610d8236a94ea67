//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    overflow_policy::{should_alert, OverflowCallback},
    queue::{EntryQueue, PushOutcome},
    sink::Sink,
    timestamp::TimestampFormat,
    worker::{panic_message, Worker, WorkerState},
};
use crate::sinks::ConsoleSink;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use parking_lot::Mutex;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Default shutdown timeout used when a logger is dropped without an
/// explicit [`Logger::stop`].
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// State shared between emitting threads and the worker.
///
/// Level and depth are relaxed atomics: a configuration change becomes
/// visible to other threads eventually, not at a defined point.
pub(crate) struct Shared {
    pub(crate) queue: EntryQueue,
    level: AtomicU8,
    max_queue_depth: AtomicUsize,
    worker_state: AtomicU8,
    pub(crate) metrics: LoggerMetrics,
}

impl Shared {
    fn new(level: LogLevel, max_queue_depth: usize) -> Self {
        Self {
            queue: EntryQueue::new(),
            level: AtomicU8::new(level.as_u8()),
            max_queue_depth: AtomicUsize::new(max_queue_depth),
            worker_state: AtomicU8::new(WorkerState::Waiting as u8),
            metrics: LoggerMetrics::new(),
        }
    }

    #[inline]
    pub(crate) fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub(crate) fn set_worker_state(&self, state: WorkerState) {
        self.worker_state.store(state as u8, Ordering::Release);
    }
}

/// Asynchronous leveled logger.
///
/// Emitting threads build an entry and append it to a shared queue; a
/// single background worker drains the whole queue at once and writes each
/// entry to the sink as `[<timestamp>][<Level>]<message>`.
///
/// Each `Logger` is an independent instance with its own worker thread.
/// Share it between threads behind an `Arc`.
///
/// # Dropped entries
///
/// Emitting never fails and never blocks on output. Entries disappear
/// silently, and are counted in [`Logger::metrics`], when:
///
/// * their level is more verbose than the current level, either at emit
///   time or when the worker drains them;
/// * more than `max_queue_depth` entries are pending and the entry is
///   Warning, Info or Debug (Error and Fatal are always kept);
/// * they are emitted after [`Logger::stop`] was called.
///
/// # Example
///
/// ```
/// use rust_alog::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .sink(sink.clone())
///     .build()
///     .unwrap();
///
/// logger.info("server started");
/// logger.debug("not shown");
/// logger.stop();
///
/// let lines = sink.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with("][Info]server started"));
/// ```
pub struct Logger {
    shared: Arc<Shared>,
    worker: Mutex<Option<JoinHandle<()>>>,
    /// Disconnects once the worker has exited
    completion: Receiver<()>,
    on_overflow: Option<OverflowCallback>,
}

impl Logger {
    /// Start a logger with default configuration writing to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if the operating system refuses to spawn the worker thread.
    /// Use [`Logger::with_config`] to handle that case.
    pub fn new(sink: impl Sink + 'static) -> Self {
        match Self::start(LoggerConfig::default(), Box::new(sink), None) {
            Ok(logger) => logger,
            Err(e) => panic!("failed to start logger: {}", e),
        }
    }

    /// Start a logger with the given configuration writing to `sink`.
    pub fn with_config(config: LoggerConfig, sink: impl Sink + 'static) -> Result<Self> {
        Self::start(config, Box::new(sink), None)
    }

    fn start(
        config: LoggerConfig,
        sink: Box<dyn Sink>,
        on_overflow: Option<OverflowCallback>,
    ) -> Result<Self> {
        config.validate()?;

        let shared = Arc::new(Shared::new(config.level, config.max_queue_depth));
        let (completion_tx, completion_rx) = bounded::<()>(0);

        let worker = Worker::new(
            Arc::clone(&shared),
            sink,
            config.timestamp_format,
            completion_tx,
        );
        let handle = worker.spawn(&config.worker_thread_name).map_err(|e| {
            LoggerError::io_operation(
                "spawning worker thread",
                format!("cannot start '{}'", config.worker_thread_name),
                e,
            )
        })?;

        Ok(Self {
            shared,
            worker: Mutex::new(Some(handle)),
            completion: completion_rx,
            on_overflow,
        })
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Set the most verbose level that is still written.
    ///
    /// Applies to entries already queued as well: the worker re-checks
    /// each entry against the level in effect when it drains.
    pub fn set_level(&self, level: LogLevel) {
        self.shared.level.store(level.as_u8(), Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        self.shared.level()
    }

    /// Set the soft limit on pending entries used by the overflow policy
    pub fn set_max_queue_depth(&self, depth: usize) {
        self.shared.max_queue_depth.store(depth, Ordering::Relaxed);
    }

    pub fn max_queue_depth(&self) -> usize {
        self.shared.max_queue_depth.load(Ordering::Relaxed)
    }

    /// Whether an entry at `level` would currently pass the level filter
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        !level.is_more_verbose_than(self.shared.level())
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            self.shared.metrics.record_filtered();
            return;
        }
        self.submit(LogEntry::new(level, message));
    }

    /// Log pre-captured format arguments.
    ///
    /// The arguments are only rendered when `level` passes the filter,
    /// which is what the logging macros rely on.
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            self.shared.metrics.record_filtered();
            return;
        }
        self.submit(LogEntry::new(level, fmt::format(args)));
    }

    fn submit(&self, entry: LogEntry) {
        match self.shared.queue.push(entry, self.max_queue_depth()) {
            PushOutcome::Queued => {
                self.shared.metrics.record_accepted();
            }
            PushOutcome::Overflow => {
                let total = self.shared.metrics.record_dropped() + 1;
                if should_alert(total) {
                    if let Some(ref callback) = self.on_overflow {
                        let result = panic::catch_unwind(AssertUnwindSafe(|| callback(total)));
                        if let Err(panic_info) = result {
                            eprintln!(
                                "[LOGGER ERROR] Overflow callback panicked: {}",
                                panic_message(panic_info.as_ref())
                            );
                        }
                    }
                }
            }
            PushOutcome::Stopped => {
                self.shared.metrics.record_rejected_after_stop();
            }
        }
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    /// Stop the worker and wait until every accepted entry is written.
    ///
    /// Entries emitted after this call starts are rejected. Calling `stop`
    /// again, from any thread, returns once the first call has completed.
    pub fn stop(&self) {
        self.shared.queue.request_stop();

        let mut worker = self.worker.lock();
        if let Some(handle) = worker.take() {
            // Never receives a value; returns when the worker drops its sender.
            let _ = self.completion.recv();
            Self::join_worker(handle);
        }
    }

    /// Like [`Logger::stop`] but gives up waiting after `timeout`.
    ///
    /// Returns `true` if the worker finished in time. On `false` the worker
    /// keeps draining in the background and a later `stop` can wait for it.
    pub fn stop_timeout(&self, timeout: Duration) -> bool {
        let start = Instant::now();
        self.shared.queue.request_stop();

        let Some(mut worker) = self.worker.try_lock_for(timeout) else {
            return false;
        };
        let Some(handle) = worker.take() else {
            return true;
        };

        let remaining = timeout.saturating_sub(start.elapsed());
        match self.completion.recv_timeout(remaining) {
            Err(RecvTimeoutError::Timeout) => {
                *worker = Some(handle);
                false
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                Self::join_worker(handle);
                true
            }
        }
    }

    fn join_worker(handle: JoinHandle<()>) {
        if let Err(e) = handle.join() {
            eprintln!("[LOGGER ERROR] Worker thread panicked during shutdown: {:?}", e);
        }
    }

    /// Whether stop has been requested
    pub fn is_stopped(&self) -> bool {
        self.shared.queue.is_stopping()
    }

    /// Number of entries waiting for the worker
    pub fn pending(&self) -> usize {
        self.shared.queue.len()
    }

    pub fn worker_state(&self) -> WorkerState {
        WorkerState::from_u8(self.shared.worker_state.load(Ordering::Acquire))
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_alog::prelude::*;
    ///
    /// let logger = Logger::new(MemorySink::new());
    /// logger.set_level(LogLevel::Warning);
    /// logger.debug("filtered");
    /// logger.stop();
    ///
    /// assert_eq!(logger.metrics().filtered_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }
}

impl Default for Logger {
    /// Logger with default configuration writing to stdout
    fn default() -> Self {
        Self::new(ConsoleSink::new())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("max_queue_depth", &self.max_queue_depth())
            .field("pending", &self.pending())
            .field("worker_state", &self.worker_state())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if !self.stop_timeout(DEFAULT_SHUTDOWN_TIMEOUT) {
            eprintln!(
                "[LOGGER WARNING] Worker thread did not finish within {:?} timeout. \
                 Some logs may be lost.",
                DEFAULT_SHUTDOWN_TIMEOUT
            );
        }

        let dropped = self.shared.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped logs (drop rate: {:.2}%)",
                dropped,
                self.shared.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_alog::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .max_queue_depth(1000)
///     .sink(ConsoleSink::new())
///     .on_overflow(Arc::new(|count| {
///         eprintln!("ALERT: {} logs dropped", count);
///     }))
///     .build()
///     .unwrap();
/// logger.stop();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Box<dyn Sink>>,
    on_overflow: Option<OverflowCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
            on_overflow: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_queue_depth(mut self, depth: usize) -> Self {
        self.config.max_queue_depth = depth;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn worker_thread_name(mut self, name: impl Into<String>) -> Self {
        self.config.worker_thread_name = name.into();
        self
    }

    /// Set the output sink. Defaults to [`ConsoleSink`].
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set a callback for overflow notifications
    ///
    /// Invoked on the first overflow drop and every thousandth after it,
    /// with the total number of entries dropped so far.
    #[must_use = "builder methods return a new value"]
    pub fn on_overflow(mut self, callback: OverflowCallback) -> Self {
        self.on_overflow = Some(callback);
        self
    }

    /// Validate the configuration and start the worker
    pub fn build(self) -> Result<Logger> {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::new()));
        Logger::start(self.config, sink, self.on_overflow)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
