//! Background worker that drains the queue into the sink

use super::log_entry::LogEntry;
use super::logger::Shared;
use super::queue::Wake;
use super::sink::Sink;
use super::timestamp::TimestampFormat;
use crossbeam_channel::Sender;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Observable state of the background worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerState {
    /// Blocked until entries arrive or stop is requested
    Waiting = 0,
    /// Rendering a detached batch to the sink
    Draining = 1,
    /// Exited after stop; never restarts
    Terminated = 2,
}

impl WorkerState {
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => WorkerState::Waiting,
            1 => WorkerState::Draining,
            _ => WorkerState::Terminated,
        }
    }
}

pub(crate) struct Worker {
    shared: Arc<Shared>,
    sink: Box<dyn Sink>,
    timestamp_format: TimestampFormat,
    /// Dropped when the worker exits; closing the channel is the
    /// completion signal `Logger::stop` waits on.
    _completion: Sender<()>,
}

impl Worker {
    pub(crate) fn new(
        shared: Arc<Shared>,
        sink: Box<dyn Sink>,
        timestamp_format: TimestampFormat,
        completion: Sender<()>,
    ) -> Self {
        Self {
            shared,
            sink,
            timestamp_format,
            _completion: completion,
        }
    }

    pub(crate) fn spawn(self, thread_name: &str) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(thread_name.to_string())
            .spawn(move || self.run())
    }

    fn run(mut self) {
        loop {
            self.shared.set_worker_state(WorkerState::Waiting);
            match self.shared.queue.wait_for_work_or_stop() {
                Wake::Work(batch) => {
                    self.shared.set_worker_state(WorkerState::Draining);
                    self.process_batch(batch);
                }
                Wake::Stopped => break,
            }
        }
        self.flush_sink();
        self.shared.set_worker_state(WorkerState::Terminated);
    }

    /// Write a drained batch in insertion order, re-checking each entry
    /// against the level in effect now.
    fn process_batch(&mut self, batch: Vec<LogEntry>) {
        for entry in batch {
            if entry.level().is_more_verbose_than(self.shared.level()) {
                self.shared.metrics.record_skipped_at_drain();
                continue;
            }
            let line = entry.render(&self.timestamp_format);
            self.write_line(&line);
        }
        self.flush_sink();
    }

    /// Write one line with panic isolation
    fn write_line(&mut self, line: &str) {
        let sink = &mut self.sink;
        let result = panic::catch_unwind(AssertUnwindSafe(|| sink.write_line(line)));

        match result {
            Ok(Ok(())) => {
                self.shared.metrics.record_written();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", self.sink.name(), e);
                self.shared.metrics.record_write_failure();
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}. Worker continues.",
                    self.sink.name(),
                    panic_message(panic_info.as_ref())
                );
                self.shared.metrics.record_write_failure();
            }
        }
    }

    fn flush_sink(&mut self) {
        let sink = &mut self.sink;
        let result = panic::catch_unwind(AssertUnwindSafe(|| sink.flush()));

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' flush failed: {}", self.sink.name(), e);
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked during flush: {}",
                    self.sink.name(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }
}

pub(crate) fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_state_from_u8() {
        assert_eq!(WorkerState::from_u8(WorkerState::Waiting as u8), WorkerState::Waiting);
        assert_eq!(WorkerState::from_u8(WorkerState::Draining as u8), WorkerState::Draining);
        assert_eq!(WorkerState::from_u8(WorkerState::Terminated as u8), WorkerState::Terminated);
    }

    #[test]
    fn test_panic_message_extraction() {
        let boxed: Box<dyn Any + Send> = Box::new("static str");
        assert_eq!(panic_message(boxed.as_ref()), "static str");

        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(boxed.as_ref()), "owned");

        let boxed: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(boxed.as_ref()), "Unknown panic");
    }
}
