//! Sink trait for rendered log lines

use super::error::Result;

/// Destination for finished log lines.
///
/// The worker thread owns its sink exclusively, so implementations need
/// `Send` but not `Sync`. Errors are reported back to the worker, which
/// counts and prints them but never propagates them to emitting code.
pub trait Sink: Send {
    /// Write one line. `line` carries no trailing newline.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Flush buffered output. Called after every drained batch and on stop.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
