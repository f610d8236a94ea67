//! Sink over any `io::Write`

use crate::core::{Result, Sink};
use std::io::Write;

/// Adapts an arbitrary writer (socket, pipe, stderr, buffer) into a sink.
pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named(writer, "writer")
    }

    pub fn named(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_newline_terminated_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("a").unwrap();
        sink.write_line("b").unwrap();
        assert_eq!(sink.name(), "writer");
        assert_eq!(sink.into_inner(), b"a\nb\n");
    }

    #[test]
    fn test_write_error_is_reported() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = WriterSink::named(Broken, "pipe");
        assert!(sink.write_line("lost").is_err());
        assert_eq!(sink.name(), "pipe");
    }
}
