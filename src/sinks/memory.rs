//! In-memory sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines in a shared buffer.
///
/// Clones share the same buffer, so one handle can be given to the logger
/// while another reads what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return every line written so far
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let reader = MemorySink::new();
        let mut writer = reader.clone();

        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();

        assert_eq!(reader.len(), 2);
        assert_eq!(reader.lines(), ["one", "two"]);
        assert_eq!(reader.take(), ["one", "two"]);
        assert!(reader.is_empty());
    }
}
