//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::{self, Write};

/// Writes each line to standard output.
///
/// Stdout is line-buffered when attached to a terminal; the worker also
/// flushes after every drained batch.
pub struct ConsoleSink {
    #[cfg(feature = "console")]
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "console")]
            use_colors: false,
        }
    }

    /// Colour the `[Level]` tag with ANSI escapes
    #[cfg(feature = "console")]
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Colour the level tag that follows the timestamp; the message is
    /// never inspected.
    #[cfg(feature = "console")]
    fn colorize(&self, line: &str) -> String {
        use crate::core::LogLevel;
        use colored::Colorize;

        if !self.use_colors {
            return line.to_string();
        }
        let Some(open) = line.find("][") else {
            return line.to_string();
        };
        let (head, rest) = line.split_at(open + 2);
        let Some(close) = rest.find(']') else {
            return line.to_string();
        };
        let (name, tail) = rest.split_at(close);
        match LogLevel::ALL.iter().find(|level| level.to_str() == name) {
            Some(level) => format!("{}{}{}", head, name.color(level.color_code()), tail),
            None => line.to_string(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        #[cfg(feature = "console")]
        writeln!(stdout, "{}", self.colorize(line))?;
        #[cfg(not(feature = "console"))]
        writeln!(stdout, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(all(test, feature = "console"))]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_is_untouched() {
        let sink = ConsoleSink::new();
        let line = "[2025-01-08 10:30:45.123][Warning]low disk";
        assert_eq!(sink.colorize(line), line);
    }

    #[test]
    fn test_colored_output_keeps_text() {
        colored::control::set_override(true);
        let sink = ConsoleSink::with_colors(true);
        let out = sink.colorize("[2025-01-08 10:30:45.123][Error]boom");
        assert!(out.starts_with("[2025-01-08 10:30:45.123]["));
        assert!(out.contains("Error"));
        assert!(out.ends_with("]boom"));
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_colors_level_tag_not_message_text() {
        colored::control::set_override(true);
        let sink = ConsoleSink::with_colors(true);
        let out = sink.colorize("[2025-01-08 10:30:45.123][Info]upstream said ][Fatal] x");

        let tag_end = out.find("upstream").unwrap();
        assert!(out[..tag_end].contains('\u{1b}'));
        assert!(out[..tag_end].contains("Info"));
        assert!(out.ends_with("upstream said ][Fatal] x"));
    }

    #[test]
    fn test_unrecognised_tag_is_left_plain() {
        colored::control::set_override(true);
        let sink = ConsoleSink::with_colors(true);
        let line = "[2025-01-08 10:30:45.123][Trace]say ][Error] here";
        assert_eq!(sink.colorize(line), line);
    }

    #[test]
    fn test_write_line_succeeds() {
        let mut sink = ConsoleSink::new();
        assert!(sink.write_line("[ts][Info]console sink test").is_ok());
        assert!(sink.flush().is_ok());
        assert_eq!(sink.name(), "console");
    }
}
