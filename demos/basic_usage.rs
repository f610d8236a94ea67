//! Basic logger usage example
//!
//! Demonstrates console logging at every level and changing the level at runtime.
//!
//! Run with: cargo run --example basic_usage

use rust_alog::prelude::*;

fn main() -> Result<()> {
    println!("=== rust_alog - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .sink(ConsoleSink::with_colors(true))
        .build()?;

    println!("1. Logging at different levels:");
    logger.fatal("This is a fatal message");
    logger.error("This is an error message");
    logger.warning("This is a warning message");
    logger.info("This is an info message");
    logger.debug("This is a debug message");

    println!("\n2. Raising the threshold to Warning:");
    logger.set_level(LogLevel::Warning);
    logger.info("Info message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.warning("Warning message (visible)");

    // Blocks until everything above has been printed.
    logger.stop();

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
