//! File logging example
//!
//! Demonstrates loading configuration from JSON and logging to a file.
//!
//! Run with: cargo run --example file_logging

use rust_alog::prelude::*;

const CONFIG: &str = r#"{
    "level": "Info",
    "max_queue_depth": 1000,
    "worker_thread_name": "file-logger"
}"#;

fn main() -> Result<()> {
    println!("=== rust_alog - File Logging Example ===\n");

    let config = LoggerConfig::from_json(CONFIG)?;
    let logger = Logger::with_config(config, FileSink::new("application.log")?)?;

    logger.info("Application started");
    logger.debug("Loading configuration... (filtered)");
    logger.info("Configuration loaded successfully");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warning("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");

    // Flushes the file before returning.
    logger.stop();

    println!("=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
