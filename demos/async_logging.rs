//! Async logging example
//!
//! Demonstrates many producer threads sharing one logger, and the overflow
//! policy dropping routine entries while keeping errors.
//!
//! Run with: cargo run --example async_logging

use rust_alog::prelude::*;
use rust_alog::{error, info};
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== rust_alog - Async Logging Example ===\n");

    let logger = Arc::new(
        Logger::builder()
            .level(LogLevel::Info)
            .max_queue_depth(64)
            .on_overflow(Arc::new(|count| {
                eprintln!("ALERT: {} entries dropped", count);
            }))
            .build()?,
    );

    println!("1. Five threads logging concurrently:");
    let handles: Vec<_> = (0..5)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..200 {
                    info!(logger, "Thread {} - Message {}", thread_id, i);
                    if i % 50 == 0 {
                        error!(logger, "Thread {} - checkpoint {}", thread_id, i);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("producer thread panicked");
        }
    }

    logger.stop();

    let metrics = logger.metrics();
    println!("\n2. Metrics:");
    println!("   accepted: {}", metrics.accepted_count());
    println!("   written:  {}", metrics.written_count());
    println!("   dropped:  {} ({:.2}%)", metrics.dropped_count(), metrics.drop_rate());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
