//! Background printing example
//!
//! Demonstrates queuing messages from several threads onto a single
//! print worker.
//!
//! Run with: cargo run --example parallel_printing

use rust_column_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Column Logger - Parallel Printing Example ===\n");

    let config = PrinterConfig::new()
        .with_name_width(12)
        .with_queue_capacity(64)
        .with_overflow_policy(OverflowPolicy::Block);
    let printer = Arc::new(AsyncConsolePrinter::new(config)?);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let printer = Arc::clone(&printer);
            thread::spawn(move || -> Result<()> {
                let name = format!("Worker-{}", i);
                for step in 0..5 {
                    printer.print_parallel(&format!("step {} done", step), &name, Severity::Info)?;
                }
                printer.print_parallel("finished\nall steps complete", &name, Severity::Warning)
            })
        })
        .collect();

    for handle in handles {
        match handle.join() {
            Ok(result) => result?,
            Err(_) => return Err(PrinterError::other("worker thread panicked")),
        }
    }

    if !printer.wait_idle(Duration::from_secs(2)) {
        eprintln!("Print queue did not drain in time");
    }

    let metrics = printer.metrics();
    println!("\nPrinted: {}, dropped: {}", metrics.total_printed(), metrics.dropped_count());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
