//! Basic printer usage example
//!
//! Demonstrates column-aligned console output with different severities
//! and multi-line messages.
//!
//! Run with: cargo run --example basic_usage

use rust_column_logger::prelude::*;
use rust_column_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Column Logger - Basic Usage Example ===\n");

    let printer = ConsolePrinter::with_config(PrinterConfig::new().with_colors(true));

    println!("1. Printing at different severities:");
    printer.print("Configuration loaded", "Config", Severity::Info)?;
    printer.print("Cache directory missing, creating it", "Cache", Severity::Warning)?;
    printer.print("Could not reach update server", "Updater", Severity::Error)?;

    println!("\n2. Multi-line messages:");
    printer.print(
        "Request failed\nstatus: 503\nretrying in 5 seconds",
        "HttpClient",
        Severity::Warning,
    )?;

    println!("\n3. Narrower name column:");
    printer.set_max_name_length(10);
    info!(printer, "Config", "{} settings applied", 12)?;
    warning!(printer, "Scheduler", "job {} is late by {}ms", "backup", 250)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
