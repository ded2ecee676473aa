//! Exception message example
//!
//! Demonstrates formatting messages into strings and returning them as
//! error values.
//!
//! Run with: cargo run --example exception_messages

use rust_column_logger::{format_message, LoggedError, Severity};

fn read_sensor(id: u32) -> Result<f64, LoggedError> {
    if id > 3 {
        return Err(LoggedError::new(
            format!("sensor {} not present\nknown sensors: 0-3", id),
            "SensorBus",
            Severity::Error,
        ));
    }
    Ok(21.5 + f64::from(id))
}

fn main() {
    println!("=== Rust Column Logger - Exception Messages Example ===\n");

    print!("{}", format_message("Calibration drifted\noffset: 0.3", "SensorBus", Severity::Warning));

    for id in [1, 7] {
        match read_sensor(id) {
            Ok(value) => println!("sensor {} -> {:.1}", id, value),
            Err(e) => print!("{}", e),
        }
    }

    println!("\n=== Example completed successfully! ===");
}
