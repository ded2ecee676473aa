//! Printing macros for ergonomic message formatting.
//!
//! Each macro takes a printer, a component name, and `format!` arguments,
//! and returns the printer's [`Result`](crate::Result).
//!
//! # Examples
//!
//! ```
//! use rust_column_logger::prelude::*;
//! use rust_column_logger::info;
//!
//! let printer = ConsolePrinter::new();
//!
//! info!(printer, "Server", "started")?;
//!
//! let port = 8080;
//! info!(printer, "Server", "listening on port {}", port)?;
//! # Ok::<(), PrinterError>(())
//! ```

/// Print a message at the given severity.
///
/// # Examples
///
/// ```
/// # use rust_column_logger::prelude::*;
/// # let printer = ConsolePrinter::new();
/// use rust_column_logger::log;
/// log!(printer, Severity::Info, "Loader", "Simple message").unwrap();
/// log!(printer, Severity::Error, "Loader", "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($printer:expr, $severity:expr, $name:expr, $($arg:tt)+) => {
        $printer.print(&format!($($arg)+), $name, $severity)
    };
}

/// Print an info message.
///
/// # Examples
///
/// ```
/// # use rust_column_logger::prelude::*;
/// # let printer = ConsolePrinter::new();
/// use rust_column_logger::info;
/// info!(printer, "Scheduler", "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($printer:expr, $name:expr, $($arg:tt)+) => {
        $crate::log!($printer, $crate::Severity::Info, $name, $($arg)+)
    };
}

/// Print a warning message.
///
/// # Examples
///
/// ```
/// # use rust_column_logger::prelude::*;
/// # let printer = ConsolePrinter::new();
/// use rust_column_logger::warning;
/// warning!(printer, "Disk", "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($printer:expr, $name:expr, $($arg:tt)+) => {
        $crate::log!($printer, $crate::Severity::Warning, $name, $($arg)+)
    };
}

/// Print an error message.
///
/// # Examples
///
/// ```
/// # use rust_column_logger::prelude::*;
/// # let printer = ConsolePrinter::new();
/// use rust_column_logger::error;
/// error!(printer, "Database", "Failed to connect: {}", "timeout").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($printer:expr, $name:expr, $($arg:tt)+) => {
        $crate::log!($printer, $crate::Severity::Error, $name, $($arg)+)
    };
}
