//! # Rust Column Logger
//!
//! Column-aligned console logging tagged with a severity and a component
//! name, plus formatting of exception messages into strings.
//!
//! ## Features
//!
//! - **Aligned Columns**: Timestamp, severity and name columns line up across messages
//! - **Multi-line Messages**: Lines split on `'\n'` are right-aligned to the console edge
//! - **Background Printing**: A single worker drains a bounded print queue
//! - **Exception Messages**: The same layout as a string, for error values
//!
//! ```
//! use rust_column_logger::prelude::*;
//!
//! let printer = ConsolePrinter::new();
//! printer.print("Listening on port 8080", "Server", Severity::Info)?;
//!
//! let text = format_message("Connection refused", "Client", Severity::Error);
//! assert!(text.starts_with('['));
//! # Ok::<(), PrinterError>(())
//! ```

pub mod core;
pub mod macros;
pub mod outputs;

pub mod prelude {
    pub use crate::core::{
        format_message, AsyncConsolePrinter, ConsolePrinter, LoggedError, Message, Output,
        OverflowPolicy, PrinterConfig, PrinterError, PrinterMetrics, Result, Severity,
        DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::outputs::{BufferOutput, StdoutOutput};
}

pub use crate::core::async_console::print_parallel;
pub use crate::core::console::print;
pub use crate::core::{
    format_message, format_message_at, split_string, AsyncConsolePrinter, ConsolePrinter,
    LoggedError, Message, Output, OverflowPolicy, PrinterConfig, PrinterError, PrinterMetrics,
    Result, Severity, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use outputs::{BufferOutput, StdoutOutput};
