//! Core printer types and traits

pub mod async_console;
pub mod config;
pub mod console;
pub mod error;
pub mod exception;
pub mod layout;
pub mod message;
pub mod metrics;
pub mod output;
pub mod overflow_policy;
pub mod severity;
pub mod split;
pub mod timestamp;

pub use async_console::{AsyncConsolePrinter, DEFAULT_SHUTDOWN_TIMEOUT};
pub use config::PrinterConfig;
pub use console::ConsolePrinter;
pub use error::{PrinterError, Result};
pub use exception::{format_message, format_message_at, LoggedError};
pub use layout::{format_console, format_exception};
pub use message::Message;
pub use metrics::PrinterMetrics;
pub use output::Output;
pub use overflow_policy::OverflowPolicy;
pub use severity::Severity;
pub use split::split_string;
pub use timestamp::{format_timestamp, generate_timestamp, TIME_TEMPLATE, TIME_TEMPLATE_WIDTH};
