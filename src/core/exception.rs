//! Exception message formatting
//!
//! Produces the same header as the console printer, laid out as a
//! standalone string for error values instead of being written anywhere.
//! Nothing here takes a lock or remembers widths between calls.

use super::layout::format_exception;
use super::message::Message;
use super::severity::Severity;
use super::timestamp::generate_timestamp;

/// Format a message as a multi-line string.
///
/// ```text
/// [2025-01-08 10:30:45.007] [ERROR]    (Parser)       MESSAGE LINE 1
///                                         LONGER MESSAGE LINE 2
/// ```
///
/// Every line ends with `'\n'`. An empty message yields an empty string.
///
/// # Examples
///
/// ```
/// use rust_column_logger::{format_message, Severity};
///
/// let text = format_message("bad header\nat byte 12", "Parser", Severity::Error);
/// assert_eq!(text.lines().count(), 2);
/// assert!(text.contains("[ERROR]"));
/// ```
#[must_use]
pub fn format_message(message: &str, name: &str, severity: Severity) -> String {
    format_message_at(&generate_timestamp(), message, name, severity)
}

/// Format a message with an explicit timestamp
#[must_use]
pub fn format_message_at(timestamp: &str, message: &str, name: &str, severity: Severity) -> String {
    if message.is_empty() {
        return String::new();
    }
    format_exception(&Message::at(timestamp, message, name, severity))
}

/// An error carrying a formatted exception message.
///
/// Its `Display` output is the formatted text, so it can be returned from
/// a failing operation and printed as-is.
///
/// # Examples
///
/// ```
/// use rust_column_logger::{LoggedError, Severity};
///
/// fn open_device() -> Result<(), LoggedError> {
///     Err(LoggedError::new("device not found", "Driver", Severity::Error))
/// }
///
/// let err = open_device().unwrap_err();
/// assert!(err.to_string().contains("(Driver)"));
/// assert_eq!(err.message(), "device not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{formatted}")]
pub struct LoggedError {
    severity: Severity,
    name: String,
    message: String,
    formatted: String,
}

impl LoggedError {
    /// Create an error whose `Display` output is the formatted message.
    ///
    /// Formatting follows [`format_message`], so an empty `message` gives an
    /// empty `Display` output. The name and severity are still kept and can
    /// be read back.
    pub fn new(message: impl Into<String>, name: impl Into<String>, severity: Severity) -> Self {
        let message = message.into();
        let name = name.into();
        let formatted = format_message(&message, &name, severity);
        Self {
            severity,
            name,
            message,
            formatted,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unformatted message text
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}
