//! Message structure

use super::severity::Severity;
use super::timestamp::generate_timestamp;

/// A message ready to be laid out: the text plus everything the header needs.
///
/// The timestamp is captured when the message is created, so a message
/// that waits in the print queue keeps the time it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub timestamp: String,
    pub severity: Severity,
    pub name: String,
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>, name: impl Into<String>, severity: Severity) -> Self {
        Self::at(generate_timestamp(), text, name, severity)
    }

    /// Build a message with an explicit timestamp
    pub fn at(
        timestamp: impl Into<String>,
        text: impl Into<String>,
        name: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            severity,
            name: name.into(),
            text: text.into(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Width of the component name in characters
    #[inline]
    pub fn name_width(&self) -> usize {
        self.name.chars().count()
    }
}
