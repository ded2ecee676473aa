//! Error types for the console printers

pub type Result<T> = std::result::Result<T, PrinterError>;

#[derive(Debug, thiserror::Error)]
pub enum PrinterError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Queue full with buffer details
    #[error("Print queue full: {current}/{max} messages buffered")]
    QueueFull { current: usize, max: usize },

    /// Printer already stopped
    #[error("Printer already stopped")]
    PrinterStopped,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Output writer error
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Channel send error
    #[error("Failed to send message to print worker")]
    ChannelSendError,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl PrinterError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        PrinterError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn queue_full(current: usize, max: usize) -> Self {
        PrinterError::QueueFull { current, max }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        PrinterError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn writer<S: Into<String>>(msg: S) -> Self {
        PrinterError::WriterError(msg.into())
    }

    pub fn other<S: Into<String>>(msg: S) -> Self {
        PrinterError::Other(msg.into())
    }
}
