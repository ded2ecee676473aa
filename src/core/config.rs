//! Printer configuration
//!
//! One configuration is shared by [`ConsolePrinter`](crate::ConsolePrinter)
//! and [`AsyncConsolePrinter`](crate::AsyncConsolePrinter). Settings can be
//! built in code or loaded from JSON.

use super::error::{PrinterError, Result};
use super::overflow_policy::OverflowPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Name column width a fresh printer starts with
pub const DEFAULT_NAME_WIDTH: usize = 40;

/// Console width assumed when the terminal size cannot be determined
pub const FALLBACK_CONSOLE_WIDTH: usize = 80;

pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// How often the print worker wakes up while the queue is idle
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Configuration for console printers
///
/// # Examples
///
/// ```
/// use rust_column_logger::{OverflowPolicy, PrinterConfig};
///
/// let config = PrinterConfig::new()
///     .with_name_width(16)
///     .with_console_width(120)
///     .with_overflow_policy(OverflowPolicy::DropNewest);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Starting width of the name column
    pub name_width: usize,
    /// Fixed console width; detected from the terminal when `None`
    pub console_width: Option<usize>,
    /// Capacity of the background print queue
    pub queue_capacity: usize,
    /// Idle wakeup interval of the print worker
    pub poll_interval: Duration,
    /// What to do when the print queue is full
    pub overflow_policy: OverflowPolicy,
    /// Whether to color the severity label
    pub use_colors: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
            console_width: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            poll_interval: DEFAULT_POLL_INTERVAL,
            overflow_policy: OverflowPolicy::default(),
            use_colors: false,
        }
    }
}

impl PrinterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields keep their defaults
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_column_logger::PrinterConfig;
    ///
    /// let config = PrinterConfig::from_json_str(r#"{ "name_width": 12 }"#).unwrap();
    /// assert_eq!(config.name_width, 12);
    /// assert_eq!(config.queue_capacity, 1024);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PrinterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings the printers cannot work without
    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == 0 {
            return Err(PrinterError::config(
                "PrinterConfig",
                "queue_capacity must be non-zero",
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(PrinterError::config(
                "PrinterConfig",
                "poll_interval must be non-zero",
            ));
        }
        if self.console_width == Some(0) {
            return Err(PrinterError::config(
                "PrinterConfig",
                "console_width must be non-zero",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Pin the console width instead of querying the terminal
    #[must_use]
    pub fn with_console_width(mut self, width: usize) -> Self {
        self.console_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}
