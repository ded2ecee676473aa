//! In-memory output implementation

use crate::core::{Output, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects printed blocks in a shared string.
///
/// Clones share the same buffer, so one handle can be given to a printer
/// while another reads back what was printed.
///
/// # Examples
///
/// ```
/// use rust_column_logger::{BufferOutput, ConsolePrinter, PrinterConfig, Severity};
///
/// let buffer = BufferOutput::new();
/// let printer = ConsolePrinter::with_output(
///     PrinterConfig::new().with_console_width(80),
///     Box::new(buffer.clone()),
/// );
/// printer.print("ready", "Loader", Severity::Info).unwrap();
/// assert!(buffer.contents().contains("(Loader"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    buffer: Arc<Mutex<String>>,
    width: Option<usize>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a fixed terminal width to the printer
    #[must_use]
    pub fn with_terminal_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Take the buffered text, leaving the buffer empty
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Output for BufferOutput {
    fn write_block(&mut self, block: &str) -> Result<()> {
        self.buffer.lock().push_str(block);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }

    fn terminal_width(&self) -> Option<usize> {
        self.width
    }
}
