//! Synchronous console printer

use super::{
    config::{PrinterConfig, FALLBACK_CONSOLE_WIDTH},
    error::Result,
    layout::format_console,
    message::Message,
    metrics::PrinterMetrics,
    output::Output,
    severity::Severity,
};
use crate::outputs::StdoutOutput;
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};

struct PrinterState {
    /// Widest name seen so far, or the last width that was set explicitly
    max_name_width: usize,
    output: Box<dyn Output>,
}

/// Prints column-aligned messages to a console.
///
/// The name column grows to fit the longest name printed so far, so later
/// messages line up with earlier ones. Message lines are right-aligned
/// against the console edge:
///
/// ```text
/// [2025-01-08 10:30:45.007] [INFO]     (Loader)                   MESSAGE LINE 1
///                                                          LONGER MESSAGE LINE 2
/// ```
///
/// Formatting and writing happen under one lock, so output from several
/// threads never interleaves within a message.
pub struct ConsolePrinter {
    state: Mutex<PrinterState>,
    console_width: Option<usize>,
    use_colors: bool,
    metrics: PrinterMetrics,
}

impl ConsolePrinter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PrinterConfig::default())
    }

    /// Create a printer writing to standard output
    #[must_use]
    pub fn with_config(config: PrinterConfig) -> Self {
        Self::with_output(config, Box::new(StdoutOutput::new()))
    }

    #[must_use]
    pub fn with_output(config: PrinterConfig, output: Box<dyn Output>) -> Self {
        Self {
            state: Mutex::new(PrinterState {
                max_name_width: config.name_width,
                output,
            }),
            console_width: config.console_width,
            use_colors: config.use_colors,
            metrics: PrinterMetrics::new(),
        }
    }

    /// Print `message` tagged with `name` and `severity`.
    ///
    /// Messages may span several lines separated by `'\n'`. An empty
    /// message prints nothing.
    pub fn print(&self, message: &str, name: &str, severity: Severity) -> Result<()> {
        if message.is_empty() {
            return Ok(());
        }
        self.print_message(&Message::new(message, name, severity))
    }

    /// Print a message whose timestamp was captured earlier
    pub fn print_message(&self, message: &Message) -> Result<()> {
        if message.is_empty() {
            return Ok(());
        }

        let mut state = self.state.lock();
        state.max_name_width = state.max_name_width.max(message.name_width());

        let console_width = self.resolve_console_width(state.output.as_ref());
        let block = format_console(message, state.max_name_width, console_width, self.use_colors);

        match state.output.write_block(&block) {
            Ok(()) => {
                self.metrics.record_printed();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_write_error();
                Err(e)
            }
        }
    }

    /// Set the expected maximum name length so columns line up from the start.
    ///
    /// Longer names printed afterwards still widen the column.
    pub fn set_max_name_length(&self, length: usize) {
        self.state.lock().max_name_width = length;
    }

    pub fn max_name_width(&self) -> usize {
        self.state.lock().max_name_width
    }

    /// Width the next message will be laid out for
    pub fn console_width(&self) -> usize {
        let state = self.state.lock();
        self.resolve_console_width(state.output.as_ref())
    }

    fn resolve_console_width(&self, output: &dyn Output) -> usize {
        resolve_width(self.console_width, output.terminal_width(), || std::env::var("COLUMNS").ok())
    }

    pub fn flush(&self) -> Result<()> {
        self.state.lock().output.flush()
    }

    pub fn output_name(&self) -> String {
        self.state.lock().output.name().to_string()
    }

    pub fn metrics(&self) -> &PrinterMetrics {
        &self.metrics
    }
}

impl Default for ConsolePrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Configured width, then the output's terminal, then `COLUMNS`, then 80.
///
/// `COLUMNS` is only read when nothing earlier applies. Values that are
/// not a positive integer are ignored.
fn resolve_width(
    configured: Option<usize>,
    terminal: Option<usize>,
    columns: impl FnOnce() -> Option<String>,
) -> usize {
    configured
        .or(terminal)
        .or_else(|| {
            columns()
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|&w| w > 0)
        })
        .unwrap_or(FALLBACK_CONSOLE_WIDTH)
}

/// Process-wide printer writing to standard output.
///
/// Shared with [`crate::core::async_console::global`], so direct and
/// queued prints use the same name column and lock.
pub fn global() -> &'static Arc<ConsolePrinter> {
    static GLOBAL: OnceLock<Arc<ConsolePrinter>> = OnceLock::new();
    GLOBAL.get_or_init(|| Arc::new(ConsolePrinter::new()))
}

/// Print through the process-wide printer
pub fn print(message: &str, name: &str, severity: Severity) -> Result<()> {
    global().print(message, name, severity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrinterError;
    use crate::outputs::BufferOutput;

    fn buffered(config: PrinterConfig) -> (ConsolePrinter, BufferOutput) {
        let buffer = BufferOutput::new();
        let printer = ConsolePrinter::with_output(config, Box::new(buffer.clone()));
        (printer, buffer)
    }

    struct FailingOutput;

    impl Output for FailingOutput {
        fn write_block(&mut self, _block: &str) -> Result<()> {
            Err(PrinterError::writer("console closed"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_print_writes_one_block() {
        let (printer, buffer) = buffered(PrinterConfig::new().with_console_width(120));
        printer.print("Test1", "LogConsole Unit Test", Severity::Info).expect("print");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[INFO]"));
        assert!(lines[0].contains("(LogConsole Unit Test)"));
        assert!(lines[0].ends_with("Test1"));
        assert_eq!(lines[0].chars().count(), 118);
        assert_eq!(printer.metrics().total_printed(), 1);
    }

    #[test]
    fn test_empty_message_is_noop() {
        let (printer, buffer) = buffered(PrinterConfig::new().with_console_width(120));
        printer.print("", "VeryLongComponentNameThatWouldWidenTheColumn", Severity::Error).expect("print");

        assert!(buffer.is_empty());
        assert_eq!(printer.max_name_width(), 40);
        assert_eq!(printer.metrics().total_printed(), 0);
    }

    #[test]
    fn test_name_width_grows_monotonically() {
        let (printer, _buffer) = buffered(PrinterConfig::new().with_name_width(4).with_console_width(120));

        printer.print("a", "abc", Severity::Info).expect("print");
        assert_eq!(printer.max_name_width(), 4);

        printer.print("a", "abcdefgh", Severity::Info).expect("print");
        assert_eq!(printer.max_name_width(), 8);

        printer.print("a", "ab", Severity::Info).expect("print");
        assert_eq!(printer.max_name_width(), 8);
    }

    #[test]
    fn test_set_max_name_length() {
        let (printer, buffer) = buffered(PrinterConfig::new().with_console_width(120));
        printer.set_max_name_length(6);
        assert_eq!(printer.max_name_width(), 6);

        printer.print("x", "Net", Severity::Warning).expect("print");
        assert!(buffer.contents().contains("(Net)    "));
    }

    #[test]
    fn test_huge_name_length_does_not_overflow() {
        let (printer, buffer) = buffered(PrinterConfig::new().with_console_width(80));
        printer.set_max_name_length(usize::MAX);

        printer.print("x", "Unit", Severity::Info).expect("print");
        assert_eq!(printer.max_name_width(), usize::MAX);
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with('x'));
    }

    #[test]
    fn test_console_width_resolution() {
        let (printer, _) = buffered(PrinterConfig::new().with_console_width(132));
        assert_eq!(printer.console_width(), 132);

        let buffer = BufferOutput::new().with_terminal_width(64);
        let printer = ConsolePrinter::with_output(PrinterConfig::new(), Box::new(buffer));
        assert_eq!(printer.console_width(), 64);
    }

    #[test]
    fn test_width_order() {
        let columns = || Some("100".to_string());
        assert_eq!(resolve_width(Some(132), Some(64), columns), 132);
        assert_eq!(resolve_width(None, Some(64), columns), 64);
        assert_eq!(resolve_width(None, None, columns), 100);
        assert_eq!(resolve_width(None, None, || None), FALLBACK_CONSOLE_WIDTH);
        assert_eq!(FALLBACK_CONSOLE_WIDTH, 80);
    }

    #[test]
    fn test_columns_is_read_only_when_needed() {
        let width = resolve_width(Some(132), None, || panic!("COLUMNS read despite configured width"));
        assert_eq!(width, 132);
    }

    #[test]
    fn test_unusable_columns_falls_back() {
        for value in ["", "0", "-5", "wide", "12.5"] {
            let width = resolve_width(None, None, || Some(value.to_string()));
            assert_eq!(width, 80, "COLUMNS={:?}", value);
        }
        assert_eq!(resolve_width(None, None, || Some(" 90 ".to_string())), 90);
    }

    #[test]
    fn test_write_error_propagates() {
        let printer = ConsolePrinter::with_output(
            PrinterConfig::new().with_console_width(80),
            Box::new(FailingOutput),
        );
        let err = printer.print("boom", "Unit", Severity::Error).unwrap_err();
        assert!(matches!(err, PrinterError::WriterError(_)));
        assert_eq!(printer.metrics().write_errors(), 1);
        assert_eq!(printer.output_name(), "failing");
    }

    #[test]
    fn test_multiline_message_alignment() {
        let (printer, buffer) = buffered(PrinterConfig::new().with_name_width(4).with_console_width(100));
        printer
            .print("Test2\nTest2\nlonger third line", "Unit", Severity::Info)
            .expect("print");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.chars().count(), 98);
        }
        assert!(lines[2].ends_with("longer third line"));
    }
}
