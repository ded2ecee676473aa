//! Standard output implementation

use crate::core::{Output, PrinterError, Result};
use std::io::{IsTerminal, Write};

/// Writes blocks to the process's standard output
#[derive(Debug, Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for StdoutOutput {
    fn write_block(&mut self, block: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(block.as_bytes())
            .map_err(|e| PrinterError::io_operation("writing to stdout", "console write failed", e))
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }

    fn terminal_width(&self) -> Option<usize> {
        if !std::io::stdout().is_terminal() {
            return None;
        }
        match crossterm::terminal::size() {
            Ok((columns, _)) if columns > 0 => Some(usize::from(columns)),
            _ => None,
        }
    }
}
