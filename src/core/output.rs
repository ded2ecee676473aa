//! Output trait for formatted console text

use super::error::Result;

/// Destination a printer writes fully formatted blocks to.
///
/// A printer calls [`write_block`](Output::write_block) once per message
/// while holding its lock, so a block is never split across writers.
pub trait Output: Send {
    fn write_block(&mut self, block: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Terminal width of this output, if it is attached to one
    fn terminal_width(&self) -> Option<usize> {
        None
    }
}
