//! Overflow policies for the background print queue
//!
//! When the print queue is full, these policies determine how
//! to handle newly submitted messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Policy for handling a full print queue
///
/// # Example
///
/// ```
/// use rust_column_logger::OverflowPolicy;
/// use std::time::Duration;
///
/// // Default behavior: wait for the worker
/// let policy = OverflowPolicy::default();
///
/// // Wait a little, then give up
/// let policy = OverflowPolicy::BlockWithTimeout(Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum OverflowPolicy {
    /// Block the caller until the worker frees a slot
    #[default]
    Block,

    /// Block with timeout, then drop
    BlockWithTimeout(Duration),

    /// Drop the new message when the queue is full
    ///
    /// Drops are counted and reported on stderr.
    DropNewest,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Block => write!(f, "Block"),
            OverflowPolicy::BlockWithTimeout(d) => write!(f, "BlockWithTimeout({:?})", d),
            OverflowPolicy::DropNewest => write!(f, "DropNewest"),
        }
    }
}
