//! Printer metrics for observability
//!
//! Counters for printed and dropped messages, queue overflow events,
//! and failed writes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for printer observability
///
/// # Example
///
/// ```
/// use rust_column_logger::PrinterMetrics;
///
/// let metrics = PrinterMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_printed();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.total_printed(), 1);
/// ```
#[derive(Debug)]
pub struct PrinterMetrics {
    /// Number of messages dropped due to queue overflow
    dropped_count: AtomicU64,

    /// Total number of messages written to the output
    total_printed: AtomicU64,

    /// Number of times the queue was found full
    queue_full_events: AtomicU64,

    /// Number of writes the output rejected
    write_errors: AtomicU64,
}

impl PrinterMetrics {
    pub const fn new() -> Self {
        Self {
            dropped_count: AtomicU64::new(0),
            total_printed: AtomicU64::new(0),
            queue_full_events: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_printed(&self) -> u64 {
        self.total_printed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn queue_full_events(&self) -> u64 {
        self.queue_full_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    /// Record a dropped message, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_printed(&self) -> u64 {
        self.total_printed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_queue_full(&self) -> u64 {
        self.queue_full_events.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been submitted.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.total_printed() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }
}

impl Default for PrinterMetrics {
    fn default() -> Self {
        Self::new()
    }
}
