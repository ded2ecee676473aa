//! Background console printer
//!
//! Messages are queued by the caller and written by a single worker thread
//! through a shared [`ConsolePrinter`], so queued and direct prints use the
//! same name column and never interleave.

use super::{
    config::PrinterConfig,
    console::{self, ConsolePrinter},
    error::{PrinterError, Result},
    message::Message,
    metrics::PrinterMetrics,
    overflow_policy::OverflowPolicy,
    severity::Severity,
};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, SendTimeoutError, Sender, TrySendError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for printer cleanup (5 seconds)
///
/// Used when the printer is dropped without an explicit `shutdown()`.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Most messages the worker writes before flushing the output
const BATCH_SIZE: usize = 64;

pub struct AsyncConsolePrinter {
    printer: Arc<ConsolePrinter>,
    sender: Option<Sender<Message>>,
    worker: Option<thread::JoinHandle<()>>,
    /// Messages accepted but not yet written
    pending: Arc<AtomicUsize>,
    metrics: Arc<PrinterMetrics>,
    overflow_policy: OverflowPolicy,
    capacity: usize,
}

impl AsyncConsolePrinter {
    /// Create a background printer writing to standard output
    pub fn new(config: PrinterConfig) -> Result<Self> {
        let printer = Arc::new(ConsolePrinter::with_config(config.clone()));
        Self::with_printer(printer, config)
    }

    /// Create a background printer that writes through `printer`.
    ///
    /// Only the queue settings of `config` are used; layout settings come
    /// from `printer`.
    pub fn with_printer(printer: Arc<ConsolePrinter>, config: PrinterConfig) -> Result<Self> {
        config.validate()?;

        let (sender, receiver) = bounded(config.queue_capacity);
        let pending = Arc::new(AtomicUsize::new(0));
        let metrics = Arc::new(PrinterMetrics::new());

        let worker = {
            let printer = Arc::clone(&printer);
            let pending = Arc::clone(&pending);
            let metrics = Arc::clone(&metrics);
            let poll_interval = config.poll_interval;
            thread::Builder::new()
                .name("console-printer".to_string())
                .spawn(move || Self::run_worker(receiver, printer, pending, metrics, poll_interval))
                .map_err(|e| PrinterError::io_operation("spawning print worker", "thread spawn failed", e))?
        };

        Ok(Self {
            printer,
            sender: Some(sender),
            worker: Some(worker),
            pending,
            metrics,
            overflow_policy: config.overflow_policy,
            capacity: config.queue_capacity,
        })
    }

    fn run_worker(
        receiver: Receiver<Message>,
        printer: Arc<ConsolePrinter>,
        pending: Arc<AtomicUsize>,
        metrics: Arc<PrinterMetrics>,
        poll_interval: Duration,
    ) {
        loop {
            let first = match receiver.recv_timeout(poll_interval) {
                Ok(message) => message,
                Err(RecvTimeoutError::Timeout) => continue,
                // Queue closed and drained
                Err(RecvTimeoutError::Disconnected) => break,
            };

            Self::write_one(&printer, &first, &metrics);
            pending.fetch_sub(1, Ordering::AcqRel);

            let mut written = 1;
            while written < BATCH_SIZE {
                match receiver.try_recv() {
                    Ok(message) => {
                        Self::write_one(&printer, &message, &metrics);
                        pending.fetch_sub(1, Ordering::AcqRel);
                        written += 1;
                    }
                    Err(_) => break,
                }
            }

            if let Err(e) = printer.flush() {
                eprintln!("[LOGGER ERROR] Output '{}' flush failed: {}", printer.output_name(), e);
            }
        }

        if let Err(e) = printer.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }

    /// Write a single message, isolating output panics from the worker
    fn write_one(printer: &ConsolePrinter, message: &Message, metrics: &PrinterMetrics) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            printer.print_message(message)
        }));

        match result {
            Ok(Ok(())) => {
                metrics.record_printed();
            }
            Ok(Err(e)) => {
                metrics.record_write_error();
                eprintln!("[LOGGER ERROR] Output '{}' failed: {}", printer.output_name(), e);
            }
            Err(panic_info) => {
                metrics.record_write_error();
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Output panicked: {}. Print worker continues.",
                    panic_msg
                );
            }
        }
    }

    /// Queue `message` for the worker to print.
    ///
    /// The timestamp is taken now, not when the worker gets to the message.
    /// An empty message is ignored.
    pub fn print_parallel(&self, message: &str, name: &str, severity: Severity) -> Result<()> {
        if message.is_empty() {
            return Ok(());
        }
        let sender = self.sender.as_ref().ok_or(PrinterError::PrinterStopped)?;

        self.pending.fetch_add(1, Ordering::AcqRel);
        let result = self.enqueue(sender, Message::new(message, name, severity));
        if result.is_err() {
            self.pending.fetch_sub(1, Ordering::AcqRel);
        }
        result
    }

    fn enqueue(&self, sender: &Sender<Message>, message: Message) -> Result<()> {
        let message = match sender.try_send(message) {
            Ok(()) => return Ok(()),
            Err(TrySendError::Full(message)) => message,
            Err(TrySendError::Disconnected(_)) => return Err(PrinterError::ChannelSendError),
        };

        self.metrics.record_queue_full();
        match &self.overflow_policy {
            OverflowPolicy::Block => sender.send(message).map_err(|_| PrinterError::ChannelSendError),
            OverflowPolicy::BlockWithTimeout(timeout) => match sender.send_timeout(message, *timeout) {
                Ok(()) => Ok(()),
                Err(SendTimeoutError::Timeout(_)) => Err(self.drop_message()),
                Err(SendTimeoutError::Disconnected(_)) => Err(PrinterError::ChannelSendError),
            },
            OverflowPolicy::DropNewest => Err(self.drop_message()),
        }
    }

    /// Count a dropped message, alerting on the first and every 1000th drop
    fn drop_message(&self) -> PrinterError {
        let dropped_count = self.metrics.record_dropped();
        if should_report_drop(dropped_count) {
            eprintln!(
                "[LOGGER WARNING] Print queue full, {} messages dropped. \
                 Consider increasing queue_capacity or using OverflowPolicy::Block.",
                dropped_count + 1
            );
        }
        PrinterError::queue_full(self.capacity, self.capacity)
    }

    /// Print immediately on the calling thread, bypassing the queue
    pub fn print(&self, message: &str, name: &str, severity: Severity) -> Result<()> {
        self.printer.print(message, name, severity)
    }

    /// Wait until every accepted message has been written.
    ///
    /// Returns `false` if `timeout` expires first.
    pub fn wait_idle(&self, timeout: Duration) -> bool {
        let start = Instant::now();
        while self.pending.load(Ordering::Acquire) > 0 {
            if start.elapsed() >= timeout {
                return false;
            }
            thread::sleep(Duration::from_millis(1));
        }
        true
    }

    /// Number of messages accepted but not yet written
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    pub fn printer(&self) -> &Arc<ConsolePrinter> {
        &self.printer
    }

    pub fn set_max_name_length(&self, length: usize) {
        self.printer.set_max_name_length(length);
    }

    /// Queue-side metrics: printed, dropped, queue-full and write errors
    pub fn metrics(&self) -> &PrinterMetrics {
        &self.metrics
    }

    pub fn is_running(&self) -> bool {
        self.sender.is_some()
    }

    /// Stop accepting messages, drain the queue and join the worker.
    ///
    /// Returns `true` if the worker finished within `timeout`.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        // Closing the channel tells the worker to drain and exit
        drop(self.sender.take());

        if let Some(handle) = self.worker.take() {
            let start = Instant::now();
            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!("[LOGGER ERROR] Print worker panicked during shutdown: {:?}", e);
                        return false;
                    }
                    break;
                }

                if start.elapsed() >= timeout {
                    eprintln!(
                        "[LOGGER WARNING] Print worker did not finish within {:?}. \
                         Some messages may be lost.",
                        timeout
                    );
                    return false;
                }

                thread::sleep(Duration::from_millis(1));
            }
        }

        true
    }
}

impl Drop for AsyncConsolePrinter {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Printer shutting down with {} dropped messages (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Whether a drop is reported, given how many drops came before it:
/// the first drop, then every 1000th.
fn should_report_drop(previous_drops: u64) -> bool {
    previous_drops == 0 || (previous_drops + 1).is_multiple_of(1000)
}

/// Process-wide background printer sharing [`console::global`].
///
/// If the worker cannot be started, messages are printed directly.
pub fn global() -> Option<&'static AsyncConsolePrinter> {
    static GLOBAL: OnceLock<Option<AsyncConsolePrinter>> = OnceLock::new();
    GLOBAL
        .get_or_init(|| {
            match AsyncConsolePrinter::with_printer(Arc::clone(console::global()), PrinterConfig::default()) {
                Ok(printer) => Some(printer),
                Err(e) => {
                    eprintln!("[LOGGER ERROR] Failed to start global print worker: {}", e);
                    None
                }
            }
        })
        .as_ref()
}

/// Queue a message on the process-wide background printer
pub fn print_parallel(message: &str, name: &str, severity: Severity) -> Result<()> {
    match global() {
        Some(printer) => printer.print_parallel(message, name, severity),
        None => console::print(message, name, severity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Output;
    use crate::outputs::BufferOutput;

    const IDLE_TIMEOUT: Duration = Duration::from_secs(5);

    fn buffered(config: PrinterConfig) -> (AsyncConsolePrinter, BufferOutput) {
        let buffer = BufferOutput::new();
        let printer = Arc::new(ConsolePrinter::with_output(config.clone(), Box::new(buffer.clone())));
        let printer = AsyncConsolePrinter::with_printer(printer, config).expect("start worker");
        (printer, buffer)
    }

    #[test]
    fn test_print_parallel_is_written_by_worker() {
        let (printer, buffer) = buffered(PrinterConfig::new().with_console_width(120));
        printer.print_parallel("TestParallel1", "Unit", Severity::Info).expect("enqueue");

        assert!(printer.wait_idle(IDLE_TIMEOUT));
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("TestParallel1"));
        assert_eq!(printer.metrics().total_printed(), 1);
    }

    #[test]
    fn test_messages_keep_fifo_order() {
        let (printer, buffer) = buffered(PrinterConfig::new().with_console_width(120));
        for i in 0..100 {
            printer.print_parallel(&format!("Message {}", i), "Unit", Severity::Info).expect("enqueue");
        }

        assert!(printer.wait_idle(IDLE_TIMEOUT));
        let lines = buffer.lines();
        assert_eq!(lines.len(), 100);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.ends_with(&format!("Message {}", i)), "line {} was {:?}", i, line);
        }
    }

    #[test]
    fn test_empty_message_is_not_queued() {
        let (printer, buffer) = buffered(PrinterConfig::new().with_console_width(120));
        printer.print_parallel("", "Unit", Severity::Info).expect("noop");
        assert_eq!(printer.pending(), 0);
        assert!(printer.wait_idle(IDLE_TIMEOUT));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_shutdown_drains_queue() {
        let (mut printer, buffer) = buffered(PrinterConfig::new().with_console_width(120));
        for i in 0..20 {
            printer.print_parallel(&format!("Drain {}", i), "Unit", Severity::Warning).expect("enqueue");
        }

        assert!(printer.shutdown(IDLE_TIMEOUT));
        assert_eq!(buffer.lines().len(), 20);
        assert!(!printer.is_running());
    }

    #[test]
    fn test_print_after_shutdown_fails() {
        let (mut printer, _buffer) = buffered(PrinterConfig::new().with_console_width(120));
        assert!(printer.shutdown(IDLE_TIMEOUT));

        let err = printer.print_parallel("late", "Unit", Severity::Error).unwrap_err();
        assert!(matches!(err, PrinterError::PrinterStopped));
    }

    #[test]
    fn test_block_policy_loses_nothing() {
        let (printer, buffer) = buffered(
            PrinterConfig::new()
                .with_console_width(120)
                .with_queue_capacity(2)
                .with_overflow_policy(OverflowPolicy::Block),
        );
        for i in 0..50 {
            printer.print_parallel(&format!("Blocked {}", i), "Unit", Severity::Info).expect("enqueue");
        }

        assert!(printer.wait_idle(IDLE_TIMEOUT));
        assert_eq!(buffer.lines().len(), 50);
        assert_eq!(printer.metrics().dropped_count(), 0);
    }

    #[test]
    fn test_drop_newest_counts_drops() {
        let (printer, buffer) = buffered(
            PrinterConfig::new()
                .with_console_width(120)
                .with_queue_capacity(1)
                .with_overflow_policy(OverflowPolicy::DropNewest),
        );

        let mut rejected = 0;
        for i in 0..200 {
            if let Err(e) = printer.print_parallel(&format!("Maybe {}", i), "Unit", Severity::Info) {
                assert!(matches!(e, PrinterError::QueueFull { .. }));
                rejected += 1;
            }
        }

        assert!(printer.wait_idle(IDLE_TIMEOUT));
        let metrics = printer.metrics();
        assert_eq!(metrics.dropped_count(), rejected);
        assert_eq!(metrics.total_printed() + metrics.dropped_count(), 200);
        assert_eq!(buffer.lines().len() as u64, metrics.total_printed());
    }

    #[test]
    fn test_block_with_timeout_drops_when_worker_is_slow() {
        struct SlowOutput(BufferOutput);

        impl Output for SlowOutput {
            fn write_block(&mut self, block: &str) -> Result<()> {
                thread::sleep(Duration::from_millis(20));
                self.0.write_block(block)
            }

            fn flush(&mut self) -> Result<()> {
                Ok(())
            }

            fn name(&self) -> &str {
                "slow"
            }
        }

        let buffer = BufferOutput::new();
        let config = PrinterConfig::new()
            .with_console_width(120)
            .with_queue_capacity(1)
            .with_overflow_policy(OverflowPolicy::BlockWithTimeout(Duration::from_millis(1)));
        let console = Arc::new(ConsolePrinter::with_output(
            config.clone(),
            Box::new(SlowOutput(buffer.clone())),
        ));
        let printer = AsyncConsolePrinter::with_printer(console, config).expect("start worker");

        let mut rejected = 0;
        for i in 0..10 {
            if let Err(e) = printer.print_parallel(&format!("Slow {}", i), "Unit", Severity::Info) {
                assert!(matches!(e, PrinterError::QueueFull { current: 1, max: 1 }));
                rejected += 1;
            }
        }

        assert!(printer.wait_idle(IDLE_TIMEOUT));
        let metrics = printer.metrics();
        assert!(rejected > 0);
        assert_eq!(metrics.dropped_count(), rejected);
        assert!(metrics.queue_full_events() >= rejected);
        assert_eq!(metrics.total_printed() + metrics.dropped_count(), 10);
        assert_eq!(buffer.lines().len() as u64, metrics.total_printed());
    }

    #[test]
    fn test_drop_report_cadence() {
        let reported: Vec<u64> = (0..5000).filter(|&n| should_report_drop(n)).collect();
        // Previous-drop counts for the 1st, 1000th, 2000th, ... drops
        assert_eq!(reported, vec![0, 999, 1999, 2999, 3999, 4999]);
    }

    #[test]
    fn test_queued_and_direct_prints_share_name_column() {
        let (printer, _buffer) = buffered(PrinterConfig::new().with_name_width(2).with_console_width(120));
        printer.print("direct", "Short", Severity::Info).expect("print");
        printer
            .print_parallel("queued", "ConsiderablyLonger", Severity::Info)
            .expect("enqueue");

        assert!(printer.wait_idle(IDLE_TIMEOUT));
        assert_eq!(printer.printer().max_name_width(), "ConsiderablyLonger".len());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let printer = Arc::new(ConsolePrinter::with_output(
            PrinterConfig::new(),
            Box::new(BufferOutput::new()),
        ));
        let result = AsyncConsolePrinter::with_printer(printer, PrinterConfig::new().with_queue_capacity(0));
        assert!(matches!(result, Err(PrinterError::InvalidConfiguration { .. })));
    }
}
