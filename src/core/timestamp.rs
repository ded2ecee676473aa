//! Timestamp generation for message headers
//!
//! Timestamps use local time in the layout `YYYY-MM-DD HH:MM:SS.mmm`.
//! The timestamp column is sized from [`TIME_TEMPLATE`] so the header
//! columns line up whatever the current time is.

use chrono::{DateTime, Local, TimeZone};

/// Widest timestamp the header is laid out for.
pub const TIME_TEMPLATE: &str = "9999-12-31 29:59:59.9999";

/// Width of the timestamp column, including the closing bracket.
pub const TIME_TEMPLATE_WIDTH: usize = TIME_TEMPLATE.len() + 1;

const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format the current local time as a header timestamp.
///
/// # Examples
///
/// ```
/// use rust_column_logger::core::timestamp::{generate_timestamp, TIME_TEMPLATE_WIDTH};
///
/// let ts = generate_timestamp();
/// assert!(ts.len() < TIME_TEMPLATE_WIDTH);
/// ```
#[must_use]
pub fn generate_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Format any zoned datetime as a header timestamp
#[must_use]
pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TIMESTAMP_LAYOUT).to_string()
}
