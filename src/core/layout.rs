//! Column layout for console and exception output
//!
//! Both layouts share the same header:
//!
//! ```text
//! [TIMESTAMP]              [SEVERITY] (NAME)      MESSAGE LINE 1
//!                                          LONGER MESSAGE LINE 2
//! ```
//!
//! The console layout pads the name column to a running width and
//! right-aligns every message line against the console edge. The exception
//! layout leaves the name unpadded and right-aligns lines against the
//! longest message line.

use super::message::Message;
use super::severity::Severity;
use super::split::split_string;
use super::timestamp::TIME_TEMPLATE_WIDTH;

/// Width of the severity column, including the closing bracket and a space.
pub const SEVERITY_COLUMN_WIDTH: usize = Severity::max_width() + 2;

const LINE_DELIMITER: &str = "\n";

/// Left-align `s` in a column of `width` characters. Never truncates.
fn push_left_aligned(out: &mut String, s: &str, width: usize) -> usize {
    let len = s.chars().count();
    out.push_str(s);
    let pad = width.saturating_sub(len);
    out.extend(std::iter::repeat(' ').take(pad));
    len + pad
}

/// Right-align `line` and its newline in a field of `width` characters.
fn push_right_aligned(out: &mut String, line: &str, width: usize) {
    let pad = width.saturating_sub(line.chars().count() + 1);
    out.extend(std::iter::repeat(' ').take(pad));
    out.push_str(line);
    out.push('\n');
}

/// Write the timestamp and severity columns, returning their visible width.
fn push_time_and_severity(out: &mut String, message: &Message, use_colors: bool) -> usize {
    let mut width = 1;
    out.push('[');
    width += push_left_aligned(out, &format!("{}]", message.timestamp), TIME_TEMPLATE_WIDTH);

    out.push('[');
    width += 1;
    let label = message.severity.to_str();
    let column = format!("{}]", label);
    if use_colors {
        let plain_len = column.chars().count();
        out.push_str(&colorize(message.severity));
        out.push(']');
        let pad = SEVERITY_COLUMN_WIDTH.saturating_sub(plain_len);
        out.extend(std::iter::repeat(' ').take(pad));
        width += plain_len + pad;
    } else {
        width += push_left_aligned(out, &column, SEVERITY_COLUMN_WIDTH);
    }
    width
}

#[cfg(feature = "console")]
fn colorize(severity: Severity) -> String {
    use colored::Colorize;
    severity.to_str().color(severity.color()).to_string()
}

#[cfg(not(feature = "console"))]
fn colorize(severity: Severity) -> String {
    severity.to_str().to_string()
}

/// Lay out a message for a console of `console_width` columns.
///
/// The name column is padded to `name_width` plus its parentheses, but
/// never past the console edge.
/// Every output line, newline included, spans `console_width - 1`
/// characters unless the text is too long to fit, in which case it
/// overflows instead of being cut.
#[must_use]
pub fn format_console(
    message: &Message,
    name_width: usize,
    console_width: usize,
    use_colors: bool,
) -> String {
    let mut out = String::new();
    let mut header_width = push_time_and_severity(&mut out, message, use_colors);
    out.push('(');
    header_width += 1;
    let name_column = name_width.min(console_width).saturating_add(2);
    header_width += push_left_aligned(&mut out, &format!("{})", message.name), name_column);

    // Account for the trailing newline
    let usable = console_width.saturating_sub(1);

    let lines = split_string(&message.text, LINE_DELIMITER);
    let mut lines = lines.iter();
    if let Some(first) = lines.next() {
        push_right_aligned(&mut out, first, usable.saturating_sub(header_width));
    }
    for line in lines {
        push_right_aligned(&mut out, line, usable);
    }
    out
}

/// Lay out a message as a standalone string, sized to its own content.
///
/// Every line ends on the same column: the first line is right-aligned to
/// the longest message line, and continuation lines are right-aligned to
/// the header width plus that length.
#[must_use]
pub fn format_exception(message: &Message) -> String {
    let mut out = String::new();
    let mut header_width = push_time_and_severity(&mut out, message, false);
    out.push('(');
    out.push_str(&message.name);
    out.push_str(") ");
    header_width += message.name_width() + 3;

    let lines = split_string(&message.text, LINE_DELIMITER);
    let max_len = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut lines = lines.iter();
    if let Some(first) = lines.next() {
        push_right_aligned(&mut out, first, max_len + 1);
    }
    for line in lines {
        push_right_aligned(&mut out, line, header_width + max_len + 1);
    }
    out
}
