//! String splitting helper

/// Split `s` on every occurrence of `delimiter`.
///
/// The result always holds at least one token: a string without the
/// delimiter comes back as a single token, and a trailing delimiter yields
/// a trailing empty token. Joining the tokens with `delimiter` gives back `s`.
///
/// An empty delimiter never matches.
///
/// # Examples
///
/// ```
/// use rust_column_logger::core::split_string;
///
/// assert_eq!(split_string("a\nb", "\n"), vec!["a", "b"]);
/// assert_eq!(split_string("plain", "\n"), vec!["plain"]);
/// assert_eq!(split_string("", "\n"), vec![""]);
/// ```
#[must_use]
pub fn split_string(s: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![s.to_string()];
    }
    s.split(delimiter).map(String::from).collect()
}
