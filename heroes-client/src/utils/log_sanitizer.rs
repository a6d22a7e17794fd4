//! Log sanitization utilities
//!
//! Response bodies can be arbitrarily large (a full hero list, an HTML error
//! page from a proxy). Logs only keep a bounded prefix.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for logging.
///
/// Returns the original string if it has at most `TRUNCATE_LIMIT` characters,
/// otherwise the first `TRUNCATE_LIMIT` characters followed by the total size.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}
