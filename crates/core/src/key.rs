//! Key validation.

use crate::error::{Error, Result};

/// Characters stripped from both ends of a key before the emptiness check:
/// space, tab, line feed, carriage return, NUL and vertical tab.
///
/// Other Unicode whitespace such as U+00A0 counts as key content.
pub const KEY_PADDING: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Validate a key argument.
///
/// A key is rejected when it is empty after trimming [`KEY_PADDING`] from
/// both ends. The key itself is returned untrimmed: `"a"` and `" a"` are
/// distinct keys.
pub fn validate_key(key: &str) -> Result<&str> {
    if key.trim_matches(&KEY_PADDING[..]).is_empty() {
        tracing::debug!(key = ?key, "rejected empty key");
        return Err(Error::empty_key());
    }
    Ok(key)
}
