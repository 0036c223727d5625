//! Character classes of the key=value grammar

pub const ASSIGNMENT: char = '=';
pub const QUOTE: char = '"';

/// Whether `c` may appear in a key: ASCII letter, digit or underscore.
#[inline]
pub fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whitespace outside quotes separates tokens and is otherwise ignored.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// A key is non-empty and made only of key characters, in any order.
pub fn is_valid_key(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_key_char)
}
