//! Palindrome check and time formatting.

use crate::util::strip_space;

/// True if the text reads the same backwards once whitespace is removed.
///
/// The comparison is byte-for-byte and case-sensitive: `"Race car"` is not
/// a palindrome, and neither is `"é"` (its UTF-8 bytes differ reversed).
pub fn is_palindrome(text: &str) -> bool {
  let compact = strip_space(text);
  compact.bytes().eq(compact.bytes().rev())
}

/// Format seconds as `"<t / 60>:<t % 60>"` without zero padding.
///
/// Division truncates toward zero, so negative input yields a negative
/// remainder: `-125` becomes `"-2:-5"` and `-59` becomes `"0:-59"`.
pub fn time_to_string(total_seconds: i64) -> String {
  format!("{}:{}", total_seconds / 60, total_seconds % 60)
}
