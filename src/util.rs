//! Small utility helpers used across modules.

/// Whitespace as the C locale classifies it: space, tab, newline,
/// vertical tab, form feed and carriage return.
///
/// `char::is_ascii_whitespace` leaves out vertical tab, so it is not used.
pub fn is_space(ch: char) -> bool {
  matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// True for `A-Z` and `a-z` only.
pub fn is_letter(ch: char) -> bool {
  ch.is_ascii_alphabetic()
}

pub fn is_vowel(ch: char) -> bool {
  matches!(ch, 'A' | 'E' | 'I' | 'O' | 'U' | 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Normalize a string by removing all whitespace.
pub fn strip_space(s: &str) -> String {
  s.chars().filter(|c| !is_space(*c)).collect()
}

/// Log-safe truncation for large strings.
/// Counts characters, so it never cuts through a multi-byte sequence.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  match s.char_indices().nth(max) {
    None => s.to_string(),
    Some((cut, _)) => format!("{}… ({} bytes total)", &s[..cut], s.len()),
  }
}
