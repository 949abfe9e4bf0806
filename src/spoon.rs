//! Spoonerisms: swap the leading letters of two words.
//!
//! `spoonerize("shop cat", 2, 1)` moves `sh` to the second word and `c` to
//! the first, giving `"cop shat"`.

use tracing::debug;

use crate::case::word_frequency;
use crate::error::{Result, TextError};
use crate::util::is_space;

const SWAP_LENS: [usize; 2] = [1, 2];

/// Byte offset of the `n`-th char, or `None` if the word is shorter.
fn char_offset(word: &str, n: usize) -> Option<usize> {
  if n == word.chars().count() {
    return Some(word.len());
  }
  word.char_indices().nth(n).map(|(i, _)| i)
}

fn split_word(word: &str, len: usize) -> Result<(&str, &str)> {
  let cut = char_offset(word, len).ok_or_else(|| TextError::WordTooShort {
    word: word.to_string(),
    len,
  })?;
  Ok(word.split_at(cut))
}

/// Two non-empty words around the first space, neither containing whitespace.
fn split_pair(text: &str) -> Option<(&str, &str)> {
  let (first, second) = text.split_once(' ')?;
  let well_formed = |w: &str| !w.is_empty() && !w.chars().any(is_space);
  (well_formed(first) && well_formed(second)).then_some((first, second))
}

/// Swap the first `first_len` chars of word one with the first `second_len`
/// chars of word two.
///
/// Returns the input unchanged when it has more than two words or a length
/// is not 1 or 2. Input that is not exactly two words around one space, or
/// a word shorter than its swap length, is an error.
pub fn spoonerize(text: &str, first_len: usize, second_len: usize) -> Result<String> {
  if word_frequency(text) > 2 || !SWAP_LENS.contains(&first_len) || !SWAP_LENS.contains(&second_len) {
    debug!(target: "strct", first_len, second_len, "spoonerize guard hit; returning input unchanged");
    return Ok(text.to_string());
  }

  let (first, second) = split_pair(text).ok_or_else(|| {
    debug!(target: "strct", "spoonerize input is not two words around one space");
    TextError::MissingWordBoundary
  })?;

  let (head1, tail1) = split_word(first, first_len)?;
  let (head2, tail2) = split_word(second, second_len)?;

  let mut out = String::with_capacity(text.len());
  out.push_str(head2);
  out.push_str(tail1);
  out.push(' ');
  out.push_str(head1);
  out.push_str(tail2);
  Ok(out)
}
