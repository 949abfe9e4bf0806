//! Capitalization and counting.

use tracing::debug;

use crate::error::{Result, TextError};
use crate::util::is_vowel;
use crate::words::{alpha_runs, whitespace_words};

/// Uppercase the first character and every character right after a literal
/// space. Tabs and newlines do not start a word here.
///
/// Only ASCII letters change case.
pub fn first_char_to_upper(text: &str) -> Result<String> {
  if text.is_empty() {
    debug!(target: "strct", "first_char_to_upper rejected empty input");
    return Err(TextError::EmptyInput);
  }

  let mut out = String::with_capacity(text.len());
  let mut prev: Option<char> = None;
  for ch in text.chars() {
    let word_start = match prev {
      None => true,
      Some(p) => p == ' ',
    };
    out.push(if word_start { ch.to_ascii_uppercase() } else { ch });
    prev = Some(ch);
  }
  Ok(out)
}

/// Number of whitespace-delimited tokens.
pub fn word_frequency(text: &str) -> usize {
  whitespace_words(text).count()
}

pub fn vowel_frequency(text: &str) -> usize {
  text.chars().filter(|c| is_vowel(*c)).count()
}

/// Longest run of ASCII letters. On ties the earliest run wins.
/// Returns an empty string when the text has no letters.
pub fn longest_word(text: &str) -> String {
  let mut longest = "";
  for run in alpha_runs(text) {
    if run.len() > longest.len() {
      longest = run;
    }
  }
  longest.to_string()
}
