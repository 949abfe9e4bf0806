//! The two word notions used by the crate.
//!
//! They are intentionally different and must not be merged:
//!   - `whitespace_words`: tokens between runs of whitespace. Used by
//!     `word_frequency` and `spoonerize`.
//!   - `alpha_runs`: maximal runs of ASCII letters. Used by `longest_word`.
//!
//! Example: `"it's 9am"` has 2 whitespace words and 3 alpha runs
//! (`it`, `s`, `am`).

use crate::util::{is_letter, is_space};

/// Maximal runs of non-whitespace characters.
pub fn whitespace_words(text: &str) -> impl Iterator<Item = &str> {
  text.split(is_space).filter(|w| !w.is_empty())
}

/// Maximal runs of `A-Z` / `a-z`; anything else separates runs.
pub fn alpha_runs(text: &str) -> impl Iterator<Item = &str> {
  text.split(|c: char| !is_letter(c)).filter(|w| !w.is_empty())
}
