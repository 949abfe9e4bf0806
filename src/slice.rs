//! Reversal and delimiter-based slicing.
//!
//! Delimiter rules shared by every function here:
//!   - an empty delimiter is rejected with `TextError::EmptyDelimiter`
//!   - only the first occurrence matters for `slice_before` / `slice_after`

use tracing::debug;

use crate::error::{Result, TextError};

pub fn reverse_all(text: &str) -> String {
  text.chars().rev().collect()
}

fn check_delimiter(delimiter: &str) -> Result<()> {
  if delimiter.is_empty() {
    debug!(target: "strct", "empty delimiter rejected");
    return Err(TextError::EmptyDelimiter);
  }
  Ok(())
}

/// Everything before the first `delimiter`, or the whole text if it is absent.
pub fn slice_before(text: &str, delimiter: &str) -> Result<String> {
  check_delimiter(delimiter)?;
  Ok(match text.find(delimiter) {
    Some(pos) => text[..pos].to_string(),
    None => text.to_string(),
  })
}

/// Everything after the first `delimiter`. A missing delimiter is an error.
pub fn slice_after(text: &str, delimiter: &str) -> Result<String> {
  check_delimiter(delimiter)?;
  match text.find(delimiter) {
    Some(pos) => Ok(text[pos + delimiter.len()..].to_string()),
    None => {
      debug!(target: "strct", delimiter, "slice_after found no delimiter");
      Err(TextError::DelimiterNotFound { delimiter: delimiter.to_string() })
    }
  }
}

/// Split on every `delimiter`, keeping the trailing segment.
///
/// Joining the result with the same delimiter gives back the input.
pub fn distribute(text: &str, delimiter: &str) -> Result<Vec<String>> {
  check_delimiter(delimiter)?;
  Ok(text.split(delimiter).map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reverses_characters() {
    assert_eq!(reverse_all("abcd"), "dcba");
    assert_eq!(reverse_all(""), "");
    assert_eq!(reverse_all("añb"), "bña");
  }

  #[test]
  fn slices_around_first_delimiter() {
    assert_eq!(slice_before("key=value", "=").unwrap(), "key");
    assert_eq!(slice_after("key=value", "=").unwrap(), "value");
    assert_eq!(slice_after("a=b=c", "=").unwrap(), "b=c");
    assert_eq!(slice_before("a::b::c", "::").unwrap(), "a");
    assert_eq!(slice_after("a::b::c", "::").unwrap(), "b::c");
  }

  #[test]
  fn slice_before_without_match_returns_everything() {
    assert_eq!(slice_before("no delimiter", "=").unwrap(), "no delimiter");
  }

  #[test]
  fn slice_after_without_match_is_an_error() {
    assert_eq!(
      slice_after("no delimiter", "="),
      Err(TextError::DelimiterNotFound { delimiter: "=".into() })
    );
  }

  #[test]
  fn delimiter_at_edges() {
    assert_eq!(slice_before("=x", "=").unwrap(), "");
    assert_eq!(slice_after("x=", "=").unwrap(), "");
  }

  #[test]
  fn empty_delimiter_is_rejected() {
    assert_eq!(slice_before("abc", ""), Err(TextError::EmptyDelimiter));
    assert_eq!(slice_after("abc", ""), Err(TextError::EmptyDelimiter));
    assert_eq!(distribute("abc", ""), Err(TextError::EmptyDelimiter));
  }

  #[test]
  fn distribute_keeps_trailing_segment() {
    assert_eq!(distribute("a,b,c", ",").unwrap(), vec!["a", "b", "c"]);
    assert_eq!(distribute("a,b,", ",").unwrap(), vec!["a", "b", ""]);
    assert_eq!(distribute("a<>b", "<>").unwrap(), vec!["a", "b"]);
  }

  #[test]
  fn distribute_without_match_yields_whole_text() {
    assert_eq!(distribute("abc", ",").unwrap(), vec!["abc"]);
    assert_eq!(distribute("", ",").unwrap(), vec![""]);
  }

  #[test]
  fn distribute_rejoins_to_input() {
    let text = ",,x,,y,";
    assert_eq!(distribute(text, ",").unwrap().join(","), text);
  }
}
