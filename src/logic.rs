//! Dispatch from a `TextOp` to the matching function.
//!
//! This is the single entry point a driver needs:
//!   - `apply` runs one operation and returns its typed output
//!   - `run_sample` wraps `apply` into a printable `Report`

use tracing::{debug, instrument, warn};

use crate::case::{first_char_to_upper, longest_word, vowel_frequency, word_frequency};
use crate::domain::{OpOutput, Report, Sample, TextOp};
use crate::error::Result;
use crate::predicate::{is_palindrome, time_to_string};
use crate::scramble::scramble;
use crate::slice::{distribute, reverse_all, slice_after, slice_before};
use crate::spoon::spoonerize;

#[instrument(level = "debug", skip(text), fields(op = op.name(), text_len = text.len()))]
pub fn apply(op: &TextOp, text: &str) -> Result<OpOutput> {
  let out = match op {
    TextOp::FirstCharToUpper => OpOutput::Text(first_char_to_upper(text)?),
    TextOp::WordFrequency => OpOutput::Count(word_frequency(text)),
    TextOp::VowelFrequency => OpOutput::Count(vowel_frequency(text)),
    TextOp::LongestWord => OpOutput::Text(longest_word(text)),
    TextOp::IsPalindrome => OpOutput::Flag(is_palindrome(text)),
    TextOp::TimeToString { seconds } => OpOutput::Text(time_to_string(*seconds)),
    TextOp::Scramble => OpOutput::Text(scramble(text)),
    TextOp::ReverseAll => OpOutput::Text(reverse_all(text)),
    TextOp::SliceBefore { delimiter } => OpOutput::Text(slice_before(text, delimiter)?),
    TextOp::SliceAfter { delimiter } => OpOutput::Text(slice_after(text, delimiter)?),
    TextOp::Distribute { delimiter } => OpOutput::Slices(distribute(text, delimiter)?),
    TextOp::Spoonerize { first_len, second_len } => {
      OpOutput::Text(spoonerize(text, *first_len, *second_len)?)
    }
  };
  debug!(target: "strct", op = op.name(), "operation done");
  Ok(out)
}

/// Run a sample and turn the outcome into a report line. Failures are
/// logged and carried in `Report::error`.
pub fn run_sample(sample: &Sample) -> Report {
  match apply(&sample.op, &sample.text) {
    Ok(output) => Report { op: sample.op.name(), text: sample.text.clone(), output: Some(output), error: None },
    Err(e) => {
      warn!(target: "strct", op = sample.op.name(), error = %e, "operation failed");
      Report { op: sample.op.name(), text: sample.text.clone(), output: None, error: Some(e.to_string()) }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::TextError;

  #[test]
  fn dispatches_to_each_operation() {
    assert_eq!(apply(&TextOp::FirstCharToUpper, "hello world").unwrap(), OpOutput::Text("Hello World".into()));
    assert_eq!(apply(&TextOp::WordFrequency, "a b  c").unwrap(), OpOutput::Count(3));
    assert_eq!(apply(&TextOp::VowelFrequency, "Hello World").unwrap(), OpOutput::Count(3));
    assert_eq!(apply(&TextOp::LongestWord, "a bb ccc dd").unwrap(), OpOutput::Text("ccc".into()));
    assert_eq!(apply(&TextOp::IsPalindrome, "race car").unwrap(), OpOutput::Flag(true));
    assert_eq!(apply(&TextOp::TimeToString { seconds: 125 }, "").unwrap(), OpOutput::Text("2:5".into()));
    assert_eq!(apply(&TextOp::ReverseAll, "abcd").unwrap(), OpOutput::Text("dcba".into()));
    assert_eq!(
      apply(&TextOp::SliceBefore { delimiter: "=".into() }, "key=value").unwrap(),
      OpOutput::Text("key".into())
    );
    assert_eq!(
      apply(&TextOp::SliceAfter { delimiter: "=".into() }, "key=value").unwrap(),
      OpOutput::Text("value".into())
    );
    assert_eq!(
      apply(&TextOp::Distribute { delimiter: ",".into() }, "a,b,c").unwrap(),
      OpOutput::Slices(vec!["a".into(), "b".into(), "c".into()])
    );
    assert_eq!(
      apply(&TextOp::Spoonerize { first_len: 1, second_len: 1 }, "cat dog").unwrap(),
      OpOutput::Text("dat cog".into())
    );
  }

  #[test]
  fn scramble_dispatch_matches_direct_call() {
    assert_eq!(apply(&TextOp::Scramble, "scramble me").unwrap(), OpOutput::Text(scramble("scramble me")));
  }

  #[test]
  fn errors_propagate() {
    assert_eq!(apply(&TextOp::FirstCharToUpper, ""), Err(TextError::EmptyInput));
  }

  #[test]
  fn run_sample_reports_errors() {
    let sample = Sample { text: "abc".into(), op: TextOp::SliceAfter { delimiter: "=".into() } };
    let report = run_sample(&sample);
    assert_eq!(report.op, "slice_after");
    assert!(report.output.is_none());
    assert_eq!(report.error.as_deref(), Some("delimiter \"=\" not found in input"));
  }
}
