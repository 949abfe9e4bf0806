//! Built-in samples so the driver is useful without a config file.

use crate::domain::{Sample, TextOp};

fn sample(text: &str, op: TextOp) -> Sample {
  Sample { text: text.into(), op }
}

/// Worked examples covering every operation, including the documented
/// failure and fallback paths.
pub fn seed_samples() -> Vec<Sample> {
  vec![
    sample("hello world", TextOp::FirstCharToUpper),
    sample("the quick  brown fox", TextOp::WordFrequency),
    sample("Hello World", TextOp::VowelFrequency),
    sample("a bb ccc dd", TextOp::LongestWord),
    sample("race car", TextOp::IsPalindrome),
    sample("Race car", TextOp::IsPalindrome),
    sample("", TextOp::TimeToString { seconds: 125 }),
    sample("", TextOp::TimeToString { seconds: 59 }),
    sample("Hello World", TextOp::Scramble),
    sample("abcd", TextOp::ReverseAll),
    sample("key=value", TextOp::SliceBefore { delimiter: "=".into() }),
    sample("key=value", TextOp::SliceAfter { delimiter: "=".into() }),
    sample("no delimiter here", TextOp::SliceAfter { delimiter: "=".into() }),
    sample("a,b,c", TextOp::Distribute { delimiter: ",".into() }),
    sample("cat dog", TextOp::Spoonerize { first_len: 1, second_len: 1 }),
    sample("shop cat", TextOp::Spoonerize { first_len: 2, second_len: 1 }),
    sample("one two three", TextOp::Spoonerize { first_len: 1, second_len: 1 }),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::logic::run_sample;

  #[test]
  fn only_the_missing_delimiter_seed_fails() {
    let failed: Vec<_> = seed_samples().iter().map(run_sample).filter(|r| r.error.is_some()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].op, "slice_after");
  }
}
