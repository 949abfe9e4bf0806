//! Operation vocabulary: which transform to run, what it produced, and the
//! report line the driver prints.

use serde::{Deserialize, Serialize};

/// Every operation the crate offers, with its parameters.
///
/// In TOML, unit variants are plain strings (`op = "reverse_all"`) and the
/// others are one-key tables (`op = { slice_after = { delimiter = "=" } }`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextOp {
  FirstCharToUpper,
  WordFrequency,
  VowelFrequency,
  LongestWord,
  IsPalindrome,
  /// Ignores the sample text; formats `seconds` instead.
  TimeToString { seconds: i64 },
  Scramble,
  ReverseAll,
  SliceBefore { delimiter: String },
  SliceAfter { delimiter: String },
  Distribute { delimiter: String },
  Spoonerize { first_len: usize, second_len: usize },
}

impl TextOp {
  /// Stable snake_case name, used in logs and reports.
  pub fn name(&self) -> &'static str {
    match self {
      TextOp::FirstCharToUpper => "first_char_to_upper",
      TextOp::WordFrequency => "word_frequency",
      TextOp::VowelFrequency => "vowel_frequency",
      TextOp::LongestWord => "longest_word",
      TextOp::IsPalindrome => "is_palindrome",
      TextOp::TimeToString { .. } => "time_to_string",
      TextOp::Scramble => "scramble",
      TextOp::ReverseAll => "reverse_all",
      TextOp::SliceBefore { .. } => "slice_before",
      TextOp::SliceAfter { .. } => "slice_after",
      TextOp::Distribute { .. } => "distribute",
      TextOp::Spoonerize { .. } => "spoonerize",
    }
  }
}

/// What an operation returned.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OpOutput {
  Text(String),
  Count(usize),
  Flag(bool),
  Slices(Vec<String>),
}

/// One input for the driver: some text and the operation to run on it.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Sample {
  #[serde(default)]
  pub text: String,
  pub op: TextOp,
}

/// Result line printed by the driver (one JSON object per sample).
#[derive(Clone, Debug, Serialize)]
pub struct Report {
  pub op: &'static str,
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub output: Option<OpOutput>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}
