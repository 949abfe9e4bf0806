//! Error types returned by the text operations.

use thiserror::Error;

/// Failures reported by the text operations.
///
/// Documented fallbacks (the spoonerize guard, `slice_before` without a match)
/// are not errors and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
  #[error("input text is empty")]
  EmptyInput,

  #[error("delimiter must not be empty")]
  EmptyDelimiter,

  #[error("delimiter {delimiter:?} not found in input")]
  DelimiterNotFound { delimiter: String },

  #[error("expected two words separated by a single space")]
  MissingWordBoundary,

  #[error("word {word:?} is shorter than swap length {len}")]
  WordTooShort { word: String, len: usize },
}

pub type Result<T> = std::result::Result<T, TextError>;
