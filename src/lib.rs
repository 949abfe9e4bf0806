//! strct · common string tasks
//!
//! Stateless helpers for capitalization, counting, palindromes, time
//! formatting, scrambling, reversal, delimiter slicing and spoonerisms.
//!
//! Two word notions coexist on purpose (see `words`):
//!   - whitespace tokens: `word_frequency`, `spoonerize`
//!   - ASCII letter runs: `longest_word`

pub mod error;
pub mod util;
pub mod words;
pub mod case;
pub mod predicate;
pub mod slice;
pub mod scramble;
pub mod spoon;
pub mod domain;
pub mod logic;
pub mod config;
pub mod seeds;

pub use crate::case::{first_char_to_upper, longest_word, vowel_frequency, word_frequency};
pub use crate::error::{Result, TextError};
pub use crate::predicate::{is_palindrome, time_to_string};
pub use crate::scramble::{content_seed, scramble, scramble_with_seed};
pub use crate::slice::{distribute, reverse_all, slice_after, slice_before};
pub use crate::spoon::spoonerize;
