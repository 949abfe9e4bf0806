//! Deterministic scramble seeded from the text itself.
//!
//! Algorithm (Fisher-Yates shape, non-uniform result):
//!   1) seed = FNV-1a 64 over the UTF-8 bytes of the input
//!   2) for i = len-1 down to 1:
//!        - build a fresh `StdRng` from the same seed
//!        - draw one j in 0..=i
//!        - swap chars i and j
//!
//! Reseeding on every step means each draw is the first value of the same
//! stream, only bounded differently. The permutation is reproducible for a
//! given input and `rand` version, but it is not a uniform shuffle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Seed derived from the content of `text` (64-bit FNV-1a).
pub fn content_seed(text: &str) -> u64 {
  text.bytes().fold(FNV_OFFSET, |hash, b| (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

/// Scramble with an explicit seed. Strings shorter than two chars come back as-is.
pub fn scramble_with_seed(text: &str, seed: u64) -> String {
  let mut chars: Vec<char> = text.chars().collect();
  for i in (1..chars.len()).rev() {
    let mut rng = StdRng::seed_from_u64(seed);
    let j = rng.gen_range(0..=i);
    chars.swap(i, j);
  }
  chars.into_iter().collect()
}

pub fn scramble(text: &str) -> String {
  scramble_with_seed(text, content_seed(text))
}
