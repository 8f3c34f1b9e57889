//! The quiz draw: one uniformly-random question from the eligible set.
//!
//! The eligible set itself (unseen ids, optional category restriction) is
//! computed by the store; this module owns only the randomness seam.

use rand_core::{OsRng, RngCore as _};

/// A source of uniform indices, injectable so tests can pin the draw.
pub trait IndexPicker: Send + Sync {
  /// Pick an index in `0..len`, each equally likely. `len` is non-zero.
  fn pick_index(&self, len: usize) -> usize;
}

/// The default picker, backed by OS entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPicker;

impl IndexPicker for OsPicker {
  fn pick_index(&self, len: usize) -> usize {
    debug_assert!(len > 0);
    let len = len as u64;
    // Rejection sampling: discard the tail of the u64 range that would bias
    // the modulo toward low indices.
    let rem = (u64::MAX % len + 1) % len;
    let cap = u64::MAX - rem;
    loop {
      let v = OsRng.next_u64();
      if v <= cap {
        return (v % len) as usize;
      }
    }
  }
}

/// Draw one element from `eligible`, or `None` when the set is empty.
///
/// An empty eligible set is a normal outcome (the quiz ran out of unseen
/// questions), not an error.
pub fn draw<T>(mut eligible: Vec<T>, picker: &dyn IndexPicker) -> Option<T> {
  if eligible.is_empty() {
    return None;
  }
  let idx = picker.pick_index(eligible.len());
  Some(eligible.swap_remove(idx))
}
