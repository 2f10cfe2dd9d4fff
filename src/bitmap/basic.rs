//! Basic single-bit operations over a word slice.

use core::sync::atomic::AtomicU64;

use super::intrinsics::bit_mask;
use crate::atomic::Access;

/// Set a bit at `(word, bit)` coordinates.
///
/// # Arguments
/// * `words` - Word storage
/// * `word` - Word index (must be in bounds)
/// * `bit` - Offset inside the word (0-63)
///
/// # Performance
/// O(1) - one OR through the access strategy
///
/// # Thread Safety
/// With `Concurrent` this is a single `fetch_or`; with `Plain` it is a
/// load + store pair and concurrent writers to the same word may lose updates.
#[inline]
pub(crate) fn set_bit<A: Access>(words: &[AtomicU64], word: usize, bit: u32) {
    A::or(&words[word], bit_mask(bit));
}

/// Clear a bit at `(word, bit)` coordinates.
///
/// # Arguments
/// * `words` - Word storage
/// * `word` - Word index (must be in bounds)
/// * `bit` - Offset inside the word (0-63)
///
/// # Performance
/// O(1) - one AND through the access strategy
#[inline]
pub(crate) fn clear_bit<A: Access>(words: &[AtomicU64], word: usize, bit: u32) {
    A::and(&words[word], !bit_mask(bit));
}

/// Check whether the bit at `(word, bit)` is set.
///
/// # Returns
/// `true` if bit is set, `false` otherwise
#[inline]
pub(crate) fn is_set<A: Access>(words: &[AtomicU64], word: usize, bit: u32) -> bool {
    (A::load(&words[word]) >> bit) & 1 == 1
}
