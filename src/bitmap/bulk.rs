//! Bulk operations over whole word slices.

use core::ops::RangeInclusive;
use core::sync::atomic::AtomicU64;

use super::intrinsics::{popcount, tail_mask};
use crate::atomic::Access;
use crate::constants::FULL_WORD;

/// Set every addressable bit of a `length`-bit vector.
///
/// All words but the last become all ones; the last is masked so bits at
/// positions `>= length` stay clear.
///
/// # Arguments
/// * `words` - Word storage, `words_for(length)` long
/// * `length` - Addressable bit count
///
/// # Performance
/// O(n) - one store per word
#[inline]
pub(crate) fn fill<A: Access>(words: &[AtomicU64], length: usize) {
    let Some((last, body)) = words.split_last() else {
        return;
    };
    for word in body {
        A::store(word, FULL_WORD);
    }
    A::store(last, tail_mask(length));
}

/// Clear every word.
///
/// # Performance
/// O(n) - one store per word
#[inline]
pub(crate) fn clear<A: Access>(words: &[AtomicU64]) {
    for word in words {
        A::store(word, 0);
    }
}

/// Count set bits across all words.
///
/// Zero words are skipped before the popcount reduction.
///
/// # Returns
/// Total number of set bits
///
/// # Performance
/// O(n) - one load per word, popcount only on nonzero words
#[inline]
pub(crate) fn count<A: Access>(words: &[AtomicU64]) -> usize {
    let mut total = 0usize;
    for word in words {
        let v = A::load(word);
        if v != 0 {
            total += popcount(v) as usize;
        }
    }
    total
}

/// Copy `src` into the front of `dst`.
///
/// `dst` must be at least as long as `src`. Reads through `R`, writes
/// through `W`.
#[inline]
pub(crate) fn copy_into<R: Access, W: Access>(dst: &[AtomicU64], src: &[AtomicU64]) {
    for (d, s) in dst.iter().zip(src) {
        W::store(d, R::load(s));
    }
}

/// OR `src` into the front of `dst`.
///
/// Reads `src` through `R`, updates `dst` through `W`.
#[inline]
pub(crate) fn or_into<R: Access, W: Access>(dst: &[AtomicU64], src: &[AtomicU64]) {
    for (d, s) in dst.iter().zip(src) {
        let v = R::load(s);
        if v != 0 {
            W::or(d, v);
        }
    }
}

/// Write `a[i] & b[i]` into `dst[i]` for every `i` in `range`.
///
/// Indices past the end of any of the three slices are skipped.
///
/// # Performance
/// O(k) - k = number of words in `range`
#[inline]
pub(crate) fn and_range<R: Access, W: Access>(
    dst: &[AtomicU64],
    a: &[AtomicU64],
    b: &[AtomicU64],
    range: RangeInclusive<usize>,
) {
    let end = dst.len().min(a.len()).min(b.len());
    let (start, last) = range.into_inner();
    if start >= end || start > last {
        return;
    }
    let last = last.min(end - 1);
    for i in start..=last {
        W::store(&dst[i], R::load(&a[i]) & R::load(&b[i]));
    }
}
