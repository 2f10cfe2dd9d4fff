//! Check operations comparing two word slices.

use core::ops::RangeInclusive;
use core::sync::atomic::AtomicU64;

use crate::atomic::Access;

/// Check whether `a` and `b` share a set bit inside `range`.
///
/// Indices past the end of either slice are ignored.
///
/// # Returns
/// `true` on the first word with a nonzero AND, `false` otherwise
///
/// # Performance
/// O(k) worst case, k = words in `range`; stops at the first hit
#[inline]
pub(crate) fn any_common<A: Access>(
    a: &[AtomicU64],
    b: &[AtomicU64],
    range: RangeInclusive<usize>,
) -> bool {
    let end = a.len().min(b.len());
    let (start, last) = range.into_inner();
    if start >= end || start > last {
        return false;
    }
    (start..=last.min(end - 1)).any(|i| A::load(&a[i]) & A::load(&b[i]) != 0)
}
