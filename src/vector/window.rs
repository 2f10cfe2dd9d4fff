//! Occupancy window: the word range that may hold set bits.

use core::ops::RangeInclusive;
use core::sync::atomic::AtomicUsize;

use crate::atomic::Access;

/// Inclusive `[low, high]` word range bounding the set bits.
///
/// A hint, not a tracker: single-bit updates only ever widen it, and only
/// the bulk operations reset it. Any word outside the window is known to be
/// zero, which is all the set-algebra scans rely on.
#[derive(Debug, Default)]
pub(super) struct Window {
    low: AtomicUsize,
    high: AtomicUsize,
}

impl Window {
    /// Fresh window `[0, 0]`.
    #[inline]
    pub(super) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(super) fn from_bounds(low: usize, high: usize) -> Self {
        debug_assert!(low <= high);
        Self {
            low: AtomicUsize::new(low),
            high: AtomicUsize::new(high),
        }
    }

    /// Current `(low, high)`.
    ///
    /// Each bound is read independently; under concurrent mutation the pair
    /// may mix two different moments.
    #[inline]
    pub(super) fn bounds<A: Access>(&self) -> (usize, usize) {
        (A::load_bound(&self.low), A::load_bound(&self.high))
    }

    /// Widen the window so it includes `word`.
    #[inline]
    pub(super) fn widen<A: Access>(&self, word: usize) {
        A::raise(&self.high, word);
        A::lower(&self.low, word);
    }

    #[inline]
    pub(super) fn reset<A: Access>(&self, low: usize, high: usize) {
        A::store_bound(&self.low, low);
        A::store_bound(&self.high, high);
    }

    /// Hull of two windows: `[min lows, max highs]`.
    #[inline]
    pub(super) fn hull<A: Access>(&self, other: &Window) -> (usize, usize) {
        let (a_low, a_high) = self.bounds::<A>();
        let (b_low, b_high) = other.bounds::<A>();
        (a_low.min(b_low), a_high.max(b_high))
    }

    /// Overlap of two windows: `[max lows, min highs]`.
    ///
    /// # Returns
    /// `None` when the windows are disjoint
    #[inline]
    pub(super) fn overlap<A: Access>(&self, other: &Window) -> Option<RangeInclusive<usize>> {
        let (a_low, a_high) = self.bounds::<A>();
        let (b_low, b_high) = other.bounds::<A>();
        if a_low > b_high || a_high < b_low {
            return None;
        }
        Some(a_low.max(b_low)..=a_high.min(b_high))
    }
}
