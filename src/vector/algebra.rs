//! Pairwise set algebra: union, intersection and intersection test.

use tracing::trace;

use super::packed::PackedBitVector;
use super::window::Window;
use crate::atomic::{Access, Concurrent, Mode, Plain};
use crate::bitmap;

impl PackedBitVector {
    /// Union of `self` and `other` as a new vector.
    ///
    /// The result is `max(len)` bits long; words missing from the shorter
    /// operand count as zero. Its window is the hull of both windows, so it
    /// may be wider than the true occupied range.
    ///
    /// Operands are read atomically if either is concurrent. The result
    /// takes `self`'s mode. Neither operand is modified.
    ///
    /// # Performance
    /// O(n) - n = word count of the longer operand
    pub fn unify_with(&self, other: &PackedBitVector) -> PackedBitVector {
        match self.mode.combine(other.mode) {
            Mode::Plain => self.unify::<Plain>(other),
            Mode::Concurrent => self.unify::<Concurrent>(other),
        }
    }

    /// Intersection of `self` and `other` as a new vector.
    ///
    /// The result is `min(len)` bits long. Only words inside both windows
    /// are computed; every other word is known to be zero in at least one
    /// operand and stays zero.
    ///
    /// Access and result mode follow [`unify_with`](Self::unify_with).
    ///
    /// # Performance
    /// O(k) - k = words in the window overlap
    pub fn intersect_with(&self, other: &PackedBitVector) -> PackedBitVector {
        match self.mode.combine(other.mode) {
            Mode::Plain => self.intersect::<Plain>(other),
            Mode::Concurrent => self.intersect::<Concurrent>(other),
        }
    }

    /// Check whether `self` and `other` share at least one set bit.
    ///
    /// Disjoint windows are rejected without reading any word; otherwise
    /// only the overlap is scanned, stopping at the first common bit.
    ///
    /// Always reads atomically, whatever the operands' modes.
    ///
    /// # Performance
    /// O(1) on disjoint windows, O(k) worst case otherwise
    pub fn has_intersection_with(&self, other: &PackedBitVector) -> bool {
        match self.window.overlap::<Concurrent>(&other.window) {
            Some(range) => bitmap::any_common::<Concurrent>(&self.words, &other.words, range),
            None => false,
        }
    }

    fn unify<R: Access>(&self, other: &PackedBitVector) -> PackedBitVector {
        let (longer, shorter) = if self.words.len() >= other.words.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = Self::zeroed(self.length.max(other.length), self.mode);
        // `result` is not shared yet, so plain writes are enough.
        bitmap::copy_into::<R, Plain>(&result.words, &longer.words);
        bitmap::or_into::<R, Plain>(&result.words, &shorter.words);

        let (low, high) = self.window.hull::<R>(&other.window);
        result.window = Window::from_bounds(low, high);

        trace!(length = result.length, low, high, "unified bit vectors");
        result
    }

    fn intersect<R: Access>(&self, other: &PackedBitVector) -> PackedBitVector {
        let mut result = Self::zeroed(self.length.min(other.length), self.mode);

        if let Some(range) = self.window.overlap::<R>(&other.window) {
            let low = *range.start();
            let high = (*range.end()).min(result.words.len() - 1);
            if low <= high {
                bitmap::and_range::<R, Plain>(&result.words, &self.words, &other.words, low..=high);
                result.window = Window::from_bounds(low, high);
            }
        }

        trace!(length = result.length, window = ?result.window(), "intersected bit vectors");
        result
    }
}

/// Union of two possibly absent vectors.
///
/// # Returns
/// `None` if either operand is absent, otherwise
/// [`a.unify_with(b)`](PackedBitVector::unify_with)
pub fn union(a: Option<&PackedBitVector>, b: Option<&PackedBitVector>) -> Option<PackedBitVector> {
    Some(a?.unify_with(b?))
}

/// Intersection of two possibly absent vectors.
///
/// # Returns
/// `None` if either operand is absent, otherwise
/// [`a.intersect_with(b)`](PackedBitVector::intersect_with)
pub fn intersection(
    a: Option<&PackedBitVector>,
    b: Option<&PackedBitVector>,
) -> Option<PackedBitVector> {
    Some(a?.intersect_with(b?))
}

/// Intersection test on two possibly absent vectors; `false` if either is absent.
pub fn has_intersection(a: Option<&PackedBitVector>, b: Option<&PackedBitVector>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.has_intersection_with(b),
        _ => false,
    }
}
