//! The packed bit vector: storage, single-bit and bulk operations.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::sync::atomic::AtomicU64;

use tracing::trace;

use super::window::Window;
use crate::atomic::{Access, Concurrent, Mode, Plain};
use crate::bitmap;
use crate::constants::words_for;
use crate::error::{BitVectorError, Result};
use crate::index::{locate, BitIndex};

/// Fixed-capacity bit vector packed into 64-bit words.
///
/// Bit `b` lives in word `b >> 6` at offset `b & 63`. The capacity is fixed
/// at construction; to grow, allocate a larger vector and
/// [`unify_with`](Self::unify_with) into it.
///
/// Every operation takes `&self`. The [`Mode`] chosen at construction decides
/// how words are accessed:
/// - [`Mode::Concurrent`]: lock-free atomics, safe to share across threads
///   (e.g. behind an `Arc`) with no external locking.
/// - [`Mode::Plain`]: relaxed, non-atomic read-modify-write. Still memory
///   safe to share, but concurrent writers to the same word may lose updates.
///
/// All operations are total: out-of-range or negative indices are no-ops
/// for writes and read as `false`.
///
/// # Example
/// ```
/// use packed_bitvector::{Mode, PackedBitVector};
///
/// let bits = PackedBitVector::new(128, Mode::Plain).unwrap();
/// bits.set(3);
/// bits.set(100);
/// assert!(bits.get(3));
/// assert!(!bits.get(-1));
/// assert_eq!(bits.count(), 2);
/// ```
pub struct PackedBitVector {
    pub(super) words: Box<[AtomicU64]>,
    pub(super) length: usize,
    pub(super) window: Window,
    pub(super) mode: Mode,
}

impl PackedBitVector {
    /// Create a zeroed vector of `length` bits.
    ///
    /// `mode` accepts a [`Mode`] or a `bool` (`true` = concurrent).
    ///
    /// # Errors
    /// [`BitVectorError::ZeroLength`] if `length == 0`
    ///
    /// # Performance
    /// O(n) - allocates and zeroes `ceil(length / 64)` words
    pub fn new(length: usize, mode: impl Into<Mode>) -> Result<Self> {
        if length == 0 {
            return Err(BitVectorError::ZeroLength);
        }
        let vector = Self::zeroed(length, mode.into());
        trace!(
            length,
            words = vector.words.len(),
            mode = ?vector.mode,
            "allocated bit vector"
        );
        Ok(vector)
    }

    /// Create a zeroed vector of `length` bits in `Mode::default()`.
    ///
    /// # Errors
    /// [`BitVectorError::ZeroLength`] if `length == 0`
    pub fn with_length(length: usize) -> Result<Self> {
        Self::new(length, Mode::default())
    }

    /// Allocation shared by the constructors and the set-algebra results.
    pub(super) fn zeroed(length: usize, mode: Mode) -> Self {
        let words = (0..words_for(length))
            .map(|_| AtomicU64::new(0))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            words,
            length,
            window: Window::new(),
            mode,
        }
    }

    /// Number of addressable bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Always `false`: construction rejects zero-length vectors.
    ///
    /// Provided for API completeness next to [`len`](Self::len); use
    /// [`count`](Self::count) to test for set bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of 64-bit storage words.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_concurrent(&self) -> bool {
        self.mode.is_concurrent()
    }

    /// Current occupancy window `(low_word, high_word)`.
    ///
    /// Any word outside the window is zero. The window is not tight: it
    /// widens on [`set`](Self::set) and [`remove`](Self::remove) and is only
    /// reset by [`set_all`](Self::set_all) and [`remove_all`](Self::remove_all).
    pub fn window(&self) -> (usize, usize) {
        match self.mode {
            Mode::Plain => self.window.bounds::<Plain>(),
            Mode::Concurrent => self.window.bounds::<Concurrent>(),
        }
    }

    /// Set the bit at `index`.
    ///
    /// No-op if `index` is negative or `>= len()`.
    ///
    /// # Performance
    /// O(1) - one word update and up to two window updates
    #[inline]
    pub fn set<I: BitIndex>(&self, index: I) {
        let Some((word, bit)) = locate(index, self.length) else {
            return;
        };
        match self.mode {
            Mode::Plain => self.set_at::<Plain>(word, bit),
            Mode::Concurrent => self.set_at::<Concurrent>(word, bit),
        }
    }

    /// Clear the bit at `index`.
    ///
    /// No-op if `index` is negative or `>= len()`. The window is widened to
    /// include the touched word, exactly like [`set`](Self::set); it never
    /// shrinks here.
    #[inline]
    pub fn remove<I: BitIndex>(&self, index: I) {
        let Some((word, bit)) = locate(index, self.length) else {
            return;
        };
        match self.mode {
            Mode::Plain => self.remove_at::<Plain>(word, bit),
            Mode::Concurrent => self.remove_at::<Concurrent>(word, bit),
        }
    }

    /// Read the bit at `index`.
    ///
    /// # Returns
    /// `true` if set, `false` if clear or out of range
    #[inline]
    pub fn get<I: BitIndex>(&self, index: I) -> bool {
        let Some((word, bit)) = locate(index, self.length) else {
            return false;
        };
        match self.mode {
            Mode::Plain => bitmap::is_set::<Plain>(&self.words, word, bit),
            Mode::Concurrent => bitmap::is_set::<Concurrent>(&self.words, word, bit),
        }
    }

    /// Set every bit below `len()`.
    ///
    /// Bits past `len()` in the final word stay clear. The window becomes
    /// `[0, word_count - 1]`.
    pub fn set_all(&self) {
        match self.mode {
            Mode::Plain => self.set_all_with::<Plain>(),
            Mode::Concurrent => self.set_all_with::<Concurrent>(),
        }
        trace!(length = self.length, "set all bits");
    }

    /// Clear every bit. The window resets to `[0, 0]`.
    pub fn remove_all(&self) {
        match self.mode {
            Mode::Plain => self.remove_all_with::<Plain>(),
            Mode::Concurrent => self.remove_all_with::<Concurrent>(),
        }
        trace!(length = self.length, "cleared all bits");
    }

    /// Number of set bits.
    ///
    /// # Performance
    /// O(n) - one load per word, SWAR popcount on nonzero words
    pub fn count(&self) -> usize {
        match self.mode {
            Mode::Plain => bitmap::count::<Plain>(&self.words),
            Mode::Concurrent => bitmap::count::<Concurrent>(&self.words),
        }
    }

    /// Load word `i` through this vector's access strategy.
    #[inline]
    pub(super) fn word(&self, i: usize) -> u64 {
        match self.mode {
            Mode::Plain => Plain::load(&self.words[i]),
            Mode::Concurrent => Concurrent::load(&self.words[i]),
        }
    }

    #[inline(always)]
    fn set_at<A: Access>(&self, word: usize, bit: u32) {
        bitmap::set_bit::<A>(&self.words, word, bit);
        self.window.widen::<A>(word);
    }

    #[inline(always)]
    fn remove_at<A: Access>(&self, word: usize, bit: u32) {
        bitmap::clear_bit::<A>(&self.words, word, bit);
        self.window.widen::<A>(word);
    }

    fn set_all_with<A: Access>(&self) {
        bitmap::fill::<A>(&self.words, self.length);
        self.window.reset::<A>(0, self.words.len() - 1);
    }

    fn remove_all_with<A: Access>(&self) {
        bitmap::clear::<A>(&self.words);
        self.window.reset::<A>(0, 0);
    }

    fn clone_with<A: Access>(&self) -> Self {
        let (low, high) = self.window.bounds::<A>();
        let mut copy = Self::zeroed(self.length, self.mode);
        bitmap::copy_into::<A, Plain>(&copy.words, &self.words);
        copy.window = Window::from_bounds(low, high);
        copy
    }
}

impl Clone for PackedBitVector {
    /// Independent copy with the same length, bits, window and mode.
    fn clone(&self) -> Self {
        match self.mode {
            Mode::Plain => self.clone_with::<Plain>(),
            Mode::Concurrent => self.clone_with::<Concurrent>(),
        }
    }
}

impl PartialEq for PackedBitVector {
    /// Equal when lengths and bits match; mode and window are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && (0..self.words.len()).all(|i| self.word(i) == other.word(i))
    }
}

impl Eq for PackedBitVector {}
