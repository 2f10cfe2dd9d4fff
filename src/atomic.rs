//! Access strategies for word storage supporting both plain and concurrent modes.

use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Synchronization discipline of a bit vector, fixed at construction.
///
/// - `Concurrent` (default): every word and window access is an atomic
///   read-modify-write or an acquire/release load/store.
/// - `Plain` (default with the `single-threaded` feature): relaxed loads and
///   stores, single-bit updates are a non-atomic load + store pair.
///
/// # Compile-time Default
/// ```bash
/// cargo build                             # Mode::default() == Concurrent
/// cargo build --features single-threaded  # Mode::default() == Plain
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No internal synchronization. Correct only with a single writer or
    /// external locking.
    Plain,
    /// Lock-free atomic access on every word and window field.
    Concurrent,
}

impl Mode {
    /// Returns `true` for [`Mode::Concurrent`].
    #[inline]
    pub const fn is_concurrent(self) -> bool {
        matches!(self, Mode::Concurrent)
    }

    /// Mode used when reading two operands together.
    ///
    /// Concurrent wins if either side is concurrent.
    #[inline]
    pub(crate) const fn combine(self, other: Mode) -> Mode {
        if self.is_concurrent() || other.is_concurrent() {
            Mode::Concurrent
        } else {
            Mode::Plain
        }
    }
}

impl Default for Mode {
    #[inline]
    fn default() -> Self {
        #[cfg(feature = "single-threaded")]
        return Mode::Plain;

        #[cfg(not(feature = "single-threaded"))]
        return Mode::Concurrent;
    }
}

impl From<bool> for Mode {
    /// `true` selects [`Mode::Concurrent`].
    #[inline]
    fn from(concurrent: bool) -> Self {
        if concurrent {
            Mode::Concurrent
        } else {
            Mode::Plain
        }
    }
}

/// Per-access behaviour of one synchronization discipline.
///
/// Algorithms are written once, generic over `A: Access`, and the vector
/// picks the implementation from its [`Mode`] at the public entry point.
///
/// Storage is always `AtomicU64`/`AtomicUsize`; the strategies differ only in
/// ordering and in whether single-bit updates are atomic read-modify-writes.
pub(crate) trait Access {
    /// Load a word.
    fn load(word: &AtomicU64) -> u64;

    /// Store a word.
    fn store(word: &AtomicU64, val: u64);

    /// OR `mask` into a word.
    fn or(word: &AtomicU64, mask: u64);

    /// AND `mask` into a word.
    fn and(word: &AtomicU64, mask: u64);

    /// Load a window bound.
    fn load_bound(bound: &AtomicUsize) -> usize;

    /// Store a window bound.
    fn store_bound(bound: &AtomicUsize, val: usize);

    /// Raise a bound to at least `val`.
    fn raise(bound: &AtomicUsize, val: usize);

    /// Lower a bound to at most `val`.
    fn lower(bound: &AtomicUsize, val: usize);
}

/// Relaxed, non-atomic read-modify-write access.
///
/// Relaxed loads and stores compile to ordinary moves on mainstream targets,
/// so this path carries no fence or lock-prefix cost.
pub(crate) struct Plain;

impl Access for Plain {
    #[inline(always)]
    fn load(word: &AtomicU64) -> u64 {
        word.load(Ordering::Relaxed)
    }

    #[inline(always)]
    fn store(word: &AtomicU64, val: u64) {
        word.store(val, Ordering::Relaxed);
    }

    #[inline(always)]
    fn or(word: &AtomicU64, mask: u64) {
        let old = word.load(Ordering::Relaxed);
        word.store(old | mask, Ordering::Relaxed);
    }

    #[inline(always)]
    fn and(word: &AtomicU64, mask: u64) {
        let old = word.load(Ordering::Relaxed);
        word.store(old & mask, Ordering::Relaxed);
    }

    #[inline(always)]
    fn load_bound(bound: &AtomicUsize) -> usize {
        bound.load(Ordering::Relaxed)
    }

    #[inline(always)]
    fn store_bound(bound: &AtomicUsize, val: usize) {
        bound.store(val, Ordering::Relaxed);
    }

    #[inline(always)]
    fn raise(bound: &AtomicUsize, val: usize) {
        if bound.load(Ordering::Relaxed) < val {
            bound.store(val, Ordering::Relaxed);
        }
    }

    #[inline(always)]
    fn lower(bound: &AtomicUsize, val: usize) {
        if bound.load(Ordering::Relaxed) > val {
            bound.store(val, Ordering::Relaxed);
        }
    }
}

/// Lock-free atomic access.
///
/// Loads use `Acquire`, stores use `Release`, single-bit updates use
/// `fetch_or`/`fetch_and` and window updates use `fetch_max`/`fetch_min`.
/// Each access is atomic on its own; consecutive accesses do not compose
/// into a transaction.
pub(crate) struct Concurrent;

impl Access for Concurrent {
    #[inline(always)]
    fn load(word: &AtomicU64) -> u64 {
        word.load(Ordering::Acquire)
    }

    #[inline(always)]
    fn store(word: &AtomicU64, val: u64) {
        word.store(val, Ordering::Release);
    }

    #[inline(always)]
    fn or(word: &AtomicU64, mask: u64) {
        word.fetch_or(mask, Ordering::AcqRel);
    }

    #[inline(always)]
    fn and(word: &AtomicU64, mask: u64) {
        word.fetch_and(mask, Ordering::AcqRel);
    }

    #[inline(always)]
    fn load_bound(bound: &AtomicUsize) -> usize {
        bound.load(Ordering::Acquire)
    }

    #[inline(always)]
    fn store_bound(bound: &AtomicUsize, val: usize) {
        bound.store(val, Ordering::Release);
    }

    #[inline(always)]
    fn raise(bound: &AtomicUsize, val: usize) {
        bound.fetch_max(val, Ordering::AcqRel);
    }

    #[inline(always)]
    fn lower(bound: &AtomicUsize, val: usize) {
        bound.fetch_min(val, Ordering::AcqRel);
    }
}
