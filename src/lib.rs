//! # packed-bitvector
//!
//! Fixed-capacity bit vector packed into 64-bit words, with a plain mode for
//! single-threaded use and a lock-free concurrent mode.
//!
//! ## Features
//! - O(1) set, remove, get; out-of-range indices are no-ops
//! - O(n) set-all, remove-all and SWAR population count
//! - Union, intersection and intersection test between vectors of different
//!   lengths, bounded by a widen-only occupancy window
//! - Mode fixed per vector at construction; one algorithm, two access strategies
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```
//! use packed_bitvector::{Mode, PackedBitVector};
//!
//! let a = PackedBitVector::new(64, Mode::Concurrent).unwrap();
//! let b = PackedBitVector::new(128, Mode::Plain).unwrap();
//! a.set(0);
//! a.set(63);
//! b.set(0);
//! b.set(127);
//!
//! assert_eq!(a.unify_with(&b).count(), 3);
//! assert_eq!(a.intersect_with(&b).count(), 1);
//! assert!(a.has_intersection_with(&b));
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod atomic;
mod bitmap;
mod constants;
mod error;
mod index;
mod vector;

pub use atomic::Mode;
pub use bitmap::popcount;
pub use constants::WORD_BITS;
pub use error::{BitVectorError, Result};
pub use index::BitIndex;
pub use vector::{has_intersection, intersection, union, PackedBitVector};
