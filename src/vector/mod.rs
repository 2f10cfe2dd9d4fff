//! Packed bit vector with a widen-only occupancy window.

mod algebra;
mod fmt;
mod packed;
mod window;

pub use algebra::{has_intersection, intersection, union};
pub use packed::PackedBitVector;
