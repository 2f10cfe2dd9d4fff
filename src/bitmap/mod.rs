//! Word-slice bit operations, generic over the access strategy.
//!
//! These functions know nothing about bit lengths or occupancy windows; the
//! vector layer resolves indices and ranges before calling in.

mod basic;
mod bulk;
mod check;
mod intrinsics;

pub(crate) use basic::{clear_bit, is_set, set_bit};
pub(crate) use bulk::{and_range, clear, copy_into, count, fill, or_into};
pub(crate) use check::any_common;
pub use intrinsics::popcount;
