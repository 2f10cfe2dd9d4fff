//! Trait for bit index types (signed and unsigned primitive integers).

use crate::constants::{BIT_MASK, WORD_SHIFT};

/// Integer types accepted as bit positions.
///
/// Signed types are supported so callers holding `i32`/`i64` positions get
/// the same total behaviour as unsigned ones: a negative position is simply
/// out of range.
pub trait BitIndex: Copy {
    /// Convert to a non-negative bit position.
    ///
    /// # Returns
    /// `None` if the value is negative or does not fit in `usize`
    ///
    /// # Performance
    /// O(1) - a sign check and a cast
    fn to_bit(self) -> Option<usize>;
}

macro_rules! impl_bit_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BitIndex for $ty {
                #[inline(always)]
                fn to_bit(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_bit_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Resolve `index` against a vector of `length` bits.
///
/// # Returns
/// `(word, bit)` coordinates, or `None` when the index is out of range
#[inline(always)]
pub(crate) fn locate<I: BitIndex>(index: I, length: usize) -> Option<(usize, u32)> {
    let bit = index.to_bit()?;
    if bit >= length {
        return None;
    }
    Some((bit >> WORD_SHIFT, (bit & BIT_MASK) as u32))
}
