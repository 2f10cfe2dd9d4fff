//! Core constants for packed word storage.

/// Number of bits in one storage word.
pub const WORD_BITS: usize = 64;

/// Shift turning a bit index into a word index (`bit >> WORD_SHIFT`).
pub const WORD_SHIFT: u32 = 6;

/// Mask turning a bit index into an intra-word offset (`bit & BIT_MASK`).
pub const BIT_MASK: usize = WORD_BITS - 1;

/// Word with every bit set.
pub const FULL_WORD: u64 = !0u64;

/// Number of words needed to hold `length` bits.
#[inline]
pub const fn words_for(length: usize) -> usize {
    length.div_ceil(WORD_BITS)
}
