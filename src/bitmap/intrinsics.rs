//! Word-level bit tricks.

use crate::constants::{BIT_MASK, FULL_WORD};

/// Count set bits in a word.
///
/// Branchless SWAR reduction: pairwise 2-bit sums, then 4-bit sums, then
/// byte sums, folded horizontally by multiplying with `0x0101..01` and
/// taking the top byte.
///
/// # Arguments
/// * `word` - 64-bit word
///
/// # Returns
/// Number of set bits (0-64)
///
/// # Performance
/// O(1) - 12 arithmetic operations, no table lookups
#[inline]
pub fn popcount(word: u64) -> u32 {
    let mut v = word;
    v -= (v >> 1) & 0x5555_5555_5555_5555;
    v = (v & 0x3333_3333_3333_3333) + ((v >> 2) & 0x3333_3333_3333_3333);
    v = (v + (v >> 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    (v.wrapping_mul(0x0101_0101_0101_0101) >> 56) as u32
}

/// Mask of the valid bits in the final word of a `length`-bit vector.
///
/// When `length` is a multiple of 64 the final word is fully used, so the
/// mask is all ones rather than `(1 << 0) - 1`.
#[inline]
pub fn tail_mask(length: usize) -> u64 {
    match length & BIT_MASK {
        0 => FULL_WORD,
        rem => (1u64 << rem) - 1,
    }
}

/// Single-bit mask for an intra-word offset (0-63).
#[inline(always)]
pub fn bit_mask(bit: u32) -> u64 {
    1u64 << bit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popcount() {
        assert_eq!(popcount(0), 0);
        assert_eq!(popcount(1), 1);
        assert_eq!(popcount(3), 2);
        assert_eq!(popcount(1u64 << 63), 1);
        assert_eq!(popcount(!0u64), 64);
        assert_eq!(popcount(0xf0f0_f0f0_f0f0_f0f0), 32);
    }

    #[test]
    fn test_popcount_matches_count_ones() {
        let mut x: u64 = 0x9e37_79b9_7f4a_7c15;
        for _ in 0..1_000 {
            assert_eq!(popcount(x), x.count_ones(), "word {x:#018x}");
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
        }
    }

    #[test]
    fn test_tail_mask() {
        assert_eq!(tail_mask(1), 0b1);
        assert_eq!(tail_mask(3), 0b111);
        assert_eq!(tail_mask(67), 0b111);
        assert_eq!(tail_mask(63), !0u64 >> 1);
        assert_eq!(tail_mask(64), !0u64);
        assert_eq!(tail_mask(128), !0u64);
    }

    #[test]
    fn test_bit_mask() {
        assert_eq!(bit_mask(0), 1);
        assert_eq!(bit_mask(63), 1u64 << 63);
    }
}
