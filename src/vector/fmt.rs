//! Diagnostic formatting.

use core::fmt;

use super::packed::PackedBitVector;

impl fmt::Binary for PackedBitVector {
    /// Dump every word as `[b0 b1 ... b63]`, lowest bit first.
    ///
    /// Bits past `len()` in the last word are printed too (always `0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.words.len() {
            write!(f, "[{:064b}]", self.word(i).reverse_bits())?;
        }
        Ok(())
    }
}

impl fmt::Debug for PackedBitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedBitVector")
            .field("length", &self.length)
            .field("mode", &self.mode)
            .field("window", &self.window())
            .field("count", &self.count())
            .finish()
    }
}
