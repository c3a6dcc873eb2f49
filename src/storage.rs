//! Word layout and mask arithmetic shared by every operation.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("dense_intset requires a target with 32-bit or 64-bit words");

/// The storage unit. Bit `b` of word `w` records membership of `w * WORD_BITS + b`.
pub type Word = usize;

/// Number of bits in a [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Number of bytes in a [`Word`].
pub const WORD_BYTES: usize = WORD_BITS / 8;

/// Convert bit index to (word index, bit position within word)
#[inline(always)]
pub(crate) const fn bitpos(idx: usize) -> (usize, usize) {
    (idx / WORD_BITS, idx % WORD_BITS)
}

/// Convert bit index to (word index, single-bit mask)
#[inline(always)]
pub(crate) const fn bitmask(idx: usize) -> (usize, Word) {
    let (wi, bi) = bitpos(idx);
    (wi, 1 << bi)
}

/// Mask of the bits at or above `beg` within the word holding `beg`.
#[inline(always)]
pub(crate) const fn head_mask(beg: usize) -> Word {
    !0 << (beg % WORD_BITS)
}

/// Mask of the bits strictly below `end` within the word holding `end - 1`.
///
/// A word-aligned `end` yields all ones, since the range covers the whole of
/// the preceding word.
#[inline(always)]
pub(crate) const fn tail_mask(end: usize) -> Word {
    !0 >> ((WORD_BITS - end % WORD_BITS) % WORD_BITS)
}

/// Removes trailing zero words from a slice.
#[inline(always)]
pub(crate) const fn rtrim0(mut slice: &[Word]) -> &[Word] {
    while let [rest @ .., 0] = slice {
        slice = rest;
    }
    slice
}
