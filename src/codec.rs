//! Byte encoding of `IntSet`.
//!
//! The encoding is a bit array in ascending order: the most significant bit
//! of the first byte is integer 0, the next bit integer 1, and so on across
//! the whole stream. Internally each word is bit-reversed and written
//! big-endian, which produces exactly that order whatever the word width.
//! Trailing zero bytes are never written, and decoding accepts any length.

use alloc::vec::Vec;

use crate::{
    IntSet,
    storage::{WORD_BYTES, Word},
};

impl IntSet {
    /// Encodes the set as a bit array, most significant bit first.
    ///
    /// The output has no trailing zero bytes, so equal sets always encode to
    /// identical bytes and the empty set encodes to nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(0);
    /// set.insert(3);
    /// set.insert(8);
    /// set.insert(10);
    ///
    /// assert_eq!(set.to_bytes(), vec![0b1001_0000, 0b1010_0000]);
    /// assert!(IntSet::new().to_bytes().is_empty());
    /// ```
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let words = self.as_slice_rtrim();
        let mut bytes = Vec::with_capacity(words.len() * WORD_BYTES);
        for &word in words {
            bytes.extend_from_slice(&word.reverse_bits().to_be_bytes());
        }
        bytes.truncate(self.encoded_len());
        bytes
    }

    /// Returns the length of [`to_bytes`](Self::to_bytes) without encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// assert_eq!(set.encoded_len(), 0);
    ///
    /// set.insert(7);
    /// assert_eq!(set.encoded_len(), 1);
    ///
    /// set.insert(8);
    /// assert_eq!(set.encoded_len(), 2);
    /// ```
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        match self.as_slice_rtrim().split_last() {
            None => 0,
            // the high zero bits of the last word become trailing zero bytes
            Some((&last, rest)) => {
                rest.len() * WORD_BYTES + WORD_BYTES - last.leading_zeros() as usize / 8
            }
        }
    }

    /// Decodes a set from the bit array produced by
    /// [`to_bytes`](Self::to_bytes).
    ///
    /// The input is padded with zero bytes up to a whole number of words, so
    /// any byte string is accepted. Trailing zero bytes decode to trailing
    /// zero words, which do not affect membership.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let set = IntSet::from_bytes(&[0b1001_0000, 0b1010_0000]);
    /// assert_eq!(set.to_string(), "[0 3 8 10]");
    ///
    /// assert!(IntSet::from_bytes(&[]).is_empty());
    /// ```
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        let words = data
            .chunks(WORD_BYTES)
            .map(|chunk| {
                let mut buf = [0; WORD_BYTES];
                buf[..chunk.len()].copy_from_slice(chunk);
                Word::from_be_bytes(buf).reverse_bits()
            })
            .collect();
        Self { words }
    }
}
