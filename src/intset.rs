//! `IntSet` struct and core implementation.

use alloc::vec::Vec;

use crate::{
    iter::Iter,
    storage::{WORD_BITS, Word, bitmask, bitpos, head_mask, rtrim0, tail_mask},
    traits::IndexError,
};

/// A set of non-negative integers packed one bit per integer into words.
///
/// # Overview
///
/// Integer `i` is a member iff bit `i % WORD_BITS` of word `i / WORD_BITS`
/// is set. Memory is proportional to the largest member, not to the number
/// of members, which makes `IntSet` a good fit for dense sets of small
/// integers.
///
/// # Capacity Model
///
/// The set always represents the integers `[0, capacity())`, where the
/// capacity is the number of stored words times [`WORD_BITS`]. Insertion
/// grows the store as needed. Removal never shrinks it, so the store may
/// carry trailing all-zero words; equality, hashing, cloning and
/// serialization all look through them.
///
/// # Indices
///
/// Index arguments are signed. Negative integers are never members:
/// inserting one is a programmer error (see [`insert`](Self::insert) and
/// [`try_insert`](Self::try_insert)), while removing or testing one is a
/// no-op.
///
/// # Examples
///
/// ```
/// use dense_intset::IntSet;
/// let mut set = IntSet::new();
///
/// set.insert(2);
/// set.insert(42);
/// set.insert(13);
///
/// assert!(set.contains(13));
/// assert!(!set.contains(14));
/// assert!(!set.contains(-1));
/// assert_eq!(set.to_string(), "[2 13 42]");
/// ```
pub struct IntSet {
    pub(crate) words: Vec<Word>,
}

impl IntSet {
    /// Creates a new empty set. No memory is allocated until the first
    /// insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let set = IntSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates a new empty set with room for integers below `bits` without
    /// reallocating.
    ///
    /// Only memory is reserved: the set is still empty and its
    /// [`capacity`](Self::capacity) is zero.
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(bits.div_ceil(WORD_BITS)),
        }
    }

    /// Get the storage as a slice, including any trailing zero words.
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        self.words.as_slice()
    }

    /// Returns the storage with trailing zero words removed.
    ///
    /// This is the canonical form of the set: two sets are equal iff their
    /// trimmed slices are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_intset::{IntSet, WORD_BITS};
    ///
    /// let mut set = IntSet::new();
    /// set.insert(0);
    /// set.insert(WORD_BITS as isize);
    /// set.remove(WORD_BITS as isize);
    ///
    /// assert_eq!(set.as_slice().len(), 2);
    /// assert_eq!(set.as_slice_rtrim(), &[1]);
    /// ```
    #[must_use]
    pub fn as_slice_rtrim(&self) -> &[Word] {
        rtrim0(self.words.as_slice())
    }

    /// Returns the number of stored words, including trailing zero words.
    #[must_use]
    #[inline]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of integers the store currently represents, that
    /// is every integer below the returned value can be tested or removed
    /// without growing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::{IntSet, WORD_BITS};
    /// let mut set = IntSet::new();
    /// set.insert(3);
    /// assert_eq!(set.capacity(), WORD_BITS);
    /// ```
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Appends zero words until word `wi` exists.
    #[inline]
    fn grow_to(&mut self, wi: usize) {
        if self.words.len() <= wi {
            self.words.resize(wi + 1, 0);
        }
    }

    /// Adds `i` to the set, returning whether it was newly inserted.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Negative`] if `i` is negative. The set is left
    /// untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_intset::{IndexError, IntSet};
    ///
    /// let mut set = IntSet::new();
    /// assert_eq!(set.try_insert(5), Ok(true));
    /// assert_eq!(set.try_insert(5), Ok(false));
    /// assert_eq!(set.try_insert(-1), Err(IndexError::Negative(-1)));
    /// ```
    pub fn try_insert(&mut self, i: isize) -> Result<bool, IndexError> {
        let i = IndexError::check(i)?;
        Ok(self.insert_bit(i))
    }

    /// Sets the bit for `i`, growing as needed.
    pub(crate) fn insert_bit(&mut self, i: usize) -> bool {
        let (wi, mask) = bitmask(i);
        self.grow_to(wi);

        let word = &mut self.words[wi];
        let prev = *word;
        *word = prev | mask;
        prev & mask == 0
    }

    /// Adds `i` to the set, returning whether it was newly inserted.
    ///
    /// # Panics
    ///
    /// Panics if `i` is negative. Use [`try_insert`](Self::try_insert) to
    /// handle that case without panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    ///
    /// assert!(set.insert(10)); // First insertion
    /// assert!(!set.insert(10)); // Already present
    /// ```
    #[track_caller]
    pub fn insert(&mut self, i: isize) -> bool {
        match self.try_insert(i) {
            Ok(inserted) => inserted,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes `i` from the set, returning whether it was present.
    ///
    /// Removing a negative integer, or one beyond the current capacity, is a
    /// no-op. The store never shrinks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(10);
    ///
    /// assert!(set.remove(10));
    /// assert!(!set.remove(10));
    /// assert!(!set.remove(-3));
    /// assert!(!set.remove(1_000_000));
    /// ```
    pub fn remove(&mut self, i: isize) -> bool {
        let Ok(i) = usize::try_from(i) else {
            return false;
        };
        let (wi, mask) = bitmask(i);
        let Some(word) = self.words.get_mut(wi) else {
            return false;
        };
        let prev = *word;
        *word = prev & !mask;
        prev & mask != 0
    }

    /// Returns `true` if `i` is in the set.
    ///
    /// Negative and out-of-range integers are never members.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(42);
    ///
    /// assert!(set.contains(42));
    /// assert!(!set.contains(43));
    /// assert!(!set.contains(-42));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains(&self, i: isize) -> bool {
        let Ok(i) = usize::try_from(i) else {
            return false;
        };
        let (wi, mask) = bitmask(i);
        self.words.get(wi).is_some_and(|word| word & mask != 0)
    }

    /// Adds every integer in `[beg, end)` to the set.
    ///
    /// An empty range (`end <= beg`) is a no-op, so `try_insert_range(0, 0)`
    /// never adds 0.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Negative`] if `beg` is negative, even when the
    /// range is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_intset::{IndexError, IntSet};
    ///
    /// let mut set = IntSet::new();
    /// set.try_insert_range(2, 6)?;
    /// assert_eq!(set.to_string(), "[2 3 4 5]");
    ///
    /// assert_eq!(set.try_insert_range(-1, 0), Err(IndexError::Negative(-1)));
    /// # Ok::<(), IndexError>(())
    /// ```
    pub fn try_insert_range(&mut self, beg: isize, end: isize) -> Result<(), IndexError> {
        let beg = IndexError::check(beg)?;
        let Ok(end) = usize::try_from(end) else {
            return Ok(());
        };
        if end <= beg {
            return Ok(());
        }

        let (beg_wi, _) = bitpos(beg);
        let (end_wi, _) = bitpos(end - 1);
        self.grow_to(end_wi);

        let head = head_mask(beg);
        let tail = tail_mask(end);
        let words = &mut self.words;
        if beg_wi == end_wi {
            words[beg_wi] |= head & tail;
        } else {
            words[beg_wi] |= head;
            words[beg_wi + 1..end_wi].fill(!0);
            words[end_wi] |= tail;
        }
        Ok(())
    }

    /// Adds every integer in `[beg, end)` to the set.
    ///
    /// # Panics
    ///
    /// Panics if `beg` is negative. Use
    /// [`try_insert_range`](Self::try_insert_range) to handle that case
    /// without panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert_range(60, 70);
    ///
    /// assert!(!set.contains(59));
    /// assert!(set.contains(60));
    /// assert!(set.contains(69));
    /// assert!(!set.contains(70));
    /// assert_eq!(set.cardinality(), 10);
    /// ```
    #[track_caller]
    pub fn insert_range(&mut self, beg: isize, end: isize) {
        if let Err(err) = self.try_insert_range(beg, end) {
            panic!("{err}");
        }
    }

    /// Removes every integer in `[beg, end)` from the set.
    ///
    /// A negative bound is clamped to 0, and `end` is clamped to the current
    /// [`capacity`](Self::capacity): removal never grows the store. An empty
    /// effective range is a no-op, so `remove_range(0, 0)` keeps 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert_range(0, 10);
    ///
    /// set.remove_range(3, 7);
    /// assert_eq!(set.to_string(), "[0 1 2 7 8 9]");
    ///
    /// set.remove_range(-5, 1);
    /// assert_eq!(set.to_string(), "[1 2 7 8 9]");
    ///
    /// set.remove_range(0, 0);
    /// assert!(set.contains(1));
    /// ```
    pub fn remove_range(&mut self, beg: isize, end: isize) {
        let beg = usize::try_from(beg).unwrap_or(0);
        let end = usize::try_from(end).unwrap_or(0).min(self.capacity());
        if end <= beg {
            return;
        }

        let (beg_wi, _) = bitpos(beg);
        let (end_wi, _) = bitpos(end - 1);

        let head = head_mask(beg);
        let tail = tail_mask(end);
        let words = &mut self.words;
        if beg_wi == end_wi {
            words[beg_wi] &= !(head & tail);
        } else {
            words[beg_wi] &= !head;
            words[beg_wi + 1..end_wi].fill(0);
            words[end_wi] &= !tail;
        }
    }

    /// Removes every member while keeping the stored length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(100);
    /// let capacity = set.capacity();
    ///
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns the number of members.
    ///
    /// Time complexity: O(n) where n is the number of words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// assert_eq!(set.cardinality(), 0);
    ///
    /// set.insert(10);
    /// set.insert(200);
    /// assert_eq!(set.cardinality(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Returns the smallest member, or [`None`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// assert_eq!(set.min(), None);
    ///
    /// set.insert(10);
    /// set.insert(5);
    /// assert_eq!(set.min(), Some(5));
    /// ```
    #[must_use]
    #[inline]
    pub fn min(&self) -> Option<usize> {
        self.scan_from(0)
    }

    /// Returns the largest member, or [`None`] if the set is empty.
    ///
    /// Trailing zero words left behind by removals are skipped, not trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// assert_eq!(set.max(), None);
    ///
    /// set.insert(10);
    /// set.insert(500);
    /// assert_eq!(set.max(), Some(500));
    ///
    /// set.remove(500);
    /// assert_eq!(set.max(), Some(10));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        let (wi, &word) = self
            .words
            .iter()
            .enumerate()
            .rev()
            .find(|&(_, &word)| word != 0)?;
        Some((wi + 1) * WORD_BITS - word.leading_zeros() as usize - 1)
    }

    /// Returns the smallest member greater than or equal to `i`, or [`None`]
    /// if there is none.
    ///
    /// A negative `i` starts the search at 0. Repeated calls with the
    /// previous result plus one enumerate the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(5);
    /// set.insert(10);
    /// set.insert(150);
    ///
    /// assert_eq!(set.next_after(-1), Some(5));
    /// assert_eq!(set.next_after(6), Some(10));
    /// assert_eq!(set.next_after(10), Some(10));
    /// assert_eq!(set.next_after(11), Some(150));
    /// assert_eq!(set.next_after(151), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn next_after(&self, i: isize) -> Option<usize> {
        self.scan_from(usize::try_from(i).unwrap_or(0))
    }

    /// Forward scan behind [`next_after`](Self::next_after) and the
    /// iterators.
    pub(crate) fn scan_from(&self, beg: usize) -> Option<usize> {
        let (mut wi, _) = bitpos(beg);
        // only the first word is masked
        let mut mask = head_mask(beg);
        while let Some(&word) = self.words.get(wi) {
            let word = word & mask;
            if word != 0 {
                return Some(wi * WORD_BITS + word.trailing_zeros() as usize);
            }
            mask = !0;
            wi += 1;
        }
        None
    }

    /// Returns an iterator over the members in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(20);
    /// set.insert(10);
    ///
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(10));
    /// assert_eq!(iter.next(), Some(20));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self, 0)
    }

    /// Returns a lazy iterator over the members greater than or equal to
    /// `start`, in ascending order.
    ///
    /// The iterator does no work until polled and may be dropped at any
    /// point. A negative `start` yields every member.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(2);
    /// set.insert(42);
    /// set.insert(13);
    ///
    /// let tail: Vec<_> = set.iter_from(3).collect();
    /// assert_eq!(tail, vec![13, 42]);
    ///
    /// let first = set.iter_from(-10).next();
    /// assert_eq!(first, Some(2));
    /// ```
    #[must_use]
    pub fn iter_from(&self, start: isize) -> Iter<'_> {
        Iter::new(self, usize::try_from(start).unwrap_or(0))
    }

    /// Compares the stored words against `b`, ignoring trailing zero words on
    /// both sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_intset::IntSet;
    ///
    /// let a = IntSet::from_bytes(&[0b1000_0000, 0, 0, 0, 0, 0, 0, 0, 0]);
    /// assert!(a.eq_rtrim(&[1]));
    /// assert!(a.eq_rtrim(&[1, 0, 0]));
    /// assert!(!a.eq_rtrim(&[1, 1]));
    /// ```
    #[must_use]
    pub fn eq_rtrim(&self, b: &[Word]) -> bool {
        let a = self.as_slice();
        let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        let (head, rem) = long.split_at(short.len());

        head == short && rem.iter().all(|&w| w == 0)
    }
}
