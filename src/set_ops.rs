//! Implementations of set operations for `IntSet`.
//!
//! The `*_with` forms update `self` in place and only read `other`. `other`
//! is anything that views as a word slice, so an `&IntSet` works as well as
//! the raw words of another set.

use crate::{IntSet, storage::Word};

impl IntSet {
    /// Removes every member of `self` that is not also in `other`.
    ///
    /// `self` is truncated to the shorter of the two word lengths: integers
    /// beyond `other`'s storage are absent from `other`, so they cannot
    /// survive the intersection.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut a = IntSet::new();
    /// let mut b = IntSet::new();
    ///
    /// a.insert(10);
    /// a.insert(500);
    /// b.insert(10);
    ///
    /// a.intersection_with(&b);
    /// assert!(a.contains(10));
    /// assert!(!a.contains(500));
    /// assert_eq!(a.word_len(), b.word_len());
    /// ```
    pub fn intersection_with(&mut self, other: impl AsRef<[Word]>) {
        let other = other.as_ref();
        let n = self.words.len().min(other.len());
        for (dst, &src) in self.words.iter_mut().zip(other) {
            *dst &= src;
        }
        self.words.truncate(n);
    }

    /// Creates a new set that is the intersection of this set and another
    /// set.
    ///
    /// Time complexity: O(n) where n is the min number of words in either
    /// set.
    #[must_use]
    pub fn intersection(&self, other: impl AsRef<[Word]>) -> Self {
        let mut result = self.clone();
        result.intersection_with(other);
        result
    }

    /// Removes every member of `self` that is also in `other`.
    ///
    /// Words beyond `other`'s length are left as they are, and the stored
    /// length of `self` never changes, so the result may carry trailing zero
    /// words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut a = IntSet::new();
    /// let mut b = IntSet::new();
    ///
    /// a.insert(1);
    /// a.insert(300);
    /// b.insert(300);
    ///
    /// a.difference_with(&b);
    /// assert_eq!(a.to_string(), "[1]");
    /// ```
    pub fn difference_with(&mut self, other: impl AsRef<[Word]>) {
        for (dst, &src) in self.words.iter_mut().zip(other.as_ref()) {
            *dst &= !src;
        }
    }

    /// Creates a new set that is the difference of this set and another
    /// set.
    ///
    /// Time complexity: O(n) where n is the number of words in self.
    #[must_use]
    pub fn difference(&self, other: impl AsRef<[Word]>) -> Self {
        let mut result = self.clone();
        result.difference_with(other);
        result
    }

    /// Adds every member of `other` to `self`.
    ///
    /// If `other` is longer, its remaining words are appended verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut a = IntSet::new();
    /// let mut b = IntSet::new();
    ///
    /// a.insert(10);
    /// b.insert(20);
    /// b.insert(2000);
    ///
    /// a.union_with(&b);
    /// assert_eq!(a.to_string(), "[10 20 2000]");
    /// ```
    pub fn union_with(&mut self, other: impl AsRef<[Word]>) {
        let mut iter = other.as_ref().iter();
        for (dst, src) in self.words.iter_mut().zip(&mut iter) {
            *dst |= *src;
        }
        self.words.extend_from_slice(iter.as_slice());
    }

    /// Creates a new set that is the union of this set and another set.
    ///
    /// Time complexity: O(n) where n is the max number of words in either
    /// set.
    #[must_use]
    pub fn union(&self, other: impl AsRef<[Word]>) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Keeps the members that are in exactly one of `self` and `other`.
    ///
    /// If `other` is longer, its remaining words are appended verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut a = IntSet::new();
    /// let mut b = IntSet::new();
    ///
    /// a.insert(1);
    /// a.insert(2);
    /// b.insert(2);
    /// b.insert(700);
    ///
    /// a.symmetric_difference_with(&b);
    /// assert_eq!(a.to_string(), "[1 700]");
    /// ```
    pub fn symmetric_difference_with(&mut self, other: impl AsRef<[Word]>) {
        let mut iter = other.as_ref().iter();
        for (dst, src) in self.words.iter_mut().zip(&mut iter) {
            *dst ^= *src;
        }
        self.words.extend_from_slice(iter.as_slice());
    }

    /// Creates a new set that is the symmetric difference of this set and
    /// another set.
    ///
    /// Time complexity: O(n) where n is the max number of words in either
    /// set.
    #[must_use]
    pub fn symmetric_difference(&self, other: impl AsRef<[Word]>) -> Self {
        let mut result = self.clone();
        result.symmetric_difference_with(other);
        result
    }

    /// Returns `true` if every member of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let a: IntSet = [1, 2].into_iter().collect();
    /// let b: IntSet = [1, 2, 900].into_iter().collect();
    ///
    /// assert!(a.is_subset(&b));
    /// assert!(!b.is_subset(&a));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: impl AsRef<[Word]>) -> bool {
        let other = other.as_ref();
        self.words
            .iter()
            .enumerate()
            .all(|(i, &w)| w & !other.get(i).copied().unwrap_or(0) == 0)
    }

    /// Returns `true` if `self` and `other` have no members in common.
    #[must_use]
    pub fn is_disjoint(&self, other: impl AsRef<[Word]>) -> bool {
        self.words
            .iter()
            .zip(other.as_ref())
            .all(|(&a, &b)| a & b == 0)
    }
}
