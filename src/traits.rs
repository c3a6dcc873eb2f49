//! Trait implementations for `IntSet`.

use crate::{IntSet, storage::Word};
use alloc::vec::Vec;
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign},
};

/// Errors returned when an integer cannot be inserted into an [`IntSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// A negative integer was passed where a member was expected.
    Negative(isize),
}

impl IndexError {
    /// Converts `i` to a bit index, rejecting negative values.
    #[inline]
    pub(crate) fn check(i: isize) -> Result<usize, Self> {
        usize::try_from(i).map_err(|_| Self::Negative(i))
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(i) => {
                write!(f, "cannot insert negative integer {i} into set")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IndexError {}

impl Default for IntSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IntSet {
    /// Returns a deep copy with trailing zero words trimmed.
    fn clone(&self) -> Self {
        Self::from(self.as_slice_rtrim())
    }
}

impl From<Vec<Word>> for IntSet {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl From<&[Word]> for IntSet {
    fn from(slice: &[Word]) -> Self {
        Self {
            words: slice.to_vec(),
        }
    }
}

impl From<IntSet> for Vec<Word> {
    fn from(set: IntSet) -> Self {
        set.words
    }
}

impl AsRef<[Word]> for IntSet {
    fn as_ref(&self) -> &[Word] {
        self.as_slice()
    }
}

impl fmt::Display for IntSet {
    /// Formats the set as its members in ascending order, space-separated
    /// and bracketed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// assert_eq!(set.to_string(), "[]");
    ///
    /// set.insert(2);
    /// set.insert(42);
    /// set.insert(13);
    /// assert_eq!(set.to_string(), "[2 13 42]");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for i in iter {
                write!(f, " {i}")?;
            }
        }
        f.write_str("]")
    }
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.eq_rtrim(other.as_slice())
    }
}

impl Eq for IntSet {}

impl Hash for IntSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice_rtrim().hash(state);
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

impl BitAnd for &IntSet {
    type Output = IntSet;

    /// Returns the members present in both sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_intset::IntSet;
    ///
    /// let a: IntSet = [0, 1, 100].into_iter().collect();
    /// let b: IntSet = [1, 2].into_iter().collect();
    ///
    /// assert_eq!((&a & &b).to_string(), "[1]");
    /// ```
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitAnd for IntSet {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self.intersection_with(&rhs);
        self
    }
}

impl BitAndAssign<&Self> for IntSet {
    fn bitand_assign(&mut self, rhs: &Self) {
        self.intersection_with(rhs);
    }
}

impl BitAndAssign for IntSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.intersection_with(&rhs);
    }
}

impl BitOr for &IntSet {
    type Output = IntSet;

    /// Returns the members present in either set.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_intset::IntSet;
    ///
    /// let a: IntSet = [0, 1].into_iter().collect();
    /// let b: IntSet = [1, 200].into_iter().collect();
    ///
    /// assert_eq!((&a | &b).to_string(), "[0 1 200]");
    /// ```
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOr for IntSet {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self.union_with(&rhs);
        self
    }
}

impl BitOrAssign<&Self> for IntSet {
    fn bitor_assign(&mut self, rhs: &Self) {
        self.union_with(rhs);
    }
}

impl BitOrAssign for IntSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.union_with(&rhs);
    }
}

impl BitXor for &IntSet {
    type Output = IntSet;

    /// Returns the members present in exactly one of the sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_intset::IntSet;
    ///
    /// let a: IntSet = [0, 1].into_iter().collect();
    /// let b: IntSet = [1, 200].into_iter().collect();
    ///
    /// assert_eq!((&a ^ &b).to_string(), "[0 200]");
    /// ```
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl BitXor for IntSet {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self.symmetric_difference_with(&rhs);
        self
    }
}

impl BitXorAssign<&Self> for IntSet {
    fn bitxor_assign(&mut self, rhs: &Self) {
        self.symmetric_difference_with(rhs);
    }
}

impl BitXorAssign for IntSet {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.symmetric_difference_with(&rhs);
    }
}

impl Sub for &IntSet {
    type Output = IntSet;

    /// Returns the members of `self` that are not in `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_intset::IntSet;
    ///
    /// let a: IntSet = [0, 1, 300].into_iter().collect();
    /// let b: IntSet = [1].into_iter().collect();
    ///
    /// assert_eq!((&a - &b).to_string(), "[0 300]");
    /// ```
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl Sub for IntSet {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.difference_with(&rhs);
        self
    }
}

impl SubAssign<&Self> for IntSet {
    fn sub_assign(&mut self, rhs: &Self) {
        self.difference_with(rhs);
    }
}

impl SubAssign for IntSet {
    fn sub_assign(&mut self, rhs: Self) {
        self.difference_with(&rhs);
    }
}
