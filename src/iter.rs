//! Iterator implementations for `IntSet`.

use core::{
    borrow::Borrow,
    iter::{FromIterator, FusedIterator},
};

use crate::IntSet;

/// An iterator over the members of an [`IntSet`], borrowed.
///
/// This is created by the [`iter`](IntSet::iter) and
/// [`iter_from`](IntSet::iter_from) methods on [`IntSet`].
pub type Iter<'a> = Members<&'a IntSet>;

/// An owning iterator over the members of an [`IntSet`].
///
/// This is created by the [`IntoIterator`] implementation for [`IntSet`].
pub type IntoIter = Members<IntSet>;

/// A lazy ascending scan over the members of an [`IntSet`].
///
/// Each call to [`next`](Iterator::next) is one
/// [`next_after`](IntSet::next_after) scan starting just past the previously
/// returned member. The only state besides the set is that starting
/// position, so dropping the iterator early leaves no work undone, and
/// cloning it yields an independent cursor at the same position.
///
/// The generic parameter `S` allows this iterator to work with both borrowed
/// and owned sets.
///
/// # Examples
///
/// ```
/// use dense_intset::IntSet;
/// let mut set = IntSet::new();
/// set.insert(5);
/// set.insert(10);
/// set.insert(500);
///
/// let members: Vec<_> = set.iter().collect();
/// assert_eq!(members, vec![5, 10, 500]);
///
/// // Stop after any prefix
/// let first_two: Vec<_> = set.iter().take(2).collect();
/// assert_eq!(first_two, vec![5, 10]);
/// ```
#[derive(Clone, Debug)]
pub struct Members<S: Borrow<IntSet>> {
    set: S,
    // `None` once the scan is exhausted
    next: Option<usize>,
}

impl<S: Borrow<IntSet>> Members<S> {
    pub(crate) fn new(set: S, start: usize) -> Self {
        Self {
            set,
            next: Some(start),
        }
    }

    /// Returns the position the next scan starts from, or [`None`] if the
    /// iterator is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_intset::IntSet;
    /// let mut set = IntSet::new();
    /// set.insert(7);
    ///
    /// let mut iter = set.iter_from(3);
    /// assert_eq!(iter.position(), Some(3));
    /// iter.next();
    /// assert_eq!(iter.position(), Some(8));
    /// iter.next();
    /// assert_eq!(iter.position(), None);
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.next
    }
}

impl<S: Borrow<IntSet>> Iterator for Members<S> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.set.borrow().scan_from(self.next?);
        self.next = found.and_then(|i| i.checked_add(1));
        found
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(pos) => (0, Some(self.set.borrow().capacity().saturating_sub(pos))),
            None => (0, Some(0)),
        }
    }
}

impl<S: Borrow<IntSet>> FusedIterator for Members<S> {}

impl<'a> IntoIterator for &'a IntSet {
    type IntoIter = Iter<'a>;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for IntSet {
    type IntoIter = IntoIter;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        Members::new(self, 0)
    }
}

impl FromIterator<usize> for IntSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for IntSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for i in iter {
            self.insert_bit(i);
        }
    }
}

impl<'a> Extend<&'a usize> for IntSet {
    fn extend<I: IntoIterator<Item = &'a usize>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
