//! Insertion-only multiset.

use grow_array::{ArrayStore, Iter};

/// A bag: add-only collection of elements, duplicates allowed.
///
/// There is no removal operation by design; a bag accumulates for the
/// lifetime of its owner and is read back by iterating. No ordering is
/// promised to callers, although the backing array never reorders, so
/// iteration happens to visit elements in insertion order.
///
/// # Examples
///
/// ```
/// use array_adt::Bag;
///
/// let mut weights = Bag::new();
/// weights.add(12.5);
/// weights.add(3.0);
/// weights.add(12.5);
///
/// assert_eq!(weights.len(), 3);
/// let total: f64 = weights.iter().sum();
/// assert_eq!(total, 28.0);
/// ```
#[derive(Debug, Clone)]
pub struct Bag<T> {
    store: ArrayStore<T>,
}

impl<T> Bag<T> {
    /// Creates an empty bag with capacity 1.
    pub fn new() -> Self {
        Bag {
            store: ArrayStore::new(),
        }
    }

    /// Creates an empty bag sized for roughly `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        Bag {
            store: ArrayStore::with_capacity(cap),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the bag holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Current capacity of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Adds an element. Always succeeds; duplicates are kept.
    pub fn add(&mut self, item: T) {
        self.store.push_back(item);
    }

    /// Fresh iterator over every element added so far.
    pub fn iter(&self) -> Iter<'_, T> {
        self.store.iter()
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Bag::new();
        bag.extend(iter);
        bag
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_everything_added() {
        for n in [0usize, 1, 2, 100] {
            let bag: Bag<usize> = (0..n).collect();
            assert_eq!(bag.len(), n);
            let got: Vec<usize> = bag.iter().copied().collect();
            assert_eq!(got, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn keeps_duplicates() {
        let mut bag = Bag::new();
        bag.add("x");
        bag.add("x");
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn iteration_is_restartable() {
        let bag: Bag<i32> = (1..=5).collect();
        assert_eq!(bag.iter().count(), 5);
        assert_eq!(bag.iter().count(), 5);
    }
}
