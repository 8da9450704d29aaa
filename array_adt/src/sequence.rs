//! General ordered list with positional access.

use grow_array::{ArrayStore, Iter, StoreError};

/// Ordered list over a resizing array.
///
/// Supports random access and insertion/removal at any position; elements
/// above the position shift by one slot. Capacity starts at 1 and doubles
/// on overflow. Unlike [`Stack`](crate::Stack) and [`Queue`](crate::Queue),
/// a sequence never gives capacity back on removal; its usage pattern is
/// assumed to refill.
///
/// # Examples
///
/// ```
/// use array_adt::Sequence;
///
/// let mut route: Sequence<&str> = ["bogota", "cali"].into_iter().collect();
/// route.insert_at(1, "medellin").unwrap();
///
/// assert_eq!(route.get(1), Some(&"medellin"));
/// assert_eq!(route.remove_at(0), Some("bogota"));
/// assert_eq!(route.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    store: ArrayStore<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with capacity 1.
    pub fn new() -> Self {
        Sequence {
            store: ArrayStore::new(),
        }
    }

    /// Creates an empty sequence sized for roughly `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        Sequence {
            store: ArrayStore::with_capacity(cap),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Current capacity of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Inserts `item` at `index`, shifting later elements one slot right.
    /// Valid indices are `0..=len()`; anything else fails without mutation.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<(), StoreError> {
        self.store.insert(index, item)
    }

    /// Inserts at the front. Equivalent to `insert_at(0, item)`.
    pub fn push_front(&mut self, item: T) {
        // index 0 is always valid
        let _ = self.store.insert(0, item);
    }

    /// Appends at the back. Equivalent to `insert_at(len(), item)`.
    pub fn push_back(&mut self, item: T) {
        self.store.push_back(item);
    }

    /// Returns the element at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.store.get(index)
    }

    /// Returns the element at `index` mutably, or `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.store.get_mut(index)
    }

    /// Replaces the element at `index` and returns the previous one, or
    /// `None` (no mutation) when out of range.
    pub fn set(&mut self, index: usize, item: T) -> Option<T> {
        self.store.replace(index, item)
    }

    /// First element, or `None` when empty.
    pub fn first(&self) -> Option<&T> {
        self.store.get(0)
    }

    /// Last element, or `None` when empty.
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.store.get(i))
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot left. Returns `None` (no mutation) when out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.store.remove(index)
    }

    /// Removes and returns the first element.
    pub fn remove_first(&mut self) -> Option<T> {
        self.store.remove(0)
    }

    /// Removes and returns the last element.
    pub fn remove_last(&mut self) -> Option<T> {
        self.store.take_back()
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Fresh front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.store.iter()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.store.push_back(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Sequence<char> {
        ['a', 'b', 'c'].into_iter().collect()
    }

    #[test]
    fn insert_then_remove_scenario() {
        // [a,b,c] -> insert_at(1,x) -> [a,x,b,c] -> remove_at(0) -> [x,b,c]
        let mut seq = abc();
        seq.insert_at(1, 'x').unwrap();
        let got: Vec<char> = seq.iter().copied().collect();
        assert_eq!(got, vec!['a', 'x', 'b', 'c']);

        assert_eq!(seq.remove_at(0), Some('a'));
        let got: Vec<char> = seq.iter().copied().collect();
        assert_eq!(got, vec!['x', 'b', 'c']);
    }

    #[test]
    fn push_front_and_back() {
        let mut seq = Sequence::new();
        seq.push_back(2);
        seq.push_front(1);
        seq.push_back(3);
        let got: Vec<i32> = seq.iter().copied().collect();
        assert_eq!(got, vec![1, 2, 3]);
        assert_eq!(seq.first(), Some(&1));
        assert_eq!(seq.last(), Some(&3));
    }

    #[test]
    fn set_returns_previous() {
        let mut seq = abc();
        assert_eq!(seq.set(1, 'z'), Some('b'));
        assert_eq!(seq.get(1), Some(&'z'));
        assert_eq!(seq.set(9, 'q'), None);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn out_of_range_access_is_none() {
        let mut seq = Sequence::<u8>::new();
        assert_eq!(seq.get(0), None);
        assert_eq!(seq.remove_at(0), None);
        assert_eq!(seq.remove_first(), None);
        assert_eq!(seq.remove_last(), None);
        assert_eq!(seq.first(), None);
        assert_eq!(seq.last(), None);
        assert!(seq.insert_at(1, 0).is_err());
    }

    #[test]
    fn never_shrinks() {
        let mut seq = Sequence::new();
        for i in 0..64 {
            seq.push_back(i);
        }
        let grown = seq.capacity();
        while seq.remove_last().is_some() {}
        assert_eq!(seq.capacity(), grown);
    }

    #[test]
    fn clear_resets_but_keeps_capacity() {
        let mut seq = abc();
        let cap = seq.capacity();
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.capacity(), cap);
        assert_eq!(seq.get(0), None);
    }
}
