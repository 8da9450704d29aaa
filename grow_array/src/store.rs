use crate::StoreError;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

/// Growable backing array shared by every container in the family.
///
/// `ArrayStore<T>` owns one contiguous block of `capacity()` slots and keeps
/// the live elements in the prefix `0..len()`. Capacity starts at 1, doubles
/// whenever an insertion finds the store full, and halves on request when
/// occupancy drops to a quarter (see [`shrink_if_sparse`]). Slots past the
/// live prefix are always empty, so removed elements are released
/// immediately rather than lingering in the backing array.
///
/// The store itself has no access discipline; the `array_adt` crate layers
/// list, stack, queue and bag policies on top of it.
///
/// # Examples
///
/// ```
/// use grow_array::ArrayStore;
///
/// let mut store = ArrayStore::new();
/// assert_eq!(store.capacity(), 1);
///
/// store.push_back("a");
/// store.push_back("b");
/// store.push_back("c");
///
/// // Capacity followed the doubling sequence 1 -> 2 -> 4.
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.capacity(), 4);
/// assert_eq!(store.get(1), Some(&"b"));
/// ```
///
/// [`shrink_if_sparse`]: ArrayStore::shrink_if_sparse
#[derive(Debug, Clone)]
pub struct ArrayStore<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    let mut slots = Vec::with_capacity(cap);
    slots.resize_with(cap, || None);
    slots.into_boxed_slice()
}

impl<T> ArrayStore<T> {
    /// Creates an empty store with capacity 1.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty store whose capacity is `cap` rounded up to the next
    /// power of two (minimum 1), so the store stays on the doubling sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_array::ArrayStore;
    ///
    /// let store = ArrayStore::<u32>::with_capacity(100);
    /// assert_eq!(store.capacity(), 128);
    /// assert!(store.is_empty());
    /// ```
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.max(1);
        let cap = cap.checked_next_power_of_two().unwrap_or(cap);
        ArrayStore {
            slots: empty_slots(cap),
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the store holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slot count of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends an element after the live prefix, doubling capacity first if
    /// the store is full. O(1) amortized.
    pub fn push_back(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.resize(self.slots.len() * 2);
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if the store is
    /// empty. The vacated slot is cleared. Never shrinks; callers that want
    /// the quarter-occupancy policy follow up with [`shrink_if_sparse`].
    ///
    /// [`shrink_if_sparse`]: ArrayStore::shrink_if_sparse
    pub fn take_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    /// Inserts `item` at `index`, shifting everything at `index..len` one
    /// slot right. Valid indices are `0..=len`; anything else is rejected
    /// without mutating the store.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_array::ArrayStore;
    ///
    /// let mut store = ArrayStore::new();
    /// store.push_back('a');
    /// store.push_back('c');
    ///
    /// store.insert(1, 'b').unwrap();
    /// assert_eq!(store.iter().collect::<String>(), "abc");
    ///
    /// assert!(store.insert(7, 'x').is_err());
    /// assert_eq!(store.len(), 3);
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), StoreError> {
        if index > self.len {
            return Err(StoreError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.len == self.slots.len() {
            self.resize(self.slots.len() * 2);
        }
        for i in (index..self.len).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
        self.slots[index] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting everything above
    /// it one slot left and clearing the vacated trailing slot. Returns
    /// `None` (no mutation) when `index` is outside the live prefix.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let item = self.slots[index].take();
        for i in index..self.len - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.len -= 1;
        item
    }

    /// Returns a reference to the element at `index`, or `None` when out of
    /// range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None`
    /// when out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            self.slots[index].as_mut()
        } else {
            None
        }
    }

    /// Replaces the element at `index`, returning the previous one, or
    /// `None` (no mutation) when out of range.
    pub fn replace(&mut self, index: usize, item: T) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.slots[index].replace(item)
    }

    /// Drops every element and installs a fresh backing array of the same
    /// capacity.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.slots.len());
        self.len = 0;
    }

    /// Quarter-occupancy halving: when the store is non-empty and exactly a
    /// quarter full, halves the capacity (never below 1), keeping the live
    /// prefix intact. Returns whether a shrink happened.
    ///
    /// This is a policy hook, not an automatic behavior: the stack and
    /// queue wrappers call it after every removal, the sequence and bag
    /// never do.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_array::ArrayStore;
    ///
    /// let mut store = ArrayStore::new();
    /// for i in 0..8 {
    ///     store.push_back(i);
    /// }
    /// for _ in 0..6 {
    ///     store.take_back();
    /// }
    ///
    /// // 2 live elements in 8 slots: exactly a quarter full.
    /// assert!(store.shrink_if_sparse());
    /// assert_eq!(store.capacity(), 4);
    /// assert_eq!(store.get(1), Some(&1));
    /// ```
    pub fn shrink_if_sparse(&mut self) -> bool {
        let cap = self.slots.len();
        if self.len > 0 && self.len == cap / 4 {
            self.resize((cap / 2).max(1));
            return true;
        }
        false
    }

    /// Returns a fresh iterator over the live prefix. Iteration is lazy and
    /// finite, and a new traversal can be started any number of times. The
    /// iterator is double-ended, which is what gives the stack its LIFO
    /// walk for free.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    /// Moves the live prefix into a backing array of `new_cap` slots.
    fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len.max(1));
        let mut next = Vec::with_capacity(new_cap);
        for slot in self.slots.iter_mut().take(self.len) {
            next.push(slot.take());
        }
        next.resize_with(new_cap, || None);
        self.slots = next.into_boxed_slice();
    }
}

impl<T> Default for ArrayStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a ArrayStore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over a store's live prefix.
///
/// Yields references front-to-back; [`DoubleEndedIterator`] gives the
/// reverse walk.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
