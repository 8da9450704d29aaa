//! FIFO queue over a resizing array.

use grow_array::{ArrayStore, Iter};

/// First-in, first-out queue.
///
/// Enqueues at the tail and dequeues at the head. Each dequeue shifts the
/// remaining elements one slot left, which keeps the live elements a plain
/// prefix of the backing array at the cost of O(n) per dequeue. At the
/// depths this family is used at (tens to low hundreds) the shift is
/// cheaper to reason about than a ring buffer; the external FIFO contract
/// would not change if one were swapped in.
///
/// Capacity doubles on overflow and halves at quarter occupancy after a
/// dequeue, exactly like [`Stack`](crate::Stack).
///
/// # Examples
///
/// ```
/// use array_adt::Queue;
///
/// let mut arrivals = Queue::new();
/// arrivals.enqueue(1);
/// arrivals.enqueue(2);
/// arrivals.enqueue(3);
///
/// assert_eq!(arrivals.dequeue(), Some(1));
/// assert_eq!(arrivals.front(), Some(&2));
/// assert_eq!(arrivals.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    store: ArrayStore<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue with capacity 1.
    pub fn new() -> Self {
        Queue {
            store: ArrayStore::new(),
        }
    }

    /// Creates an empty queue sized for roughly `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        Queue {
            store: ArrayStore::with_capacity(cap),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Current capacity of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Appends at the tail. O(1) amortized.
    pub fn enqueue(&mut self, item: T) {
        self.store.push_back(item);
    }

    /// Removes and returns the head element, or `None` when empty. The
    /// remaining elements shift left one slot, the vacated trailing slot is
    /// cleared, and the quarter-occupancy halving applies.
    pub fn dequeue(&mut self) -> Option<T> {
        let item = self.store.remove(0);
        if item.is_some() {
            self.store.shrink_if_sparse();
        }
        item
    }

    /// Head element without removing it, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.store.get(0)
    }

    /// Fresh head-to-tail (FIFO) iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        self.store.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
