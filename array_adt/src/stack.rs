//! LIFO stack over a resizing array.

use grow_array::ArrayStore;

/// Last-in, first-out stack.
///
/// Pushes and pops at one end only. Capacity doubles on overflow and, after
/// a pop, halves when occupancy drops to exactly a quarter (never below one
/// slot).
///
/// Peeking an empty stack returns `None`; there is no panicking accessor.
///
/// # Examples
///
/// ```
/// use array_adt::Stack;
///
/// let mut cargo = Stack::new();
/// cargo.push("first box");
/// cargo.push("second box");
///
/// assert_eq!(cargo.peek(), Some(&"second box"));
/// assert_eq!(cargo.pop(), Some("second box"));
/// assert_eq!(cargo.pop(), Some("first box"));
/// assert_eq!(cargo.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    store: ArrayStore<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with capacity 1.
    pub fn new() -> Self {
        Stack {
            store: ArrayStore::new(),
        }
    }

    /// Creates an empty stack sized for roughly `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        Stack {
            store: ArrayStore::with_capacity(cap),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Current capacity of the backing array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Pushes onto the top. O(1) amortized.
    pub fn push(&mut self, item: T) {
        self.store.push_back(item);
    }

    /// Pops the top element, or `None` when empty. The vacated slot is
    /// cleared and the quarter-occupancy halving applies.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.store.take_back();
        if item.is_some() {
            self.store.shrink_if_sparse();
        }
        item
    }

    /// Top element without removing it, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.store.get(i))
    }

    /// Fresh top-to-bottom (LIFO) iterator.
    pub fn iter(&self) -> core::iter::Rev<grow_array::Iter<'_, T>> {
        self.store.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = core::iter::Rev<grow_array::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_push_two_pop_scenario() {
        let mut stack = Stack::new();
        for c in ['a', 'b', 'c', 'd', 'e'] {
            stack.push(c);
        }

        assert_eq!(stack.pop(), Some('e'));
        assert_eq!(stack.pop(), Some('d'));
        assert_eq!(stack.peek(), Some(&'c'));
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn pop_on_empty_is_idempotent() {
        let mut stack = Stack::<i32>::new();
        for _ in 0..3 {
            assert_eq!(stack.pop(), None);
            assert_eq!(stack.peek(), None);
            assert_eq!(stack.len(), 0);
            assert_eq!(stack.capacity(), 1);
        }
    }

    #[test]
    fn halves_at_quarter_occupancy() {
        let mut stack = Stack::new();
        for i in 0..16 {
            stack.push(i);
        }
        assert_eq!(stack.capacity(), 16);

        // Pop down to 4 of 16: the pop that reaches a quarter halves.
        for _ in 0..12 {
            stack.pop();
        }
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.capacity(), 8);

        let got: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(got, vec![3, 2, 1, 0]);
    }

    #[test]
    fn iteration_is_lifo_and_restartable() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        let first: Vec<i32> = stack.iter().copied().collect();
        let second: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(first, vec![3, 2, 1]);
        assert_eq!(first, second);
    }
}
