//! # array_adt
//!
//! Four linear containers over one shared resizing array.
//!
//! Each type is a thin access-pattern policy over [`grow_array::ArrayStore`]:
//!
//! - [`Sequence`] — ordered list with positional insert/remove
//! - [`Stack`] — LIFO push/pop/peek
//! - [`Queue`] — FIFO enqueue/dequeue
//! - [`Bag`] — insertion-only multiset
//!
//! All four start at capacity 1 and double on overflow; `Stack` and `Queue`
//! additionally halve at quarter occupancy on removal. "No such element" is
//! always `None`, never a panic.
//!
//! ```rust
//! use array_adt::{Queue, Stack};
//!
//! let mut dock = Queue::new();
//! dock.enqueue("box-1");
//! dock.enqueue("box-2");
//! assert_eq!(dock.dequeue(), Some("box-1"));
//!
//! let mut truck = Stack::new();
//! truck.push("box-2");
//! truck.push("box-3");
//! assert_eq!(truck.peek(), Some(&"box-3"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bag;
pub mod queue;
pub mod sequence;
pub mod stack;

pub use bag::Bag;
pub use queue::Queue;
pub use sequence::Sequence;
pub use stack::Stack;

// The error of the checked positional operations lives with the store.
pub use grow_array::StoreError;
