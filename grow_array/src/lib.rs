//! # grow_array
//!
//! The resizing-array primitive under the `array_adt` container family.
//!
//! One `ArrayStore<T>` owns a contiguous backing array and a live count,
//! and implements the whole capacity policy once: start at one slot,
//! double on overflow, halve on request at quarter occupancy. The list,
//! stack, queue and bag in `array_adt` are thin access-pattern wrappers
//! over this type, so the resize and iterator logic has a single home.
//!
//! ```
//! use grow_array::ArrayStore;
//!
//! let mut store = ArrayStore::new();
//! for word in ["boxes", "on", "a", "truck"] {
//!     store.push_back(word);
//! }
//!
//! assert_eq!(store.len(), 4);
//! assert_eq!(store.capacity(), 4);
//! assert_eq!(store.iter().count(), 4);
//! assert_eq!(store.take_back(), Some("truck"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{ArrayStore, Iter};
