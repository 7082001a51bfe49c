#![no_std]

//! `DynamicArray`: a contiguous growable array with capacity doubling.
//!
//! The array tracks two sizes: the length visible to the caller and the
//! capacity, the number of slots reserved for it. Appending to a full array
//! doubles the capacity. Every allocation is fallible and reported through
//! [`DynArrayError`] instead of aborting.
//!
//! This crate is `no_std` compatible and only needs the `alloc` crate.
//!
//! # Time Complexity
//! - `push()`: amortized O(1)
//! - `get()`, indexing: O(1)
//! - `remove_at()`: O(n) - the storage is rebuilt without the removed element
//! - `copy_from()`, `extend_from()`: O(n) in the number of copied elements
//!
//! # Capacity Rules
//! - `new()` starts with one slot.
//! - `with_capacity(n)` and `from_elem(v, n)` reserve `2 * n` slots (one if `n` is 0).
//! - `push()` on a full array doubles the capacity.
//! - `extend_from(src)` grows the capacity by `src.len()`.
//! - `remove_at()` resizes to the rule of `with_capacity(len - 1)`.
//!
//! ```
//! # use dynarray::DynamicArray;
//! let mut array = DynamicArray::new();
//! array.push(42).unwrap();
//! array.push(23).unwrap();
//! array.push(7).unwrap();
//!
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.as_slice(), &[42, 23, 7]);
//!
//! // Concatenating into no array at all gives a fresh copy
//! let twice = DynamicArray::concatenate(None, &array).unwrap();
//! let twice = DynamicArray::concatenate(Some(twice), &array).unwrap();
//! assert_eq!(twice.as_slice(), &[42, 23, 7, 42, 23, 7]);
//!
//! // The source array is left alone
//! assert_eq!(array.len(), 3);
//! ```
//!
//! # Ownership
//!
//! The array owns its elements and drops them with itself. To store
//! references to values owned elsewhere, use a reference or handle type as
//! the element type:
//!
//! ```
//! # use dynarray::DynamicArray;
//! let names = ["ada", "grace"];
//! let mut refs: DynamicArray<&str> = DynamicArray::new();
//! for name in &names {
//!     refs.push(*name).unwrap();
//! }
//!
//! let copy = DynamicArray::copy_from(&refs).unwrap();
//! assert_eq!(copy.get(1), Some(&"grace"));
//! ```
//!
//! # Removal
//!
//! ```
//! # use dynarray::{DynamicArray, DynArrayError};
//! let mut array = DynamicArray::new();
//! for i in 0..5 {
//!     array.push(i).unwrap();
//! }
//!
//! assert_eq!(array.remove_at(1), Ok(1));
//! assert_eq!(array.as_slice(), &[0, 2, 3, 4]);
//!
//! // The index must be below the length
//! assert_eq!(
//!     array.remove_at(4),
//!     Err(DynArrayError::IndexOutOfRange { index: 4, length: 4 })
//! );
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::DynamicArray;
pub use error::DynArrayError;
pub use iter::DynamicArrayIter;
