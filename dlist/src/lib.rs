#![no_std]

//! `DoublyLinkedList`: a doubly linked list with checked positional access.
//!
//! Every element lives in its own node linked to its neighbours in both
//! directions. The list keeps track of its first and last nodes, so both ends
//! are reachable in constant time. Positional operations walk the chain from
//! the first node.
//!
//! Invalid use is reported through [`LinkedListError`] at the call that caused
//! it: reading from an empty list, an index past the end, an insertion of
//! zero elements, a failed node allocation, or a chain that loops back on
//! itself. The list is never modified by a failing call.
//!
//! This crate is `no_std` compatible and only needs the `alloc` crate.
//!
//! # Time Complexity
//! - `push_front()`, `push_back()`, `pop_front()`, `pop_back()`: O(1)
//! - `first()`, `last()`, `len()`: O(1)
//! - `get()`, `insert()`, `remove_at()`, `swap()`: O(n) - linear walk from the first node
//! - `contains()`, `try_clone()`, `clear()`: O(n)
//!
//! ```
//! # use dlist::DoublyLinkedList;
//! let mut list = DoublyLinkedList::new();
//!
//! for i in 1..=10 {
//!     list.push_back(i).unwrap();
//! }
//! for i in 11..=20 {
//!     list.push_front(i).unwrap();
//! }
//!
//! assert_eq!(list.len(), 20);
//! assert_eq!(list.first(), Ok(&20));
//! assert_eq!(list.last(), Ok(&10));
//!
//! // Insert before the element currently at index 11
//! list.insert(11, 333, 1).unwrap();
//! assert_eq!(list.len(), 21);
//! assert_eq!(list.get(11), Ok(&333));
//! ```
//!
//! # Insertion
//!
//! `insert()` places copies of a value before an existing element. An empty
//! list only accepts index 0; appending past the last element is done with
//! `push_back()`.
//!
//! ```
//! # use dlist::{DoublyLinkedList, LinkedListError};
//! let mut list = DoublyLinkedList::new();
//! list.insert(0, 'b', 2).unwrap();
//! list.insert(0, 'a', 1).unwrap();
//!
//! let letters: Vec<_> = list.iter().copied().collect();
//! assert_eq!(letters, ['a', 'b', 'b']);
//!
//! assert_eq!(
//!     list.insert(3, 'c', 1),
//!     Err(LinkedListError::IndexOutOfRange { index: 3, length: 3 })
//! );
//! assert_eq!(
//!     list.insert(0, 'c', 0),
//!     Err(LinkedListError::InvalidCount { count: 0 })
//! );
//! ```
//!
//! # Ownership
//!
//! The list owns its values. Removing an element drops it, `pop_front()` and
//! `pop_back()` hand it back to the caller, and dropping the list drops
//! everything left in it. `try_clone()` copies every value, so the clone can
//! be changed without touching the original:
//!
//! ```
//! # use dlist::DoublyLinkedList;
//! let mut list = DoublyLinkedList::new();
//! list.push_back(String::from("left")).unwrap();
//!
//! let mut copy = list.try_clone().unwrap();
//! copy.get_mut(0).unwrap().push_str("-changed");
//!
//! assert_eq!(list.get(0).unwrap(), "left");
//! assert_eq!(copy.get(0).unwrap(), "left-changed");
//! ```
//!
//! # Searching
//!
//! `contains()` compares values with `PartialEq`:
//!
//! ```
//! # use dlist::DoublyLinkedList;
//! let mut list = DoublyLinkedList::new();
//! list.push_back(333).unwrap();
//!
//! assert_eq!(list.contains(&333), Ok(true));
//! assert_eq!(list.contains(&894), Ok(false));
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;
mod node;

// Re-export public types and traits
pub use crate::core::DoublyLinkedList;
pub use error::LinkedListError;
pub use iter::DoublyLinkedListIter;
