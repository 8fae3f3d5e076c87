//! # Sorted Linked List
//!
//! This module provides a singly linked list that keeps its elements in
//! non-decreasing order, as defined by the element type itself.
//!
//! ## Core Components
//!
//! - [`traits::Element`]: the capability contract an element type must meet
//!   (ordering, equality, copying, default state, rendering).
//! - [`list::SortedList`]: the list container with sorted insertion, removal
//!   and retrieval by key, destructive `merge` and non-destructive
//!   `intersect`.
//! - [`iter::Iter`]: a borrowing iterator over the ordered elements.
//!
//! ## Invariants
//!
//! The implementation upholds the following for every list a caller can
//! observe:
//!
//! - The chain is acyclic and singly linked; an empty list has no nodes.
//! - Elements appear in non-decreasing order.
//! - Each node is owned by exactly one list. `merge` transfers nodes between
//!   lists, `intersect` allocates fresh copies; neither ever shares a node.
//! - Equality is deliberately non-reflexive for empty lists: an empty list
//!   compares unequal to everything, including itself. `SortedList`
//!   implements [`PartialEq`] but not [`Eq`] for this reason.
//!
//! ## Examples
//!
//! ```
//! use sorted_collections::linked_list::sorted::SortedList;
//!
//! let mut first = SortedList::new();
//! let mut second = SortedList::new();
//! for value in [3, 1, 2] {
//!     first.insert(value).unwrap();
//! }
//! for value in [2, 4] {
//!     second.insert(value).unwrap();
//! }
//!
//! let mut merged = SortedList::new();
//! merged.merge(&mut first, &mut second);
//!
//! assert!(first.is_empty());
//! assert!(second.is_empty());
//! let values: Vec<i32> = merged.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 2, 3, 4]);
//! ```
pub mod iter;
pub mod list;
pub mod traits;

mod node;

#[cfg(test)]
mod tests;

pub use allocator_api2::alloc::AllocError;
pub use iter::Iter;
pub use list::SortedList;
pub use traits::Element;
