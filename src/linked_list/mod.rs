//! Linked list containers.
//!
//! In an owned linked list, every node is heap-allocated and belongs to
//! exactly one list at a time. Operations that move elements between lists
//! do so by transferring node ownership, never by sharing a node.
//!
//! # Examples
//!
//! ```
//! use sorted_collections::linked_list::sorted::SortedList;
//!
//! let mut list = SortedList::new();
//! list.insert(20).unwrap();
//! list.insert(10).unwrap();
//! list.insert(16).unwrap();
//!
//! let values: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(values, vec![10, 16, 20]);
//! ```
pub mod sorted;
