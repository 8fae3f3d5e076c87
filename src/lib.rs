//! Collections built around owned linked storage.
//!
//! The crate currently provides one family of containers:
//!
//! - [`linked_list::sorted`]: a singly linked list that keeps its elements
//!   in non-decreasing order and supports destructive merge and
//!   non-destructive intersection of whole lists.

#![no_std]

extern crate alloc;

pub mod linked_list;
