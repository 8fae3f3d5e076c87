use alloc::alloc::handle_alloc_error;
use core::alloc::Layout;
use core::cmp::Ordering;
use core::fmt;
use core::mem;
use core::ptr;

use allocator_api2::alloc::AllocError;

use super::iter::Iter;
use super::node::{self, Link, Node};
use super::traits::Element;

/// A singly linked list whose elements are kept in non-decreasing order.
///
/// The ordering is the element type's own; see [`Element`] for the full
/// capability contract. The list owns its node chain outright and nothing
/// else, so moving a list moves the whole chain and dropping it releases
/// every node and element exactly once.
///
/// # Equality
///
/// `SortedList` implements [`PartialEq`] but not [`Eq`]: an empty list
/// compares unequal to everything, including another empty list and itself.
/// Two non-empty lists are equal when they have the same length and
/// pairwise-equal elements in order.
pub struct SortedList<T: Element> {
    head: Link<T>,
}

impl<T: Element> SortedList<T> {
    /// Creates a new, empty sorted list.
    pub const fn new() -> Self {
        SortedList { head: None }
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Releases every node and its element, leaving the list empty.
    ///
    /// This is the sole finalizer: `Drop`, reassignment and the set
    /// operations all funnel through it. Calling it on an empty list does
    /// nothing.
    pub fn clear(&mut self) {
        let mut next = self.head.take();
        while let Some(mut unlinked) = next {
            next = unlinked.next.take();
        }
    }

    /// Returns an iterator over the elements in non-decreasing order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }

    /// Inserts `element` before the first element that is not less than it,
    /// taking ownership.
    ///
    /// Equal-valued elements therefore land in front of the ones already
    /// present. On allocation exhaustion the chain is left untouched: the
    /// node is allocated before any link is rewritten.
    pub fn insert(&mut self, element: T) -> Result<(), AllocError> {
        let mut node = node::try_box(Node::new(element))?;
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|current| current.element < node.element) {
            // The loop condition guarantees the node exists.
            cursor = &mut cursor.as_mut().unwrap().next;
        }
        node.next = cursor.take();
        *cursor = Some(node);
        Ok(())
    }

    /// Finds the first element equal to `key` and returns a reference to
    /// it, leaving the list unchanged.
    pub fn retrieve(&self, key: &T) -> Option<&T> {
        self.iter().find(|element| *element == key)
    }

    /// Removes the first element equal to `key`, transferring ownership of
    /// the element to the caller. The node itself is discarded.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|current| current.element != *key) {
            // The loop condition guarantees the node exists.
            cursor = &mut cursor.as_mut().unwrap().next;
        }
        // Either the matching node, or `None` when the walk hit the end.
        let unlinked = cursor.take()?;
        let Node { element, next } = *unlinked;
        *cursor = next;
        Some(element)
    }

    /// Merges `source1` and `source2` into `self`, replacing whatever
    /// `self` held and leaving both sources empty.
    ///
    /// The result is the sorted union of the sources with duplicates
    /// preserved; on equal heads the node from `source1` is taken first.
    /// Nodes are relinked, never copied, so no allocation happens here.
    ///
    /// The guards run in a fixed order, each assuming the earlier ones
    /// failed:
    ///
    /// 1. both sources empty: `self` is cleared;
    /// 2. one source empty: `self` takes over the other source's chain;
    /// 3. the sources are equal by value: `self` takes over `source1`'s
    ///    chain and `source2` is cleared;
    /// 4. otherwise: a linear two-cursor relink of both chains.
    ///
    /// The destination cannot alias a source through `&mut`, so the
    /// self-merge shapes of the underlying algorithm are unwritable here;
    /// use [`merge_from`](Self::merge_from) to merge another list into an
    /// existing one.
    pub fn merge(&mut self, source1: &mut Self, source2: &mut Self) {
        if source1.is_empty() && source2.is_empty() {
            self.clear();
            return;
        }
        if source1.is_empty() {
            *self = mem::take(source2);
            return;
        }
        if source2.is_empty() {
            *self = mem::take(source1);
            return;
        }
        if source1 == source2 {
            source2.clear();
            *self = mem::take(source1);
            return;
        }
        let merged = node::merge_chains(source1.head.take(), source2.head.take());
        self.clear();
        self.head = merged;
    }

    /// Merges `other` into `self`, leaving `other` empty.
    ///
    /// Equivalent to a three-list [`merge`](Self::merge) whose destination
    /// is one of the sources: the union of both lists ends up in `self`,
    /// duplicates preserved, and on equal heads the element already in
    /// `self` stays first. An empty `other` leaves `self` untouched.
    pub fn merge_from(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        self.head = node::merge_chains(self.head.take(), other.head.take());
    }

    /// Replaces `self` with the sorted intersection of `source1` and
    /// `source2`, leaving both sources unchanged.
    ///
    /// On allocation exhaustion `self` keeps its previous content; the
    /// result chain is built in full before it is adopted.
    pub fn intersect(&mut self, source1: &Self, source2: &Self) -> Result<(), AllocError> {
        *self = source1.intersection(source2)?;
        Ok(())
    }

    /// Returns a new list holding the sorted intersection of `self` and
    /// `other`, built from deep copies of the matching elements.
    ///
    /// Both lists are walked with one cursor each: equal elements are
    /// copied into the result and both cursors advance, otherwise the
    /// cursor at the smaller element advances. Matching stops once either
    /// cursor is exhausted, so an empty operand yields an empty result.
    /// Elements present `n` and `m` times contribute `min(n, m)` copies.
    pub fn intersection(&self, other: &Self) -> Result<Self, AllocError> {
        let mut result = Self::new();
        let mut tail = &mut result.head;
        let mut lhs = self.head.as_deref();
        let mut rhs = other.head.as_deref();
        while let (Some(a), Some(b)) = (lhs, rhs) {
            match a.element.cmp(&b.element) {
                Ordering::Less => lhs = a.next.as_deref(),
                Ordering::Greater => rhs = b.next.as_deref(),
                Ordering::Equal => {
                    let copy = node::try_box(Node::new(a.element.clone()))?;
                    tail = node::link_tail(tail, copy);
                    lhs = a.next.as_deref();
                    rhs = b.next.as_deref();
                }
            }
        }
        Ok(result)
    }

    /// Deep-copies the list, reporting allocation exhaustion instead of
    /// aborting. No node or element is shared with `self`.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = Self::new();
        let mut tail = &mut copy.head;
        for element in self {
            let node = node::try_box(Node::new(element.clone()))?;
            tail = node::link_tail(tail, node);
        }
        Ok(copy)
    }
}

impl<T: Element> Drop for SortedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Element> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for SortedList<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(_) => handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }

    /// Clears the destination before adopting a deep copy of `source`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        *self = source.clone();
    }
}

/// List equality: both lists non-empty, same length, pairwise-equal
/// elements in order. An empty list is equal to nothing, so there is no
/// [`Eq`] impl; comparing a non-empty list with itself short-circuits to
/// `true`.
impl<T: Element> PartialEq for SortedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if ptr::eq(self, other) {
            return true;
        }
        let mut lhs = self.iter();
        let mut rhs = other.iter();
        loop {
            match (lhs.next(), rhs.next()) {
                (Some(a), Some(b)) if a == b => {}
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

/// Renders every element in order via its own [`Display`](fmt::Display)
/// impl, concatenated without separators.
impl<T: Element> fmt::Display for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if self.insert(element).is_err() {
                handle_alloc_error(Layout::new::<Node<T>>());
            }
        }
    }
}

impl<T: Element> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
