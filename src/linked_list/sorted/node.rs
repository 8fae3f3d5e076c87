use alloc::boxed::Box;

use allocator_api2::alloc::AllocError;
use allocator_api2::boxed::Box as RawBox;

/// An owning link to the next node, `None` at the end of a chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node in an owned singly linked list. Holds exactly one element and the
/// link to its successor; never shared between two lists.
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(element: T) -> Self {
        Self {
            element,
            next: None,
        }
    }
}

/// Allocates `value` on the global allocator, reporting exhaustion instead
/// of aborting the process.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, AllocError> {
    let raw = RawBox::into_raw(RawBox::try_new(value)?);
    // SAFETY: both box types own a global-allocator allocation of the same
    // layout, so the raw pointer round-trip hands the allocation over intact.
    Ok(unsafe { Box::from_raw(raw) })
}

/// Links `node` at `tail`, which must be the unlinked end of a chain, and
/// returns the new end.
pub(crate) fn link_tail<T>(tail: &mut Link<T>, node: Box<Node<T>>) -> &mut Link<T> {
    &mut tail.insert(node).next
}

/// Destructively merges two sorted chains into one sorted chain by
/// relinking nodes; no element is copied. On equal heads the node from
/// `lhs` is taken first, and once either chain runs out the remainder of
/// the other is appended in bulk.
pub(crate) fn merge_chains<T: Ord>(mut lhs: Link<T>, mut rhs: Link<T>) -> Link<T> {
    let mut merged = None;
    let mut tail = &mut merged;
    loop {
        match (lhs, rhs) {
            (Some(mut a), Some(b)) if a.element <= b.element => {
                lhs = a.next.take();
                rhs = Some(b);
                tail = link_tail(tail, a);
            }
            (a, Some(mut b)) => {
                lhs = a;
                rhs = b.next.take();
                tail = link_tail(tail, b);
            }
            (rest, None) => {
                *tail = rest;
                break;
            }
        }
    }
    merged
}
