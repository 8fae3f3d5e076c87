use core::fmt::Display;

/// The capability contract for elements stored in a sorted list.
///
/// The list never interprets element contents beyond these operations:
///
/// - [`Ord`] supplies the ordering relation that drives sorted insertion,
///   merging and intersection, and with it the equality relation used by
///   removal, retrieval and list comparison.
/// - [`Clone`] is the value copy operation used by deep copies.
/// - [`Default`] is the default-constructible state.
/// - [`Display`] is the textual rendering consumed when a whole list is
///   rendered.
///
/// The trait is implemented for every type meeting the bounds; a type
/// missing one of them is rejected when the container is instantiated.
pub trait Element: Ord + Clone + Default + Display {}

impl<T> Element for T where T: Ord + Clone + Default + Display {}
