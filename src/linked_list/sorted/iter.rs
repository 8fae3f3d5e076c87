use super::list::SortedList;
use super::node::Node;
use super::traits::Element;

/// A borrowing iterator over a sorted list, yielding element references in
/// non-decreasing order.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(current: Option<&'a Node<T>>) -> Self {
        Self { current }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.element
        })
    }
}

impl<'a, T: Element> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
