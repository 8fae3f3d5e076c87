extern crate std;

use core::fmt;

use std::vec::Vec;

use super::list::SortedList;


/// Test element in the spirit of a (value, tag) record: ordered by value
/// first, then tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    value: i32,
    tag: char,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.value, self.tag)
    }
}

fn entry(value: i32, tag: char) -> Entry {
    Entry { value, tag }
}

fn entry_list(pairs: &[(i32, char)]) -> SortedList<Entry> {
    let mut list = SortedList::new();
    for &(value, tag) in pairs {
        list.insert(entry(value, tag)).unwrap();
    }
    list
}

fn pairs(list: &SortedList<Entry>) -> Vec<(i32, char)> {
    list.iter().map(|e| (e.value, e.tag)).collect()
}

fn int_list(values: &[i32]) -> SortedList<i32> {
    let mut list = SortedList::new();
    for &value in values {
        list.insert(value).unwrap();
    }
    list
}

fn ints(list: &SortedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}
