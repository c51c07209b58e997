//! Iterators over a [`PrefixIndex`](crate::PrefixIndex) and its [`Matches`](crate::Matches).

use alloc::{collections::btree_map, string::String, vec::Vec};
use core::iter::FusedIterator;

/// Iterator over every name stored in a [`PrefixIndex`](crate::PrefixIndex), in ascending
/// ordinal order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: core::iter::Flatten<btree_map::Values<'a, char, Vec<String>>>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(buckets: &'a btree_map::BTreeMap<char, Vec<String>>, len: usize) -> Self {
        Self {
            inner: buckets.values().flatten(),
            remaining: len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.inner.next()?;
        self.remaining -= 1;
        Some(s.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> FusedIterator for Iter<'a> {}
impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let s = self.inner.next_back()?;
        self.remaining -= 1;
        Some(s.as_str())
    }
}

/// Iterator over the buckets of a [`PrefixIndex`](crate::PrefixIndex) as
/// `(leading char, names)` pairs, in ascending order of the leading char.
#[derive(Debug, Clone)]
pub struct Buckets<'a>(pub(crate) btree_map::Iter<'a, char, Vec<String>>);

impl<'a> Iterator for Buckets<'a> {
    type Item = (char, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (*k, v.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> FusedIterator for Buckets<'a> {}
impl<'a> ExactSizeIterator for Buckets<'a> {}

impl<'a> DoubleEndedIterator for Buckets<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, v)| (*k, v.as_slice()))
    }
}

/// Iterator over the names in a [`Matches`](crate::Matches), in ascending ordinal order.
#[derive(Debug, Clone)]
pub struct MatchIter<'a>(pub(crate) core::slice::Iter<'a, String>);

impl<'a> Iterator for MatchIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> FusedIterator for MatchIter<'a> {}
impl<'a> ExactSizeIterator for MatchIter<'a> {}

impl<'a> DoubleEndedIterator for MatchIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(String::as_str)
    }
}
