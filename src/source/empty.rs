use std::{fmt, marker::PhantomData};

use crate::PullIter;

/// An iterator which contains no values. See [empty].
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> PullIter for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }

    fn advance(&mut self, _: usize) -> usize {
        0
    }

    fn estimated_remaining(&self) -> usize {
        0
    }

    fn collect(&mut self) -> Vec<T> {
        Vec::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str("Empty")
    }
}

/// Creates an iterator which contains no values.
///
/// This is useful as a placeholder anywhere an iterator over `T` is expected.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}
