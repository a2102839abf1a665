use std::fmt;

use crate::PullIter;

/// An iterator that applies a function to every element of an inner iterator.
/// See [map].
#[derive(Clone)]
pub struct Map<I, F> {
    inner: I,
    mapper: F,
}

impl<I, F> Map<I, F> {
    /// Returns the wrapped iterator, discarding the function.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, F, U> PullIter for Map<I, F>
where
    I: PullIter,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.inner.next().map(&mut self.mapper)
    }

    // Mapping is one-to-one, so skipping doesn't need to run the function.
    fn advance(&mut self, n: usize) -> usize {
        self.inner.advance(n)
    }

    fn estimated_remaining(&self) -> usize {
        self.inner.estimated_remaining()
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("Map").field("inner", &self.inner).finish()
    }
}

/// Applies `mapper` to every element of `inner` and yields the results.
///
/// Nothing is pulled from `inner` until the returned iterator is itself
/// pulled.
pub fn map<I, F, U>(inner: I, mapper: F) -> Map<I, F>
where
    I: PullIter,
    F: FnMut(I::Item) -> U,
{
    Map { inner, mapper }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_slice;

    #[test]
    fn transforms_each_element() {
        let mut iter = map(from_slice(vec![1, 2, 3]), |i| i * 10);
        assert_eq!(iter.estimated_remaining(), 3);
        assert_eq!(iter.next(), Some(10));
        assert_eq!(iter.collect(), vec![20, 30]);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn advance_skips_without_calling_mapper() {
        let mut calls = 0;
        let mut iter = map(from_slice(vec![1, 2, 3, 4]), |i| {
            calls += 1;
            i
        });
        assert_eq!(iter.advance(3), 3);
        assert_eq!(iter.next(), Some(4));
        drop(iter);
        assert_eq!(calls, 1);
    }

    #[test]
    fn construction_is_lazy() {
        let mut source = from_slice(vec![1, 2]);
        let mapped = map(&mut source, |i: i32| i.to_string());
        drop(mapped);
        assert_eq!(source.position(), 0);
    }
}
