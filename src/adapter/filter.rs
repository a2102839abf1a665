use std::fmt;

use crate::PullIter;

/// An iterator that skips the elements of an inner iterator for which a
/// predicate returns false. See [filter].
#[derive(Clone)]
pub struct Filter<I, P> {
    inner: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    /// Returns the wrapped iterator, discarding the predicate.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, P> PullIter for Filter<I, P>
where
    I: PullIter,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while let Some(item) = self.inner.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    // Each skipped element has to pass the predicate, which may take any
    // number of pulls from `inner`, so this can't delegate.
    fn advance(&mut self, n: usize) -> usize {
        for i in 0..n {
            if self.next().is_none() {
                return i;
            }
        }
        n
    }

    /// Always zero: there's no telling how many of the remaining elements
    /// will pass the predicate.
    fn estimated_remaining(&self) -> usize {
        0
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("Filter").field("inner", &self.inner).finish()
    }
}

/// Wraps `inner`, skipping elements for which `predicate` returns false.
///
/// Nothing is pulled from `inner` until the returned iterator is itself
/// pulled.
pub fn filter<I, P>(inner: I, predicate: P) -> Filter<I, P>
where
    I: PullIter,
    P: FnMut(&I::Item) -> bool,
{
    Filter { inner, predicate }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_slice;

    #[test]
    fn keeps_only_passing_elements() {
        let mut iter = filter(from_slice(vec![1, 2, 3, 4, 5, 6]), |i| i % 3 == 0);
        assert_eq!(iter.estimated_remaining(), 0);
        assert_eq!(iter.collect(), vec![3, 6]);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn advance_counts_filtered_elements() {
        let mut source = from_slice(vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let mut evens = filter(&mut source, |i| i % 2 == 0);
        assert_eq!(evens.advance(2), 2);
        assert_eq!(evens.next(), Some(6));
        assert_eq!(evens.advance(3), 1);
        drop(evens);
        assert_eq!(source.estimated_remaining(), 0);
    }

    #[test]
    fn advance_leaves_inner_just_past_last_skipped() {
        let mut source = from_slice(vec![2, 1, 1, 4, 1]);
        filter(&mut source, |i| i % 2 == 0).advance(2);
        assert_eq!(source.as_slice(), &[1]);
    }
}
