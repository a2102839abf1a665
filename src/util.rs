use std::fmt;

use crate::PullIter;

/// A [PullIter] exposed as a standard library [Iterator]. See
/// [PullIter::into_std].
///
/// The [size_hint](Iterator::size_hint) lower bound is the wrapped iterator's
/// [estimated_remaining](PullIter::estimated_remaining) and the upper bound is
/// always unknown.
#[derive(Clone)]
pub struct IntoStd<P>(P);

impl<P> IntoStd<P> {
    pub(crate) fn new(inner: P) -> Self {
        IntoStd(inner)
    }

    /// Returns the wrapped iterator.
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: PullIter> Iterator for IntoStd<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.estimated_remaining(), None)
    }

    fn nth(&mut self, n: usize) -> Option<P::Item> {
        if self.0.advance(n) < n {
            return None;
        }
        self.0.next()
    }
}

impl<P: fmt::Debug> fmt::Debug for IntoStd<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.0.fmt(f)
    }
}
