use crate::{Filter, IntoStd, Map};

/// A one-time, one-by-one view of elements through some internal state.
///
/// Every source and adapter in this crate implements this trait. Iterators are
/// single-pass: once an element has been produced it won't be produced again
/// unless the concrete type offers its own way to rewind (see
/// [SliceIter::reset](crate::SliceIter::reset)).
///
/// The trait is object safe, so `Box<dyn PullIter<Item = T>>` can stand in any
/// position that expects an iterator over `T`.
pub trait PullIter {
    /// The type of element this produces.
    type Item;

    /// Returns the next element, or `None` if there are no more elements.
    ///
    /// Calling this again after it has returned `None` is always safe. It
    /// never panics, and for everything except a channel that's still open it
    /// keeps returning `None`.
    fn next(&mut self) -> Option<Self::Item>;

    /// Moves this forward by up to `n` elements, returning how many it was
    /// actually able to skip.
    ///
    /// The return value is less than `n` exactly when the iterator ran out.
    /// Skipping has the same observable effect as calling [next](Self::next)
    /// `n` times and discarding the results.
    fn advance(&mut self, n: usize) -> usize {
        for i in 0..n {
            if self.next().is_none() {
                return i;
            }
        }
        n
    }

    /// Returns a lower bound on the number of elements remaining, i.e. there
    /// are at least this many elements left.
    ///
    /// This is a *lower* bound. There may be more elements even if this
    /// returns zero, so it must never be used to decide that the iterator is
    /// exhausted.
    fn estimated_remaining(&self) -> usize;

    /// Drains every remaining element into a [Vec], in encounter order.
    fn collect(&mut self) -> Vec<Self::Item> {
        let mut out = Vec::with_capacity(self.estimated_remaining());
        while let Some(item) = self.next() {
            out.push(item);
        }
        out
    }

    /// Wraps this in an iterator that applies `mapper` to each element. See
    /// [map](crate::map).
    fn map<U, F>(self, mapper: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        crate::map(self, mapper)
    }

    /// Wraps this in an iterator that skips elements for which `predicate`
    /// returns false. See [filter](crate::filter).
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::filter(self, predicate)
    }

    /// Exposes this as a [std::iter::Iterator] so it can be used in `for`
    /// loops and with the standard combinators.
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }
}

impl<I> PullIter for &mut I
where
    I: PullIter + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn advance(&mut self, n: usize) -> usize {
        (**self).advance(n)
    }

    fn estimated_remaining(&self) -> usize {
        (**self).estimated_remaining()
    }

    fn collect(&mut self) -> Vec<Self::Item> {
        (**self).collect()
    }
}

impl<I> PullIter for Box<I>
where
    I: PullIter + ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn advance(&mut self, n: usize) -> usize {
        (**self).advance(n)
    }

    fn estimated_remaining(&self) -> usize {
        (**self).estimated_remaining()
    }

    fn collect(&mut self) -> Vec<Self::Item> {
        (**self).collect()
    }
}

/// An object which can hand out fresh iterators over its contents.
pub trait Iterable {
    /// The type of element the iterators produce.
    type Item;

    /// Returns a new iterator positioned at the start of this object's
    /// contents.
    fn pull_iter(&self) -> impl PullIter<Item = Self::Item> + '_;
}

impl<T: Clone> Iterable for [T] {
    type Item = T;

    fn pull_iter(&self) -> impl PullIter<Item = T> + '_ {
        crate::from_slice(self)
    }
}

impl<T: Clone> Iterable for Vec<T> {
    type Item = T;

    fn pull_iter(&self) -> impl PullIter<Item = T> + '_ {
        crate::from_slice(self.as_slice())
    }
}
