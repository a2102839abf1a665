use std::{fmt, marker::PhantomData};

use crate::PullIter;

/// An iterator over the elements of an ordered sequence, which yields clones
/// of each element.
///
/// The backing store `B` may be anything that can be viewed as a slice: an
/// owned [Vec], a borrowed `&[T]`, an `Arc<[T]>` and so on. The backing store
/// is never modified, which is what makes [reset](Self::reset) possible.
pub struct SliceIter<T, B = Vec<T>> {
    base: B,
    idx: usize,
    // `fn() -> T` keeps this covariant in `T` without requiring `T: Send` for
    // the iterator to be `Send`.
    _item: PhantomData<fn() -> T>,
}

impl<T, B> SliceIter<T, B>
where
    B: AsRef<[T]>,
{
    /// Creates a [SliceIter] positioned at the start of `base`.
    pub fn new(base: B) -> Self {
        SliceIter {
            base,
            idx: 0,
            _item: PhantomData,
        }
    }

    /// Moves the cursor back to the start of the sequence so that it can be
    /// traversed again.
    pub fn reset(&mut self) {
        self.idx = 0;
    }

    /// The number of elements that have been consumed so far.
    pub fn position(&self) -> usize {
        self.idx
    }

    /// The elements that haven't been consumed yet.
    pub fn as_slice(&self) -> &[T] {
        self.base.as_ref().get(self.idx..).unwrap_or(&[])
    }

    /// Returns the backing store, discarding the cursor.
    pub fn into_inner(self) -> B {
        self.base
    }
}

impl<T, B> PullIter for SliceIter<T, B>
where
    T: Clone,
    B: AsRef<[T]>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.base.as_ref().get(self.idx)?.clone();
        self.idx += 1;
        Some(item)
    }

    fn advance(&mut self, n: usize) -> usize {
        let skipped = n.min(self.estimated_remaining());
        self.idx += skipped;
        skipped
    }

    /// For a sequence this is exact.
    fn estimated_remaining(&self) -> usize {
        self.base.as_ref().len().saturating_sub(self.idx)
    }

    /// Returns a copy of the unconsumed elements and moves the cursor to the
    /// end. The backing store is left untouched.
    fn collect(&mut self) -> Vec<T> {
        let out = self.as_slice().to_vec();
        self.idx = self.base.as_ref().len();
        out
    }
}

impl<T, B> Clone for SliceIter<T, B>
where
    B: Clone,
{
    fn clone(&self) -> Self {
        SliceIter {
            base: self.base.clone(),
            idx: self.idx,
            _item: PhantomData,
        }
    }
}

impl<T, B> fmt::Debug for SliceIter<T, B>
where
    T: fmt::Debug,
    B: AsRef<[T]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("SliceIter")
            .field("remaining", &self.as_slice())
            .field("position", &self.idx)
            .finish()
    }
}

impl<T> From<Vec<T>> for SliceIter<T> {
    fn from(value: Vec<T>) -> Self {
        SliceIter::new(value)
    }
}

/// Creates a new [SliceIter] over `base`.
///
/// This returns the concrete type rather than an opaque iterator so that
/// callers who need [SliceIter::reset] don't have to recover it later.
pub fn from_slice<T, B>(base: B) -> SliceIter<T, B>
where
    T: Clone,
    B: AsRef<[T]>,
{
    SliceIter::new(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_in_order_then_stays_exhausted() {
        let mut iter = from_slice(vec![1, 2, 3]);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn estimated_remaining_is_exact() {
        let mut iter = from_slice(&[10, 20, 30, 40]);
        assert_eq!(iter.estimated_remaining(), 4);
        iter.next();
        assert_eq!(iter.estimated_remaining(), 3);
        iter.advance(10);
        assert_eq!(iter.estimated_remaining(), 0);
    }

    #[test]
    fn advance_stops_at_end() {
        let mut iter = from_slice(vec!['a', 'b', 'c']);
        assert_eq!(iter.advance(2), 2);
        assert_eq!(iter.next(), Some('c'));
        assert_eq!(iter.advance(5), 0);
    }

    #[test]
    fn collect_copies_suffix_without_touching_backing_store() {
        let data = vec![1, 2, 3, 4];
        let mut iter = from_slice(data.as_slice());
        iter.next();
        assert_eq!(iter.collect(), vec![2, 3, 4]);
        assert_eq!(iter.collect(), Vec::<i32>::new());

        iter.reset();
        assert_eq!(iter.collect(), data);
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn reset_replays_from_start() {
        let mut iter = from_slice(vec!["x", "y"]);
        assert_eq!(iter.collect(), vec!["x", "y"]);
        iter.reset();
        assert_eq!(iter.position(), 0);
        assert_eq!(iter.estimated_remaining(), 2);
        assert_eq!(iter.next(), Some("x"));
        assert_eq!(iter.as_slice(), &["y"]);
    }

    /// A backing store that shrinks every time it's viewed.
    struct Shrinking(std::cell::Cell<usize>);

    impl AsRef<[u8]> for Shrinking {
        fn as_ref(&self) -> &[u8] {
            static DATA: [u8; 4] = [1, 2, 3, 4];
            let len = self.0.get();
            self.0.set(len.saturating_sub(2));
            &DATA[..len]
        }
    }

    #[test]
    fn inconsistent_backing_store_does_not_panic() {
        let mut iter = from_slice(Shrinking(std::cell::Cell::new(4)));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.estimated_remaining(), 0);
        assert!(iter.as_slice().is_empty());
        assert_eq!(iter.next(), None);
    }
}
