use crate::PullIter;

/// Adapts any [std::iter::Iterator] into a [PullIter].
///
/// [estimated_remaining](PullIter::estimated_remaining) is always zero. A
/// [size_hint](Iterator::size_hint) is only advisory, and an iterator that
/// reports more elements than it yields is still a valid [Iterator], so its
/// lower bound can't be trusted as one here.
#[derive(Debug, Clone)]
pub struct StdIter<I>(I);

impl<I: Iterator> PullIter for StdIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.0.next()
    }

    fn estimated_remaining(&self) -> usize {
        0
    }
}

/// Creates a [PullIter] that pulls from `iter`.
pub fn from_iter<I: IntoIterator>(iter: I) -> StdIter<I::IntoIter> {
    StdIter(iter.into_iter())
}
