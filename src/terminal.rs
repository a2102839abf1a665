//! Operations that drain an iterator and produce a single result.
//!
//! All of these consume the iterator they're given. To keep using an iterator
//! afterwards (for example, to confirm that it's exhausted) pass `&mut iter`
//! instead.

use std::ops::Add;

use log::*;

use crate::PullIter;

/// Accumulates a value by applying `step` to the accumulator and each element
/// in encounter order, returning the final accumulator.
///
/// Every other operation in this module is defined in terms of this.
pub fn fold<I, A, F>(mut iter: I, init: A, mut step: F) -> A
where
    I: PullIter,
    F: FnMut(A, I::Item) -> A,
{
    let mut acc = init;
    while let Some(item) = iter.next() {
        acc = step(acc, item);
    }
    acc
}

/// Like [fold], but uses the first element as the initial accumulator.
///
/// Returns `None` if the iterator was empty.
pub fn reduce<I, F>(mut iter: I, step: F) -> Option<I::Item>
where
    I: PullIter,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let first = iter.next()?;
    Some(fold(iter, first, step))
}

/// Returns the number of elements in the iterator.
///
/// This always pulls every element, since
/// [estimated_remaining](PullIter::estimated_remaining) is only a lower bound.
pub fn count<I: PullIter>(iter: I) -> usize {
    fold(iter, 0, |count, _| count + 1)
}

/// Returns the sum of the elements in the iterator, starting from
/// `T::default()`.
pub fn sum<I, T>(iter: I) -> T
where
    I: PullIter<Item = T>,
    T: Default + Add<Output = T>,
{
    fold(iter, T::default(), |a, b| a + b)
}

/// Returns the greatest element, or `None` if the iterator was empty.
///
/// If several elements are equally great, the last of them is returned.
pub fn max<I, T>(iter: I) -> Option<T>
where
    I: PullIter<Item = T>,
    T: PartialOrd,
{
    reduce(iter, |a, b| if a > b { a } else { b })
}

/// Returns the least element, or `None` if the iterator was empty.
///
/// If several elements are equally small, the last of them is returned.
pub fn min<I, T>(iter: I) -> Option<T>
where
    I: PullIter<Item = T>,
    T: PartialOrd,
{
    reduce(iter, |a, b| if a < b { a } else { b })
}

/// Returns the greatest element according to the strict less-than comparison
/// `less`, or `None` if the iterator was empty.
///
/// When `less(a, b)` is true `b` is kept, otherwise `a` is. This means that
/// among equally great elements, the first one wins.
pub fn max_by<I, T, F>(iter: I, mut less: F) -> Option<T>
where
    I: PullIter<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    reduce(iter, |a, b| if less(&a, &b) { b } else { a })
}

/// Returns the least element according to the strict less-than comparison
/// `less`, or `None` if the iterator was empty.
///
/// When `less(a, b)` is true `a` is kept, otherwise `b` is. This means that
/// among equally small elements, the last one wins.
pub fn min_by<I, T, F>(iter: I, mut less: F) -> Option<T>
where
    I: PullIter<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    reduce(iter, |a, b| if less(&a, &b) { a } else { b })
}

/// Returns the last element of the iterator, or `None` if it was empty.
///
/// When the iterator knows that more than one element remains, this skips
/// all but the last of those with [advance](PullIter::advance) before
/// scanning the rest.
pub fn last<I: PullIter>(mut iter: I) -> Option<I::Item> {
    let known = iter.estimated_remaining();
    if known > 1 {
        let skipped = iter.advance(known - 1);
        trace!("last() skipped {skipped} of at least {known} remaining elements");
    }
    fold(iter, None, |_, item| Some(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, from_slice};

    #[test]
    fn fold_runs_in_encounter_order() {
        let joined = fold(from_slice(vec!["a", "b", "c"]), String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "abc");
    }

    #[test]
    fn reduce_on_empty_is_none() {
        assert_eq!(reduce(empty::<i32>(), |a, b| a + b), None);
        assert_eq!(reduce(from_slice(vec![4]), |a, b| a + b), Some(4));
    }

    #[test]
    fn max_by_keeps_first_min_by_keeps_last() {
        let pairs = vec![(1, 'a'), (3, 'b'), (3, 'c'), (1, 'd')];
        let by_key = |(k, _): &(i32, char)| *k;

        let first_max = max_by(from_slice(pairs.clone()), |a, b| by_key(a) < by_key(b));
        assert_eq!(first_max, Some((3, 'b')));

        let last_min = min_by(from_slice(pairs), |a, b| by_key(a) < by_key(b));
        assert_eq!(last_min, Some((1, 'd')));
    }

    #[test]
    fn max_and_min_keep_the_later_tie() {
        let max_zero = max(from_slice(vec![0.0_f64, -0.0])).unwrap();
        assert!(max_zero.is_sign_negative());

        let min_zero = min(from_slice(vec![0.0_f64, -0.0])).unwrap();
        assert!(min_zero.is_sign_negative());

        let max_zero = max(from_slice(vec![-0.0_f64, 0.0])).unwrap();
        assert!(max_zero.is_sign_positive());
    }

    #[test]
    fn max_over_floats() {
        assert_eq!(max(from_slice(vec![1.5, -2.0, 0.25])), Some(1.5));
        assert_eq!(min(from_slice(vec![1.5, -2.0, 0.25])), Some(-2.0));
    }

    #[test]
    fn last_works_after_partial_consumption() {
        let mut iter = from_slice(vec![1, 2, 3, 4, 5]);
        iter.next();
        assert_eq!(last(&mut iter), Some(5));
        assert_eq!(last(&mut iter), None);
    }

    #[test]
    fn last_of_filter_falls_back_to_scan() {
        let iter = from_slice(vec![1, 2, 3, 4, 5]).filter(|i| i % 2 == 0);
        assert_eq!(last(iter), Some(4));
    }

    #[test]
    fn count_ignores_estimate() {
        assert_eq!(count(from_slice(vec![1, 2, 3]).filter(|_| true)), 3);
    }
}
