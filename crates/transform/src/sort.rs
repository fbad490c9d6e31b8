//! Stable merge sort for comparators that are not a total order.

use std::cmp::Ordering;

/// Sort `items` in place with `cmp`, keeping equal elements in input order.
///
/// Unlike `slice::sort_by`, this accepts comparators that are inconsistent
/// (such as [`crate::compare`], which never reports `Equal`) and always
/// terminates with a permutation of the input. An element from the right
/// half is emitted first only when `cmp(right, left)` is `Less`.
pub fn merge_sort_by<T, F>(items: &mut Vec<T>, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let taken = std::mem::take(items);
    *items = sort_owned(taken, &mut cmp);
}

fn sort_owned<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = sort_owned(items, cmp);
    let right = sort_owned(right, cmp);
    merge(left, right, cmp)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sorts_integers() {
        let mut v = vec![5, 1, 4, 2, 3];
        merge_sort_by(&mut v, Ord::cmp);
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_is_stable() {
        let mut v = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        merge_sort_by(&mut v, |x, y| x.0.cmp(&y.0));
        assert_eq!(v, [(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_tolerates_inconsistent_comparator() {
        let mut v: Vec<u32> = (0..100).rev().collect();
        merge_sort_by(&mut v, |_, _| Ordering::Less);
        assert_eq!(v.len(), 100);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn prop_matches_std_sort(mut v in proptest::collection::vec(any::<i16>(), 0..64)) {
            let mut expected = v.clone();
            expected.sort();
            merge_sort_by(&mut v, Ord::cmp);
            prop_assert_eq!(v, expected);
        }
    }
}
