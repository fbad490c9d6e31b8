//! Flattening grouped names into display order.

use crate::compare::{compare, natural_cmp};
use crate::group::GroupedCollection;
use crate::sort::merge_sort_by;
use itemlist_core::config::SortMode;

/// Final ordered list of names.
pub type DisplaySequence = Vec<String>;

/// Sort and concatenate the groups keyed `"1"` through `max_key`.
///
/// Each present group is sorted in place with [`compare`] before its names
/// are appended. Keys missing from the range are skipped, and keys outside
/// it are never visited.
pub fn flatten(grouped: &mut GroupedCollection, max_key: usize) -> DisplaySequence {
    flatten_with(grouped, max_key, SortMode::Compatible)
}

/// [`flatten`] over the range `1..=grouped.len()`.
///
/// The range is bounded by the number of groups, not the largest key: for
/// keys `{1, 3}` only keys 1 and 2 are visited and group 3 is left out.
pub fn flatten_all(grouped: &mut GroupedCollection) -> DisplaySequence {
    let max_key = grouped.len();
    flatten(grouped, max_key)
}

/// [`flatten`] with an explicit comparator choice.
pub fn flatten_with(
    grouped: &mut GroupedCollection,
    max_key: usize,
    mode: SortMode,
) -> DisplaySequence {
    let mut display = DisplaySequence::new();

    for key in 1..=max_key {
        let Some(names) = grouped.get_mut(&key.to_string()) else {
            continue;
        };
        sort_group(names, mode);
        display.extend(names.iter().cloned());
    }

    display
}

/// Sort the groups that [`flatten_with`] skips for the same `max_key`.
///
/// Keys that are not integers in `1..=max_key` keep their input order during
/// flattening; this sorts them with the same comparator so every group of
/// the collection ends up ordered.
pub fn sort_unvisited(grouped: &mut GroupedCollection, max_key: usize, mode: SortMode) {
    for (key, names) in grouped.iter_mut() {
        if !is_visited(key, max_key) {
            sort_group(names, mode);
        }
    }
}

/// Whether [`flatten_with`] reads the group stored under `key`.
///
/// Only the canonical decimal forms `"1"` through `max_key` are looked up,
/// so `"01"` or `"x"` are never visited.
pub fn is_visited(key: &str, max_key: usize) -> bool {
    key.parse::<usize>()
        .is_ok_and(|n| (1..=max_key).contains(&n) && n.to_string() == key)
}

fn sort_group(names: &mut Vec<String>, mode: SortMode) {
    match mode {
        SortMode::Compatible => merge_sort_by(names, |a, b| compare(a, b).cmp(&0)),
        SortMode::ThreeWay => merge_sort_by(names, |a, b| natural_cmp(a, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(groups: &[(&str, &[&str])]) -> GroupedCollection {
        groups.iter().map(|(k, v)| (*k, v.to_vec())).collect()
    }

    #[test]
    fn test_contiguous_keys_concatenate_in_order() {
        let mut grouped = collection(&[
            ("2", &["b 10", "b 9"]),
            ("1", &["item 10", "item 2", "item 1"]),
            ("3", &["c"]),
        ]);

        let display = flatten_all(&mut grouped);
        assert_eq!(display, ["item 1", "item 2", "item 10", "b 9", "b 10", "c"]);
    }

    #[test]
    fn test_sorts_groups_in_place() {
        let mut grouped = collection(&[("1", &["item 3", "item 1"])]);
        flatten_all(&mut grouped);
        assert_eq!(grouped.get("1").unwrap(), ["item 1", "item 3"]);
    }

    #[test]
    fn test_sparse_keys_drop_groups_past_count() {
        let mut grouped = collection(&[("1", &["a"]), ("3", &["c"])]);
        let display = flatten_all(&mut grouped);
        assert_eq!(display, ["a"]);
    }

    #[test]
    fn test_missing_keys_in_range_are_skipped() {
        let mut grouped = collection(&[("1", &["a"]), ("3", &["c"])]);
        assert_eq!(flatten(&mut grouped, 3), ["a", "c"]);
    }

    #[test]
    fn test_non_numeric_keys_are_never_visited() {
        let mut grouped = collection(&[("1", &["a"]), ("x", &["hidden"])]);
        assert_eq!(flatten_all(&mut grouped), ["a"]);
    }

    #[test]
    fn test_sort_unvisited_orders_skipped_groups() {
        let mut grouped = collection(&[
            ("1", &["a"]),
            ("4", &["c 10", "c 2"]),
            ("x", &["y 3", "y 1"]),
        ]);
        let display = flatten_all(&mut grouped);
        assert_eq!(display, ["a"]);
        assert_eq!(grouped.get("4").unwrap(), ["c 10", "c 2"]);

        sort_unvisited(&mut grouped, 3, SortMode::Compatible);
        assert_eq!(grouped.get("4").unwrap(), ["c 2", "c 10"]);
        assert_eq!(grouped.get("x").unwrap(), ["y 1", "y 3"]);
    }

    #[test]
    fn test_sort_unvisited_leaves_visited_groups() {
        let mut grouped = collection(&[("1", &["b", "a"]), ("5", &["e 2", "e 1"])]);
        sort_unvisited(&mut grouped, 2, SortMode::ThreeWay);
        assert_eq!(grouped.get("1").unwrap(), ["b", "a"]);
        assert_eq!(grouped.get("5").unwrap(), ["e 1", "e 2"]);
    }

    #[test]
    fn test_is_visited() {
        assert!(is_visited("1", 2));
        assert!(is_visited("2", 2));
        assert!(!is_visited("3", 2));
        assert!(!is_visited("0", 2));
        assert!(!is_visited("01", 2));
        assert!(!is_visited("x", 2));
    }

    #[test]
    fn test_empty_collection() {
        let mut grouped = GroupedCollection::new();
        assert!(flatten_all(&mut grouped).is_empty());
        assert!(flatten(&mut grouped, 0).is_empty());
    }

    #[test]
    fn test_three_way_orders_prefixes() {
        let mut grouped = collection(&[("1", &["item 1 b", "item 1", "item 1 a"])]);
        let display = flatten_with(&mut grouped, 1, SortMode::ThreeWay);
        assert_eq!(display, ["item 1", "item 1 a", "item 1 b"]);
    }

    #[test]
    fn test_compatible_mode_keeps_every_name() {
        let mut grouped = collection(&[("1", &["x", "item 1", "x", "item 1 a", "item 0"])]);
        let mut display = flatten(&mut grouped, 1);
        assert_eq!(display[0], "item 0");
        display.sort();
        assert_eq!(display, ["item 0", "item 1", "item 1 a", "x", "x"]);
    }
}
