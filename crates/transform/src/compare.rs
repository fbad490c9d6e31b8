//! Whitespace-token natural comparison.
//!
//! Both strings are split on runs of whitespace and compared token by
//! token. Tokens that both parse as integers compare numerically, so
//! `"item 2"` sorts before `"item 10"`; any other differing pair compares
//! lexicographically.

use std::cmp::Ordering;

/// Value [`compare`] returns when every compared token matched.
pub const INCONCLUSIVE: i64 = -1;

/// Outcome of walking the common token prefix.
enum Walk {
    Decided(i64),
    Exhausted,
}

fn walk(s1: &str, s2: &str) -> Walk {
    for (a, b) in s1.split_whitespace().zip(s2.split_whitespace()) {
        if a == b {
            continue;
        }
        match (a.parse::<i32>(), b.parse::<i32>()) {
            (Ok(x), Ok(y)) => {
                let diff = i64::from(x) - i64::from(y);
                if diff != 0 {
                    return Walk::Decided(diff);
                }
            }
            _ => return Walk::Decided(ordering_to_int(a.cmp(b))),
        }
    }
    Walk::Exhausted
}

fn ordering_to_int(ordering: Ordering) -> i64 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Compare two names, numeric-aware.
///
/// Returns a negative value when `s1` sorts first and a positive value when
/// `s2` does. If the walk over the shorter token list finds no difference the
/// result is [`INCONCLUSIVE`], even for identical strings or when one is a
/// token prefix of the other. Sorting with this is stable only through
/// [`crate::merge_sort_by`]; use [`natural_cmp`] for a proper ordering.
///
/// ```
/// use itemlist_transform::{compare, INCONCLUSIVE};
///
/// assert!(compare("item 2", "item 10") < 0);
/// assert!(compare("item 10", "item 2") > 0);
/// assert_eq!(compare("item 1", "item 1"), INCONCLUSIVE);
/// ```
pub fn compare(s1: &str, s2: &str) -> i64 {
    match walk(s1, s2) {
        Walk::Decided(diff) => diff,
        Walk::Exhausted => INCONCLUSIVE,
    }
}

/// Three-way variant of [`compare`].
///
/// Same token walk; when it is inconclusive the string with fewer tokens
/// sorts first, and equal token counts compare `Equal`.
pub fn natural_cmp(s1: &str, s2: &str) -> Ordering {
    match walk(s1, s2) {
        Walk::Decided(diff) => diff.cmp(&0),
        Walk::Exhausted => s1
            .split_whitespace()
            .count()
            .cmp(&s2.split_whitespace().count()),
    }
}
