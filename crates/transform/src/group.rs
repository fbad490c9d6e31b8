//! Grouping records by `listId`.

use crate::record::{parse_records, Record};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Names bucketed by group key.
///
/// Keys are the string form of each record's `listId`. The map is ordered by
/// key string only so that serialized output is stable; [`crate::flatten`]
/// visits groups by numeric key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedCollection {
    groups: BTreeMap<String, Vec<String>>,
}

impl GroupedCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct group keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no record was kept.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Names stored under `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Vec<String>> {
        self.groups.get_mut(key)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Vec<String>)> {
        self.groups.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over `(key, names)` pairs in key-string order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of names across all groups.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Append `name` under `key`, creating the group on first use.
    ///
    /// With `dedupe` set, a name already present in the group is not added
    /// again. Returns whether the name was stored.
    pub fn push(&mut self, key: &str, name: &str, dedupe: bool) -> bool {
        let names = self.groups.entry(key.to_string()).or_default();
        if dedupe && names.iter().any(|existing| existing == name) {
            return false;
        }
        names.push(name.to_string());
        true
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Vec<V>)> for GroupedCollection {
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        Self {
            groups: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

/// Default validity filter: rejects the literal `"null"` and names that are
/// empty once surrounding whitespace is trimmed.
pub fn is_valid_name(name: &str) -> bool {
    name != "null" && !name.trim().is_empty()
}

/// Bucket the names of `records` by `listId`.
///
/// A record is skipped when its name is missing or rejected by `is_valid`.
/// Kept names are appended in input order.
pub fn group<F>(records: &[Record], is_valid: F, dedupe: bool) -> GroupedCollection
where
    F: Fn(&str) -> bool,
{
    let mut grouped = GroupedCollection::new();

    for record in records {
        let Some(name) = record.name.as_deref() else {
            continue;
        };
        if !is_valid(name) {
            continue;
        }
        if !grouped.push(&record.list_id, name, dedupe) {
            debug!(list_id = %record.list_id, name, "Dropping duplicate name");
        }
    }

    grouped
}

/// Parse and group a raw payload, recovering from bad input.
///
/// A missing body or a payload that fails to parse yields an empty
/// collection. Use [`parse_records`] with [`group`] to observe the failure.
pub fn group_json(text: Option<&str>, dedupe: bool) -> GroupedCollection {
    let Some(text) = text else {
        debug!("No payload body, nothing to group");
        return GroupedCollection::new();
    };

    match parse_records(text) {
        Ok(records) => group(&records, is_valid_name, dedupe),
        Err(e) => {
            warn!(error = %e, "Discarding unparseable payload");
            GroupedCollection::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(items: &[(u32, Option<&str>)]) -> Vec<Record> {
        items.iter().map(|(id, name)| Record::new(id, *name)).collect()
    }

    #[test]
    fn test_validity_filter() {
        assert!(is_valid_name("Item 1"));
        assert!(is_valid_name(" padded "));
        assert!(is_valid_name("NULL"));
        assert!(!is_valid_name("null"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name(" \t\n"));
    }

    #[test]
    fn test_group_by_list_id() {
        let grouped = group(
            &records(&[(1, Some("a")), (2, Some("b")), (1, Some("c"))]),
            is_valid_name,
            false,
        );
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.get("1").unwrap(), ["a", "c"]);
        assert_eq!(grouped.get("2").unwrap(), ["b"]);
    }

    #[test]
    fn test_group_skips_invalid_names() {
        let grouped = group(
            &records(&[(1, None), (1, Some("null")), (2, Some("  ")), (3, Some("kept"))]),
            is_valid_name,
            false,
        );
        assert_eq!(grouped.len(), 1);
        assert!(grouped.get("1").is_none());
        assert!(grouped.get("2").is_none());
        assert_eq!(grouped.get("3").unwrap(), ["kept"]);
    }

    #[test]
    fn test_group_custom_filter() {
        let grouped = group(
            &records(&[(1, Some("keep me")), (1, Some("drop"))]),
            |name| name.contains(' '),
            false,
        );
        assert_eq!(grouped.get("1").unwrap(), ["keep me"]);
    }

    #[test]
    fn test_dedupe_policy() {
        let input = records(&[(1, Some("x")), (1, Some("x"))]);

        let deduped = group(&input, is_valid_name, true);
        assert_eq!(deduped.get("1").unwrap(), ["x"]);

        let kept = group(&input, is_valid_name, false);
        assert_eq!(kept.get("1").unwrap(), ["x", "x"]);
    }

    #[test]
    fn test_dedupe_is_per_group() {
        let grouped = group(&records(&[(1, Some("x")), (2, Some("x"))]), is_valid_name, true);
        assert_eq!(grouped.total(), 2);
    }

    #[test]
    fn test_group_json_recovers() {
        assert!(group_json(None, false).is_empty());
        assert!(group_json(Some("not json"), false).is_empty());
        assert!(group_json(Some(r#"{"listId": 1}"#), false).is_empty());
    }

    #[test]
    fn test_group_json_example() {
        let grouped = group_json(
            Some(r#"[{"listId":1,"name":"item 2"},{"listId":1,"name":"item 10"},{"listId":2,"name":"foo"}]"#),
            false,
        );
        let expected: GroupedCollection =
            [("1", vec!["item 2", "item 10"]), ("2", vec!["foo"])].into_iter().collect();
        assert_eq!(grouped, expected);
    }

    #[test]
    fn test_serializes_as_object() {
        let grouped: GroupedCollection = [("1", vec!["a"])].into_iter().collect();
        assert_eq!(serde_json::to_string(&grouped).unwrap(), r#"{"1":["a"]}"#);
    }
}
