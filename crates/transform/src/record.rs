//! Record parsing.

use crate::error::{Result, TransformError};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// One entry of the payload array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Source identifier, carried but unused by grouping
    pub id: Option<i64>,
    /// Group key in string form (`1` for the JSON number `1`)
    #[serde(rename = "listId")]
    pub list_id: String,
    /// Display name; `None` when absent or JSON `null`
    pub name: Option<String>,
}

impl Record {
    /// Build a record directly, mostly useful in tests and callers that
    /// already hold typed data.
    pub fn new(list_id: impl ToString, name: Option<&str>) -> Self {
        Self {
            id: None,
            list_id: list_id.to_string(),
            name: name.map(str::to_string),
        }
    }

    fn from_value(index: usize, value: &Value) -> Option<Self> {
        let Some(object) = value.as_object() else {
            debug!(index, "Skipping non-object element");
            return None;
        };

        let list_id = match object.get("listId") {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => {
                debug!(index, "Skipping element without a usable listId");
                return None;
            }
        };

        let name = match object.get("name") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        Some(Self {
            id: object.get("id").and_then(Value::as_i64),
            list_id,
            name,
        })
    }
}

/// Parse a JSON array of records.
///
/// The top level must be an array. Elements that are not objects or carry no
/// `listId` are skipped rather than failing the whole payload.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(text)?;

    let Value::Array(items) = value else {
        return Err(TransformError::NotAnArray(kind_of(&value)));
    };

    Ok(items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| Record::from_value(index, item))
        .collect())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_list_id() {
        let records = parse_records(r#"[{"id": 755, "listId": 2, "name": "Item 755"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(755));
        assert_eq!(records[0].list_id, "2");
        assert_eq!(records[0].name.as_deref(), Some("Item 755"));
    }

    #[test]
    fn test_parse_string_list_id() {
        let records = parse_records(r#"[{"listId": "4", "name": "x"}]"#).unwrap();
        assert_eq!(records[0].list_id, "4");
    }

    #[test]
    fn test_null_and_missing_names() {
        let records = parse_records(
            r#"[{"id": 1, "listId": 1, "name": null}, {"id": 2, "listId": 1}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.name.is_none()));
    }

    #[test]
    fn test_skips_unusable_elements() {
        let records = parse_records(r#"[1, "two", {"name": "no key"}, {"listId": 3, "name": "ok"}]"#)
            .unwrap();
        assert_eq!(records, vec![Record { id: None, list_id: "3".into(), name: Some("ok".into()) }]);
    }

    #[test]
    fn test_non_array_top_level() {
        let err = parse_records(r#"{"listId": 1}"#).unwrap_err();
        assert!(matches!(err, TransformError::NotAnArray("an object")));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_records("[{"), Err(TransformError::Json(_))));
    }
}
