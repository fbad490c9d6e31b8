//! Grouped list transformation for itemlist.
//!
//! Turns a JSON array of `{ "id", "listId", "name" }` records into a flat,
//! naturally sorted list of names:
//!
//! 1. [`parse_records`] reads the raw JSON
//! 2. [`group`] buckets valid names by `listId`
//! 3. [`flatten`] sorts each bucket with [`compare`] and concatenates them
//!
//! ```
//! use itemlist_transform::{flatten_all, group_json};
//!
//! let json = r#"[{"listId":1,"name":"item 10"},{"listId":1,"name":"item 2"}]"#;
//! let mut grouped = group_json(Some(json), false);
//! assert_eq!(flatten_all(&mut grouped), vec!["item 2", "item 10"]);
//! ```

mod compare;
mod error;
mod flatten;
mod group;
mod record;
mod sort;
mod transformer;

pub use compare::{compare, natural_cmp, INCONCLUSIVE};
pub use error::{Result, TransformError};
pub use flatten::{flatten, flatten_all, flatten_with, is_visited, sort_unvisited, DisplaySequence};
pub use group::{group, group_json, is_valid_name, GroupedCollection};
pub use itemlist_core::config::SortMode;
pub use record::{parse_records, Record};
pub use sort::merge_sort_by;
pub use transformer::{Listing, TransformOptions, Transformer};
