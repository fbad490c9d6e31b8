//! Configured end-to-end transformation.

use crate::error::Result;
use crate::flatten::{flatten_with, sort_unvisited, DisplaySequence};
use crate::group::{group, group_json, is_valid_name, GroupedCollection};
use crate::record::parse_records;
use itemlist_core::config::{SortMode, TransformConfig};
use serde::Serialize;
use tracing::debug;

/// Grouping and sorting options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Drop repeated names within a group
    pub dedupe: bool,
    /// Comparator used for each group
    pub sort: SortMode,
}

impl From<&TransformConfig> for TransformOptions {
    fn from(config: &TransformConfig) -> Self {
        Self {
            dedupe: config.dedupe,
            sort: config.sort,
        }
    }
}

/// Result of one transformation: sorted groups plus the flat display list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub grouped: GroupedCollection,
    pub display: DisplaySequence,
}

/// Parses, groups and flattens payloads with fixed options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transformer {
    options: TransformOptions,
}

impl Transformer {
    pub fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> TransformOptions {
        self.options
    }

    /// Transform a payload, treating a missing or unparseable body as empty.
    pub fn run(&self, text: Option<&str>) -> Listing {
        self.finish(group_json(text, self.options.dedupe))
    }

    /// Transform a payload, returning parse failures to the caller.
    pub fn run_strict(&self, text: &str) -> Result<Listing> {
        let records = parse_records(text)?;
        Ok(self.finish(group(&records, is_valid_name, self.options.dedupe)))
    }

    fn finish(&self, mut grouped: GroupedCollection) -> Listing {
        let max_key = grouped.len();
        let display = flatten_with(&mut grouped, max_key, self.options.sort);
        sort_unvisited(&mut grouped, max_key, self.options.sort);
        let names = display.len();
        debug!(
            groups = max_key,
            names,
            sort = %self.options.sort,
            "Transformed payload"
        );
        Listing { grouped, display }
    }
}
