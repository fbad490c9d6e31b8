//! Groups command - print names per list id

use super::{load_listing, Context, SourceArgs};
use anyhow::Result;
use itemlist_cli::output::{group_header, Status};
use itemlist_transform::is_visited;
use serde::Serialize;

/// JSON output for the grouped view
#[derive(Debug, Serialize)]
struct JsonGroupsOutput<'a> {
    total: usize,
    groups: Vec<JsonGroup<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonGroup<'a> {
    key: &'a str,
    displayed: bool,
    names: &'a [String],
}

/// Numeric keys first in numeric order, then anything else by string
fn ordered_keys<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut keys: Vec<&str> = keys.collect();
    keys.sort_by_key(|key| (key.parse::<u64>().unwrap_or(u64::MAX), *key));
    keys
}

/// Run groups command
pub async fn run(ctx: &Context, args: &SourceArgs) -> Result<()> {
    let (listing, _) = load_listing(ctx, args).await?;
    let grouped = &listing.grouped;
    let count = grouped.len();
    let keys = ordered_keys(grouped.iter().map(|(key, _)| key));

    if ctx.is_json() {
        let output = JsonGroupsOutput {
            total: grouped.total(),
            groups: keys
                .iter()
                .filter_map(|&key| {
                    grouped.get(key).map(|names| JsonGroup {
                        key,
                        displayed: is_visited(key, count),
                        names,
                    })
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for key in keys {
        let Some(names) = grouped.get(key) else {
            continue;
        };
        println!("{}", group_header(key, names.len()));
        for name in names {
            println!("  {name}");
        }
        if !is_visited(key, count) && !ctx.quiet {
            Status::warning(&format!(
                "List {key} is outside 1..={count} and is not part of the flat listing"
            ));
        }
    }

    Ok(())
}
