//! Compare command - show how two names order

use super::Context;
use anyhow::Result;
use itemlist_transform::{compare, natural_cmp};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Serialize)]
struct JsonCompareOutput<'a> {
    left: &'a str,
    right: &'a str,
    compare: i64,
    natural: &'static str,
}

fn describe(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

/// Run compare command
pub fn run(ctx: &Context, left: &str, right: &str) -> Result<()> {
    let value = compare(left, right);
    let natural = describe(natural_cmp(left, right));

    if ctx.is_json() {
        let output = JsonCompareOutput {
            left,
            right,
            compare: value,
            natural,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("compare: {value}");
        println!("natural: {natural}");
    }

    Ok(())
}
