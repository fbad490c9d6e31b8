//! Show command - print the flattened list

use super::{load_listing, Context, SourceArgs};
use anyhow::Result;
use itemlist_cli::output::{format_count, format_duration, Status};
use itemlist_fetch::Origin;
use std::time::Instant;

/// Run show command
pub async fn run(ctx: &Context, args: &SourceArgs) -> Result<()> {
    let started = Instant::now();
    let (listing, origin) = load_listing(ctx, args).await?;
    let elapsed = started.elapsed();

    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(&listing.display)?);
        return Ok(());
    }

    for name in &listing.display {
        println!("{name}");
    }

    if !ctx.quiet {
        let summary = format!(
            "{} from {origin} in {}",
            format_count(listing.display.len(), "item", "items"),
            format_duration(elapsed)
        );
        if origin == Origin::Empty {
            Status::warning(&summary);
        } else {
            Status::success(&summary);
        }
    }

    Ok(())
}
