//! Config command - print the effective configuration

use super::Context;
use anyhow::Result;

/// Run config command
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(&ctx.config.schema)?);
        return Ok(());
    }

    match &ctx.config.path {
        Some(path) => println!("# loaded from {}", path.display()),
        None => println!("# no configuration file found, using defaults"),
    }
    print!("{}", toml::to_string_pretty(&ctx.config.schema)?);
    Ok(())
}
