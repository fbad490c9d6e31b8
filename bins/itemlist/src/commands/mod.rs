//! CLI command implementations

pub mod compare;
pub mod config;
pub mod groups;
pub mod show;

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use itemlist_cli::progress;
use itemlist_core::config::{validate, Config, ConfigSchema, FailurePolicy, SortMode};
use itemlist_fetch::{DirAssetLoader, FetchConfig, HttpFetcher, Origin, Payload, PayloadSource};
use itemlist_transform::{Listing, TransformOptions, Transformer};
use std::path::PathBuf;
use tracing::debug;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Shared state handed to every command
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    pub fn new(config: Config, format: OutputFormat, quiet: bool) -> Self {
        Self {
            config,
            format,
            quiet,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Flags selecting where the payload comes from and how it is transformed
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Payload URL (overrides configuration)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Read a local JSON file instead of fetching
    #[arg(short, long, conflicts_with_all = ["url", "offline"])]
    pub input: Option<PathBuf>,

    /// Skip the network and read the bundled asset
    #[arg(long)]
    pub offline: bool,

    /// What to do when the fetch fails
    #[arg(long)]
    pub policy: Option<FailurePolicy>,

    /// Directory holding the fallback asset
    #[arg(long)]
    pub asset_dir: Option<String>,

    /// Drop repeated names within a group
    #[arg(long)]
    pub dedupe: bool,

    /// Comparator used when sorting groups
    #[arg(long)]
    pub sort: Option<SortMode>,

    /// Fail on malformed payloads instead of showing an empty list
    #[arg(long)]
    pub strict: bool,
}

impl SourceArgs {
    /// Configuration with command-line overrides applied
    pub fn effective(&self, base: &ConfigSchema) -> itemlist_core::Result<ConfigSchema> {
        let mut schema = base.clone();
        if let Some(url) = &self.url {
            schema.source.url.clone_from(url);
        }
        if let Some(policy) = self.policy {
            schema.fallback.policy = policy;
        }
        if let Some(dir) = &self.asset_dir {
            schema.fallback.asset_dir.clone_from(dir);
        }
        if self.dedupe {
            schema.transform.dedupe = true;
        }
        if let Some(sort) = self.sort {
            schema.transform.sort = sort;
        }
        validate(&schema)?;
        Ok(schema)
    }
}

/// Load the payload and run it through the transformer
pub async fn load_listing(ctx: &Context, args: &SourceArgs) -> Result<(Listing, Origin)> {
    let schema = args.effective(&ctx.config.schema)?;
    let payload = load_payload(ctx, args, &schema).await?;
    debug!(origin = %payload.origin, "Payload ready");

    let transformer = Transformer::new(TransformOptions::from(&schema.transform));
    let listing = match (&payload.body, args.strict) {
        (Some(body), true) => transformer
            .run_strict(body)
            .context("Payload is not a valid record list")?,
        (body, _) => transformer.run(body.as_deref()),
    };

    Ok((listing, payload.origin))
}

async fn load_payload(ctx: &Context, args: &SourceArgs, schema: &ConfigSchema) -> Result<Payload> {
    if let Some(path) = &args.input {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(Payload {
            body: Some(body),
            origin: Origin::File,
        });
    }

    let fetch_config = FetchConfig::from(&schema.source);
    let source = PayloadSource::new(HttpFetcher::new(&fetch_config)?)
        .with_assets(
            DirAssetLoader::new(&schema.fallback.asset_dir),
            &schema.fallback.asset_name,
        )
        .with_policy(schema.fallback.policy);

    if args.offline {
        return Ok(source.load_asset()?);
    }

    let pb = if ctx.quiet || ctx.is_json() {
        progress::hidden()
    } else {
        progress::spinner(&format!("Fetching {}", fetch_config.url))
    };

    match source.load(&fetch_config.url).await {
        Ok(payload) => {
            progress::finish_success(&pb, &format!("Loaded from {}", payload.origin));
            Ok(payload)
        }
        Err(e) => {
            progress::finish_error(&pb, "Fetch failed");
            Err(e.into())
        }
    }
}
