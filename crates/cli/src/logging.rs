//! Structured logging setup
//!
//! Logs go to stderr through `tracing-subscriber`. `RUST_LOG` takes
//! precedence over the configured level.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log line layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact human-readable lines
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default filter directive, e.g. `warn` or `itemlist=debug`
    pub level: String,
    /// Line layout
    pub format: LogFormat,
    /// Include the event target
    pub show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            show_target: false,
        }
    }
}

impl LogConfig {
    /// Pick a level from the usual `--verbose` / `--quiet` flags
    #[must_use]
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        let level = if quiet {
            "error"
        } else if verbose {
            "debug"
        } else {
            "warn"
        };
        Self {
            level: level.to_string(),
            show_target: verbose,
            ..Self::default()
        }
    }

    /// Builder-style method to set the line layout
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Install the global subscriber
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(config.filter());

    let result = match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {e}"))
}
