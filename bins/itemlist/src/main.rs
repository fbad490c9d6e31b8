//! itemlist - fetch a JSON item list, group it by list id, and print it in
//! natural order.

use clap::{Parser, Subcommand};
use itemlist_cli::logging::{self, LogConfig, LogFormat};
use itemlist_core::config::Config;
use itemlist_core::exit_codes;
use itemlist_fetch::FetchError;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{Context, OutputFormat, SourceArgs};

/// Fetch, group and naturally sort JSON item lists
#[derive(Parser)]
#[command(name = "itemlist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "ITEMLIST_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the flattened, sorted list of names
    #[command(alias = "list")]
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print names grouped by list id
    Groups {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Compare two names with the natural comparator
    Compare {
        /// First name
        left: String,
        /// Second name
        right: String,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_format = match cli.format {
        OutputFormat::Json => LogFormat::Json,
        OutputFormat::Text => LogFormat::Compact,
    };
    if let Err(e) = logging::init(&LogConfig::from_flags(cli.verbose, cli.quiet).with_format(log_format)) {
        eprintln!("{} {e}", "Warning:".yellow().bold());
    }

    let result = match Config::load(cli.config.as_deref()) {
        Ok(config) => {
            let ctx = Context::new(config, cli.format, cli.quiet);
            match cli.command {
                Commands::Show { source } => commands::show::run(&ctx, &source).await,
                Commands::Groups { source } => commands::groups::run(&ctx, &source).await,
                Commands::Compare { left, right } => commands::compare::run(&ctx, &left, &right),
                Commands::Config => commands::config::run(&ctx),
            }
        }
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> u8 {
    if error.downcast_ref::<FetchError>().is_some() {
        return exit_codes::FETCH_ERROR;
    }
    match error.downcast_ref::<itemlist_core::Error>() {
        Some(e) if e.is_config() => exit_codes::CONFIG_ERROR,
        _ => exit_codes::FAILURE,
    }
}
