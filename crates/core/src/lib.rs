//! Core utilities for itemlist tools
//!
//! This crate provides the pieces shared by every other itemlist crate:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with environment overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use itemlist_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("Fetching from {}", config.schema.source.url);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{exit_codes, Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, FailurePolicy, SortMode};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
