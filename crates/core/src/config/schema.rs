//! Configuration schema definitions
//!
//! Shared configuration types for the fetch, fallback and transform stages.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default payload location
pub const DEFAULT_SOURCE_URL: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub fallback: FallbackConfig,

    #[serde(default)]
    pub transform: TransformConfig,
}

/// Where the payload is fetched from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// URL of the JSON array
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("itemlist/", env!("CARGO_PKG_VERSION")).to_string()
}

/// What happens when the network fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Load the bundled asset instead
    #[default]
    Fallback,
    /// Return the fetch error to the caller
    Propagate,
    /// Log the failure and continue with no records
    LogOnly,
}

impl FromStr for FailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fallback" | "asset" => Ok(Self::Fallback),
            "propagate" | "fail" => Ok(Self::Propagate),
            "log-only" | "log" | "ignore" => Ok(Self::LogOnly),
            other => Err(Error::invalid_config_value("fallback.policy", other)
                .with_suggestion("Use one of: fallback, propagate, log-only")),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fallback => "fallback",
            Self::Propagate => "propagate",
            Self::LogOnly => "log-only",
        })
    }
}

/// Local asset used when the network is unavailable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallbackConfig {
    /// Failure policy
    #[serde(default)]
    pub policy: FailurePolicy,

    /// Directory holding bundled assets
    #[serde(default = "default_asset_dir")]
    pub asset_dir: String,

    /// File name of the fallback payload inside `asset_dir`
    #[serde(default = "default_asset_name")]
    pub asset_name: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            policy: FailurePolicy::default(),
            asset_dir: default_asset_dir(),
            asset_name: default_asset_name(),
        }
    }
}

fn default_asset_dir() -> String {
    "assets".to_string()
}

fn default_asset_name() -> String {
    "hiring.json".to_string()
}

/// Comparator used when sorting each group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Token comparator that never reports equality
    #[default]
    Compatible,
    /// Corrected three-way token comparator
    ThreeWay,
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compatible" | "compat" => Ok(Self::Compatible),
            "three-way" | "threeway" | "strict" => Ok(Self::ThreeWay),
            other => Err(Error::invalid_config_value("transform.sort", other)
                .with_suggestion("Use one of: compatible, three-way")),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Compatible => "compatible",
            Self::ThreeWay => "three-way",
        })
    }
}

/// Grouping and sorting options
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TransformConfig {
    /// Drop repeated names within a group
    #[serde(default)]
    pub dedupe: bool,

    /// Comparator selection
    #[serde(default)]
    pub sort: SortMode,
}
