//! Error types for payload loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Payload loading errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local asset could not be read
    #[error("Failed to read asset {path}: {source}")]
    Asset {
        /// Resolved asset path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Asset name would escape the asset directory
    #[error("Invalid asset name: {0}")]
    InvalidAssetName(String),

    /// Network fetch failed and the fallback asset did too
    #[error("Fetch failed ({fetch}) and fallback asset failed ({fallback})")]
    FallbackFailed {
        /// Error from the network fetch
        fetch: Box<FetchError>,
        /// Error from the asset loader
        fallback: Box<FetchError>,
    },
}

impl FetchError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a status error
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Check if this error came from the network side
    #[must_use]
    pub fn is_network(&self) -> bool {
        match self {
            Self::Request(_) | Self::Status { .. } => true,
            Self::FallbackFailed { fetch, .. } => fetch.is_network(),
            Self::InvalidUrl(_)
            | Self::Config(_)
            | Self::Asset { .. }
            | Self::InvalidAssetName(_) => false,
        }
    }
}
