//! Payload loading for itemlist
//!
//! This crate provides the collaborators that hand raw JSON text to the
//! transformer:
//!
//! - **[`Fetcher`]**: HTTP GET of the full response body ([`HttpFetcher`])
//! - **[`AssetLoader`]**: local fallback payloads ([`DirAssetLoader`])
//! - **[`PayloadSource`]**: combines both under an explicit [`FailurePolicy`]
//!
//! # Example
//!
//! ```rust,no_run
//! use itemlist_fetch::{DirAssetLoader, FetchConfig, HttpFetcher, PayloadSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FetchConfig::default();
//!     let source = PayloadSource::new(HttpFetcher::new(&config)?)
//!         .with_assets(DirAssetLoader::new("assets"), "hiring.json");
//!
//!     let payload = source.load(&config.url).await?;
//!     println!("Loaded from {}", payload.origin);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod asset;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod source;

pub use asset::{AssetLoader, DirAssetLoader};
pub use config::FetchConfig;
pub use error::{FetchError, FetchResult};
pub use fetcher::{Fetcher, HttpFetcher};
pub use itemlist_core::config::FailurePolicy;
pub use source::{Origin, Payload, PayloadSource};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::asset::{AssetLoader, DirAssetLoader};
    pub use crate::config::FetchConfig;
    pub use crate::error::{FetchError, FetchResult};
    pub use crate::fetcher::{Fetcher, HttpFetcher};
    pub use crate::source::{Origin, Payload, PayloadSource};
    pub use itemlist_core::config::FailurePolicy;
}
