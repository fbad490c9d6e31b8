//! Fetching with an explicit failure policy

use crate::asset::AssetLoader;
use crate::error::{FetchError, FetchResult};
use crate::fetcher::Fetcher;
use itemlist_core::config::FailurePolicy;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Where a payload body came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Fetched over HTTP
    Network,
    /// Read from the bundled asset
    Asset,
    /// Read from a file named by the caller
    File,
    /// Nothing was loaded
    Empty,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Network => "network",
            Self::Asset => "asset",
            Self::File => "file",
            Self::Empty => "nothing",
        })
    }
}

/// Raw payload handed to the transformer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Body text, `None` when nothing could be loaded
    pub body: Option<String>,
    /// Where the body came from
    pub origin: Origin,
}

impl Payload {
    fn new(body: String, origin: Origin) -> Self {
        Self {
            body: Some(body),
            origin,
        }
    }

    fn empty() -> Self {
        Self {
            body: None,
            origin: Origin::Empty,
        }
    }
}

/// A fetcher plus optional fallback asset, governed by a [`FailurePolicy`]
pub struct PayloadSource {
    fetcher: Box<dyn Fetcher>,
    assets: Option<(Box<dyn AssetLoader>, String)>,
    policy: FailurePolicy,
}

impl PayloadSource {
    /// Create a source with the default policy and no fallback asset
    pub fn new(fetcher: impl Fetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            assets: None,
            policy: FailurePolicy::default(),
        }
    }

    /// Builder-style method to set the fallback asset
    #[must_use]
    pub fn with_assets(
        mut self,
        loader: impl AssetLoader + 'static,
        asset_name: impl Into<String>,
    ) -> Self {
        self.assets = Some((Box::new(loader), asset_name.into()));
        self
    }

    /// Builder-style method to set the failure policy
    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active failure policy
    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Fetch `url`, applying the failure policy when the fetch fails
    ///
    /// - [`FailurePolicy::Fallback`]: read the asset; if that fails too the
    ///   result is [`FetchError::FallbackFailed`]
    /// - [`FailurePolicy::Propagate`]: return the fetch error
    /// - [`FailurePolicy::LogOnly`]: return an empty payload
    pub async fn load(&self, url: &str) -> FetchResult<Payload> {
        let error = match self.fetcher.fetch(url).await {
            Ok(body) => return Ok(Payload::new(body, Origin::Network)),
            Err(e) => e,
        };

        match self.policy {
            FailurePolicy::Propagate => Err(error),
            FailurePolicy::LogOnly => {
                warn!(url, error = %error, "Fetch failed, continuing without records");
                Ok(Payload::empty())
            }
            FailurePolicy::Fallback => {
                warn!(url, error = %error, "Fetch failed, loading from assets");
                self.load_asset().map_err(|fallback| FetchError::FallbackFailed {
                    fetch: Box::new(error),
                    fallback: Box::new(fallback),
                })
            }
        }
    }

    /// Read the fallback asset without touching the network
    pub fn load_asset(&self) -> FetchResult<Payload> {
        let (loader, name) = self
            .assets
            .as_ref()
            .ok_or_else(|| FetchError::config("no fallback asset configured"))?;
        loader
            .load(name)
            .map(|body| Payload::new(body, Origin::Asset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StaticFetcher {
        result: Result<String, u16>,
        calls: Arc<AtomicUsize>,
    }

    impl StaticFetcher {
        fn ok(body: &str) -> Self {
            Self { result: Ok(body.to_string()), calls: Arc::default() }
        }

        fn failing(status: u16) -> Self {
            Self { result: Err(status), calls: Arc::default() }
        }
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> FetchResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .clone()
                .map_err(|status| FetchError::status(status, "unavailable"))
        }
    }

    struct MemoryAssets(HashMap<&'static str, &'static str>);

    impl AssetLoader for MemoryAssets {
        fn load(&self, name: &str) -> FetchResult<String> {
            self.0
                .get(name)
                .map(|body| (*body).to_string())
                .ok_or_else(|| FetchError::InvalidAssetName(name.to_string()))
        }
    }

    fn bundled() -> MemoryAssets {
        MemoryAssets(HashMap::from([("hiring.json", "[]")]))
    }

    const URL: &str = "https://example.com/hiring.json";

    #[tokio::test]
    async fn test_network_success_skips_policy() {
        let source = PayloadSource::new(StaticFetcher::ok("[1]"))
            .with_assets(bundled(), "hiring.json")
            .with_policy(FailurePolicy::Propagate);

        let payload = source.load(URL).await.unwrap();
        assert_eq!(payload.origin, Origin::Network);
        assert_eq!(payload.body.as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn test_fallback_policy_uses_asset() {
        let source = PayloadSource::new(StaticFetcher::failing(503)).with_assets(bundled(), "hiring.json");
        assert_eq!(source.policy(), FailurePolicy::Fallback);

        let payload = source.load(URL).await.unwrap();
        assert_eq!(payload, Payload { body: Some("[]".into()), origin: Origin::Asset });
    }

    #[tokio::test]
    async fn test_fallback_without_asset_reports_both_errors() {
        let source = PayloadSource::new(StaticFetcher::failing(500));
        let err = source.load(URL).await.unwrap_err();

        match err {
            FetchError::FallbackFailed { fetch, fallback } => {
                assert!(matches!(*fetch, FetchError::Status { status: 500, .. }));
                assert!(matches!(*fallback, FetchError::Config(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fallback_with_missing_asset() {
        let source = PayloadSource::new(StaticFetcher::failing(500)).with_assets(bundled(), "other.json");
        assert!(matches!(source.load(URL).await, Err(FetchError::FallbackFailed { .. })));
    }

    #[tokio::test]
    async fn test_propagate_policy() {
        let source = PayloadSource::new(StaticFetcher::failing(404))
            .with_assets(bundled(), "hiring.json")
            .with_policy(FailurePolicy::Propagate);

        let err = source.load(URL).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_log_only_policy_yields_no_body() {
        let source = PayloadSource::new(StaticFetcher::failing(502)).with_policy(FailurePolicy::LogOnly);
        let payload = source.load(URL).await.unwrap();
        assert_eq!(payload.origin, Origin::Empty);
        assert!(payload.body.is_none());
    }

    #[tokio::test]
    async fn test_single_attempt_per_load() {
        let fetcher = StaticFetcher::failing(503);
        let calls = Arc::clone(&fetcher.calls);
        let source = PayloadSource::new(fetcher).with_policy(FailurePolicy::LogOnly);

        source.load(URL).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_load_asset_directly() {
        let source = PayloadSource::new(StaticFetcher::ok("unused")).with_assets(bundled(), "hiring.json");
        assert_eq!(source.load_asset().unwrap().origin, Origin::Asset);
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(Origin::Network.to_string(), "network");
        assert_eq!(Origin::Empty.to_string(), "nothing");
        assert_eq!(Origin::File.to_string(), "file");
    }
}
