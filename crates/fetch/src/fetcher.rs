//! HTTP payload fetching

use crate::config::FetchConfig;
use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, Span};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Source of raw payload text
///
/// Implementations return the complete body or fail; there is no partial
/// result.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the body at `url` as text
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}

/// `reqwest`-backed fetcher performing a single GET per call
///
/// Each request carries a fresh `X-Request-ID`. Failures are returned as-is;
/// retrying is left to the caller.
#[derive(Clone)]
pub struct HttpFetcher {
    inner: Client,
    config: Arc<FetchConfig>,
}

impl HttpFetcher {
    /// Create a fetcher with the given configuration
    pub fn new(config: &FetchConfig) -> FetchResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| FetchError::config("user_agent is not a valid header value"))?;
        default_headers.insert(USER_AGENT, user_agent);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            inner,
            config: Arc::new(config.clone()),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    #[instrument(skip(self), fields(request_id))]
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let response = self
            .inner
            .get(url.clone())
            .header(X_REQUEST_ID, &request_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Request failed");
            return Err(FetchError::status(status.as_u16(), body));
        }

        let body = response.text().await?;
        info!(
            url = %url,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Fetched payload"
        );
        Ok(body)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.get_text(url).await
    }
}
