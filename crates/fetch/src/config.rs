//! Configuration for the HTTP fetcher

use crate::error::{FetchError, FetchResult};
use itemlist_core::config::{SourceConfig, DEFAULT_SOURCE_URL};
use std::time::Duration;

/// Fetcher configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Payload URL
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent header value
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from(&SourceConfig::default())
    }
}

impl From<&SourceConfig> for FetchConfig {
    fn from(source: &SourceConfig) -> Self {
        Self {
            url: source.url.clone(),
            timeout: Duration::from_secs(source.timeout_secs),
            user_agent: source.user_agent.clone(),
        }
    }
}

impl FetchConfig {
    /// Builder-style method to set the URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Whether the URL is the stock payload location
    #[must_use]
    pub fn is_default_url(&self) -> bool {
        self.url == DEFAULT_SOURCE_URL
    }

    /// Validate the configuration
    pub fn validate(&self) -> FetchResult<()> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(FetchError::InvalidUrl(self.url.clone()));
        }

        if self.timeout.is_zero() {
            return Err(FetchError::config("timeout cannot be zero"));
        }

        if self.user_agent.is_empty() {
            return Err(FetchError::config("user_agent cannot be empty"));
        }

        Ok(())
    }
}
