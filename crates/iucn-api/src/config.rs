use std::env;
use std::time::Duration;

use crate::error::{RedListError, Result};

/// Default base URL for the Red List API v3
pub const DEFAULT_BASE_URL: &str = "https://apiv3.iucnredlist.org/api/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Red List client configuration
#[derive(Debug, Clone)]
pub struct RedListConfig {
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl RedListConfig {
    /// Configuration with the default base URL and timeout
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Parse configuration from environment variables
    ///
    /// `IUCN_REDLIST_KEY` is required. `IUCN_REDLIST_URL` and
    /// `IUCN_REDLIST_TIMEOUT_SECS` override the defaults.
    pub fn from_env() -> Result<Self> {
        let token = env::var("IUCN_REDLIST_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(RedListError::MissingKey)?;

        let base_url = env::var("IUCN_REDLIST_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("IUCN_REDLIST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            token,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
