//! Red List API HTTP client

use tracing::debug;

use crate::config::RedListConfig;
use crate::error::{RedListError, Result};
use crate::types::*;

/// Client for the IUCN Red List API v3
///
/// Every species request carries the API token as the `token` query
/// parameter. Requests are issued one at a time by the caller; the client
/// holds no cache and never retries.
pub struct RedListClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RedListClient {
    /// Base URL of the public species detail pages
    pub const DETAIL_BASE_URL: &'static str = "http://www.iucnredlist.org/details";

    /// Create a client for `token` with default settings (30 second timeout)
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(RedListConfig::new(token))
    }

    /// Create a client from `IUCN_REDLIST_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(RedListConfig::from_env()?)
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: RedListConfig) -> Result<Self> {
        if config.token.trim().is_empty() {
            return Err(RedListError::MissingKey);
        }

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            token: config.token,
        })
    }

    /// Detail page URL for a taxon id: `http://www.iucnredlist.org/details/{id}/0`
    pub fn detail_url(id: &str) -> String {
        format!("{}/{}/0", Self::DETAIL_BASE_URL, id)
    }

    /// Search species by name
    ///
    /// # Arguments
    /// * `name` - Scientific name, matched by the API as a literal string
    pub async fn search_name(&self, name: &str) -> Result<Vec<SpeciesRecord>> {
        let url = format!(
            "{}/species/{}?token={}",
            self.base_url,
            urlencoding::encode(name),
            urlencoding::encode(&self.token)
        );
        debug!(name, "Red List species search");
        self.fetch_species(&url).await
    }

    /// Get species records by Red List taxon id
    ///
    /// # Arguments
    /// * `id` - The Red List taxon id
    pub async fn search_id(&self, id: u64) -> Result<Vec<SpeciesRecord>> {
        let url = format!(
            "{}/species/id/{}?token={}",
            self.base_url,
            id,
            urlencoding::encode(&self.token)
        );
        debug!(id, "Red List id lookup");
        self.fetch_species(&url).await
    }

    /// Probe a URL with a `HEAD` request; any success status means the
    /// resource exists
    pub async fn url_exists(&self, url: &str) -> Result<bool> {
        let response = self.http.head(url).send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "Red List existence probe");
        Ok(status.is_success())
    }

    async fn fetch_species(&self, url: &str) -> Result<Vec<SpeciesRecord>> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(RedListError::Api(format!(
                "Red List returned status {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response.json().await?;
        let data = SpeciesResponse::from_json(body);

        if data.result.is_empty() {
            if let Some(message) = data.message {
                return Err(RedListError::Api(message));
            }
        }

        Ok(data.result)
    }
}
