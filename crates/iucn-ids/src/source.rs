//! Remote collaborators: name/id search and detail page existence checks

use async_trait::async_trait;
use iucn_api::{RedListClient, RedListConfig};

use crate::error::Result;
use crate::types::{TaxonId, TaxonRecord};

/// Searches the Red List for taxon records
#[async_trait]
pub trait TaxonSearch: Send + Sync {
    /// Records whose name matches `name` as the service sees it
    async fn search_name(&self, name: &str) -> Result<Vec<TaxonRecord>>;

    /// Records for a taxon id
    async fn search_id(&self, id: &TaxonId) -> Result<Vec<TaxonRecord>>;
}

/// Tells whether a resource URL resolves
#[async_trait]
pub trait ExistenceCheck: Send + Sync {
    async fn exists(&self, url: &str) -> Result<bool>;
}

/// Both collaborators backed by the live Red List API
pub struct RedListSource {
    client: RedListClient,
}

impl RedListSource {
    pub fn new(client: RedListClient) -> Self {
        Self { client }
    }

    /// Build from `IUCN_REDLIST_*` environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(RedListClient::from_env()?))
    }

    pub fn with_config(config: RedListConfig) -> Result<Self> {
        Ok(Self::new(RedListClient::with_config(config)?))
    }
}

#[async_trait]
impl TaxonSearch for RedListSource {
    async fn search_name(&self, name: &str) -> Result<Vec<TaxonRecord>> {
        let records = self.client.search_name(name).await?;
        Ok(records.into_iter().map(TaxonRecord::from).collect())
    }

    async fn search_id(&self, id: &TaxonId) -> Result<Vec<TaxonRecord>> {
        // Red List ids are numeric; anything else cannot exist
        let Ok(numeric) = id.as_str().parse::<u64>() else {
            return Ok(Vec::new());
        };
        let records = self.client.search_id(numeric).await?;
        Ok(records.into_iter().map(TaxonRecord::from).collect())
    }
}

#[async_trait]
impl ExistenceCheck for RedListSource {
    async fn exists(&self, url: &str) -> Result<bool> {
        Ok(self.client.url_exists(url).await?)
    }
}

#[async_trait]
impl<T: TaxonSearch + ?Sized> TaxonSearch for std::sync::Arc<T> {
    async fn search_name(&self, name: &str) -> Result<Vec<TaxonRecord>> {
        (**self).search_name(name).await
    }

    async fn search_id(&self, id: &TaxonId) -> Result<Vec<TaxonRecord>> {
        (**self).search_id(id).await
    }
}

#[async_trait]
impl<T: ExistenceCheck + ?Sized> ExistenceCheck for std::sync::Arc<T> {
    async fn exists(&self, url: &str) -> Result<bool> {
        (**self).exists(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_numeric_id_has_no_records() {
        let source = RedListSource::new(RedListClient::new("test-key").unwrap());
        let records = source.search_id(&TaxonId::from("abc")).await.unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_projection_from_species_record() {
        let record: iucn_api::SpeciesRecord = serde_json::from_value(serde_json::json!({
            "taxonid": 4616,
            "scientific_name": "Branta canadensis",
            "kingdom": "ANIMALIA",
            "phylum": "CHORDATA",
            "class": "AVES",
            "order": "ANSERIFORMES",
            "family": "ANATIDAE",
            "genus": "Branta",
            "authority": "(Linnaeus, 1758)",
            "category": "LC"
        }))
        .unwrap();

        let projected = TaxonRecord::from(record);
        assert_eq!(projected.id, TaxonId::from("4616"));
        assert_eq!(projected.order.as_deref(), Some("ANSERIFORMES"));
        assert_eq!(projected.authority.as_deref(), Some("(Linnaeus, 1758)"));
    }
}
