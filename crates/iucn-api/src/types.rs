//! Data types for Red List API responses
//!
//! These structs mirror the API v3 species payloads. Not every field is used
//! by the resolver but they are kept so callers can read them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A species record from `/species/{name}` or `/species/id/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesRecord {
    /// The API returns the taxon id as either a string or a number
    #[serde(deserialize_with = "deserialize_taxon_id")]
    pub taxonid: u64,
    pub scientific_name: Option<String>,
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub class: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub main_common_name: Option<String>,
    pub authority: Option<String>,
    pub published_year: Option<u32>,
    pub category: Option<String>,
    pub criteria: Option<String>,
}

/// Envelope shared by the species endpoints
#[derive(Debug, Clone, Default)]
pub struct SpeciesResponse {
    /// Error text the API sends instead of a result (e.g. bad token)
    pub message: Option<String>,
    pub result: Vec<SpeciesRecord>,
}

impl SpeciesResponse {
    /// Build from a raw JSON body. A missing or non-list `result` is treated
    /// as an empty result set; records that fail to parse are skipped.
    pub fn from_json(body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .map(|m| m.to_string());

        let result = match body.get("result") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    match serde_json::from_value::<SpeciesRecord>(item.clone()) {
                        Ok(record) => Some(record),
                        Err(e) => {
                            warn!(index = i, error = %e, "Skipping malformed Red List record");
                            None
                        }
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        Self { message, result }
    }
}

/// Helper to deserialize a taxon id that can be either string or number
fn deserialize_taxon_id<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct TaxonIdVisitor;

    impl<'de> Visitor<'de> for TaxonIdVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or integer taxon id")
        }

        fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(v).map_err(de::Error::custom)
        }

        fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.trim().parse::<u64>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(TaxonIdVisitor)
}
