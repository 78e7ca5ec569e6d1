//! Tabular form of an identifier vector
//!
//! Columns: `ids`, `class`, `name`, `match`, `uri`. Converting a vector to a
//! table and back is exact for entries that carry no search candidates.

use serde::{Deserialize, Serialize};

use crate::error::{IucnError, Result};
use crate::types::{IucnIds, MatchReason, ResolvedTaxon, TaxonId, IUCN_CLASS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IucnRow {
    pub ids: Vec<TaxonId>,
    pub class: String,
    pub name: Option<String>,
    #[serde(rename = "match")]
    pub match_reason: MatchReason,
    pub uri: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IucnTable {
    pub rows: Vec<IucnRow>,
}

impl IucnTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| IucnError::InvalidInput(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| IucnError::InvalidInput(e.to_string()))
    }
}

impl IucnIds {
    pub fn to_table(&self) -> IucnTable {
        let rows = self
            .iter()
            .map(|t| IucnRow {
                ids: t.ids.clone(),
                class: IUCN_CLASS.to_string(),
                name: t.name.clone(),
                match_reason: t.match_reason,
                uri: t.uris.clone(),
            })
            .collect();
        IucnTable { rows }
    }
}

impl TryFrom<IucnTable> for IucnIds {
    type Error = IucnError;

    fn try_from(table: IucnTable) -> Result<Self> {
        table
            .rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                if row.class != IUCN_CLASS {
                    return Err(IucnError::InvalidInput(format!(
                        "row {i} has class '{}', expected '{IUCN_CLASS}'",
                        row.class
                    )));
                }
                if row.uri.len() != row.ids.len() {
                    return Err(IucnError::InvalidInput(format!(
                        "row {i} has {} ids but {} uris",
                        row.ids.len(),
                        row.uri.len()
                    )));
                }
                if row.match_reason == MatchReason::NotFound && !row.ids.is_empty() {
                    return Err(IucnError::InvalidInput(format!(
                        "row {i} is marked '{}' but carries ids",
                        MatchReason::NotFound
                    )));
                }
                Ok(ResolvedTaxon {
                    ids: row.ids,
                    name: row.name,
                    match_reason: row.match_reason,
                    uris: row.uri,
                    candidates: Vec::new(),
                })
            })
            .collect()
    }
}
