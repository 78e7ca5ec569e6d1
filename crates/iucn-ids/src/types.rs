//! Identifier vector types

use std::fmt;
use std::str::FromStr;

use iucn_api::RedListClient;
use serde::{Deserialize, Serialize};

/// Class marker carried by every identifier vector and table row
pub const IUCN_CLASS: &str = "iucn";

/// Detail page URI for a taxon id
pub fn detail_uri(id: &TaxonId) -> String {
    RedListClient::detail_url(id.as_str())
}

/// A Red List taxon id in its string form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonId(String);

impl TaxonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for TaxonId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for TaxonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaxonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Why an entry has (or lacks) an id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchReason {
    #[serde(rename = "found")]
    Found,
    #[serde(rename = "not found")]
    NotFound,
    #[serde(rename = "NA due to ask=FALSE")]
    NaDueToAsk,
    /// Id was taken as given, without asking the Red List
    #[serde(rename = "unchecked")]
    Unchecked,
}

impl MatchReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NotFound => "not found",
            Self::NaDueToAsk => "NA due to ask=FALSE",
            Self::Unchecked => "unchecked",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "found" => Ok(Self::Found),
            "not found" => Ok(Self::NotFound),
            "NA due to ask=FALSE" => Ok(Self::NaDueToAsk),
            "unchecked" => Ok(Self::Unchecked),
            other => Err(format!("unknown match reason: {other}")),
        }
    }
}

/// Search record projected to the columns downstream consumers rely on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonRecord {
    pub id: TaxonId,
    pub scientific_name: Option<String>,
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub authority: Option<String>,
}

impl From<iucn_api::SpeciesRecord> for TaxonRecord {
    fn from(r: iucn_api::SpeciesRecord) -> Self {
        Self {
            id: TaxonId::from(r.taxonid),
            scientific_name: r.scientific_name,
            kingdom: r.kingdom,
            phylum: r.phylum,
            order: r.order,
            family: r.family,
            genus: r.genus,
            authority: r.authority,
        }
    }
}

/// One entry of an identifier vector
///
/// `ids` is empty when nothing was found. A search without a direct match
/// can yield several ids; they stay together in the one entry, with one URI
/// per id.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTaxon {
    pub ids: Vec<TaxonId>,
    pub name: Option<String>,
    pub match_reason: MatchReason,
    pub uris: Vec<String>,
    /// Projected records of the search that produced this entry
    pub candidates: Vec<TaxonRecord>,
}

impl ResolvedTaxon {
    /// Entry for ids confirmed by the Red List
    pub fn found(ids: Vec<TaxonId>, name: Option<String>) -> Self {
        let uris = ids.iter().map(detail_uri).collect();
        Self {
            ids,
            name,
            match_reason: MatchReason::Found,
            uris,
            candidates: Vec::new(),
        }
    }

    pub fn not_found(name: Option<String>) -> Self {
        Self {
            ids: Vec::new(),
            name,
            match_reason: MatchReason::NotFound,
            uris: Vec::new(),
            candidates: Vec::new(),
        }
    }

    /// Entry for an id taken on trust
    pub fn unchecked(id: TaxonId) -> Self {
        let uris = vec![detail_uri(&id)];
        Self {
            ids: vec![id],
            name: None,
            match_reason: MatchReason::Unchecked,
            uris,
            candidates: Vec::new(),
        }
    }

    pub fn with_candidates(mut self, candidates: Vec<TaxonRecord>) -> Self {
        self.candidates = candidates;
        self
    }

    /// First id, if any
    pub fn id(&self) -> Option<&TaxonId> {
        self.ids.first()
    }

    pub fn is_na(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Identifier vector: Red List ids in input order with their metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IucnIds {
    taxa: Vec<ResolvedTaxon>,
}

impl IucnIds {
    pub fn new(taxa: Vec<ResolvedTaxon>) -> Self {
        Self { taxa }
    }

    /// Concatenate vectors preserving order. Duplicates are kept.
    pub fn concat(parts: impl IntoIterator<Item = IucnIds>) -> Self {
        parts.into_iter().flat_map(|p| p.taxa).collect()
    }

    pub fn class(&self) -> &'static str {
        IUCN_CLASS
    }

    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedTaxon> {
        self.taxa.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ResolvedTaxon> {
        self.taxa.get(index)
    }

    pub fn ids(&self) -> Vec<&[TaxonId]> {
        self.taxa.iter().map(|t| t.ids.as_slice()).collect()
    }

    pub fn matches(&self) -> Vec<MatchReason> {
        self.taxa.iter().map(|t| t.match_reason).collect()
    }

    pub fn names(&self) -> Vec<Option<&str>> {
        self.taxa.iter().map(|t| t.name.as_deref()).collect()
    }

    /// URIs per entry, or `None` when no entry carries an id
    pub fn uris(&self) -> Option<Vec<&[String]>> {
        if self.taxa.iter().all(ResolvedTaxon::is_na) {
            return None;
        }
        Some(self.taxa.iter().map(|t| t.uris.as_slice()).collect())
    }
}

impl FromIterator<ResolvedTaxon> for IucnIds {
    fn from_iter<I: IntoIterator<Item = ResolvedTaxon>>(iter: I) -> Self {
        Self {
            taxa: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for IucnIds {
    type Item = ResolvedTaxon;
    type IntoIter = std::vec::IntoIter<ResolvedTaxon>;

    fn into_iter(self) -> Self::IntoIter {
        self.taxa.into_iter()
    }
}

impl<'a> IntoIterator for &'a IucnIds {
    type Item = &'a ResolvedTaxon;
    type IntoIter = std::slice::Iter<'a, ResolvedTaxon>;

    fn into_iter(self) -> Self::IntoIter {
        self.taxa.iter()
    }
}
