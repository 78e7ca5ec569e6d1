//! In-memory collaborators for tests

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use iucn_api::RedListError;

use crate::error::Result;
use crate::reporter::Reporter;
use crate::source::{ExistenceCheck, TaxonSearch};
use crate::types::{detail_uri, TaxonId, TaxonRecord};

pub(crate) fn record(id: u64, scientific_name: &str) -> TaxonRecord {
    TaxonRecord {
        id: TaxonId::from(id),
        scientific_name: Some(scientific_name.to_string()),
        kingdom: Some("ANIMALIA".to_string()),
        phylum: Some("CHORDATA".to_string()),
        order: None,
        family: None,
        genus: scientific_name.split_whitespace().next().map(str::to_string),
        authority: None,
    }
}

#[derive(Default)]
pub(crate) struct FakeRedList {
    by_name: HashMap<String, Vec<TaxonRecord>>,
    by_id: HashMap<String, Vec<TaxonRecord>>,
    existing: HashSet<String>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl FakeRedList {
    pub(crate) fn with_name(mut self, name: &str, records: Vec<TaxonRecord>) -> Self {
        self.by_name.insert(name.to_string(), records);
        self
    }

    /// Register a taxon that exists and can be looked up by id
    pub(crate) fn with_taxon(mut self, record: TaxonRecord) -> Self {
        self.existing.insert(detail_uri(&record.id));
        self.by_id.insert(record.id.as_str().to_string(), vec![record]);
        self
    }

    /// Any request mentioning `key` fails with a transport-like error
    pub(crate) fn failing_on(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn request(&self, key: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.iter().any(|f| key.contains(f.as_str())) {
            return Err(RedListError::Api(format!("connection reset for {key}")).into());
        }
        Ok(())
    }
}

#[async_trait]
impl TaxonSearch for FakeRedList {
    async fn search_name(&self, name: &str) -> Result<Vec<TaxonRecord>> {
        self.request(name)?;
        Ok(self.by_name.get(name).cloned().unwrap_or_default())
    }

    async fn search_id(&self, id: &TaxonId) -> Result<Vec<TaxonRecord>> {
        self.request(id.as_str())?;
        Ok(self.by_id.get(id.as_str()).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ExistenceCheck for FakeRedList {
    async fn exists(&self, url: &str) -> Result<bool> {
        self.request(url)?;
        Ok(self.existing.contains(url))
    }
}

/// Records reporter events as strings
#[derive(Default)]
pub(crate) struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn lookup_started(&self, name: &str) {
        self.push(format!("start:{name}"));
    }

    fn not_found(&self, name: &str) {
        self.push(format!("not_found:{name}"));
    }

    fn check_failed(&self, id: &TaxonId) {
        self.push(format!("check_failed:{id}"));
    }
}
