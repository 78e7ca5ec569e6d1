//! Name resolver: taxon names to Red List ids

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::{IucnError, Result};
use crate::reporter::{Reporter, SilentReporter, TracingReporter};
use crate::source::TaxonSearch;
use crate::types::{IucnIds, ResolvedTaxon, TaxonId, TaxonRecord};

/// Resolves names one at a time against a [`TaxonSearch`]
///
/// Output has exactly one entry per input name, in input order. A failed
/// search aborts the whole batch.
pub struct Resolver<S> {
    search: S,
    reporter: Arc<dyn Reporter>,
}

impl<S: TaxonSearch> Resolver<S> {
    pub fn new(search: S) -> Self {
        Self {
            search,
            reporter: Arc::new(TracingReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Turn off progress reporting
    pub fn quiet(self) -> Self {
        self.with_reporter(Arc::new(SilentReporter))
    }

    /// Resolve scientific names
    pub async fn resolve<N: AsRef<str>>(&self, names: &[N]) -> Result<IucnIds> {
        let names: Vec<Option<String>> = names
            .iter()
            .map(|n| Some(n.as_ref().to_string()))
            .collect();
        self.resolve_all(&names).await
    }

    /// Resolve names given as JSON (see [`names_from_json`])
    pub async fn resolve_json(&self, value: &Value) -> Result<IucnIds> {
        let names = names_from_json(value)?;
        self.resolve_all(&names).await
    }

    async fn resolve_all(&self, names: &[Option<String>]) -> Result<IucnIds> {
        // Reject bad input before the first request goes out
        if let Some(pos) = names
            .iter()
            .position(|n| n.as_deref().is_some_and(|s| s.trim().is_empty()))
        {
            return Err(IucnError::InvalidInput(format!(
                "name at position {pos} is blank"
            )));
        }

        let mut taxa = Vec::with_capacity(names.len());
        for name in names {
            taxa.push(self.resolve_one(name.as_deref()).await?);
        }
        Ok(IucnIds::new(taxa))
    }

    async fn resolve_one(&self, name: Option<&str>) -> Result<ResolvedTaxon> {
        let Some(name) = name else {
            return Ok(ResolvedTaxon::not_found(None));
        };

        self.reporter.lookup_started(name);
        let records = self.search.search_name(name).await?;

        if records.is_empty() {
            self.reporter.not_found(name);
            return Ok(ResolvedTaxon::not_found(Some(name.to_string())));
        }

        let ids = select_ids(name, &records);
        debug!(
            taxon = name,
            records = records.len(),
            selected = ids.len(),
            "Red List search returned records"
        );
        Ok(ResolvedTaxon::found(ids, Some(name.to_string())).with_candidates(records))
    }
}

/// Ids of records whose scientific name equals `name` ignoring case, or of
/// every record when none does
fn select_ids(name: &str, records: &[TaxonRecord]) -> Vec<TaxonId> {
    let wanted = name.to_lowercase();
    let direct: Vec<TaxonId> = records
        .iter()
        .filter(|r| {
            r.scientific_name
                .as_deref()
                .is_some_and(|s| s.to_lowercase() == wanted)
        })
        .map(|r| r.id.clone())
        .collect();

    if direct.is_empty() {
        records.iter().map(|r| r.id.clone()).collect()
    } else {
        direct
    }
}

/// Read resolver input from JSON
///
/// Accepts a string, a boolean or null (a missing name, never searched), or
/// an array of those. Anything else is rejected.
pub fn names_from_json(value: &Value) -> Result<Vec<Option<String>>> {
    fn one(value: &Value) -> Result<Option<String>> {
        match value {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Bool(_) | Value::Null => Ok(None),
            other => Err(IucnError::InvalidInput(format!(
                "expected a name or a logical, got {other}"
            ))),
        }
    }

    match value {
        Value::Array(items) => items.iter().map(one).collect(),
        other => Ok(vec![one(other)?]),
    }
}
