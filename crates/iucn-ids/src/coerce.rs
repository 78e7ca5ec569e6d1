//! Coercion of ids in other shapes into an [`IucnIds`] vector

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::{IucnError, Result};
use crate::reporter::{Reporter, SilentReporter, TracingReporter};
use crate::source::{ExistenceCheck, TaxonSearch};
use crate::table::IucnTable;
use crate::types::{detail_uri, IucnIds, ResolvedTaxon, TaxonId};

/// Things that can become an identifier vector
///
/// Strings, list items and numbers are taken as Red List ids, not names.
#[derive(Debug, Clone)]
pub enum IucnSource {
    Strings(Vec<String>),
    /// JSON strings or non-negative integers
    List(Vec<Value>),
    Numeric(Vec<u64>),
    Resolved(IucnIds),
    Table(IucnTable),
}

impl From<&str> for IucnSource {
    fn from(id: &str) -> Self {
        Self::Strings(vec![id.to_string()])
    }
}

impl From<Vec<String>> for IucnSource {
    fn from(ids: Vec<String>) -> Self {
        Self::Strings(ids)
    }
}

impl From<u64> for IucnSource {
    fn from(id: u64) -> Self {
        Self::Numeric(vec![id])
    }
}

impl From<Vec<u64>> for IucnSource {
    fn from(ids: Vec<u64>) -> Self {
        Self::Numeric(ids)
    }
}

impl From<IucnIds> for IucnSource {
    fn from(ids: IucnIds) -> Self {
        Self::Resolved(ids)
    }
}

impl From<IucnTable> for IucnSource {
    fn from(table: IucnTable) -> Self {
        Self::Table(table)
    }
}

/// Builds identifier vectors from existing ids, optionally verifying each
/// one against the Red List
pub struct Coercer<C> {
    remote: C,
    reporter: Arc<dyn Reporter>,
}

impl<C: TaxonSearch + ExistenceCheck> Coercer<C> {
    pub fn new(remote: C) -> Self {
        Self {
            remote,
            reporter: Arc::new(TracingReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn quiet(self) -> Self {
        self.with_reporter(Arc::new(SilentReporter))
    }

    /// Coerce `source` into an identifier vector
    ///
    /// With `check` set, every id is probed on the Red List site; otherwise
    /// ids are trusted and no request is made. Resolved vectors and tables
    /// never touch the network.
    pub async fn coerce(&self, source: IucnSource, check: bool) -> Result<IucnIds> {
        match source {
            IucnSource::Resolved(ids) => Ok(ids),
            IucnSource::Table(table) => IucnIds::try_from(table),
            IucnSource::Strings(values) => self.make_all(&values, check).await,
            IucnSource::List(items) => {
                let values = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| list_item(i, item))
                    .collect::<Result<Vec<_>>>()?;
                self.make_all(&values, check).await
            }
            IucnSource::Numeric(numbers) => {
                let values: Vec<String> = numbers.iter().map(u64::to_string).collect();
                self.make_all(&values, check).await
            }
        }
    }

    /// Build a single entry from one id
    pub async fn make(&self, value: &str, check: bool) -> Result<ResolvedTaxon> {
        if value.trim().is_empty() {
            return Err(IucnError::InvalidInput("id is blank".to_string()));
        }
        let id = TaxonId::from(value);
        if !check {
            return Ok(ResolvedTaxon::unchecked(id));
        }

        let uri = detail_uri(&id);
        if !self.remote.exists(&uri).await? {
            self.reporter.check_failed(&id);
            return Ok(ResolvedTaxon::not_found(None));
        }

        let records = self.remote.search_id(&id).await?;
        let name = records.first().and_then(|r| r.scientific_name.clone());
        debug!(id = %id, name = name.as_deref().unwrap_or("unknown"), "Verified Red List id");
        Ok(ResolvedTaxon::found(vec![id], name).with_candidates(records))
    }

    async fn make_all(&self, values: &[String], check: bool) -> Result<IucnIds> {
        if let Some(pos) = values.iter().position(|v| v.trim().is_empty()) {
            return Err(IucnError::InvalidInput(format!(
                "id at position {pos} is blank"
            )));
        }

        let mut taxa = Vec::with_capacity(values.len());
        for value in values {
            taxa.push(self.make(value, check).await?);
        }
        Ok(IucnIds::new(taxa))
    }
}

fn list_item(index: usize, item: &Value) -> Result<String> {
    match item {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => n.as_u64().map(|n| n.to_string()).ok_or_else(|| {
            IucnError::InvalidInput(format!("list item {index} is not a valid id: {n}"))
        }),
        other => Err(IucnError::InvalidInput(format!(
            "list item {index} is not an id: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{record, FakeRedList, RecordingReporter};
    use crate::types::{MatchReason, IUCN_CLASS};
    use serde_json::json;

    fn coercer(fake: FakeRedList) -> (Coercer<Arc<FakeRedList>>, Arc<FakeRedList>) {
        let fake = Arc::new(fake);
        (Coercer::new(fake.clone()).quiet(), fake)
    }

    fn snow_leopard() -> FakeRedList {
        FakeRedList::default().with_taxon(record(22732, "Panthera uncia"))
    }

    #[tokio::test]
    async fn test_unchecked_never_touches_network() {
        let (coercer, fake) = coercer(FakeRedList::default().failing_on(""));

        let ids = coercer
            .coerce(IucnSource::from("whatever-123"), false)
            .await
            .unwrap();

        assert_eq!(fake.calls(), 0);
        let taxon = ids.get(0).unwrap();
        assert_eq!(taxon.ids, vec![TaxonId::from("whatever-123")]);
        assert_eq!(taxon.match_reason, MatchReason::Unchecked);
        assert_eq!(
            taxon.uris,
            vec!["http://www.iucnredlist.org/details/whatever-123/0".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unchecked_keeps_value_verbatim() {
        let (coercer, _) = coercer(FakeRedList::default());

        let taxon = coercer.make(" 22732", false).await.unwrap();

        assert_eq!(taxon.ids, vec![TaxonId::from(" 22732")]);
        assert_eq!(taxon.match_reason, MatchReason::Unchecked);
    }

    #[tokio::test]
    async fn test_checked_existing_id_gets_name() {
        let (coercer, _) = coercer(snow_leopard());

        let taxon = coercer.make("22732", true).await.unwrap();

        assert_eq!(taxon.ids, vec![TaxonId::from(22732)]);
        assert_eq!(taxon.match_reason, MatchReason::Found);
        assert_eq!(taxon.name.as_deref(), Some("Panthera uncia"));
    }

    #[tokio::test]
    async fn test_checked_missing_id_is_not_found() {
        let reporter = Arc::new(RecordingReporter::default());
        let coercer = Coercer::new(snow_leopard()).with_reporter(reporter.clone());

        let taxon = coercer.make("999999999", true).await.unwrap();

        assert!(taxon.is_na());
        assert_eq!(taxon.match_reason, MatchReason::NotFound);
        assert_eq!(reporter.events(), vec!["check_failed:999999999"]);
    }

    #[tokio::test]
    async fn test_numeric_matches_string_path() {
        let (coercer, _) = coercer(snow_leopard());

        for check in [true, false] {
            let from_number = coercer.coerce(IucnSource::from(22732), check).await.unwrap();
            let from_string = coercer.coerce(IucnSource::from("22732"), check).await.unwrap();
            assert_eq!(from_number, from_string);
        }
    }

    #[tokio::test]
    async fn test_multiple_strings_concatenate_in_order() {
        let (coercer, _) = coercer(snow_leopard());
        let values = vec!["3".to_string(), "1".to_string(), "3".to_string()];

        let ids = coercer.coerce(IucnSource::from(values), false).await.unwrap();

        let ids: Vec<&str> = ids.iter().map(|t| t.id().unwrap().as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "3"]);
    }

    #[tokio::test]
    async fn test_list_items() {
        let (coercer, _) = coercer(snow_leopard());

        let ids = coercer
            .coerce(IucnSource::List(vec![json!("22732"), json!(15951)]), false)
            .await
            .unwrap();

        assert_eq!(ids.len(), 2);
        assert_eq!(ids.get(1).unwrap().id(), Some(&TaxonId::from(15951)));
    }

    #[tokio::test]
    async fn test_list_rejects_non_ids_before_requests() {
        let (coercer, fake) = coercer(snow_leopard());

        let result = coercer
            .coerce(IucnSource::List(vec![json!("22732"), json!({ "id": 1 })]), true)
            .await;

        assert!(matches!(result, Err(IucnError::InvalidInput(_))));
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolved_passes_through() {
        let (coercer, fake) = coercer(snow_leopard());
        let ids = IucnIds::new(vec![ResolvedTaxon::found(
            vec![TaxonId::from(22732)],
            Some("Panthera uncia".to_string()),
        )]);

        let out = coercer.coerce(ids.clone().into(), true).await.unwrap();

        assert_eq!(out, ids);
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_table_path_is_offline_round_trip() {
        let (coercer, fake) = coercer(snow_leopard());
        let ids = coercer
            .coerce(IucnSource::Numeric(vec![22732, 15951]), false)
            .await
            .unwrap();

        let table = ids.to_table();
        assert!(table.rows.iter().all(|r| r.class == IUCN_CLASS));
        let back = coercer.coerce(table.into(), true).await.unwrap();

        assert_eq!(back, ids);
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let (coercer, _) = coercer(snow_leopard().failing_on("details/5/"));

        let result = coercer
            .coerce(IucnSource::Numeric(vec![22732, 5, 22732]), true)
            .await;

        assert!(matches!(result, Err(IucnError::RedList(_))));
    }

    #[tokio::test]
    async fn test_blank_id_rejected() {
        let (coercer, _) = coercer(snow_leopard());
        let result = coercer.coerce(IucnSource::from(" "), false).await;
        assert!(matches!(result, Err(IucnError::InvalidInput(_))));
    }
}
