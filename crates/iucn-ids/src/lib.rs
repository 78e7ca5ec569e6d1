//! IUCN Red List identifiers
//!
//! Resolves taxon names to Red List taxon ids and coerces strings, numbers,
//! lists and tables into a typed identifier vector ([`IucnIds`]) that keeps
//! the match reason, original name and detail page URI of every entry.
//!
//! # Example
//!
//! ```no_run
//! use iucn_ids::{Coercer, IucnSource, RedListSource, Resolver};
//!
//! # async fn example() -> iucn_ids::Result<()> {
//! let resolver = Resolver::new(RedListSource::from_env()?);
//! let ids = resolver.resolve(&["Branta canadensis", "Panthera uncia"]).await?;
//! for taxon in ids.iter() {
//!     println!("{:?} {}", taxon.ids, taxon.match_reason);
//! }
//!
//! // Trust a known id without touching the network
//! let coercer = Coercer::new(RedListSource::from_env()?);
//! let known = coercer.coerce(IucnSource::Numeric(vec![22732]), false).await?;
//! assert_eq!(known.len(), 1);
//! # Ok(())
//! # }
//! ```

mod coerce;
mod error;
mod reporter;
mod resolver;
mod source;
mod table;
mod types;

#[cfg(test)]
mod fake;

pub use coerce::{Coercer, IucnSource};
pub use error::{IucnError, Result};
pub use reporter::{Reporter, SilentReporter, TracingReporter};
pub use resolver::{names_from_json, Resolver};
pub use source::{ExistenceCheck, RedListSource, TaxonSearch};
pub use table::{IucnRow, IucnTable};
pub use types::{
    detail_uri, IucnIds, MatchReason, ResolvedTaxon, TaxonId, TaxonRecord, IUCN_CLASS,
};
