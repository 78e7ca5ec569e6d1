//! Rust client for the IUCN Red List API
//!
//! This crate provides type-safe bindings to the Red List API v3 species
//! endpoints, plus a probe for the public species detail pages.
//!
//! # Example
//!
//! ```no_run
//! use iucn_api::RedListClient;
//!
//! # async fn example() -> Result<(), iucn_api::RedListError> {
//! let client = RedListClient::from_env()?;
//!
//! // Search by scientific name
//! for record in client.search_name("Loxodonta africana").await? {
//!     println!("{} {:?}", record.taxonid, record.scientific_name);
//! }
//!
//! // Look up a taxon by id
//! let records = client.search_id(12392).await?;
//! # let _ = records;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /species/{name}` - Search species by name
//! - `GET /species/id/{id}` - Get species by Red List taxon id
//! - `GET http://www.iucnredlist.org/details/{id}/0` - Detail page existence probe

mod client;
mod config;
mod error;
mod types;

pub use client::RedListClient;
pub use config::RedListConfig;
pub use error::{RedListError, Result};
pub use types::{SpeciesRecord, SpeciesResponse};
