//! Progress reporting for lookups

use tracing::{info, warn};

use crate::types::TaxonId;

/// Receives lookup progress from the resolver and coercer
pub trait Reporter: Send + Sync {
    /// A name is about to be searched
    fn lookup_started(&self, _name: &str) {}

    /// A search returned no records
    fn not_found(&self, _name: &str) {}

    /// An id failed its existence check
    fn check_failed(&self, _id: &TaxonId) {}
}

/// Reports through `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn lookup_started(&self, name: &str) {
        info!(taxon = name, "Retrieving Red List data");
    }

    fn not_found(&self, name: &str) {
        warn!(taxon = name, "Taxon not found in the Red List");
    }

    fn check_failed(&self, id: &TaxonId) {
        warn!(id = %id, "Red List id failed existence check");
    }
}

/// Reports nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporters_accept_every_checkpoint() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let reporters: [&dyn Reporter; 2] = [&TracingReporter, &SilentReporter];
        for reporter in reporters {
            reporter.lookup_started("Panthera uncia");
            reporter.not_found("Panthera uncia");
            reporter.check_failed(&TaxonId::from("22732"));
        }
    }
}
