//! Joins the run list against detail lookups.
//!
//! For every run-list record, in order:
//! 1. Look up its VIN (one awaited request, never concurrent)
//! 2. Drop it if the lookup says "not found"
//! 3. With filtering enabled, drop it unless the purchaser passes the
//!    [`PurchaserFilter`]
//! 4. Fill its empty fields from the detail record
//!
//! A failed or malformed lookup aborts the whole pass.

mod filter;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use filter::{NamePattern, PurchaserFilter};

use crate::lookup::{DetailLookup, LookupError};
use crate::vehicle::VehicleRecord;

/// Matches run-list records against a [`DetailLookup`].
#[derive(Debug)]
pub struct MatchingEngine<L> {
    lookup: L,
    filter: PurchaserFilter,
    filtering: bool,
}

impl<L> MatchingEngine<L> {
    /// Creates an engine with filtering disabled.
    #[must_use]
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            filter: PurchaserFilter::default(),
            filtering: false,
        }
    }

    /// Sets the purchaser filter used when filtering is enabled.
    #[must_use]
    pub fn with_filter(mut self, filter: PurchaserFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Enables or disables purchaser filtering.
    #[must_use]
    pub const fn with_filtering(mut self, enabled: bool) -> Self {
        self.filtering = enabled;
        self
    }

    /// Returns `true` if purchaser filtering is enabled.
    #[must_use]
    pub const fn is_filtering(&self) -> bool {
        self.filtering
    }
}

impl<L: DetailLookup> MatchingEngine<L> {
    /// Returns the merged, accepted records in run-list order.
    ///
    /// Records whose VIN is unknown or whose purchaser is rejected are
    /// omitted; an empty result is not an error. Records with a blank VIN
    /// are skipped without a lookup.
    ///
    /// # Errors
    ///
    /// Returns the first [`LookupError`]; records processed before it are discarded.
    pub async fn run(&self, run_list: Vec<VehicleRecord>) -> Result<Vec<VehicleRecord>, LookupError> {
        let mut matches = Vec::new();

        for mut record in run_list {
            let vin = record.vin().unwrap_or_default().to_string();
            if vin.is_empty() {
                tracing::warn!(
                    "Skipping run {} with no VIN",
                    record.run_number().unwrap_or("?")
                );
                continue;
            }

            let Some(detail) = self.lookup.lookup(&vin).await?.into_found() else {
                tracing::debug!("{vin}: not found");
                continue;
            };

            if self.filtering && !self.filter.accepts(&detail.purchaser) {
                tracing::debug!("{vin}: purchaser rejected by filter");
                continue;
            }

            tracing::debug!("{vin}: matched");
            record.fill_empty(VehicleRecord::from(detail));
            matches.push(record);
        }

        Ok(matches)
    }
}
