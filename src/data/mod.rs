use crate::data::error::DataSourceError;
use crate::data::types::{FilterState, MetricsSnapshot, RegionDuration};

pub mod error;
pub(crate) mod simulated;
pub mod types;

pub use simulated::SimulatedDataSource;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// The dashboard's data-fetching seam.
///
/// Request parameters are the full filter state; responses are the headline
/// snapshot and the per-region duration series. The methods are async so a
/// real backend can be slotted in behind the same interface, although the
/// shipped simulated source never actually suspends.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait OutageDataSource: Send + Sync {
    /// Fetch the four headline metrics for the given filters.
    async fn fetch_metrics(&self, filter: &FilterState)
    -> Result<MetricsSnapshot, DataSourceError>;

    /// Fetch the per-region average outage duration series, one entry per
    /// configured region in catalog order.
    async fn fetch_region_durations(
        &self,
        filter: &FilterState,
    ) -> Result<Vec<RegionDuration>, DataSourceError>;
}
