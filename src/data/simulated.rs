//! Simulated data source.
//!
//! Stands in for a real outage-reporting backend: every fetch draws fresh
//! values from the fixed metric ranges, so repeated calls with identical
//! filters yield different results. The filter parameters are accepted but
//! not applied to the generation.

use crate::consts::ui_consts::metric_ranges;
use crate::data::error::DataSourceError;
use crate::data::types::{FilterState, MetricsSnapshot, RegionDuration};
use crate::data::OutageDataSource;
use rand::Rng;

pub struct SimulatedDataSource {
    /// Region catalog, in display order.
    regions: Vec<String>,
}

impl SimulatedDataSource {
    pub fn new(regions: Vec<String>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }
}

#[async_trait::async_trait]
impl OutageDataSource for SimulatedDataSource {
    async fn fetch_metrics(
        &self,
        _filter: &FilterState,
    ) -> Result<MetricsSnapshot, DataSourceError> {
        if self.regions.is_empty() {
            return Err(DataSourceError::EmptyRegionCatalog);
        }
        let mut rng = rand::thread_rng();
        Ok(MetricsSnapshot {
            total_outages: rng.gen_range(metric_ranges::TOTAL_OUTAGES),
            extended_outages: rng.gen_range(metric_ranges::EXTENDED_OUTAGES),
            branches_affected: rng.gen_range(metric_ranges::BRANCHES_AFFECTED),
            avg_outage_duration_mins: rng.gen_range(metric_ranges::AVG_OUTAGE_DURATION_MINS),
        })
    }

    async fn fetch_region_durations(
        &self,
        _filter: &FilterState,
    ) -> Result<Vec<RegionDuration>, DataSourceError> {
        if self.regions.is_empty() {
            return Err(DataSourceError::EmptyRegionCatalog);
        }
        let mut rng = rand::thread_rng();
        Ok(self
            .regions
            .iter()
            .map(|region| RegionDuration {
                region: region.clone(),
                duration_mins: rng.gen_range(metric_ranges::REGION_DURATION_MINS),
            })
            .collect())
    }
}
