//! Dashboard state update logic
//!
//! Drives the per-tick refresh cycle against the data source

use super::state::DashboardState;
use crate::data::OutageDataSource;

impl DashboardState {
    /// Advance the dashboard by one tick.
    ///
    /// Fetches a fresh metrics snapshot when a filter change (or the initial
    /// mount) has marked the state dirty, then re-fetches the region series
    /// unconditionally: the chart is deliberately not memoized, so the bars
    /// move on every tick even without user input.
    pub async fn update(&mut self, source: &dyn OutageDataSource) {
        self.tick += 1;

        if self.is_dirty() {
            match source.fetch_metrics(&self.filter).await {
                Ok(snapshot) => {
                    self.snapshot = snapshot;
                    self.record_refresh();
                    self.last_error = None;
                }
                Err(e) => self.last_error = Some(e.to_string()),
            }
            self.clear_dirty();
        }

        match source.fetch_region_durations(&self.filter).await {
            Ok(series) => self.series = series,
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::DataSourceError;
    use crate::data::types::{Granularity, MetricsSnapshot, RegionDuration};
    use crate::data::MockOutageDataSource;
    use crate::ui::app::UIConfig;
    use std::time::Instant;

    fn fixture_snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            total_outages: 12,
            extended_outages: 3,
            branches_affected: 7,
            avg_outage_duration_mins: 140,
        }
    }

    fn fixture_series() -> Vec<RegionDuration> {
        vec![
            RegionDuration {
                region: "Gauteng".to_string(),
                duration_mins: 90,
            },
            RegionDuration {
                region: "Limpopo".to_string(),
                duration_mins: 210,
            },
        ]
    }

    fn state() -> DashboardState {
        DashboardState::new(Instant::now(), UIConfig::new(false))
    }

    #[tokio::test]
    // The mount refresh fires exactly once; subsequent ticks without filter
    // changes only re-fetch the chart series.
    async fn mount_refreshes_metrics_once() {
        let mut mock = MockOutageDataSource::new();
        mock.expect_fetch_metrics()
            .times(1)
            .returning(|_| Ok(fixture_snapshot()));
        mock.expect_fetch_region_durations()
            .times(3)
            .returning(|_| Ok(fixture_series()));

        let mut state = state();
        state.update(&mock).await;
        state.update(&mock).await;
        state.update(&mock).await;

        assert_eq!(state.snapshot, fixture_snapshot());
        assert_eq!(state.series, fixture_series());
        assert_eq!(state.refresh_count(), 1);
        assert_eq!(state.tick, 3);
    }

    #[tokio::test]
    // Each filter change schedules exactly one more metrics fetch.
    async fn filter_change_triggers_refresh() {
        let mut mock = MockOutageDataSource::new();
        mock.expect_fetch_metrics()
            .times(2)
            .returning(|_| Ok(fixture_snapshot()));
        mock.expect_fetch_region_durations()
            .returning(|_| Ok(fixture_series()));

        let mut state = state();
        state.update(&mock).await; // mount refresh

        state.set_granularity(Granularity::Month);
        state.update(&mock).await; // refresh for the change
        state.update(&mock).await; // no further refresh

        assert_eq!(state.refresh_count(), 2);
    }

    #[tokio::test]
    // Search-box edits must not cause a metrics fetch.
    async fn search_edit_does_not_refresh() {
        let mut mock = MockOutageDataSource::new();
        mock.expect_fetch_metrics()
            .times(1)
            .returning(|_| Ok(fixture_snapshot()));
        mock.expect_fetch_region_durations()
            .returning(|_| Ok(fixture_series()));

        let mut state = state();
        state.update(&mock).await; // mount refresh

        state.set_branch_search("Claremont".to_string());
        state.update(&mock).await;
        state.update(&mock).await;

        assert_eq!(state.refresh_count(), 1);
    }

    #[tokio::test]
    // The filter state is passed through as the request parameters.
    async fn refresh_sends_current_filter() {
        let mut mock = MockOutageDataSource::new();
        mock.expect_fetch_metrics()
            .withf(|filter| {
                filter.granularity == Granularity::Day && filter.end_date == "1999/01/01"
            })
            .times(1)
            .returning(|_| Ok(fixture_snapshot()));
        mock.expect_fetch_region_durations()
            .returning(|_| Ok(fixture_series()));

        let mut state = state();
        state.set_granularity(Granularity::Day);
        state.set_end_date("1999/01/01".to_string());
        state.update(&mock).await;
    }

    #[tokio::test]
    // A fetch error keeps the previous snapshot and surfaces in last_error.
    async fn fetch_error_keeps_previous_snapshot() {
        let mut mock = MockOutageDataSource::new();
        mock.expect_fetch_metrics()
            .returning(|_| Err(DataSourceError::EmptyRegionCatalog));
        mock.expect_fetch_region_durations()
            .returning(|_| Err(DataSourceError::EmptyRegionCatalog));

        let mut state = state();
        let before = state.snapshot.clone();
        state.update(&mock).await;

        assert_eq!(state.snapshot, before);
        assert_eq!(state.refresh_count(), 0);
        assert!(state.last_error.is_some());
    }
}
