//! Core data types shared by the data sources and the dashboard.

use crate::consts::ui_consts;

/// Aggregation window for the displayed metrics.
///
/// Selecting a new granularity triggers a metrics refresh but has no further
/// computational effect; the simulated source ignores it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, strum::Display)]
pub enum Granularity {
    Day,
    #[default]
    Week,
    Month,
}

impl Granularity {
    /// All values in toggle-button display order.
    pub const ALL: [Granularity; 3] = [Granularity::Day, Granularity::Week, Granularity::Month];

    pub fn next(self) -> Self {
        match self {
            Granularity::Day => Granularity::Week,
            Granularity::Week => Granularity::Month,
            Granularity::Month => Granularity::Day,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Granularity::Day => Granularity::Month,
            Granularity::Week => Granularity::Day,
            Granularity::Month => Granularity::Week,
        }
    }
}

/// The full set of filter selections, passed verbatim to the data source as
/// the request parameters for a refresh.
///
/// Values are accepted unconditionally: dates are free-form strings and no
/// cross-field validation is performed (the end date may precede the start).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FilterState {
    pub granularity: Granularity,
    pub start_date: String,
    pub end_date: String,
    pub selected_region: Option<String>,
    pub branch_search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            granularity: Granularity::default(),
            start_date: ui_consts::DEFAULT_START_DATE.to_string(),
            end_date: ui_consts::DEFAULT_END_DATE.to_string(),
            selected_region: None,
            branch_search: String::new(),
        }
    }
}

/// The four headline numbers shown in the summary tiles.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MetricsSnapshot {
    pub total_outages: u32,
    pub extended_outages: u32,
    pub branches_affected: u32,
    pub avg_outage_duration_mins: u32,
}

impl Default for MetricsSnapshot {
    /// Placeholder values displayed before the first refresh completes.
    fn default() -> Self {
        let (total_outages, extended_outages, branches_affected, avg_outage_duration_mins) =
            ui_consts::INITIAL_SNAPSHOT;
        Self {
            total_outages,
            extended_outages,
            branches_affected,
            avg_outage_duration_mins,
        }
    }
}

/// One bar of the per-region duration chart.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RegionDuration {
    pub region: String,
    pub duration_mins: u32,
}
