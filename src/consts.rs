pub mod ui_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    use std::time::Duration;

    // =============================================================================
    // DEFAULT FILTER STATE
    // =============================================================================

    /// Reporting period start shown before the user edits anything.
    pub const DEFAULT_START_DATE: &str = "2023/10/15";

    /// Reporting period end shown before the user edits anything.
    pub const DEFAULT_END_DATE: &str = "2023/10/23";

    // =============================================================================
    // SIMULATED METRIC RANGES
    // =============================================================================
    // Half-open ranges matching the upstream reporting system's observed
    // magnitudes. The simulated data source draws uniformly from these.

    pub mod metric_ranges {
        use std::ops::Range;

        /// Total outages across all branches in the selected period.
        pub const TOTAL_OUTAGES: Range<u32> = 5..25;

        /// Outages exceeding the extended-outage threshold.
        pub const EXTENDED_OUTAGES: Range<u32> = 0..10;

        /// Number of distinct branches affected.
        pub const BRANCHES_AFFECTED: Range<u32> = 5..20;

        /// Average outage duration, in minutes.
        pub const AVG_OUTAGE_DURATION_MINS: Range<u32> = 50..250;

        /// Per-region average outage duration, in minutes.
        pub const REGION_DURATION_MINS: Range<u32> = 50..350;
    }

    /// Placeholder snapshot values shown before the first refresh completes.
    pub const INITIAL_SNAPSHOT: (u32, u32, u32, u32) = (10, 4, 10, 155);

    // =============================================================================
    // UI TIMING
    // =============================================================================

    /// How long the splash screen is shown before the dashboard appears.
    pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

    /// Keyboard poll timeout; also the effective render tick interval.
    pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);
}
