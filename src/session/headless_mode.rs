//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::data::OutageDataSource;
use crate::data::types::FilterState;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::error::Error;

/// Runs the application in headless mode
///
/// Performs a single metrics refresh with the default filter state and
/// prints the snapshot to stdout. The per-region duration series is printed
/// as well when `RUST_LOG` allows debug output.
///
/// # Arguments
/// * `session` - Session data from setup
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", session.config.regions.len());

    let filter = FilterState::default();
    let snapshot = session.source.fetch_metrics(&filter).await?;
    let series = session.source.fetch_region_durations(&filter).await?;

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    println!(
        "{} Metrics refresh ({}, {} - {})",
        timestamp, filter.granularity, filter.start_date, filter.end_date
    );
    println!("  Total Outages:        {}", snapshot.total_outages);
    println!("  Extended Outages:     {}", snapshot.extended_outages);
    println!("  Branches Affected:    {}", snapshot.branches_affected);
    println!(
        "  Avg. Outage Duration: {} min",
        snapshot.avg_outage_duration_mins
    );

    if should_log_with_env(LogLevel::Debug) {
        for entry in &series {
            println!("  {:<24} {} min", entry.region, entry.duration_mins);
        }
    }

    print_session_exit_success();
    Ok(())
}
