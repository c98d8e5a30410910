//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::data::SimulatedDataSource;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Loaded configuration
    pub config: Config,
    /// Data source backing the dashboard
    pub source: Arc<SimulatedDataSource>,
}

/// Load configuration and construct the data source.
///
/// The config path defaults to `~/.outage-dashboard/config.json`; a missing
/// file falls back to the default region catalog, while an unreadable or
/// malformed file is an error.
pub fn setup_session(config_override: Option<PathBuf>) -> Result<SessionData, Box<dyn Error>> {
    let config_path = match config_override {
        Some(path) => path,
        None => get_config_path()?,
    };
    let config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config from {}: {}", config_path.display(), e))?;

    let source = Arc::new(SimulatedDataSource::new(config.regions.clone()));
    Ok(SessionData { config, source })
}
