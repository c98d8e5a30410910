use thiserror::Error;

/// Errors a data source can report to the dashboard.
///
/// The simulated source can only fail when configured with an empty region
/// catalog; a real backend would extend this with transport variants.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("Region catalog is empty; nothing to report on")]
    EmptyRegionCatalog,
}
