use std::path::PathBuf;

/// Where the campus dataset comes from
#[derive(Debug, Clone, Default)]
pub struct CampusModelConfig {
    /// JSON dataset to load instead of the compiled-in campus
    pub dataset_path: Option<PathBuf>,
}
