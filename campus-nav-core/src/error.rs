use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Invalid coordinates: ({lat}, {lon})")]
    InvalidCoordinates { lat: f64, lon: f64 },
    #[error("Duplicate building id: {0}")]
    DuplicateBuilding(String),
    #[error("Invalid opening hours '{0}'")]
    InvalidHours(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
