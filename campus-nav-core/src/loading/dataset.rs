//! JSON dataset files with the same shape as the compiled-in campus

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DEFAULT_ZOOM;
use crate::{
    Error,
    model::{Building, Campus, Coordinates, PathNode},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetFile {
    pub name: String,
    /// Map center and fallback directions origin
    pub center: Coordinates,
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub path_nodes: Vec<PathNode>,
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

impl DatasetFile {
    /// # Errors
    ///
    /// Returns an error on duplicate ids or invalid coordinates
    pub fn into_campus(self) -> Result<Campus, Error> {
        Campus::new(
            self.name,
            self.center,
            self.default_zoom,
            self.buildings,
            self.path_nodes,
        )
    }
}

/// Read a dataset file from disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid dataset
pub fn read_dataset(path: &Path) -> Result<DatasetFile, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open dataset '{}': {}", path.display(), e),
        )
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    const SMALL_CAMPUS: &str = r#"{
        "name": "Test Campus",
        "center": [40.0, -75.0],
        "buildings": [
            {
                "id": "hall",
                "name": "Main Hall",
                "shortName": "Hall",
                "category": "student-services",
                "description": "Everything happens here",
                "coordinates": [40.0001, -75.0001],
                "departments": ["Registrar"]
            }
        ],
        "pathNodes": [
            { "id": "n1", "coordinates": [40.0, -75.0], "connectedTo": ["n2"] },
            { "id": "n2", "coordinates": [40.001, -75.0], "connectedTo": ["n1"] }
        ]
    }"#;

    #[test]
    fn parses_camel_case_dataset() {
        let dataset: DatasetFile = serde_json::from_str(SMALL_CAMPUS).unwrap();
        assert_eq!(dataset.default_zoom, DEFAULT_ZOOM);

        let campus = dataset.into_campus().unwrap();
        assert_eq!(campus.name(), "Test Campus");
        let hall = campus.get_building_by_id("hall").unwrap();
        assert_eq!(hall.category, Category::StudentServices);
        assert!(hall.amenities.is_empty());
        assert_eq!(hall.departments(), ["Registrar".to_string()]);
        assert_eq!(campus.walkways().edge_count(), 1);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let text = SMALL_CAMPUS.replace("student-services", "observatory");
        assert!(serde_json::from_str::<DatasetFile>(&text).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_dataset(Path::new("/nonexistent/campus.json")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("/nonexistent/campus.json"));
    }
}
