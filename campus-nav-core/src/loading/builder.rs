use log::{info, warn};

use super::builtin::builtin_campus;
use super::config::CampusModelConfig;
use super::dataset::read_dataset;
use crate::{Campus, Error, haversine_miles};

/// Buildings farther than this from the campus center are reported as suspicious
const CAMPUS_RADIUS_MILES: f64 = 5.0;

/// Creates the campus model described by the configuration
///
/// # Errors
///
/// Returns an error if the dataset file is missing or malformed, or if it
/// contains duplicate building ids or invalid coordinates
pub fn create_campus_model(config: &CampusModelConfig) -> Result<Campus, Error> {
    validate_config(config)?;

    let campus = match &config.dataset_path {
        Some(path) => {
            info!("Loading campus dataset: {}", path.display());
            read_dataset(path)?.into_campus()?
        }
        None => {
            info!("Using built-in campus dataset");
            builtin_campus()?
        }
    };

    if campus.is_empty() {
        return Err(Error::InvalidData(format!(
            "Campus dataset '{}' contains no buildings",
            campus.name()
        )));
    }

    validate_building_bounds(&campus);
    validate_opening_hours(&campus);
    validate_walkways(&campus);

    info!(
        "Campus model created: {} with {} buildings in {} categories",
        campus.name(),
        campus.len(),
        campus.categories_present().len()
    );
    Ok(campus)
}

fn validate_config(config: &CampusModelConfig) -> Result<(), Error> {
    if let Some(path) = &config.dataset_path
        && !path.is_file()
    {
        return Err(Error::InvalidData(format!(
            "Dataset file not found: {}",
            path.display()
        )));
    }
    Ok(())
}

fn validate_building_bounds(campus: &Campus) {
    let center = campus.center();
    let outliers: Vec<&str> = campus
        .buildings()
        .iter()
        .filter(|b| haversine_miles(center, b.coordinates) > CAMPUS_RADIUS_MILES)
        .map(|b| b.id.as_str())
        .collect();

    if !outliers.is_empty() {
        warn!(
            "{} of {} buildings lie more than {CAMPUS_RADIUS_MILES} miles from the campus \
            center and may have swapped or mistyped coordinates: {}",
            outliers.len(),
            campus.len(),
            outliers.join(", ")
        );
    }
}

fn validate_opening_hours(campus: &Campus) {
    for building in campus.buildings() {
        if let Err(e) = building.opening_hours() {
            warn!("Building {}: {e}; open/closed status will be unavailable", building.id);
        }
    }
}

fn validate_walkways(campus: &Campus) {
    let walkways = campus.walkways();
    if walkways.is_empty() {
        log::debug!("No walkway network in dataset");
        return;
    }

    for (from, to) in walkways.asymmetric_links() {
        warn!("Walkway link {from} -> {to} is not listed in the reverse direction");
    }
    for (from, to) in walkways.dangling_links() {
        warn!("Walkway node {from} links to unknown node {to}");
    }

    let components = walkways.component_count();
    if components > 1 {
        warn!("Walkway network is split into {components} disconnected parts");
    }

    log::debug!(
        "Walkway network: {} nodes, {} segments, {:.2} mi",
        walkways.node_count(),
        walkways.edge_count(),
        walkways.total_length()
    );
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn default_config_uses_builtin_campus() {
        let campus = create_campus_model(&CampusModelConfig::default()).unwrap();
        assert_eq!(campus.len(), 15);
        assert_eq!(campus.name(), super::super::CAMPUS_NAME);
    }

    #[test]
    fn missing_dataset_file_is_rejected() {
        let config = CampusModelConfig {
            dataset_path: Some(PathBuf::from("/nonexistent/campus.json")),
        };
        let err = create_campus_model(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidData(msg) if msg.contains("not found")));
    }
}
