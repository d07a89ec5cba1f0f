use std::sync::Arc;

use campus_nav_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared, read-only state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub campus: Arc<Campus>,
    /// Directions origin for clients without a position
    pub default_origin: Coordinates,
    pub min_query_len: usize,
}

impl AppState {
    pub fn new(campus: Campus, config: &ServerConfig) -> Self {
        let default_origin = config.default_origin.unwrap_or_else(|| campus.center());
        Self {
            campus: Arc::new(campus),
            default_origin,
            min_query_len: config.min_query_len,
        }
    }
}

/// Optional `lat`/`lon` pair from a query string
#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl LocationQuery {
    /// `None` when neither is given; both must be present and in range otherwise
    pub fn coordinates(&self) -> Result<Option<Coordinates>, ApiError> {
        match (self.lat, self.lon) {
            (None, None) => Ok(None),
            (Some(lat), Some(lon)) => Ok(Some(Coordinates::new(lat, lon).validate()?)),
            _ => Err(ApiError::BadRequest(
                "Both 'lat' and 'lon' are required for a position".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CampusInfo<'a> {
    pub name: &'a str,
    pub center: Coordinates,
    pub default_zoom: u8,
    pub building_count: usize,
    pub path_node_count: usize,
    /// Categories with at least one building, in dataset order
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub id: Category,
    #[serde(flatten)]
    pub info: CategoryInfo,
    pub count: usize,
}

/// List and map entry for a building
#[derive(Debug, Serialize)]
pub struct BuildingSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub short_name: &'a str,
    pub category: Category,
    pub icon: &'static str,
    pub coordinates: Coordinates,
    pub quick_hours: Option<&'a str>,
}

impl<'a> From<&'a Building> for BuildingSummary<'a> {
    fn from(building: &'a Building) -> Self {
        Self {
            id: &building.id,
            name: &building.name,
            short_name: &building.short_name,
            category: building.category,
            icon: building.category.icon(),
            coordinates: building.coordinates,
            quick_hours: building.quick_hours(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BuildingDetail<'a> {
    #[serde(flatten)]
    pub panel: BuildingPanel<'a>,
    /// Parsed hours; absent when the building lists none or they do not parse
    pub opening_hours: Option<OpeningHours>,
    pub open_now: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub icon: &'static str,
    pub subtitle: String,
}

impl<'a> From<&'a Building> for SearchHit<'a> {
    fn from(building: &'a Building) -> Self {
        Self {
            id: &building.id,
            name: &building.name,
            icon: building.category.icon(),
            subtitle: search_subtitle(building),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NearestBuilding<'a> {
    pub building: BuildingSummary<'a>,
    pub estimate: WalkingEstimate,
}

#[derive(Debug, Serialize)]
pub struct Directions {
    pub from: &'static str,
    pub to: String,
    pub route: Route,
}

impl From<Route> for Directions {
    fn from(route: Route) -> Self {
        Self {
            from: route.origin.label(),
            to: route.destination.name.clone(),
            route,
        }
    }
}
