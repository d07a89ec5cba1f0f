//! Nearest building and straight-line directions

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use campus_nav_core::prelude::*;
use geojson::FeatureCollection;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::model::{AppState, BuildingSummary, Directions, LocationQuery, NearestBuilding};

#[derive(Debug, Deserialize)]
pub struct NearestQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct DirectionsQuery {
    pub to: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl DirectionsQuery {
    fn plan(&self, state: &AppState) -> Result<Route, ApiError> {
        let user_location = LocationQuery {
            lat: self.lat,
            lon: self.lon,
        }
        .coordinates()?;
        let destination = state
            .campus
            .get_building_by_id(&self.to)
            .ok_or_else(|| ApiError::BuildingNotFound(self.to.clone()))?;
        Ok(plan_route(user_location, state.default_origin, destination))
    }
}

pub async fn nearest(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<NearestQuery>,
) -> Result<Response, ApiError> {
    let from = Coordinates::new(query.lat, query.lon).validate()?;
    let (building, estimate) = state
        .campus
        .nearest_building(from)
        .ok_or_else(|| ApiError::Internal("Campus has no buildings".to_string()))?;

    Ok(Json(NearestBuilding {
        building: BuildingSummary::from(building),
        estimate,
    })
    .into_response())
}

pub async fn directions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DirectionsQuery>,
) -> Result<Json<Directions>, ApiError> {
    let route = query.plan(&state)?;
    Ok(Json(Directions::from(route)))
}

pub async fn directions_geojson(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DirectionsQuery>,
) -> Result<Response, ApiError> {
    let collection = query.plan(&state)?.to_geojson()?;
    geojson_response(&collection)
}

pub(crate) fn geojson_response(collection: &FeatureCollection) -> Result<Response, ApiError> {
    let body = serde_json::to_string(collection)
        .map_err(|err| ApiError::Internal(format!("GeoJSON serialization failed: {err}")))?;
    Ok(([(header::CONTENT_TYPE, "application/geo+json")], body).into_response())
}
