//! GeoJSON layers for the map view

use axum::{
    extract::State,
    response::Response,
};

use crate::buildings::CategoryQuery;
use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::model::AppState;
use crate::routing::geojson_response;

pub async fn buildings(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
) -> Result<Response, ApiError> {
    let collection = state.campus.buildings_geojson(query.category)?;
    geojson_response(&collection)
}

pub async fn walkways(State(state): State<AppState>) -> Result<Response, ApiError> {
    let collection = state.campus.walkways().to_geojson()?;
    geojson_response(&collection)
}
