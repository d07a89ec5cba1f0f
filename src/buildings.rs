//! Campus metadata, building listings and search

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use campus_nav_core::prelude::*;
use chrono::Local;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::model::{
    AppState, BuildingDetail, BuildingSummary, CampusInfo, CategorySummary, LocationQuery,
    SearchHit,
};

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<Category>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn campus_info(State(state): State<AppState>) -> Response {
    let campus = &state.campus;
    Json(CampusInfo {
        name: campus.name(),
        center: campus.center(),
        default_zoom: campus.default_zoom(),
        building_count: campus.len(),
        path_node_count: campus.walkways().node_count(),
        categories: campus.categories_present(),
    })
    .into_response()
}

pub async fn categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    let categories = state
        .campus
        .category_counts()
        .into_iter()
        .map(|(id, count)| CategorySummary {
            id,
            info: id.info(),
            count,
        })
        .collect();
    Json(categories)
}

pub async fn list_buildings(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
) -> Response {
    let buildings: Vec<BuildingSummary<'_>> = state
        .campus
        .filter(query.category)
        .into_iter()
        .map(BuildingSummary::from)
        .collect();
    Json(buildings).into_response()
}

pub async fn building_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(location): ApiQuery<LocationQuery>,
) -> Result<Response, ApiError> {
    let user_location = location.coordinates()?;
    let building = state
        .campus
        .get_building_by_id(&id)
        .ok_or_else(|| ApiError::BuildingNotFound(id.clone()))?;

    let opening_hours = match building.opening_hours() {
        Ok(hours) => hours,
        Err(err) => {
            warn!("Building {}: {err}", building.id);
            None
        }
    };
    let open_now = opening_hours
        .as_ref()
        .map(|hours| hours.is_open_at(Local::now().naive_local()));

    let detail = BuildingDetail {
        panel: BuildingPanel::new(building, user_location),
        opening_hours,
        open_now,
    };
    Ok(Json(detail).into_response())
}

/// Queries shorter than the configured minimum return no results
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Response {
    let trimmed = query.q.trim();
    let hits: Vec<SearchHit<'_>> = if trimmed.chars().count() < state.min_query_len {
        Vec::new()
    } else {
        state
            .campus
            .search(trimmed)
            .into_iter()
            .map(SearchHit::from)
            .collect()
    };
    debug!("Search {trimmed:?}: {} hits", hits.len());
    Json(hits).into_response()
}
