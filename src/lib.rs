use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower::{ServiceBuilder, limit::GlobalConcurrencyLimitLayer, timeout::error::Elapsed};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{Cli, ServerConfig};
pub use error::{ApiError, ServerError};
pub use model::AppState;
pub use telemetry::init_tracing;

pub mod buildings;
pub mod config;
pub mod error;
pub mod extract;
pub mod map;
pub mod model;
pub mod routing;
pub mod session;
pub mod telemetry;

/// HTTP API over a loaded campus.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .timeout(config.request_timeout())
        .layer(GlobalConcurrencyLimitLayer::new(config.concurrency_limit));

    Router::new()
        .route("/health", get(health))
        .route("/api/campus", get(buildings::campus_info))
        .route("/api/categories", get(buildings::categories))
        .route("/api/buildings", get(buildings::list_buildings))
        .route("/api/buildings/{id}", get(buildings::building_detail))
        .route("/api/search", get(buildings::search))
        .route("/api/nearest", get(routing::nearest))
        .route("/api/directions", get(routing::directions))
        .route("/api/directions/geojson", get(routing::directions_geojson))
        .route("/api/map/buildings", get(map::buildings))
        .route("/api/map/walkways", get(map::walkways))
        .route("/api/session", post(session::apply_action))
        .layer(middleware)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}
