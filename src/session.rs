//! Stateless navigator session: the client posts its state and an action
//! and receives the next state with the view derived from it

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use campus_nav_core::prelude::*;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::model::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub state: NavigatorState,
    pub action: Action,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse<'a> {
    pub state: &'a NavigatorState,
    pub view: NavigatorView<'a>,
}

pub async fn apply_action(
    State(app): State<AppState>,
    ApiJson(request): ApiJson<SessionRequest>,
) -> Result<Response, ApiError> {
    let now = Utc::now();
    request
        .state
        .validate(now)
        .map_err(|err| ApiError::BadRequest(format!("Invalid session state: {err}")))?;

    debug!("Session action: {:?}", request.action);
    let next = request.state.apply(request.action, &app.campus, now);
    let view = NavigatorView::new(&next, &app.campus, app.default_origin);
    Ok(Json(SessionResponse { state: &next, view }).into_response())
}
