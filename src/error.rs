use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Startup failures: configuration, dataset loading, binding the listener
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Campus model error: {0}")]
    Campus(#[from] campus_nav_core::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request failures, rendered as `{"error": "..."}` with a matching status
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Building '{0}' not found")]
    BuildingNotFound(String),
    #[error("{0}")]
    BadRequest(String),
    /// Malformed query string or request body
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("Request timed out")]
    Timeout,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BuildingNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<campus_nav_core::Error> for ApiError {
    fn from(err: campus_nav_core::Error) -> Self {
        match err {
            campus_nav_core::Error::InvalidCoordinates { .. } => ApiError::BadRequest(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("{status}: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
