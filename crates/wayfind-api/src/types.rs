//! API types and DTOs.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use wayfind_core::{GraphStats, NavError};
use wayfind_ops::{NavContext, OpsError};

/// Shared application state for the API.
pub struct ApiState {
    /// The operations context holding the graph.
    pub ctx: NavContext,
}

/// Response wrapper with timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data.
    pub data: T,
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    /// Create a new API response with current timestamp.
    pub fn new(data: T) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self { data, timestamp }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Graph counts.
    #[serde(flatten)]
    pub stats: GraphStats,
}

/// Error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

impl ErrorResponse {
    /// Build an error response with the given status.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(ApiResponse::new(self))).into_response()
    }

    /// 404 for an id that does not resolve.
    pub fn not_found(code: &str, id: impl std::fmt::Display) -> Response {
        ErrorResponse {
            code: code.to_string(),
            message: format!("{} not found", id),
        }
        .into_response_with(StatusCode::NOT_FOUND)
    }
}

impl From<OpsError> for ErrorResponse {
    fn from(err: OpsError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Error response for a failed operation.
pub fn ops_error_response(err: OpsError) -> Response {
    let status = status_for(&err);
    ErrorResponse::from(err).into_response_with(status)
}

/// HTTP status for an operations error.
pub fn status_for(err: &OpsError) -> StatusCode {
    match err {
        OpsError::Nav(NavError::UnknownFloorPlan { .. } | NavError::UnknownPoint { .. }) => {
            StatusCode::NOT_FOUND
        }
        OpsError::Nav(NavError::OutOfBounds { .. } | NavError::InvalidDimensions { .. }) => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
