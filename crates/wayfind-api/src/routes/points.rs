//! Navigation point and connection endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};
use wayfind_core::PointId;
use wayfind_ops::{AddPointRequest, ConnectRequest};

use crate::types::{ops_error_response, ApiResponse, ApiState, ErrorResponse};

/// Handler for POST /api/points.
pub async fn create_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<AddPointRequest>,
) -> Response {
    info!(
        floor_plan = %request.floor_plan_id,
        x = request.x,
        y = request.y,
        "Create point request"
    );

    match state.ctx.add_navigation_point(request).await {
        Ok(created) => (StatusCode::CREATED, Json(ApiResponse::new(created))).into_response(),
        Err(e) => {
            warn!("Create point failed: {}", e);
            ops_error_response(e)
        }
    }
}

/// Handler for GET /api/points/{id}.
pub async fn get_handler(State(state): State<Arc<ApiState>>, Path(id): Path<PointId>) -> Response {
    match state.ctx.navigation_point(&id).await {
        Some(point) => Json(ApiResponse::new(point)).into_response(),
        None => ErrorResponse::not_found("POINT_NOT_FOUND", format!("point {}", id)),
    }
}

/// Handler for POST /api/connections.
///
/// Unknown ids are reported as `connected: false`, not as an error status.
pub async fn connect_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ConnectRequest>,
) -> Response {
    match state.ctx.connect_points(request).await {
        Ok(response) => Json(ApiResponse::new(response)).into_response(),
        Err(e) => {
            warn!("Connect failed: {}", e);
            ops_error_response(e)
        }
    }
}

/// Handler for DELETE /api/connections.
pub async fn disconnect_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<ConnectRequest>,
) -> Response {
    match state.ctx.disconnect_points(request).await {
        Ok(response) => Json(ApiResponse::new(response)).into_response(),
        Err(e) => {
            warn!("Disconnect failed: {}", e);
            ops_error_response(e)
        }
    }
}
