//! Floor plan endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};
use wayfind_core::{FloorPlan, FloorPlanId, NavigationPoint};
use wayfind_ops::AddFloorPlanRequest;

use crate::types::{ops_error_response, ApiResponse, ApiState, ErrorResponse};

/// Handler for GET /api/floor-plans - all floor plans in insertion order.
pub async fn list_handler(State(state): State<Arc<ApiState>>) -> Json<ApiResponse<Vec<FloorPlan>>> {
    Json(ApiResponse::new(state.ctx.floor_plans().await))
}

/// Handler for POST /api/floor-plans.
pub async fn create_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<AddFloorPlanRequest>,
) -> Response {
    info!(image = %request.image_ref, "Create floor plan request");

    match state.ctx.add_floor_plan(request).await {
        Ok(created) => (StatusCode::CREATED, Json(ApiResponse::new(created))).into_response(),
        Err(e) => {
            warn!("Create floor plan failed: {}", e);
            ops_error_response(e)
        }
    }
}

/// Handler for GET /api/floor-plans/{id}.
pub async fn get_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<FloorPlanId>,
) -> Response {
    match state.ctx.floor_plan(&id).await {
        Some(plan) => Json(ApiResponse::new(plan)).into_response(),
        None => ErrorResponse::not_found("FLOOR_PLAN_NOT_FOUND", format!("floor plan {}", id)),
    }
}

/// Handler for GET /api/floor-plans/{id}/points - empty for unknown ids.
pub async fn points_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<FloorPlanId>,
) -> Json<ApiResponse<Vec<NavigationPoint>>> {
    Json(ApiResponse::new(state.ctx.navigation_points(&id).await))
}
