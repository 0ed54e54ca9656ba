//! Path and directions endpoints.
//!
//! A missing route is a normal answer (`found: false`), so both handlers
//! always return 200 for well-formed queries.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use wayfind_core::PointId;
use wayfind_ops::{DirectionsResponse, PathResponse, RouteRequest};

use crate::types::{ApiResponse, ApiState};

/// Query parameters for route endpoints.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Start point id.
    pub from: PointId,
    /// Destination point id.
    pub to: PointId,
}

impl From<RouteQuery> for RouteRequest {
    fn from(query: RouteQuery) -> Self {
        RouteRequest::new(query.from, query.to)
    }
}

/// Handler for GET /api/path?from=..&to=..
pub async fn path_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<RouteQuery>,
) -> Json<ApiResponse<PathResponse>> {
    Json(ApiResponse::new(state.ctx.find_path(query.into()).await))
}

/// Handler for GET /api/directions?from=..&to=..
pub async fn directions_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<RouteQuery>,
) -> Json<ApiResponse<DirectionsResponse>> {
    Json(ApiResponse::new(state.ctx.directions(query.into()).await))
}
