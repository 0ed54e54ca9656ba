//! REST API service for Wayfind.
//!
//! Exposes the navigation graph to kiosk and staff frontends. Every response
//! body is wrapped in [`ApiResponse`] with a millisecond timestamp.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - Health check with graph counts
//! - `GET /api/floor-plans` - All floor plans
//! - `POST /api/floor-plans` - Add a floor plan
//! - `GET /api/floor-plans/{id}` - One floor plan
//! - `GET /api/floor-plans/{id}/points` - Points on a floor plan
//! - `POST /api/points` - Add a navigation point
//! - `GET /api/points/{id}` - One navigation point
//! - `POST /api/connections` - Connect two points
//! - `DELETE /api/connections` - Disconnect two points
//! - `GET /api/path?from=..&to=..` - Shortest path
//! - `GET /api/directions?from=..&to=..` - Turn-by-turn directions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wayfind_api::create_app;
//! use wayfind_core::NavGraph;
//! use wayfind_ops::NavContext;
//!
//! let ctx = NavContext::new(NavGraph::new());
//! let app = create_app(ctx);
//! ```

mod routes;
mod types;

pub use routes::{create_api_router, create_app};
pub use types::{ApiResponse, ApiState, ErrorResponse, HealthResponse};

use std::sync::Arc;

use wayfind_ops::NavContext;

/// Create a new API state around the given context.
pub fn create_api_state(ctx: NavContext) -> Arc<ApiState> {
    Arc::new(ApiState { ctx })
}
