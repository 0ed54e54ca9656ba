//! API route handlers.

mod floor_plans;
mod health;
mod navigation;
mod points;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use wayfind_ops::NavContext;

use crate::create_api_state;
use crate::types::ApiState;

/// Create the API router with all endpoints.
pub fn create_api_router(state: Arc<ApiState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(health::health_handler))
        // Floor plans
        .route(
            "/floor-plans",
            get(floor_plans::list_handler).post(floor_plans::create_handler),
        )
        .route("/floor-plans/{id}", get(floor_plans::get_handler))
        .route("/floor-plans/{id}/points", get(floor_plans::points_handler))
        // Points and edges
        .route("/points", post(points::create_handler))
        .route("/points/{id}", get(points::get_handler))
        .route(
            "/connections",
            post(points::connect_handler).delete(points::disconnect_handler),
        )
        // Queries
        .route("/path", get(navigation::path_handler))
        .route("/directions", get(navigation::directions_handler))
        // Request tracing (enable with RUST_LOG=tower_http=info or higher)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Create the application router with the API mounted under `/api`.
pub fn create_app(ctx: NavContext) -> Router {
    Router::new().nest("/api", create_api_router(create_api_state(ctx)))
}
