//! Request DTOs for operations.
//!
//! Floor plan and point creation reuse the core input types; the remaining
//! operations take the pairs of point ids defined here.

use serde::{Deserialize, Serialize};
use wayfind_core::PointId;

pub use wayfind_core::{NewFloorPlan as AddFloorPlanRequest, NewNavigationPoint as AddPointRequest};

/// Request to connect or disconnect two points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    /// First endpoint.
    pub point_a: PointId,
    /// Second endpoint.
    pub point_b: PointId,
}

impl ConnectRequest {
    /// Create a request for the edge between `a` and `b`.
    pub fn new(a: impl Into<PointId>, b: impl Into<PointId>) -> Self {
        Self {
            point_a: a.into(),
            point_b: b.into(),
        }
    }
}

/// Request for a path or directions between two points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Start point.
    pub from: PointId,
    /// Destination point.
    pub to: PointId,
}

impl RouteRequest {
    /// Create a route request.
    pub fn new(from: impl Into<PointId>, to: impl Into<PointId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
