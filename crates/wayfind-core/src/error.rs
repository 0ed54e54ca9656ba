//! Error types for graph mutations.

use thiserror::Error;

use crate::model::{FloorPlanId, PointId};

/// Result type alias for graph mutations.
pub type NavResult<T> = Result<T, NavError>;

/// Reasons a mutation of the navigation graph can be rejected.
///
/// Lookups never produce these: an unknown id on a query is reported as an
/// absent value instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    /// The referenced floor plan does not exist.
    #[error("floor plan not found: {id}")]
    UnknownFloorPlan { id: FloorPlanId },

    /// The referenced navigation point does not exist.
    #[error("navigation point not found: {id}")]
    UnknownPoint { id: PointId },

    /// A point was placed outside its floor plan's pixel space.
    #[error("point ({x}, {y}) lies outside floor plan {floor_plan} ({width}x{height})")]
    OutOfBounds {
        floor_plan: FloorPlanId,
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },

    /// Floor plan dimensions must both be positive.
    #[error("invalid floor plan dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A persisted snapshot violates a graph invariant.
    #[error("invalid graph snapshot: {message}")]
    InvalidSnapshot { message: String },
}

impl NavError {
    /// Create a snapshot validation error.
    pub fn invalid_snapshot(message: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            message: message.into(),
        }
    }
}
