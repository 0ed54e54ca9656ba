//! Error types for the operations layer.

use thiserror::Error;
use wayfind_core::NavError;

/// Result type for operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors that can occur during operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// The graph rejected a mutation.
    #[error(transparent)]
    Nav(#[from] NavError),

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OpsError {
    /// Stable machine-readable code, used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            OpsError::Nav(NavError::UnknownFloorPlan { .. }) => "FLOOR_PLAN_NOT_FOUND",
            OpsError::Nav(NavError::UnknownPoint { .. }) => "POINT_NOT_FOUND",
            OpsError::Nav(NavError::OutOfBounds { .. }) => "OUT_OF_BOUNDS",
            OpsError::Nav(NavError::InvalidDimensions { .. }) => "INVALID_DIMENSIONS",
            OpsError::Nav(NavError::InvalidSnapshot { .. }) => "INVALID_SNAPSHOT",
            OpsError::Io(_) => "IO_ERROR",
            OpsError::Json(_) => "JSON_ERROR",
            OpsError::Config(_) => "CONFIG_ERROR",
        }
    }
}
