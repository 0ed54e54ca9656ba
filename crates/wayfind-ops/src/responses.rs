//! Response DTOs for operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wayfind_core::{DirectionStep, GraphStats, PointId};

/// Response carrying the id of a newly created record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse<T> {
    /// Identifier assigned to the new record.
    pub id: T,
}

/// Response from a connect operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectResponse {
    /// Whether the edge now exists. `false` means an id did not resolve.
    pub connected: bool,
}

/// Response from a disconnect operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisconnectResponse {
    /// Whether both points exist and no longer share an edge.
    pub disconnected: bool,
}

/// Response from a path query.
///
/// `found: false` with `path: null` means no route; a trivial route is
/// `found: true` with a single id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResponse {
    /// Whether a path exists.
    pub found: bool,
    /// Point ids from start to destination, inclusive.
    pub path: Option<Vec<PointId>>,
}

impl From<Option<Vec<PointId>>> for PathResponse {
    fn from(path: Option<Vec<PointId>>) -> Self {
        Self {
            found: path.is_some(),
            path,
        }
    }
}

/// Response from a directions query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// Whether a path exists.
    pub found: bool,
    /// One step per edge of the path; empty when start equals destination.
    pub steps: Option<Vec<DirectionStep>>,
}

impl From<Option<Vec<DirectionStep>>> for DirectionsResponse {
    fn from(steps: Option<Vec<DirectionStep>>) -> Self {
        Self {
            found: steps.is_some(),
            steps,
        }
    }
}

/// Response from a status query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Path of the persisted graph, if persistence is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_path: Option<PathBuf>,
    /// Whether the graph file exists.
    pub persisted: bool,
    /// Summary counts.
    pub stats: GraphStats,
}
