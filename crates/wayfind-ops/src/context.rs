//! NavContext - The shared service behind the CLI and REST API.
//!
//! Holds the navigation graph behind a reader/writer lock. Path and
//! directions queries share read access; every mutation holds the write lock
//! for its whole read-then-write and, when a store is attached, until the
//! updated graph has been saved.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use wayfind_core::{FloorPlan, FloorPlanId, GraphStats, NavGraph, NavigationPoint, PointId};

use crate::config::Config;
use crate::error::OpsResult;
use crate::requests::*;
use crate::responses::*;
use crate::seed::demo_hospital;
use crate::store::Store;

/// The main operations context.
///
/// Cheap to clone; clones share the same graph.
#[derive(Debug, Clone)]
pub struct NavContext {
    graph: Arc<RwLock<NavGraph>>,
    store: Option<Store>,
}

impl NavContext {
    /// Create an in-memory context around `graph`.
    pub fn new(graph: NavGraph) -> Self {
        Self {
            graph: Arc::new(RwLock::new(graph)),
            store: None,
        }
    }

    /// Create a context that saves `graph` to `store` after each mutation.
    pub fn with_store(graph: NavGraph, store: Store) -> Self {
        Self {
            graph: Arc::new(RwLock::new(graph)),
            store: Some(store),
        }
    }

    /// Open the persisted graph in `config.data_dir`.
    ///
    /// An empty store is seeded with the demo hospital when
    /// `config.seed_demo` is set.
    pub fn open(config: &Config) -> OpsResult<Self> {
        let store = Store::new(&config.data_dir);
        let mut graph = store.load_or_default()?;

        if graph.floor_plan_count() == 0 && config.seed_demo {
            demo_hospital(&mut graph)?;
            store.save(&graph)?;
        }

        info!(
            data_dir = %store.root().display(),
            floor_plans = graph.floor_plan_count(),
            points = graph.point_count(),
            "Opened navigation graph"
        );

        Ok(Self::with_store(graph, store))
    }

    /// Apply a mutation under the write lock and persist the result.
    ///
    /// `changed` decides from the mutation's outcome whether a save is needed.
    /// The shared graph only changes once the save has succeeded.
    async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut NavGraph) -> OpsResult<T>,
        changed: impl FnOnce(&T) -> bool,
    ) -> OpsResult<T> {
        let mut graph = self.graph.write().await;
        let Some(store) = &self.store else {
            return apply(&mut graph);
        };

        // Work on a copy so a failed save leaves the shared graph untouched.
        let mut next = graph.clone();
        let outcome = apply(&mut next)?;

        if changed(&outcome) {
            store.save(&next)?;
            *graph = next;
        }

        Ok(outcome)
    }

    // =========================================================================
    // Floor plans
    // =========================================================================

    /// Add a floor plan.
    pub async fn add_floor_plan(
        &self,
        request: AddFloorPlanRequest,
    ) -> OpsResult<CreatedResponse<FloorPlanId>> {
        let id = self
            .mutate(|graph| Ok(graph.add_floor_plan(request)?), |_| true)
            .await?;
        info!(id = %id, "Created floor plan");
        Ok(CreatedResponse { id })
    }

    /// All floor plans in insertion order.
    pub async fn floor_plans(&self) -> Vec<FloorPlan> {
        self.graph.read().await.get_floor_plans()
    }

    /// Look up one floor plan.
    pub async fn floor_plan(&self, id: &FloorPlanId) -> Option<FloorPlan> {
        self.graph.read().await.get_floor_plan(id).cloned()
    }

    // =========================================================================
    // Navigation points
    // =========================================================================

    /// Add a navigation point.
    pub async fn add_navigation_point(
        &self,
        request: AddPointRequest,
    ) -> OpsResult<CreatedResponse<PointId>> {
        let id = self
            .mutate(|graph| Ok(graph.add_navigation_point(request)?), |_| true)
            .await?;
        info!(id = %id, "Created navigation point");
        Ok(CreatedResponse { id })
    }

    /// Points on a floor plan; empty for an unknown floor plan.
    pub async fn navigation_points(&self, floor_plan_id: &FloorPlanId) -> Vec<NavigationPoint> {
        self.graph.read().await.get_navigation_points(floor_plan_id)
    }

    /// Look up one navigation point.
    pub async fn navigation_point(&self, id: &PointId) -> Option<NavigationPoint> {
        self.graph.read().await.get_navigation_point(id).cloned()
    }

    /// Connect two points.
    pub async fn connect_points(&self, request: ConnectRequest) -> OpsResult<ConnectResponse> {
        let connected = self
            .mutate(
                |graph| Ok(graph.connect_points(&request.point_a, &request.point_b)),
                |connected| *connected,
            )
            .await?;

        if !connected {
            warn!(a = %request.point_a, b = %request.point_b, "Connect rejected");
        }
        Ok(ConnectResponse { connected })
    }

    /// Disconnect two points.
    pub async fn disconnect_points(
        &self,
        request: ConnectRequest,
    ) -> OpsResult<DisconnectResponse> {
        let disconnected = self
            .mutate(
                |graph| Ok(graph.disconnect_points(&request.point_a, &request.point_b)),
                |disconnected| *disconnected,
            )
            .await?;

        if !disconnected {
            warn!(a = %request.point_a, b = %request.point_b, "Disconnect rejected");
        }
        Ok(DisconnectResponse { disconnected })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Shortest path between two points.
    pub async fn find_path(&self, request: RouteRequest) -> PathResponse {
        let path = self.graph.read().await.find_path(&request.from, &request.to);
        debug!(
            from = %request.from,
            to = %request.to,
            hops = path.as_ref().map(|p| p.len().saturating_sub(1)),
            "Path query"
        );
        PathResponse::from(path)
    }

    /// Turn-by-turn directions between two points.
    pub async fn directions(&self, request: RouteRequest) -> DirectionsResponse {
        let steps = self
            .graph
            .read()
            .await
            .get_directions(&request.from, &request.to);
        debug!(
            from = %request.from,
            to = %request.to,
            steps = steps.as_ref().map(Vec::len),
            "Directions query"
        );
        DirectionsResponse::from(steps)
    }

    /// Summary counts.
    pub async fn stats(&self) -> GraphStats {
        self.graph.read().await.stats()
    }

    /// Persistence and summary information.
    pub async fn status(&self) -> StatusResponse {
        StatusResponse {
            graph_path: self.store.as_ref().map(Store::graph_path),
            persisted: self.store.as_ref().is_some_and(Store::exists),
            stats: self.stats().await,
        }
    }
}
