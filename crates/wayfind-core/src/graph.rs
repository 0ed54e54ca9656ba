//! The navigation graph store and its mutation API.

use std::collections::{HashMap, HashSet};

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NavError, NavResult};
use crate::model::{
    FloorPlan, FloorPlanId, NavigationPoint, NewFloorPlan, NewNavigationPoint, PointId, PointKind,
};

/// Version of the persisted snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Floor plans and navigation points for one facility.
///
/// Mutations take `&mut self` and queries take `&self`, so a single owner (or
/// a reader/writer lock around the graph) is enough to keep queries from ever
/// observing a half-applied edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "GraphSnapshot", try_from = "GraphSnapshot")]
pub struct NavGraph {
    floor_plans: Vec<FloorPlan>,
    points: Vec<NavigationPoint>,
    point_index: HashMap<PointId, usize>,
    next_floor_plan: u64,
    next_point: u64,
}

/// Summary counts for a [`NavGraph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of floor plans.
    pub floor_plans: usize,
    /// Number of navigation points across all floor plans.
    pub points: usize,
    /// Number of undirected edges.
    pub edges: usize,
    /// Number of connected components (isolated points count as one each).
    pub components: usize,
}

/// Serialized form of a [`NavGraph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Snapshot format version.
    pub version: u32,
    /// Floor plans in insertion order.
    pub floor_plans: Vec<FloorPlan>,
    /// Points in insertion order.
    pub points: Vec<NavigationPoint>,
    /// Last floor plan counter value handed out.
    pub next_floor_plan: u64,
    /// Last point counter value handed out.
    pub next_point: u64,
}

impl NavGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Floor plans
    // =========================================================================

    /// Add a floor plan and return its id.
    ///
    /// The name defaults to `Floor {n+1}` and the level to `n`, where `n` is
    /// the number of floor plans already stored.
    pub fn add_floor_plan(&mut self, request: NewFloorPlan) -> NavResult<FloorPlanId> {
        if request.width == 0 || request.height == 0 {
            return Err(NavError::InvalidDimensions {
                width: request.width,
                height: request.height,
            });
        }

        let existing = self.floor_plans.len();
        let id = self.allocate_floor_plan_id();
        let plan = FloorPlan {
            id: id.clone(),
            image_ref: request.image_ref,
            name: request
                .name
                .unwrap_or_else(|| format!("Floor {}", existing + 1)),
            level: request.level.unwrap_or(existing as i32),
            width: request.width,
            height: request.height,
        };

        debug!(id = %plan.id, name = %plan.name, level = plan.level, "Added floor plan");
        self.floor_plans.push(plan);
        Ok(id)
    }

    /// All floor plans in insertion order.
    pub fn get_floor_plans(&self) -> Vec<FloorPlan> {
        self.floor_plans.clone()
    }

    /// Look up a floor plan by id.
    pub fn get_floor_plan(&self, id: &FloorPlanId) -> Option<&FloorPlan> {
        self.floor_plans.iter().find(|plan| &plan.id == id)
    }

    // =========================================================================
    // Navigation points
    // =========================================================================

    /// Add a navigation point and return its id.
    ///
    /// Every initial connection is created with [`connect_points`](Self::connect_points),
    /// so adjacency is symmetric from the moment the point exists. Nothing is
    /// stored when validation fails.
    pub fn add_navigation_point(&mut self, request: NewNavigationPoint) -> NavResult<PointId> {
        let plan = self
            .get_floor_plan(&request.floor_plan_id)
            .ok_or_else(|| NavError::UnknownFloorPlan {
                id: request.floor_plan_id.clone(),
            })?;

        if !plan.contains(request.x, request.y) {
            return Err(NavError::OutOfBounds {
                floor_plan: plan.id.clone(),
                x: request.x,
                y: request.y,
                width: plan.width,
                height: plan.height,
            });
        }

        if let Some(missing) = request
            .connections
            .iter()
            .find(|id| !self.point_index.contains_key(*id))
        {
            return Err(NavError::UnknownPoint {
                id: missing.clone(),
            });
        }

        let on_floor = self
            .points
            .iter()
            .filter(|p| p.floor_plan_id == request.floor_plan_id)
            .count();

        let id = self.allocate_point_id();
        let point = NavigationPoint {
            id: id.clone(),
            floor_plan_id: request.floor_plan_id,
            x: request.x,
            y: request.y,
            name: request
                .name
                .unwrap_or_else(|| format!("Point {}", on_floor + 1)),
            kind: request.kind.unwrap_or(PointKind::Generic),
            connections: Vec::new(),
        };

        debug!(
            id = %point.id,
            floor_plan = %point.floor_plan_id,
            name = %point.name,
            x = point.x,
            y = point.y,
            "Added navigation point"
        );

        self.point_index.insert(id.clone(), self.points.len());
        self.points.push(point);

        for other in &request.connections {
            self.connect_points(&id, other);
        }

        Ok(id)
    }

    /// Points placed on the given floor plan, in insertion order.
    ///
    /// An unknown floor plan yields an empty list.
    pub fn get_navigation_points(&self, floor_plan_id: &FloorPlanId) -> Vec<NavigationPoint> {
        self.points
            .iter()
            .filter(|p| &p.floor_plan_id == floor_plan_id)
            .cloned()
            .collect()
    }

    /// Look up a navigation point by id.
    pub fn get_navigation_point(&self, id: &PointId) -> Option<&NavigationPoint> {
        self.point_index.get(id).map(|&idx| &self.points[idx])
    }

    /// Iterate over every point in insertion order.
    pub fn points(&self) -> impl Iterator<Item = &NavigationPoint> {
        self.points.iter()
    }

    /// Add an undirected edge between two points.
    ///
    /// Returns `false` when either id is unknown or both ids are the same
    /// point. Connecting an already connected pair is a successful no-op.
    pub fn connect_points(&mut self, a: &PointId, b: &PointId) -> bool {
        let (Some(&ia), Some(&ib)) = (self.point_index.get(a), self.point_index.get(b)) else {
            return false;
        };
        if ia == ib {
            return false;
        }

        if !self.points[ia].connections.contains(b) {
            self.points[ia].connections.push(b.clone());
        }
        if !self.points[ib].connections.contains(a) {
            self.points[ib].connections.push(a.clone());
        }

        debug!(from = %a, to = %b, "Connected points");
        true
    }

    /// Remove the undirected edge between two points.
    ///
    /// Returns `false` when either id is unknown; removing an edge that does
    /// not exist succeeds.
    pub fn disconnect_points(&mut self, a: &PointId, b: &PointId) -> bool {
        let (Some(&ia), Some(&ib)) = (self.point_index.get(a), self.point_index.get(b)) else {
            return false;
        };

        self.points[ia].connections.retain(|id| id != b);
        self.points[ib].connections.retain(|id| id != a);

        debug!(from = %a, to = %b, "Disconnected points");
        true
    }

    pub(crate) fn index_of(&self, id: &PointId) -> Option<usize> {
        self.point_index.get(id).copied()
    }

    pub(crate) fn point_at(&self, idx: usize) -> &NavigationPoint {
        &self.points[idx]
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Returns the number of floor plans.
    pub fn floor_plan_count(&self) -> usize {
        self.floor_plans.len()
    }

    /// Returns the number of navigation points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.points.iter().map(|p| p.connections.len()).sum::<usize>() / 2
    }

    /// Summary counts, including connected components.
    pub fn stats(&self) -> GraphStats {
        let (graph, _) = self.to_petgraph();
        GraphStats {
            floor_plans: self.floor_plan_count(),
            points: self.point_count(),
            edges: self.edge_count(),
            components: connected_components(&graph),
        }
    }

    /// Convert to a petgraph `UnGraph` for analysis.
    /// Returns the graph and a mapping from PointId to NodeIndex.
    pub fn to_petgraph(&self) -> (UnGraph<PointId, ()>, HashMap<PointId, NodeIndex>) {
        let mut graph = UnGraph::with_capacity(self.points.len(), self.edge_count());
        let mut id_to_index = HashMap::with_capacity(self.points.len());

        for point in &self.points {
            let idx = graph.add_node(point.id.clone());
            id_to_index.insert(point.id.clone(), idx);
        }

        // Each edge is stored on both endpoints; emit it once.
        for (pos, point) in self.points.iter().enumerate() {
            for other in &point.connections {
                if let Some(&other_pos) = self.point_index.get(other) {
                    if pos < other_pos {
                        graph.add_edge(NodeIndex::new(pos), NodeIndex::new(other_pos), ());
                    }
                }
            }
        }

        (graph, id_to_index)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Capture the graph in its serialized form.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            version: SNAPSHOT_VERSION,
            floor_plans: self.floor_plans.clone(),
            points: self.points.clone(),
            next_floor_plan: self.next_floor_plan,
            next_point: self.next_point,
        }
    }

    /// Rebuild a graph from a snapshot, checking every invariant.
    ///
    /// Rejects duplicate ids, points on unknown floor plans, dangling or
    /// one-sided connections, and self loops.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> NavResult<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(NavError::invalid_snapshot(format!(
                "unsupported version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }

        let mut floor_ids = HashSet::new();
        for plan in &snapshot.floor_plans {
            if !floor_ids.insert(&plan.id) {
                return Err(NavError::invalid_snapshot(format!(
                    "duplicate floor plan id {}",
                    plan.id
                )));
            }
        }

        let mut point_index = HashMap::with_capacity(snapshot.points.len());
        for (idx, point) in snapshot.points.iter().enumerate() {
            if !floor_ids.contains(&point.floor_plan_id) {
                return Err(NavError::invalid_snapshot(format!(
                    "point {} references unknown floor plan {}",
                    point.id, point.floor_plan_id
                )));
            }
            if point_index.insert(point.id.clone(), idx).is_some() {
                return Err(NavError::invalid_snapshot(format!(
                    "duplicate point id {}",
                    point.id
                )));
            }
        }

        for point in &snapshot.points {
            for other in &point.connections {
                if other == &point.id {
                    return Err(NavError::invalid_snapshot(format!(
                        "point {} is connected to itself",
                        point.id
                    )));
                }
                let Some(&other_idx) = point_index.get(other) else {
                    return Err(NavError::invalid_snapshot(format!(
                        "point {} is connected to unknown point {}",
                        point.id, other
                    )));
                };
                if !snapshot.points[other_idx].connections.contains(&point.id) {
                    return Err(NavError::invalid_snapshot(format!(
                        "connection {} -> {} is not symmetric",
                        point.id, other
                    )));
                }
            }
        }

        Ok(Self {
            floor_plans: snapshot.floor_plans,
            points: snapshot.points,
            point_index,
            next_floor_plan: snapshot.next_floor_plan,
            next_point: snapshot.next_point,
        })
    }

    fn allocate_floor_plan_id(&mut self) -> FloorPlanId {
        loop {
            self.next_floor_plan += 1;
            let id = FloorPlanId(format!("floor-{}", self.next_floor_plan));
            if self.get_floor_plan(&id).is_none() {
                return id;
            }
        }
    }

    fn allocate_point_id(&mut self) -> PointId {
        loop {
            self.next_point += 1;
            let id = PointId(format!("point-{}", self.next_point));
            if !self.point_index.contains_key(&id) {
                return id;
            }
        }
    }
}

impl From<NavGraph> for GraphSnapshot {
    fn from(graph: NavGraph) -> Self {
        GraphSnapshot {
            version: SNAPSHOT_VERSION,
            floor_plans: graph.floor_plans,
            points: graph.points,
            next_floor_plan: graph.next_floor_plan,
            next_point: graph.next_point,
        }
    }
}

impl TryFrom<GraphSnapshot> for NavGraph {
    type Error = NavError;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self, Self::Error> {
        NavGraph::from_snapshot(snapshot)
    }
}
