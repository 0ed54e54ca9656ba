//! Core domain types for the Wayfind hospital navigation service.
//!
//! A [`NavGraph`] owns floor plans and the navigation points placed on them.
//! Points are joined by undirected edges; queries run a breadth-first search
//! over those edges and turn the resulting path into turn-by-turn directions.
//!
//! ```rust
//! use wayfind_core::{Direction, NavGraph, NewFloorPlan, NewNavigationPoint};
//!
//! let mut graph = NavGraph::new();
//! let floor = graph
//!     .add_floor_plan(NewFloorPlan::new("ground.png", 800, 600))
//!     .unwrap();
//! let a = graph.add_navigation_point(NewNavigationPoint::new(floor.clone(), 0.0, 0.0)).unwrap();
//! let b = graph.add_navigation_point(NewNavigationPoint::new(floor, 100.0, 0.0)).unwrap();
//! assert!(graph.connect_points(&a, &b));
//!
//! let steps = graph.get_directions(&a, &b).unwrap();
//! assert_eq!(steps[0].direction, Direction::Right);
//! ```

mod directions;
mod error;
mod graph;
mod model;
mod pathfinder;

pub use directions::{direction_between, DirectionStep};
pub use error::{NavError, NavResult};
pub use graph::{GraphSnapshot, GraphStats, NavGraph, SNAPSHOT_VERSION};
pub use model::{
    Direction, FloorPlan, FloorPlanId, NavigationPoint, NewFloorPlan, NewNavigationPoint, PointId,
    PointKind,
};
