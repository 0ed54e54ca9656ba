//! Turn-by-turn directions derived from a path.

use serde::{Deserialize, Serialize};

use crate::graph::NavGraph;
use crate::model::{Direction, NavigationPoint, PointId};

/// One human-readable instruction covering a single edge of a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionStep {
    /// Name of the point the step starts at.
    pub from: String,
    /// Name of the point the step ends at.
    pub to: String,
    /// Dominant direction of travel on the floor plan image.
    pub direction: Direction,
    /// Instruction text, e.g. `Go right from Entrance to Reception`.
    pub instruction: String,
}

impl DirectionStep {
    fn between(current: &NavigationPoint, next: &NavigationPoint) -> Self {
        let direction = direction_between(next.x - current.x, next.y - current.y);
        Self {
            from: current.name.clone(),
            to: next.name.clone(),
            direction,
            instruction: format!("Go {} from {} to {}", direction, current.name, next.name),
        }
    }
}

/// Direction of a move by `(dx, dy)` in image space.
///
/// Horizontal wins only when strictly dominant; equal magnitudes resolve to
/// the vertical axis.
pub fn direction_between(dx: f64, dy: f64) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

impl NavGraph {
    /// Directions along the shortest path from `start` to `end`.
    ///
    /// `None` means there is no path; a path of one point yields an empty list.
    pub fn get_directions(&self, start: &PointId, end: &PointId) -> Option<Vec<DirectionStep>> {
        let path = self.find_path(start, end)?;
        let points = path
            .iter()
            .map(|id| self.get_navigation_point(id))
            .collect::<Option<Vec<_>>>()?;

        Some(
            points
                .windows(2)
                .map(|pair| DirectionStep::between(pair[0], pair[1]))
                .collect(),
        )
    }
}
