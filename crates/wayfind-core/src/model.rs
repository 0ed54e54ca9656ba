//! Floor plans, navigation points and the values derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a [`FloorPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorPlanId(pub String);

/// Identifier of a [`NavigationPoint`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub String);

macro_rules! string_id {
    ($ty:ident) => {
        impl $ty {
            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(FloorPlanId);
string_id!(PointId);

/// A named, leveled image canvas on which navigation points are placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    /// Unique identifier.
    pub id: FloorPlanId,
    /// Opaque reference to the raster image (path, URL or data URI).
    pub image_ref: String,
    /// Display label.
    pub name: String,
    /// Ordinal among floor plans.
    pub level: i32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl FloorPlan {
    /// Whether `(x, y)` lies inside this floor plan's pixel space.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=f64::from(self.width)).contains(&x) && (0.0..=f64::from(self.height)).contains(&y)
    }
}

/// Category of a navigation point. Only affects rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    /// Corridor junction or unlabelled waypoint.
    #[default]
    Generic,
    /// A room or department.
    Room,
    /// Elevator landing.
    Elevator,
    /// Stairwell.
    Stairs,
}

impl PointKind {
    /// Lowercase label used in serialized form and on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            PointKind::Generic => "generic",
            PointKind::Room => "room",
            PointKind::Elevator => "elevator",
            PointKind::Stairs => "stairs",
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for PointKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(PointKind::Generic),
            "room" => Ok(PointKind::Room),
            "elevator" => Ok(PointKind::Elevator),
            "stairs" => Ok(PointKind::Stairs),
            other => Err(format!(
                "unknown point type '{other}' (expected generic, room, elevator or stairs)"
            )),
        }
    }
}

/// A named node with a position, connected to other nodes by undirected edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPoint {
    /// Unique identifier.
    pub id: PointId,
    /// Owning floor plan.
    pub floor_plan_id: FloorPlanId,
    /// Horizontal coordinate in the floor plan's pixel space.
    pub x: f64,
    /// Vertical coordinate, growing downwards as in image space.
    pub y: f64,
    /// Display label.
    pub name: String,
    /// Point category.
    #[serde(rename = "type")]
    pub kind: PointKind,
    /// Adjacent points, in the order the edges were added.
    pub connections: Vec<PointId>,
}

impl NavigationPoint {
    /// Whether this point has an edge to `other`.
    pub fn is_connected_to(&self, other: &PointId) -> bool {
        self.connections.contains(other)
    }
}

/// Input for [`NavGraph::add_floor_plan`](crate::NavGraph::add_floor_plan).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFloorPlan {
    /// Opaque image reference.
    pub image_ref: String,
    /// Display label; defaults to `Floor {n+1}`.
    #[serde(default)]
    pub name: Option<String>,
    /// Ordinal level; defaults to the number of existing floor plans.
    #[serde(default)]
    pub level: Option<i32>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl NewFloorPlan {
    /// Create a floor plan request with default name and level.
    pub fn new(image_ref: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            image_ref: image_ref.into(),
            name: None,
            level: None,
            width,
            height,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the ordinal level.
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }
}

/// Input for [`NavGraph::add_navigation_point`](crate::NavGraph::add_navigation_point).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNavigationPoint {
    /// Owning floor plan.
    pub floor_plan_id: FloorPlanId,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Display label; defaults to `Point {n+1}` within the floor plan.
    #[serde(default)]
    pub name: Option<String>,
    /// Point category; defaults to [`PointKind::Generic`].
    #[serde(default, rename = "type")]
    pub kind: Option<PointKind>,
    /// Existing points to connect the new point to.
    #[serde(default)]
    pub connections: Vec<PointId>,
}

impl NewNavigationPoint {
    /// Create a generic, unnamed, unconnected point.
    pub fn new(floor_plan_id: FloorPlanId, x: f64, y: f64) -> Self {
        Self {
            floor_plan_id,
            x,
            y,
            name: None,
            kind: None,
            connections: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the point category.
    pub fn with_kind(mut self, kind: PointKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Connect the new point to an existing one on creation.
    pub fn connected_to(mut self, point: PointId) -> Self {
        self.connections.push(point);
        self
    }
}

/// Cardinal direction on the floor plan image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
}

impl Direction {
    /// Lowercase label used in instructions.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
