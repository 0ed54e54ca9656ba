//! Demo hospital floor used to seed an empty store.

use std::collections::HashMap;

use tracing::info;
use wayfind_core::{
    FloorPlanId, NavError, NavGraph, NavResult, NewFloorPlan, NewNavigationPoint, PointId,
    PointKind,
};

/// Image reference for the bundled ground floor plan.
pub const DEMO_IMAGE: &str = "floorplans/ground-floor.png";

const POINTS: &[(&str, f64, f64, PointKind)] = &[
    ("Entrance", 600.0, 760.0, PointKind::Generic),
    ("Lobby", 600.0, 600.0, PointKind::Generic),
    ("Reception", 400.0, 600.0, PointKind::Room),
    ("Waiting Area", 200.0, 600.0, PointKind::Room),
    ("Pharmacy", 800.0, 600.0, PointKind::Room),
    ("Stairs", 1000.0, 600.0, PointKind::Stairs),
    ("North Corridor", 600.0, 300.0, PointKind::Generic),
    ("Triage", 400.0, 300.0, PointKind::Room),
    ("Radiology", 200.0, 300.0, PointKind::Room),
    ("East Corridor", 800.0, 300.0, PointKind::Generic),
    ("Elevator", 1000.0, 300.0, PointKind::Elevator),
];

const CORRIDORS: &[(&str, &str)] = &[
    ("Entrance", "Lobby"),
    ("Lobby", "Reception"),
    ("Reception", "Waiting Area"),
    ("Lobby", "Pharmacy"),
    ("Pharmacy", "Stairs"),
    ("Lobby", "North Corridor"),
    ("North Corridor", "Triage"),
    ("Triage", "Radiology"),
    ("North Corridor", "East Corridor"),
    ("East Corridor", "Elevator"),
    ("Stairs", "Elevator"),
];

/// Add the demo ground floor and its corridors to `graph`.
pub fn demo_hospital(graph: &mut NavGraph) -> NavResult<FloorPlanId> {
    let floor = graph.add_floor_plan(
        NewFloorPlan::new(DEMO_IMAGE, 1200, 800)
            .with_name("Ground Floor")
            .with_level(0),
    )?;

    let mut ids: HashMap<&str, PointId> = HashMap::with_capacity(POINTS.len());
    for &(name, x, y, kind) in POINTS {
        let id = graph.add_navigation_point(
            NewNavigationPoint::new(floor.clone(), x, y)
                .with_name(name)
                .with_kind(kind),
        )?;
        ids.insert(name, id);
    }

    for &(a, b) in CORRIDORS {
        let (Some(ia), Some(ib)) = (ids.get(a), ids.get(b)) else {
            return Err(NavError::UnknownPoint {
                id: PointId::from(if ids.contains_key(a) { b } else { a }),
            });
        };
        graph.connect_points(ia, ib);
    }

    info!(
        floor_plan = %floor,
        points = POINTS.len(),
        corridors = CORRIDORS.len(),
        "Seeded demo hospital"
    );

    Ok(floor)
}
