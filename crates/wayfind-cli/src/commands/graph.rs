//! Graph editing commands.
//!
//! Each command loads the saved graph, applies one operation through
//! [`NavContext`] and lets the context persist the result.

use anyhow::{Context, Result};
use wayfind_core::{FloorPlanId, NavigationPoint};
use wayfind_ops::{AddFloorPlanRequest, AddPointRequest, Config, ConnectRequest, NavContext, Store};

use super::Output;

/// Open the saved graph without seeding it.
pub(crate) fn open(config: &Config) -> Result<NavContext> {
    let store = Store::new(&config.data_dir);
    let graph = store
        .load_or_default()
        .with_context(|| format!("Failed to load graph from {}", store.root().display()))?;
    Ok(NavContext::with_store(graph, store))
}

/// List floor plans.
pub async fn floors(config: &Config, out: Output) -> Result<()> {
    let ctx = open(config)?;
    let floor_plans = ctx.floor_plans().await;

    out.emit(&floor_plans, || {
        if floor_plans.is_empty() {
            println!("No floor plans. Add one with `wf add-floor` or run `wf seed`.");
            return;
        }
        for floor in &floor_plans {
            println!(
                "{:<12} {:<20} level {:>3}  {}x{}  {}",
                floor.id, floor.name, floor.level, floor.width, floor.height, floor.image_ref
            );
        }
    })
}

/// Add a floor plan.
pub async fn add_floor(config: &Config, out: Output, request: AddFloorPlanRequest) -> Result<()> {
    let ctx = open(config)?;
    let created = ctx.add_floor_plan(request).await?;

    out.emit(&created, || println!("Created floor plan {}", created.id))
}

/// List the points on one floor plan.
pub async fn points(config: &Config, out: Output, floor: String) -> Result<()> {
    let ctx = open(config)?;
    let floor = FloorPlanId::from(floor);
    let points = ctx.navigation_points(&floor).await;

    out.emit(&points, || {
        if points.is_empty() {
            println!("No navigation points on {}", floor);
            return;
        }
        for point in &points {
            print_point(point);
        }
    })
}

fn print_point(point: &NavigationPoint) {
    let connections = point
        .connections
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "{:<12} {:<20} {:<9} ({:>7.1}, {:>7.1})  -> [{}]",
        point.id, point.name, point.kind, point.x, point.y, connections
    );
}

/// Add a navigation point.
pub async fn add_point(config: &Config, out: Output, request: AddPointRequest) -> Result<()> {
    let ctx = open(config)?;
    let created = ctx.add_navigation_point(request).await?;

    out.emit(&created, || println!("Created navigation point {}", created.id))
}

/// Connect two points.
pub async fn connect(config: &Config, out: Output, a: String, b: String) -> Result<()> {
    let ctx = open(config)?;
    let response = ctx.connect_points(ConnectRequest::new(a.as_str(), b.as_str())).await?;

    out.emit(&response, || {
        if response.connected {
            println!("Connected {} <-> {}", a, b);
        } else {
            println!("Not connected: {} or {} is not a navigation point", a, b);
        }
    })?;

    if !response.connected {
        anyhow::bail!("Could not connect {} and {}", a, b);
    }
    Ok(())
}

/// Remove the edge between two points.
pub async fn disconnect(config: &Config, out: Output, a: String, b: String) -> Result<()> {
    let ctx = open(config)?;
    let response = ctx
        .disconnect_points(ConnectRequest::new(a.as_str(), b.as_str()))
        .await?;

    out.emit(&response, || {
        if response.disconnected {
            println!("Disconnected {} <-> {}", a, b);
        } else {
            println!("Not disconnected: {} or {} is not a navigation point", a, b);
        }
    })?;

    if !response.disconnected {
        anyhow::bail!("Could not disconnect {} and {}", a, b);
    }
    Ok(())
}

/// Show counts and the graph file location.
pub async fn status(config: &Config, out: Output) -> Result<()> {
    let ctx = open(config)?;
    let status = ctx.status().await;

    out.emit(&status, || {
        println!("Wayfind Status");
        println!("{:-<40}", "");
        if let Some(path) = &status.graph_path {
            println!("Graph file:   {}", path.display());
        }
        println!("Persisted:    {}", if status.persisted { "yes" } else { "no" });
        println!("Floor plans:  {}", status.stats.floor_plans);
        println!("Points:       {}", status.stats.points);
        println!("Edges:        {}", status.stats.edges);
        println!("Components:   {}", status.stats.components);
    })
}
