//! Seed command implementation.

use anyhow::Result;
use tracing::info;
use wayfind_core::NavGraph;
use wayfind_ops::{seed::demo_hospital, Config, Store};

use super::Output;

/// Write the demo hospital floor into the data directory.
///
/// Refuses to touch a store that already has floor plans unless `force` is set,
/// in which case the existing graph is replaced.
pub fn execute(config: &Config, out: Output, force: bool) -> Result<()> {
    let store = Store::new(&config.data_dir);

    if let Some(existing) = store.load()? {
        if existing.floor_plan_count() > 0 && !force {
            anyhow::bail!(
                "{} already holds {} floor plan(s); use --force to replace it",
                store.graph_path().display(),
                existing.floor_plan_count()
            );
        }
    }

    let mut graph = NavGraph::new();
    let floor = demo_hospital(&mut graph)?;
    let path = store.save(&graph)?;
    info!(floor = %floor, path = %path.display(), "Seeded demo hospital");

    let stats = graph.stats();
    out.emit(&stats, || {
        println!("Seeded demo hospital floor {} into {}", floor, path.display());
        println!("{} points, {} corridors", stats.points, stats.edges);
    })
}
