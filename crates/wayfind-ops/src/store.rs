//! Persistence of the navigation graph as a single JSON file.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wayfind_core::NavGraph;

use crate::error::OpsResult;

/// File name of the persisted graph inside the data directory.
pub const GRAPH_FILE: &str = "graph.json";

/// Store manages the data directory and `graph.json`.
#[derive(Debug, Clone)]
pub struct Store {
    /// Directory holding the graph file.
    root: PathBuf,
}

impl Store {
    /// Create a new store rooted at the given data directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to `graph.json`.
    pub fn graph_path(&self) -> PathBuf {
        self.root.join(GRAPH_FILE)
    }

    /// Check if a graph has been saved.
    pub fn exists(&self) -> bool {
        self.graph_path().exists()
    }

    /// Create the data directory if needed.
    fn init(&self) -> OpsResult<()> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root)?;
            debug!(path = %self.root.display(), "Created data directory");
        }
        Ok(())
    }

    /// Save the graph, replacing any previous file.
    ///
    /// Written to a sibling temp file first and renamed into place, so a
    /// reader never sees a truncated graph.
    pub fn save(&self, graph: &NavGraph) -> OpsResult<PathBuf> {
        self.init()?;

        let graph_path = self.graph_path();
        let tmp_path = self.root.join(format!("{GRAPH_FILE}.tmp"));
        let json = serde_json::to_string_pretty(graph)?;
        std::fs::write(&tmp_path, &json)?;
        std::fs::rename(&tmp_path, &graph_path)?;

        info!(
            path = %graph_path.display(),
            floor_plans = graph.floor_plan_count(),
            points = graph.point_count(),
            edges = graph.edge_count(),
            "Saved graph"
        );

        Ok(graph_path)
    }

    /// Load the graph, or `None` if nothing has been saved yet.
    ///
    /// Snapshots that break an adjacency invariant are rejected.
    pub fn load(&self) -> OpsResult<Option<NavGraph>> {
        let graph_path = self.graph_path();

        if !graph_path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&graph_path)?;
        let snapshot = serde_json::from_str(&json)?;
        let graph = NavGraph::from_snapshot(snapshot)?;

        info!(
            path = %graph_path.display(),
            floor_plans = graph.floor_plan_count(),
            points = graph.point_count(),
            "Loaded graph"
        );

        Ok(Some(graph))
    }

    /// Load the graph, or an empty one if nothing has been saved yet.
    pub fn load_or_default(&self) -> OpsResult<NavGraph> {
        Ok(self.load()?.unwrap_or_default())
    }
}
