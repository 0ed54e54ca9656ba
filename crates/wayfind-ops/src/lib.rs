//! Wayfind Operations Layer
//!
//! Typed operations over a shared navigation graph, consumed by both the CLI
//! and the REST API so the two behave identically.
//!
//! - **Requests / Responses**: serializable DTOs for each operation
//! - **NavContext**: owns the graph behind a reader/writer lock and persists
//!   it after every successful mutation
//! - **Store**: the on-disk `graph.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wayfind_ops::{Config, NavContext, RouteRequest};
//!
//! #[tokio::main]
//! async fn main() -> wayfind_ops::OpsResult<()> {
//!     let config = Config::load()?;
//!     let ctx = NavContext::open(&config)?;
//!
//!     let route = ctx
//!         .directions(RouteRequest::new("point-1", "point-4"))
//!         .await;
//!     for step in route.steps.unwrap_or_default() {
//!         println!("{}", step.instruction);
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod context;
mod error;
mod requests;
mod responses;
pub mod seed;
mod store;

// Re-export public API
pub use config::{Config, CONFIG_KEYS};
pub use context::NavContext;
pub use error::{OpsError, OpsResult};
pub use requests::*;
pub use responses::*;
pub use store::{Store, GRAPH_FILE};
