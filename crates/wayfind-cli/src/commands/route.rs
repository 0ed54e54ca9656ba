//! Route query commands.
//!
//! A missing route is reported on stdout and exits successfully; only an
//! unreadable graph is an error.

use anyhow::Result;
use wayfind_ops::{Config, RouteRequest};

use super::graph::open;
use super::Output;

/// Print the shortest path between two points.
pub async fn path(config: &Config, out: Output, from: String, to: String) -> Result<()> {
    let ctx = open(config)?;
    let response = ctx.find_path(RouteRequest::new(from.as_str(), to.as_str())).await;

    out.emit(&response, || match &response.path {
        Some(path) => {
            let ids = path.iter().map(|id| id.as_str()).collect::<Vec<_>>();
            println!("{}", ids.join(" -> "));
            println!("{} hop(s)", path.len().saturating_sub(1));
        }
        None => println!("No path found between {} and {}", from, to),
    })
}

/// Print turn-by-turn directions between two points.
pub async fn directions(config: &Config, out: Output, from: String, to: String) -> Result<()> {
    let ctx = open(config)?;
    let response = ctx
        .directions(RouteRequest::new(from.as_str(), to.as_str()))
        .await;

    out.emit(&response, || match &response.steps {
        Some(steps) if steps.is_empty() => println!("You are already at {}", to),
        Some(steps) => {
            for (n, step) in steps.iter().enumerate() {
                println!("{:>3}. {}", n + 1, step.instruction);
            }
        }
        None => println!("No path found between {} and {}", from, to),
    })
}
