//! CLI command implementations.

use anyhow::Result;
use serde::Serialize;

pub mod config;
pub mod graph;
pub mod route;
pub mod seed;
pub mod serve;

/// How command results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Print machine-readable JSON instead of text.
    pub json: bool,
}

impl Output {
    /// Print `value` as pretty JSON when `--json` is set, otherwise run `text`.
    pub fn emit<T: Serialize>(self, value: &T, text: impl FnOnce()) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text();
        }
        Ok(())
    }
}
