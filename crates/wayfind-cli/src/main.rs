//! Wayfind CLI - build hospital floor-plan navigation graphs and query routes.
//!
//! Every command works on the graph saved in the data directory
//! (`--data-dir`, `WAYFIND_DATA_DIR`, or the configured default).
//!
//! `wf serve` keeps the graph in memory and writes the whole file after each
//! change, so edits made with other `wf` commands while it runs are lost on
//! its next save. Stop the server before editing, or edit through the API.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wayfind_core::PointKind;
use wayfind_ops::{AddFloorPlanRequest, AddPointRequest, Config};

mod commands;

use commands::{config as config_cmd, graph, route, seed, serve, Output};

/// Wayfind CLI - hospital floor-plan navigation.
#[derive(Parser, Debug)]
#[command(
    name = "wf",
    author,
    version,
    about = "Wayfind: floor-plan navigation graphs and turn-by-turn directions",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding graph.json (overrides config)
    #[arg(long, global = true, env = "WAYFIND_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List floor plans.
    Floors,

    /// Add a floor plan.
    AddFloor {
        /// Image reference (path, URL or data URI).
        image: String,

        /// Image width in pixels.
        #[arg(long)]
        width: u32,

        /// Image height in pixels.
        #[arg(long)]
        height: u32,

        /// Display name (defaults to "Floor N").
        #[arg(long)]
        name: Option<String>,

        /// Ordinal level (defaults to the number of existing floor plans).
        #[arg(long, allow_hyphen_values = true)]
        level: Option<i32>,
    },

    /// List navigation points on a floor plan.
    Points {
        /// Floor plan id.
        floor: String,
    },

    /// Add a navigation point.
    AddPoint {
        /// Floor plan id.
        floor: String,

        /// X coordinate in pixels.
        x: f64,

        /// Y coordinate in pixels.
        y: f64,

        /// Display name (defaults to "Point N").
        #[arg(long)]
        name: Option<String>,

        /// Point type: generic, room, elevator or stairs.
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<PointKind>,

        /// Existing point to connect to (can be repeated).
        #[arg(long = "connect", value_name = "POINT")]
        connections: Vec<String>,
    },

    /// Connect two points with an undirected edge.
    Connect {
        /// First point id.
        a: String,
        /// Second point id.
        b: String,
    },

    /// Remove the edge between two points.
    Disconnect {
        /// First point id.
        a: String,
        /// Second point id.
        b: String,
    },

    /// Shortest path between two points.
    Path {
        /// Start point id.
        from: String,
        /// Destination point id.
        to: String,
    },

    /// Turn-by-turn directions between two points.
    Directions {
        /// Start point id.
        from: String,
        /// Destination point id.
        to: String,
    },

    /// Write the demo hospital floor to the data directory.
    Seed {
        /// Replace an existing graph.
        #[arg(long)]
        force: bool,
    },

    /// Show graph counts and where it is stored.
    Status,

    /// Serve the REST API.
    ///
    /// The server holds the graph in memory and overwrites graph.json on every
    /// change. Edits made with other wf commands while it runs are lost; use
    /// the API instead, or stop the server first.
    Serve {
        /// Address to listen on (overrides config).
        #[arg(long)]
        bind: Option<String>,

        /// Do not seed the demo floor into an empty store.
        #[arg(long)]
        no_seed: bool,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Setup tracing based on verbosity; RUST_LOG wins when set.
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else if matches!(cli.command, Commands::Serve { .. }) {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = Config::load()?;
    // Config subcommands edit the file as loaded, without CLI overrides.
    let mut file_config = config.clone();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let out = Output { json: cli.json };

    match cli.command {
        Commands::Floors => graph::floors(&config, out).await?,

        Commands::AddFloor {
            image,
            width,
            height,
            name,
            level,
        } => {
            let request = AddFloorPlanRequest {
                image_ref: image,
                name,
                level,
                width,
                height,
            };
            graph::add_floor(&config, out, request).await?
        }

        Commands::Points { floor } => graph::points(&config, out, floor).await?,

        Commands::AddPoint {
            floor,
            x,
            y,
            name,
            kind,
            connections,
        } => {
            let request = AddPointRequest {
                floor_plan_id: floor.into(),
                x,
                y,
                name,
                kind,
                connections: connections.into_iter().map(Into::into).collect(),
            };
            graph::add_point(&config, out, request).await?
        }

        Commands::Connect { a, b } => graph::connect(&config, out, a, b).await?,

        Commands::Disconnect { a, b } => graph::disconnect(&config, out, a, b).await?,

        Commands::Path { from, to } => route::path(&config, out, from, to).await?,

        Commands::Directions { from, to } => route::directions(&config, out, from, to).await?,

        Commands::Seed { force } => seed::execute(&config, out, force)?,

        Commands::Status => graph::status(&config, out).await?,

        Commands::Serve { bind, no_seed } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            if no_seed {
                config.seed_demo = false;
            }
            serve::execute(&config).await?;
        }

        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => config_cmd::show(&config, out)?,
            ConfigCommands::Set { key, value } => {
                config_cmd::set(&mut file_config, &key, &value)?
            }
            ConfigCommands::Get { key } => config_cmd::get(&config, &key)?,
            ConfigCommands::Reset => config_cmd::reset()?,
            ConfigCommands::Path => match Config::config_file_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("(no config file path available)"),
            },
        },
    }

    Ok(())
}
