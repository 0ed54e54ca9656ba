//! Integration tests for the wf CLI.
//!
//! Every test runs against its own temporary data directory.
//!
//! Run with: `cargo test --package wayfind-cli --test cli_integration`

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Helper to run wf against `data_dir`.
fn run_wf(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wf"))
        .current_dir(data_dir)
        .env_remove("WAYFIND_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .output()
        .expect("Failed to execute wf command")
}

/// Run wf with `--json` and parse stdout.
fn run_wf_json(data_dir: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_wf(data_dir, &full);
    assert!(
        output.status.success(),
        "wf {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// Help and version
// =============================================================================

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    let output = run_wf(temp.path(), &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["add-floor", "add-point", "connect", "path", "directions", "serve"] {
        assert!(text.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_serve_help_warns_about_offline_edits() {
    let temp = TempDir::new().unwrap();
    let output = run_wf(temp.path(), &["serve", "--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("overwrites graph.json"));
    assert!(text.contains("stop the server first"));
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    let output = run_wf(temp.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("wf"));
}

// =============================================================================
// Seed
// =============================================================================

#[test]
fn test_seed_writes_demo_graph() {
    let temp = TempDir::new().unwrap();

    let stats = run_wf_json(temp.path(), &["seed"]);
    assert_eq!(stats["floor_plans"], 1);
    assert_eq!(stats["points"], 11);
    assert_eq!(stats["components"], 1);
    assert!(temp.path().join("graph.json").exists());

    let floors = run_wf_json(temp.path(), &["floors"]);
    assert_eq!(floors[0]["name"], "Ground Floor");
}

#[test]
fn test_seed_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    run_wf_json(temp.path(), &["seed"]);

    let output = run_wf(temp.path(), &["seed"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));

    let output = run_wf(temp.path(), &["seed", "--force"]);
    assert!(output.status.success(), "{}", stderr(&output));
}

#[test]
fn test_seeded_directions() {
    let temp = TempDir::new().unwrap();
    run_wf_json(temp.path(), &["seed"]);

    // Entrance -> Lobby -> North Corridor -> Triage -> Radiology
    let path = run_wf_json(temp.path(), &["path", "point-1", "point-9"]);
    assert_eq!(path["found"], true);
    assert_eq!(path["path"].as_array().unwrap().len(), 5);

    let output = run_wf(temp.path(), &["directions", "point-1", "point-9"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Go up from Entrance to Lobby"));
    assert!(text.contains("Go left from Triage to Radiology"));
}

// =============================================================================
// Building a graph
// =============================================================================

#[test]
fn test_build_corridor_and_route() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    let floor = run_wf_json(dir, &["add-floor", "ground.png", "--width", "200", "--height", "200"]);
    assert_eq!(floor["id"], "floor-1");

    let a = run_wf_json(dir, &["add-point", "floor-1", "0", "0", "--name", "A"]);
    let b = run_wf_json(dir, &["add-point", "floor-1", "100", "0", "--name", "B", "--connect", "point-1"]);
    let c = run_wf_json(dir, &["add-point", "floor-1", "100", "100", "--name", "C", "--type", "room"]);
    assert_eq!(a["id"], "point-1");
    assert_eq!(b["id"], "point-2");
    assert_eq!(c["id"], "point-3");

    let connected = run_wf_json(dir, &["connect", "point-2", "point-3"]);
    assert_eq!(connected["connected"], true);

    let points = run_wf_json(dir, &["points", "floor-1"]);
    assert_eq!(points.as_array().unwrap().len(), 3);
    assert_eq!(points[2]["type"], "room");

    let path = run_wf_json(dir, &["path", "point-1", "point-3"]);
    assert_eq!(path["path"], serde_json::json!(["point-1", "point-2", "point-3"]));

    let directions = run_wf_json(dir, &["directions", "point-1", "point-3"]);
    let steps = directions["steps"].as_array().unwrap();
    assert_eq!(steps[0]["direction"], "right");
    assert_eq!(steps[1]["direction"], "down");

    let status = run_wf_json(dir, &["status"]);
    assert_eq!(status["persisted"], true);
    assert_eq!(status["stats"]["edges"], 2);
}

#[test]
fn test_disconnect_leaves_no_path() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    run_wf_json(dir, &["add-floor", "ground.png", "--width", "200", "--height", "200"]);
    run_wf_json(dir, &["add-point", "floor-1", "10", "10"]);
    run_wf_json(dir, &["add-point", "floor-1", "20", "10", "--connect", "point-1"]);

    let response = run_wf_json(dir, &["disconnect", "point-1", "point-2"]);
    assert_eq!(response["disconnected"], true);

    let output = run_wf(dir, &["path", "point-1", "point-2"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No path found between point-1 and point-2"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_add_point_to_unknown_floor_fails() {
    let temp = TempDir::new().unwrap();

    let output = run_wf(temp.path(), &["add-point", "floor-9", "1", "1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("floor-9"));
}

#[test]
fn test_add_point_out_of_bounds_fails() {
    let temp = TempDir::new().unwrap();
    run_wf_json(temp.path(), &["add-floor", "ground.png", "--width", "50", "--height", "50"]);

    let output = run_wf(temp.path(), &["add-point", "floor-1", "80", "10"]);
    assert!(!output.status.success());

    let points = run_wf_json(temp.path(), &["points", "floor-1"]);
    assert_eq!(points, serde_json::json!([]));
}

#[test]
fn test_connect_unknown_point_fails() {
    let temp = TempDir::new().unwrap();
    run_wf_json(temp.path(), &["add-floor", "ground.png", "--width", "50", "--height", "50"]);
    run_wf_json(temp.path(), &["add-point", "floor-1", "1", "1"]);

    let output = run_wf(temp.path(), &["connect", "point-1", "ghost"]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_point_type_is_rejected() {
    let temp = TempDir::new().unwrap();

    let output = run_wf(temp.path(), &["add-point", "floor-1", "1", "1", "--type", "helipad"]);
    assert!(!output.status.success());
}
