//! Integration tests for the tracegen binary

use std::process::Command;
use tempfile::TempDir;

fn tracegen(project: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tracegen"))
        .env("TRACEGEN_LOG", "off")
        .arg("--project")
        .arg(project.path())
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_demo_output_is_reproducible() {
    let project = TempDir::new().unwrap();
    let args = ["--seed", "9", "demo", "--steps", "3", "--alternatives", "2"];

    let first = tracegen(&project, &args);
    let second = tracegen(&project, &args);
    assert!(
        first.status.success(),
        "tracegen demo should succeed: stderr={:?}",
        String::from_utf8_lossy(&first.stderr)
    );
    assert_eq!(first.stdout, second.stdout);
    assert!(!first.stdout.is_empty());
}

#[test]
fn test_demo_json_parses() {
    let project = TempDir::new().unwrap();
    let output = tracegen(&project, &["--seed", "1", "demo", "--format", "json"]);
    assert!(output.status.success());
    let forest: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // One alternative before the first main-line reading.
    assert_eq!(forest.as_array().unwrap().len(), 2);
}

#[test]
fn test_paths_prints_one_line_per_history() {
    let project = TempDir::new().unwrap();
    let output = tracegen(
        &project,
        &["--seed", "2", "paths", "--steps", "2", "--alternatives", "1"],
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 3);
}

#[test]
fn test_zero_clock_delta_fails() {
    let project = TempDir::new().unwrap();
    let output = tracegen(&project, &["--clock-delta-ms", "0", "demo"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("clock_delta_ms"));
}

#[test]
fn test_init_config_writes_file() {
    let project = TempDir::new().unwrap();
    let output = tracegen(&project, &["init-config"]);
    assert!(output.status.success());
    assert!(project.path().join("config").join("config.toml").exists());
}
