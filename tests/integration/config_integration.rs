//! Integration tests for configuration loading feeding the runner

use std::fs;
use tempfile::TempDir;
use tracegen::config::ConfigLoader;
use tracegen::prelude::*;

/// Test that a configured seed and delta drive the runner
#[test]
fn test_config_drives_runner() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tracegen.toml");
    fs::write(
        &config_file,
        "[generation]\nseed = 5\nclock_delta_ms = 20\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let runner = Runner::from_config(&config.generation);

    let forest = runner.run_forest(insert_timed_values(vec!['p', 'q']));
    assert_eq!(
        forest,
        vec![Tree::node(
            Timed::new('p', TimePoint::ZERO),
            vec![Tree::leaf(Timed::new('q', TimePoint::from_millis(20)))],
        )]
    );

    let (a, _) = runner.run(insert_random_value::<u64, _>());
    let (b, _) = run_seeded(insert_random_value::<u64, _>(), 5);
    assert_eq!(a, b);
}

/// Test that environment-specific project files override the base file
#[test]
fn test_project_env_file_overrides_base() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[generation]\nclock_delta_ms = 20\nseed = 1\n",
    )
    .unwrap();
    fs::write(
        config_dir.join("development.toml"),
        "[generation]\nclock_delta_ms = 30\n",
    )
    .unwrap();

    if std::env::var("TRACEGEN_ENV").is_err() {
        let config = ConfigLoader::load(temp_dir.path()).unwrap();
        assert_eq!(config.generation.clock_delta_ms, 30);
        assert_eq!(config.generation.seed, Some(1));
    }
}
