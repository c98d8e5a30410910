use assert_cmd::Command;
use predicates::str::contains;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get a config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("config.json")
}

const BINARY_NAME: &str = "outage-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Regions command should print the default nine-region catalog when no
/// config file exists.
fn regions_prints_default_catalog() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("regions").arg("--config").arg(&config_path);
    cmd.assert()
        .success()
        .stdout(contains("Eastern Cape"))
        .stdout(contains("Gauteng"))
        .stdout(contains("Western Cape"));
}

#[test]
/// Init command should create the config file.
fn init_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init").arg("--config").arg(&config_path);
    cmd.assert().success().stdout(contains("Wrote default config"));

    assert!(config_path.exists());
}

#[test]
/// Init command should refuse to overwrite an existing file without --force.
fn init_refuses_overwrite_without_force() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    std::fs::write(&config_path, "{\"regions\":[]}").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init").arg("--config").arg(&config_path);
    cmd.assert().failure().stderr(contains("already exists"));

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init").arg("--config").arg(&config_path).arg("--force");
    cmd.assert().success();
}

#[test]
/// Regions command should respect a custom catalog from the config file.
fn regions_respects_custom_catalog() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    std::fs::write(&config_path, "{\"regions\":[\"Narnia\",\"Mordor\"]}").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("regions").arg("--config").arg(&config_path);
    cmd.assert()
        .success()
        .stdout(contains("Narnia"))
        .stdout(contains("Mordor"));
}

#[test]
/// Headless start should print one metrics refresh and exit.
fn headless_start_prints_snapshot() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--config")
        .arg(&config_path)
        .env_remove("RUST_LOG");
    cmd.assert()
        .success()
        .stdout(contains("Starting headless mode"))
        .stdout(contains("Total Outages"))
        .stdout(contains("Avg. Outage Duration"))
        .stdout(contains("exited successfully"));
}

#[test]
/// With RUST_LOG=debug the headless refresh also prints the region series.
fn headless_debug_prints_region_series() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--config")
        .arg(&config_path)
        .env("RUST_LOG", "debug");
    cmd.assert()
        .success()
        .stdout(contains("KwaZulu-Natal"))
        .stdout(contains("Mpumalanga"));
}

#[test]
/// Start against a malformed config file should fail with a clear error.
fn start_rejects_malformed_config() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    std::fs::write(&config_path, "not json").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--config")
        .arg(&config_path);
    cmd.assert().failure().stderr(contains("Failed to load config"));
}
