// End-to-end tests for the fairpick binary.
// Each test runs against its own temporary config and state directory.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fairpick(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fairpick"))
        .arg("--config")
        .arg(home.join("config.toml"))
        .arg("--state-dir")
        .arg(home.join("state"))
        .args(args)
        .env_remove("FAIRPICK_EXCLUDE_GAP")
        .env_remove("FAIRPICK_STATE_DIR")
        .output()
        .expect("failed to run fairpick")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn cli_help_displays_correctly() {
    let output = Command::new(env!("CARGO_BIN_EXE_fairpick"))
        .arg("--help")
        .output()
        .expect("failed to run fairpick --help");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Fair random picker"));
    assert!(out.contains("add"));
    assert!(out.contains("pick"));
    assert!(out.contains("history"));
    assert!(out.contains("config"));
}

#[test]
fn pick_help_shows_options() {
    let output = Command::new(env!("CARGO_BIN_EXE_fairpick"))
        .args(["pick", "--help"])
        .output()
        .expect("failed to run fairpick pick --help");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("--from"));
    assert!(out.contains("--exclude-gap"));
    assert!(out.contains("--seed"));
}

#[test]
fn add_then_list_shows_weights() {
    let home = TempDir::new().unwrap();
    assert!(fairpick(home.path(), &["add", "Alice", "Bob", "Bob"]).status.success());

    let output = fairpick(home.path(), &["list"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Alice"));
    assert!(out.contains("Bob (x2)"));
}

#[test]
fn pick_from_empty_roster_reports_and_fails() {
    let home = TempDir::new().unwrap();
    let output = fairpick(home.path(), &["pick"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("candidate list is empty"));
}

#[test]
fn pick_alternates_with_two_candidates() {
    let home = TempDir::new().unwrap();
    assert!(fairpick(home.path(), &["add", "Alice", "Bob"]).status.success());

    let mut picks = Vec::new();
    for seed in ["1", "2", "3", "4"] {
        let output = fairpick(home.path(), &["pick", "--exclude-gap", "1", "--seed", seed]);
        assert!(output.status.success());
        picks.push(stdout(&output).trim().to_string());
    }
    for pair in picks.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn pick_json_reports_exclusions() {
    let home = TempDir::new().unwrap();
    assert!(fairpick(home.path(), &["add", "Alice", "Bob", "Charlie"]).status.success());
    assert!(fairpick(home.path(), &["pick", "--from", "Alice", "--seed", "0"]).status.success());

    let output = fairpick(home.path(), &["--format", "json", "pick", "--seed", "5"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["excluded"], serde_json::json!(["Alice"]));
    assert_ne!(value["winner"], "Alice");
    assert_eq!(value["pool_size"], 3);
}

#[test]
fn history_reset_clears_recent_picks() {
    let home = TempDir::new().unwrap();
    assert!(fairpick(home.path(), &["pick", "--from", "Alice,Bob", "--seed", "0"]).status.success());

    let output = fairpick(home.path(), &["--format", "json", "history", "show"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["history"].as_array().map(Vec::len), Some(1));

    assert!(fairpick(home.path(), &["history", "reset"]).status.success());
    let output = fairpick(home.path(), &["--format", "json", "history", "show"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["history"], serde_json::json!([]));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    assert!(fairpick(home.path(), &["config", "init"]).status.success());
    assert!(home.path().join("config.toml").exists());
    assert!(!fairpick(home.path(), &["config", "init"]).status.success());

    let output = fairpick(home.path(), &["config", "show"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("exclude_gap = 2"));
}

#[test]
fn config_init_force_replaces_broken_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(&config, "[selection\nexclude_gap = ").unwrap();

    assert!(!fairpick(home.path(), &["list"]).status.success());
    assert!(!fairpick(home.path(), &["config", "init"]).status.success());

    let output = fairpick(home.path(), &["config", "init", "--force"]);
    assert!(output.status.success());
    assert!(std::fs::read_to_string(&config).unwrap().contains("exclude_gap = 2"));
    assert!(fairpick(home.path(), &["list"]).status.success());
}

#[test]
fn config_validate_reports_broken_config_as_json() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "[selection\nexclude_gap = ").unwrap();

    let output = fairpick(home.path(), &["--format", "json", "config", "validate"]);
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["valid"], false);
    assert!(value["error"].as_str().unwrap().contains("Failed to parse config"));
}

#[test]
fn config_validate_accepts_defaults() {
    let home = TempDir::new().unwrap();
    let output = fairpick(home.path(), &["--format", "json", "config", "validate"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["valid"], true);
}
