//! End-to-end integration tests for hostkit-cli
//!
//! These tests run the binary through cargo and are gated behind the
//! `integration` feature flag. Run with:
//!
//! ```sh
//! cargo test -p hostkit-cli --features integration
//! ```

#![cfg(feature = "integration")]

use std::process::Command;
use tempfile::TempDir;

fn hostkit(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "-q", "-p", "hostkit-cli", "--"])
        .args(args)
        .env("HOSTKIT_PROJECT_CONFIG_DIR", "/nonexistent")
        .output()
        .expect("Failed to run hostkit")
}

/// Test that hostkit --help works
#[test]
fn hostkit_help_works() {
    let output = hostkit(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("run"));
    assert!(stdout.contains("plugins"));
}

/// The extension output comes before the feature output
#[test]
fn hostkit_run_prints_extension_first() {
    let output = hostkit(&["run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Your plugin does something before your feature does",
            "your feature does something",
        ]
    );
}

/// Without the extension only the feature speaks
#[test]
fn hostkit_run_without_extension() {
    let output = hostkit(&["run", "--no-extension"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "your feature does something");
}

/// Config files select plugins and set the greeting
#[test]
fn hostkit_run_with_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("host.toml");
    std::fs::write(&path, "plugins = []\ngreeting = \"configured\"\n").unwrap();

    let output = hostkit(&["run", "--config", path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "configured");
}

/// Plugin listing shows the initialized extension
#[test]
fn hostkit_plugins_lists_extension() {
    let output = hostkit(&["plugins"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ feature-extension"));
    assert!(stdout.contains("before-do: feature-extension"));
}

/// Unknown plugins in a config file are reported
#[test]
fn hostkit_unknown_plugin_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("host.toml");
    std::fs::write(&path, "plugins = [\"ghost\"]\n").unwrap();

    let output = hostkit(&["plugins", "--config", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ghost"));
}

/// Extension init messages show at the default log level
#[test]
fn hostkit_run_logs_extension_init() {
    let output = hostkit(&["run"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Your feature has been extended"));
    assert!(stderr.contains("FeatureExtension.init()"));
}

/// A written default config drives the same run as no config at all
#[test]
fn hostkit_config_init_then_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf/host.toml");
    let path_arg = path.to_str().unwrap();

    let output = hostkit(&["config", "init", path_arg]);
    assert!(output.status.success());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"feature-extension\""));

    let again = hostkit(&["config", "init", path_arg]);
    assert!(!again.status.success());

    let output = hostkit(&["run", "--config", path_arg]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).lines().count(),
        2
    );
}
