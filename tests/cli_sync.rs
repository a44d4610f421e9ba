//! Integration tests for the extsync binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_extsync")
}

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Write a config file pointing one entry at `base` with `pattern`.
fn write_config(path: &Path, base: &Path, pattern: &str) {
    let config = extsync::Config {
        contents: vec![extsync::ContentEntry::new(base, pattern)],
        ..extsync::Config::default()
    };
    fs::write(path, toml::to_string(&config).unwrap()).unwrap();
}

#[test]
fn sync_copies_and_reports() {
    let dir = tempdir().unwrap();
    let ext = dir.path().join("ext");
    write_file(&ext.join("guide").join("intro.rst"), "hello\n");
    let srcdir = dir.path().join("build");
    let config_path = dir.path().join("extsync.toml");
    write_config(&config_path, &ext, "guide/*.rst");

    let output = Command::new(bin())
        .args([
            "--config",
            config_path.to_string_lossy().as_ref(),
            "--srcdir",
            srcdir.to_string_lossy().as_ref(),
        ])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "sync failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Copied: 1 files"));
    assert!(srcdir.join("guide").join("intro.rst").exists());
}

#[test]
fn json_output_is_a_single_event_line() {
    let dir = tempdir().unwrap();
    let ext = dir.path().join("ext");
    write_file(&ext.join("a.rst"), "a\n");
    let srcdir = dir.path().join("build");
    let config_path = dir.path().join("extsync.toml");
    write_config(&config_path, &ext, "*.rst");

    let output = Command::new(bin())
        .args([
            "--config",
            config_path.to_string_lossy().as_ref(),
            "--srcdir",
            srcdir.to_string_lossy().as_ref(),
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let event: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(event["event"], "sync");
    assert_eq!(event["status"], "success");
    assert_eq!(event["copied"], 1);
    assert_eq!(event["skipped"], 0);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let ext = dir.path().join("ext");
    write_file(&ext.join("a.rst"), "a\n");
    let srcdir = dir.path().join("build");
    let config_path = dir.path().join("extsync.toml");
    write_config(&config_path, &ext, "*.rst");

    let output = Command::new(bin())
        .args([
            "--config",
            config_path.to_string_lossy().as_ref(),
            "--srcdir",
            srcdir.to_string_lossy().as_ref(),
            "--dry-run",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!srcdir.join("a.rst").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dry run"));
}

#[test]
fn missing_config_fails_the_build() {
    let dir = tempdir().unwrap();

    let output = Command::new(bin())
        .args([
            "--config",
            dir.path().join("nope.toml").to_string_lossy().as_ref(),
            "--srcdir",
            dir.path().join("build").to_string_lossy().as_ref(),
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("IO error"));
}

#[test]
fn unknown_config_keys_warn_but_do_not_fail() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("extsync.toml");
    fs::write(&config_path, "contnets = []\n").unwrap();

    let output = Command::new(bin())
        .args([
            "--config",
            config_path.to_string_lossy().as_ref(),
            "--srcdir",
            dir.path().join("build").to_string_lossy().as_ref(),
        ])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "unexpected failure: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unknown config key 'contnets'"));
}
