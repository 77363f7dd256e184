// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Integration tests for the non-interactive commands.

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("cmt").unwrap()
}

#[test]
fn version_prints_version() {
    cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(contains("cmt "));
}

#[test]
fn types_lists_default_types() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("types")
        .assert()
        .success()
        .stdout(contains("feat :sparkles:"))
        .stdout(contains("fix :bug:"));
}

#[test]
fn types_respects_config_flag() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.toml");
    std::fs::write(
        &config_path,
        r#"
[[types]]
name = "hotfix"
emoji = ":fire:"
description = "An urgent fix"
"#,
    )
    .unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--config", config_path.to_str().unwrap(), "types"])
        .assert()
        .success()
        .stdout(contains("hotfix :fire:"));
}

#[test]
fn init_creates_config_file() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Created cmt.toml"));

    assert!(dir.path().join("cmt.toml").exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cmt.toml"), "").unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn commit_fails_without_staged_changes() {
    let dir = TempDir::new().unwrap();

    std::process::Command::new("git")
        .args(["init"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    cmd()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("commit")
        .assert()
        .failure()
        .stderr(contains("No staged changes"));
}
