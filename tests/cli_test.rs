// Command line behavior of the elm-build-graph binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("elm-build-graph").unwrap()
}

#[test]
fn test_missing_argument() {
    cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--show-excluded"));
}

#[test]
fn test_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_file_argument() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("Main.elm");
    fs::write(&file, "module Main exposing (main)\n").unwrap();

    cmd()
        .arg(&file)
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: The first argument is not a directory"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_directory_without_repository() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: The first argument is not a git repository"));
}

#[test]
fn test_missing_directory() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path().join("nope"))
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR:"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("elm-build-graph.toml"), "[graph]\nrankdir = \"UP\"\n").unwrap();

    cmd()
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("rankdir"));
}

#[test]
fn test_layout_tool_missing() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(
        dir.path().join("elm-build-graph.toml"),
        "[layout]\ntred = \"definitely-not-a-real-tred\"\n",
    )
    .unwrap();

    // git may or may not accept the bare `.git`; either way nothing is generated
    cmd()
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR:"));

    assert!(!dir.path().join(".ReducedDigraph.elm").exists());
}
