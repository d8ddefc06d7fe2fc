//! Binary-level tests.

use std::path::Path;
use std::process::Command;

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run scenereel with color off and the config pointed at `config`.
fn run_scenereel(args: &[&str], config: &Path) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_scenereel"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("SCENEREEL_CONFIG", config)
        .env("SCENEREEL_LOG", "off")
        .output()
        .expect("Failed to execute scenereel");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}

fn scenereel(config: &Path) -> AssertCommand {
    let mut cmd = AssertCommand::new(env!("CARGO_BIN_EXE_scenereel"));
    cmd.env("NO_COLOR", "1")
        .env("SCENEREEL_CONFIG", config)
        .env("SCENEREEL_LOG", "off");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    scenereel(&dir.path().join("config.toml"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("scenes"))
        .stdout(predicate::str::contains("frame"));
}

#[test]
fn scenes_prints_table() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_scenereel(&["scenes"], &dir.path().join("config.toml"));
    assert_eq!(code, 0);
    assert!(stdout.contains("1.    0.00s    3.00s   3.00s  1831 Civil War"));
    assert!(stdout.contains("7 scenes, 22.2s (00:22)"));
}

#[test]
fn scenes_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_scenereel(&["scenes", "--json"], &dir.path().join("config.toml"));
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let scenes = value.as_array().unwrap();
    assert_eq!(scenes.len(), 7);
    assert_eq!(scenes[1]["name"], "Teleport");
    assert_eq!(scenes[1]["start"], 3.0);
    assert_eq!(scenes[5]["cues"], 4);
}

#[test]
fn frame_prints_subtitle() {
    let dir = TempDir::new().unwrap();
    scenereel(&dir.path().join("config.toml"))
        .args(["frame", "--at", "1"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Year: 1831 - Civil War\n"));
}

#[test]
fn frame_respects_size() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_scenereel(
        &["frame", "--at", "20", "--width", "30", "--height", "5"],
        &dir.path().join("config.toml"),
    );
    assert_eq!(code, 0);
    let canvas: Vec<&str> = stdout.lines().take(5).collect();
    assert!(canvas.iter().all(|line| line.chars().count() <= 30));
}

#[test]
fn frame_rejects_zero_size() {
    let dir = TempDir::new().unwrap();
    scenereel(&dir.path().join("config.toml"))
        .args(["frame", "--at", "1", "--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--width and --height"));
}

#[test]
fn headless_play_runs_to_completion() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr, code) = run_scenereel(
        &["play", "--headless", "--speed", "16", "--voice", "none"],
        &dir.path().join("config.toml"),
    );
    assert_eq!(code, 0, "stderr: {stderr}");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("[00:00] 1/7 1831 Civil War"));
    assert!(lines[7].ends_with("sequence complete"));
}

#[test]
fn negative_speed_is_rejected() {
    let dir = TempDir::new().unwrap();
    scenereel(&dir.path().join("config.toml"))
        .args(["play", "--headless", "--speed", "-1", "--voice", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid playback speed"));
}

#[test]
fn no_voice_conflicts_with_voice() {
    let dir = TempDir::new().unwrap();
    scenereel(&dir.path().join("config.toml"))
        .args(["play", "--no-voice", "--voice", "timed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn config_path_honours_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    let (stdout, _, code) = run_scenereel(&["config", "path"], &path);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), path.display().to_string());
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    let (stdout, _, code) = run_scenereel(&["config", "init"], &path);
    assert_eq!(code, 0);
    assert!(stdout.contains("Created"));
    assert!(path.exists());

    let (stdout, _, code) = run_scenereel(&["config", "init"], &path);
    assert_eq!(code, 0);
    assert!(stdout.contains("already exists"));

    let (stdout, _, code) = run_scenereel(&["config", "show"], &path);
    assert_eq!(code, 0);
    assert!(stdout.contains("[playback]"));
    assert!(stdout.contains("finish_caption = \"Replay?\""));
}

#[test]
fn invalid_config_fails_commands_that_load_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[playback]\nfps = 0\n").unwrap();

    let (_, stderr, code) = run_scenereel(&["config", "show"], &path);
    assert_ne!(code, 0);
    assert!(stderr.contains("playback.fps"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    scenereel(&dir.path().join("config.toml"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scenereel"));
}
