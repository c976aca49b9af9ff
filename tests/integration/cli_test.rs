//! Tests for the command-line surface.
//!
//! The `play` command itself needs a real terminal; what can run here is
//! argument handling, completions, and the graceful non-TTY failure.

use assert_cmd::Command;
use predicates::prelude::*;

fn nowbar() -> Command {
    Command::cargo_bin("nowbar").unwrap()
}

// ============================================================================
// Global flags
// ============================================================================

#[test]
fn help_lists_the_commands() {
    nowbar()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play").and(predicate::str::contains("completions")));
}

#[test]
fn version_prints_the_package_version() {
    nowbar()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn a_subcommand_is_required() {
    nowbar().assert().failure();
}

#[test]
fn unknown_subcommands_fail() {
    nowbar().arg("dance").assert().failure();
}

// ============================================================================
// play
// ============================================================================

#[test]
fn play_refuses_without_a_tty() {
    // stdout is a pipe here, so the TTY guard must trip before the
    // alternate screen would mangle the test harness output
    nowbar()
        .args(["play", "--duration", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TTY"));
}

#[test]
fn play_rejects_a_negative_duration() {
    nowbar()
        .args(["play", "--duration=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration"));
}

#[test]
fn play_rejects_an_unknown_preset() {
    nowbar()
        .args(["play", "--theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("preset"));
}

#[test]
fn play_rejects_a_missing_track_file() {
    nowbar()
        .args(["play", "--track", "/nonexistent/track.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("track"));
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_emit_a_script() {
    nowbar()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nowbar"));
}

#[test]
fn completions_reject_unknown_shells() {
    nowbar().args(["completions", "tcsh"]).assert().failure();
}
