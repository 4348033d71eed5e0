// End-to-end tests for the check-systemd-services binary, driven through
// fake listing commands so no systemd is needed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

/// Write a listing fixture and return a `cat` command that replays it
fn fake_listing(lines: &[&str]) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("listing");
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    let command = format!("cat {}", path.display());
    (dir, command)
}

fn check() -> Command {
    Command::cargo_bin("check-systemd-services").unwrap()
}

#[test]
fn critical_unit_failed_is_critical() {
    let (_dir, command) = fake_listing(&["db loaded failed failed"]);
    check()
        .args(["-s", "db", "--list-command", &command])
        .assert()
        .code(2)
        .stdout("CRITICAL: failed: db \n");
}

#[test]
fn non_critical_dead_unit_is_ok() {
    let (_dir, command) = fake_listing(&["cron loaded active dead"]);
    check()
        .args(["--list-command", &command])
        .assert()
        .code(0)
        .stdout("OK\n");
}

#[test]
fn not_loaded_unit_is_warning() {
    let (_dir, command) = fake_listing(&["web not-found active running"]);
    check()
        .args(["--list-command", &command])
        .assert()
        .code(1)
        .stdout("WARNING: not loaded but not inactive: web \n");
}

#[test]
fn critical_failure_outranks_dropped_dead_unit() {
    let (_dir, command) = fake_listing(&["a loaded failed failed", "b loaded active dead"]);
    check()
        .args(["-s", "a", "--list-command", &command])
        .assert()
        .code(2)
        .stdout("CRITICAL: failed: a \n");
}

#[test]
fn mixed_problems_group_by_category() {
    let (_dir, command) = fake_listing(&[
        "web not-found active running",
        "app loaded failed failed",
        "api loaded failed failed",
    ]);
    check()
        .args(["--list-command", &command])
        .assert()
        .code(1)
        .stdout("WARNING: failed: app api not loaded but not inactive: web \n");
}

#[test]
fn descriptions_in_the_listing_are_ignored() {
    let (_dir, command) = fake_listing(&[
        "ssh.service loaded active running OpenBSD Secure Shell server",
    ]);
    check()
        .args(["--list-command", &command])
        .assert()
        .code(0)
        .stdout("OK\n");
}

#[test]
fn failing_listing_command_is_unknown() {
    check()
        .args(["--list-command", "false"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN: "));
}

#[test]
fn missing_listing_command_is_unknown() {
    check()
        .args(["--list-command", "/nonexistent/systemctl"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN: "));
}

#[test]
fn malformed_listing_line_is_unknown() {
    let (_dir, command) = fake_listing(&["truncated loaded active"]);
    check()
        .args(["--list-command", &command])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("malformed unit record"));
}

#[test]
fn same_listing_gives_identical_output() {
    let (_dir, command) = fake_listing(&[
        "a loaded failed failed",
        "b not-found active running",
    ]);
    let args = ["-s", "a", "--list-command", command.as_str()];

    let first = check().args(args).output().unwrap();
    let second = check().args(args).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn version_flag_prints_version() {
    check()
        .arg("-V")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("sysprobe v"));
}
