// ABOUTME: CLI-level tests for flag handling and error reporting.
// ABOUTME: Drives the compiled binary with assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_flag_prints_name_and_version() {
    Command::cargo_bin("lsdvol")
        .expect("binary builds")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lsdvol"));
}

#[test]
fn help_mentions_autodetection() {
    Command::cargo_bin("lsdvol")
        .expect("binary builds")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("autodetected"));
}

#[test]
fn bad_socket_path_exits_nonzero() {
    Command::cargo_bin("lsdvol")
        .expect("binary builds")
        .args([
            "--docker-socket",
            "/definitely/not/a/real/engine.sock",
            "4f3c2b1a4f3c2b1a4f3c2b1a4f3c2b1a4f3c2b1a4f3c2b1a4f3c2b1a4f3c2b1a",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
