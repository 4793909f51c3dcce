//! Behavioral specifications for the depot CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

use prelude::*;

/// Exit code 0 when invoked with --help.
#[test]
fn help_exits_successfully() {
    depot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("depot"));
}

/// Exit code 0 when invoked with --version.
#[test]
fn version_exits_successfully() {
    depot_cmd().arg("--version").assert().success();
}

/// The setup surface takes no arguments.
#[test]
fn unknown_flag_exits_nonzero() {
    depot_cmd().arg("--frobnicate").assert().failure();
}

/// A present working copy makes the whole run a no-op: exit code 0 with no
/// subprocess activity, so this passes without network access.
#[test]
fn setup_succeeds_when_dependencies_already_present() {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("dependencies/googletest")).unwrap();

    depot_cmd().current_dir(temp.path()).assert().success();
}
