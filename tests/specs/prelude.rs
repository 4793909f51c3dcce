//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::process::Command;

/// Returns a Command configured to run the depot binary
pub fn depot_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("depot"))
}
