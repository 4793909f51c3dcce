//! CLI argument parsing with clap derive.
//!
//! The setup surface is intentionally bare: no flags, no subcommands, no
//! configuration file. clap contributes `--help` and `--version` only.

use clap::Parser;

/// Development environment bootstrap that pins third-party dependency checkouts
#[derive(Parser)]
#[command(name = "depot")]
#[command(version, about, long_about = None)]
pub struct Cli {}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
