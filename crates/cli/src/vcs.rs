// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Version-control subprocess wrapper.
//!
//! The git binary is consumed as a black box: exit status alone decides
//! success, and captured stderr is carried into the error for diagnostics.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::CheckoutError;

/// Version-control operations consumed by the checkout logic.
///
/// An injected capability rather than a hard subprocess dependency, so the
/// test suite can substitute a recording double.
pub trait Vcs {
    /// Clone `url` into a new directory under `containing_dir`.
    ///
    /// The clone directory name is derived from the URL by the tool itself.
    fn clone_repo(&self, url: &str, containing_dir: &Path) -> Result<(), CheckoutError>;

    /// Check out `revision` inside the working copy at `repo_dir`.
    fn checkout(&self, repo_dir: &Path, revision: &str) -> Result<(), CheckoutError>;
}

/// Production implementation backed by the `git` binary.
pub struct GitCli;

impl Vcs for GitCli {
    fn clone_repo(&self, url: &str, containing_dir: &Path) -> Result<(), CheckoutError> {
        let mut cmd = Command::new("git");
        cmd.args(["clone", url]).current_dir(containing_dir);
        debug!(command = ?cmd, "Running git clone");

        let output = cmd
            .output()
            .map_err(|e| CheckoutError::CloneFailed(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CheckoutError::CloneFailed(stderr.trim().to_string()));
        }

        Ok(())
    }

    fn checkout(&self, repo_dir: &Path, revision: &str) -> Result<(), CheckoutError> {
        let mut cmd = Command::new("git");
        cmd.args(["checkout", revision]).current_dir(repo_dir);
        debug!(command = ?cmd, "Running git checkout");

        let output = cmd.output().map_err(|e| CheckoutError::RevisionNotFound {
            revision: revision.to_string(),
            detail: format!("failed to run git: {e}"),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CheckoutError::RevisionNotFound {
                revision: revision.to_string(),
                detail: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "vcs_tests.rs"]
mod tests;
