// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Idempotent materialization of pinned dependency checkouts.
//!
//! The operation is a trivial two-state machine: a missing working copy is
//! cloned and pinned, a present one is left untouched. There is no update or
//! re-pin path.

use std::io;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::CheckoutError;
use crate::vcs::Vcs;

/// A pinned external repository to place under a containing directory.
#[derive(Debug, Clone)]
pub struct CheckoutTarget {
    /// Parent directory the clone lands in. Must exist before checkout begins.
    pub containing_dir: PathBuf,
    /// Repository locator, passed through to the version-control tool.
    pub repository_url: String,
    /// Tag, branch, or commit pinning the working-copy state. Non-empty.
    pub revision: String,
}

impl CheckoutTarget {
    /// Name of the local working-copy directory.
    pub fn local_name(&self) -> &str {
        local_name(&self.repository_url)
    }
}

/// Derive the working-copy directory name from a repository URL: the final
/// path segment with any trailing `.git` suffix stripped.
pub fn local_name(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last)
}

/// How [`ensure_checked_out`] satisfied the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkout {
    /// The working-copy directory already existed; no subprocess ran.
    AlreadyPresent,
    /// The repository was cloned and the revision checked out.
    Cloned,
}

/// Ensure a working copy of `target` exists at its pinned revision.
///
/// Presence of the working-copy directory is taken as proof of a prior
/// successful checkout: the revision is not re-verified, so a partial clone
/// or a different revision left on disk is accepted as-is. Known limitation.
///
/// The clone finishes before the checkout starts; the first error is fatal
/// and no retries are attempted.
pub fn ensure_checked_out(
    target: &CheckoutTarget,
    vcs: &dyn Vcs,
) -> Result<Checkout, CheckoutError> {
    if !target.containing_dir.is_dir() {
        return Err(CheckoutError::FilesystemError {
            path: target.containing_dir.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "containing directory does not exist"),
        });
    }

    let repo_dir = target.containing_dir.join(target.local_name());
    if repo_dir.exists() {
        debug!(path = %repo_dir.display(), "Working copy already present");
        return Ok(Checkout::AlreadyPresent);
    }

    vcs.clone_repo(&target.repository_url, &target.containing_dir)?;
    vcs.checkout(&repo_dir, &target.revision)?;

    info!(
        path = %repo_dir.display(),
        revision = %target.revision,
        "Checked out dependency"
    );

    Ok(Checkout::Cloned)
}

#[cfg(test)]
#[path = "checkout_tests.rs"]
mod tests;
