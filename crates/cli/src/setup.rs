// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The setup run: ensure the dependencies directory exists and every pinned
//! repository is checked out inside it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::checkout::{self, Checkout, CheckoutTarget};
use crate::error::CheckoutError;
use crate::vcs::Vcs;

/// Directory under the project root that holds dependency clones.
pub const DEPENDENCIES_DIR: &str = "dependencies";

/// An entry of the pinned dependency table.
struct Pinned {
    url: &'static str,
    revision: &'static str,
}

/// Repositories a setup run materializes, each at a fixed revision.
const PINNED: &[Pinned] = &[Pinned {
    url: "https://github.com/google/googletest.git",
    revision: "release-1.8.1",
}];

/// Run setup against `project_root`.
///
/// The first error aborts the run and propagates to the process exit code.
pub fn run(project_root: &Path, vcs: &dyn Vcs) -> anyhow::Result<()> {
    let deps_dir = ensure_dependencies_dir(project_root)?;

    for dep in PINNED {
        let target = CheckoutTarget {
            containing_dir: deps_dir.clone(),
            repository_url: dep.url.to_string(),
            revision: dep.revision.to_string(),
        };

        let outcome = checkout::ensure_checked_out(&target, vcs)
            .with_context(|| format!("failed to check out {}", target.local_name()))?;

        match outcome {
            Checkout::AlreadyPresent => {
                info!(name = target.local_name(), "Dependency already present");
            }
            Checkout::Cloned => {
                info!(
                    name = target.local_name(),
                    revision = dep.revision,
                    "Dependency checked out"
                );
            }
        }
    }

    Ok(())
}

/// Create the dependencies directory when absent and return its path.
pub fn ensure_dependencies_dir(project_root: &Path) -> Result<PathBuf, CheckoutError> {
    let deps_dir = project_root.join(DEPENDENCIES_DIR);

    if !deps_dir.exists() {
        info!(path = %deps_dir.display(), "Creating dependencies directory");
        fs::create_dir_all(&deps_dir).map_err(|source| CheckoutError::FilesystemError {
            path: deps_dir.clone(),
            source,
        })?;
    }

    Ok(deps_dir)
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
