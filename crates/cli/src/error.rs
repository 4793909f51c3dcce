// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for dependency checkout operations.
//!
//! No local recovery anywhere: every variant propagates to the process exit.
//! The trimmed stderr of the failing git command is the only diagnostic
//! payload; git output is never parsed beyond that.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes when materializing a pinned dependency checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// `git clone` failed: unreachable remote, invalid URL, permission denied.
    #[error("clone failed: {0}")]
    CloneFailed(String),

    /// The pinned revision does not exist in the cloned repository.
    #[error("revision '{revision}' not found: {detail}")]
    RevisionNotFound { revision: String, detail: String },

    /// A directory could not be created or accessed.
    #[error("filesystem error at {}: {source}", path.display())]
    FilesystemError { path: PathBuf, source: io::Error },
}
