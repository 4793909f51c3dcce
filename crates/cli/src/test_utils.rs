//! Shared unit test utilities.
//!
//! Provides the recording version-control double used by checkout and setup
//! tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checkout::local_name;
use crate::error::CheckoutError;
use crate::vcs::Vcs;

/// One recorded call against a [`RecordingVcs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Clone { url: String, containing_dir: PathBuf },
    Checkout { repo_dir: PathBuf, revision: String },
}

/// Test double that records calls instead of running git.
///
/// A successful clone creates the working-copy directory, matching the side
/// effect of the real tool.
pub struct RecordingVcs {
    calls: RefCell<Vec<VcsCall>>,
    fail_clone: Option<String>,
    fail_checkout: Option<String>,
}

impl RecordingVcs {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_clone: None,
            fail_checkout: None,
        }
    }

    /// Double whose clone operation fails with the given diagnostic.
    pub fn failing_clone(detail: &str) -> Self {
        Self {
            fail_clone: Some(detail.to_string()),
            ..Self::new()
        }
    }

    /// Double whose checkout operation fails with the given diagnostic.
    pub fn failing_checkout(detail: &str) -> Self {
        Self {
            fail_checkout: Some(detail.to_string()),
            ..Self::new()
        }
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.borrow().clone()
    }
}

impl Vcs for RecordingVcs {
    fn clone_repo(&self, url: &str, containing_dir: &Path) -> Result<(), CheckoutError> {
        self.calls.borrow_mut().push(VcsCall::Clone {
            url: url.to_string(),
            containing_dir: containing_dir.to_path_buf(),
        });

        if let Some(detail) = &self.fail_clone {
            return Err(CheckoutError::CloneFailed(detail.clone()));
        }

        fs::create_dir_all(containing_dir.join(local_name(url))).unwrap();
        Ok(())
    }

    fn checkout(&self, repo_dir: &Path, revision: &str) -> Result<(), CheckoutError> {
        self.calls.borrow_mut().push(VcsCall::Checkout {
            repo_dir: repo_dir.to_path_buf(),
            revision: revision.to_string(),
        });

        if let Some(detail) = &self.fail_checkout {
            return Err(CheckoutError::RevisionNotFound {
                revision: revision.to_string(),
                detail: detail.clone(),
            });
        }

        Ok(())
    }
}
