// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Git adapter for commit metadata.
//!
//! Implements [`CommitHistory`] by running the `git` executable in a
//! repository checkout. Every query blocks until `git` exits; a non-zero
//! exit status aborts the upload.
//!
//! # Example
//!
//! ```no_run
//! use iree_dashboard_adapters::upstream::git::GitAdapter;
//! use iree_dashboard_core::CommitHistory;
//!
//! let git = GitAdapter::new(".");
//! let hash = git.resolve_commit("HEAD")?;
//! let build_id = git.count_commits(&hash)?;
//! # Ok::<(), iree_dashboard_core::HistoryError>(())
//! ```

use iree_dashboard_core::commit::COMMIT_INFO_FORMAT;
use iree_dashboard_core::{CommitHistory, CommitMetadata, HistoryError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Runs history queries against a git checkout.
#[derive(Debug, Clone)]
pub struct GitAdapter {
    repo_dir: PathBuf,
}

impl GitAdapter {
    /// Create an adapter for the checkout containing `repo_dir`.
    pub fn new(repo_dir: impl AsRef<Path>) -> Self {
        Self {
            repo_dir: repo_dir.as_ref().to_path_buf(),
        }
    }

    /// Run git and return its trimmed standard output.
    fn run(&self, args: &[&str]) -> Result<String, HistoryError> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, dir = %self.repo_dir.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|source| HistoryError::Io {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(HistoryError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(%command, output = %stdout, "git finished");
        Ok(stdout)
    }
}

fn is_full_hash(candidate: &str) -> bool {
    matches!(candidate.len(), 40 | 64) && candidate.chars().all(|c| c.is_ascii_hexdigit())
}

impl CommitHistory for GitAdapter {
    fn resolve_commit(&self, reference: &str) -> Result<String, HistoryError> {
        let args = ["rev-parse", "--verify", reference];
        let hash = self.run(&args)?;
        if !is_full_hash(&hash) {
            return Err(HistoryError::UnexpectedOutput {
                command: format!("git {}", args.join(" ")),
                output: hash,
            });
        }
        Ok(hash)
    }

    fn count_commits(&self, hash: &str) -> Result<u64, HistoryError> {
        let args = ["rev-list", "--count", hash];
        let count = self.run(&args)?;
        count
            .parse()
            .map_err(|_| HistoryError::UnexpectedOutput {
                command: format!("git {}", args.join(" ")),
                output: count,
            })
    }

    fn commit_metadata(&self, hash: &str) -> Result<CommitMetadata, HistoryError> {
        let format = format!("--format={}", COMMIT_INFO_FORMAT);
        let args = ["show", "--no-patch", format.as_str(), hash];
        let line = self.run(&args)?;
        CommitMetadata::parse_formatted(&line).ok_or_else(|| HistoryError::UnexpectedOutput {
            command: format!("git {}", args.join(" ")),
            output: line,
        })
    }
}
