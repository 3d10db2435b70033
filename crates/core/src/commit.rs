// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Commit metadata and the version-control history seam.
//!
//! The dashboard's x axis is the number of commits reachable from the
//! benchmarked commit, so every upload needs three history queries: the
//! full hash, the commit count, and descriptive metadata. [`CommitHistory`]
//! is the narrow interface those queries go through; the `git` subprocess
//! implementation lives in the adapters crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between fields of the formatted commit line.
///
/// Chosen so it does not occur in commit subjects in practice.
pub const COMMIT_FIELD_SEPARATOR: &str = ":::";

/// `git show --format` string producing a line [`CommitMetadata::parse_formatted`] accepts.
pub const COMMIT_INFO_FORMAT: &str = "%H:::%h:::%an:::%ae:::%s";

/// Errors that can occur while querying version-control history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// History tool exited unsuccessfully
    #[error("`{command}` failed with {status}: {stderr}")]
    CommandFailed {
        /// Command line that was run.
        command: String,
        /// Exit status.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// History tool could not be started
    #[error("Failed to run `{command}`: {source}")]
    Io {
        /// Command line that was run.
        command: String,
        /// Spawn error.
        #[source]
        source: std::io::Error,
    },

    /// History tool printed something unexpected
    #[error("Unexpected output from `{command}`: {output:?}")]
    UnexpectedOutput {
        /// Command line that was run.
        command: String,
        /// Trimmed standard output.
        output: String,
    },
}

/// Descriptive metadata of one commit, as embedded in a build payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitMetadata {
    /// Full commit hash.
    pub hash: String,
    /// Abbreviated commit hash.
    pub abbrev_hash: String,
    /// Author name.
    pub author_name: String,
    /// Author email.
    pub author_email: String,
    /// Subject line.
    pub subject: String,
}

impl CommitMetadata {
    /// Parse one line produced with [`COMMIT_INFO_FORMAT`].
    ///
    /// The subject is the last field, so separators inside it are kept.
    pub fn parse_formatted(line: &str) -> Option<Self> {
        let mut fields = line
            .trim_end_matches(&['\r', '\n'][..])
            .splitn(5, COMMIT_FIELD_SEPARATOR);
        let mut next = || fields.next().map(str::to_string);
        Some(Self {
            hash: next()?,
            abbrev_hash: next()?,
            author_name: next()?,
            author_email: next()?,
            subject: next()?,
        })
    }
}

/// Version-control history queries needed for an upload.
#[cfg_attr(test, mockall::automock)]
pub trait CommitHistory {
    /// Resolve a commit reference (`HEAD`, a short hash, ...) to its full hash.
    fn resolve_commit(&self, reference: &str) -> Result<String, HistoryError>;

    /// Number of commits reachable from `hash`, including itself.
    fn count_commits(&self, hash: &str) -> Result<u64, HistoryError>;

    /// Descriptive metadata of `hash`.
    fn commit_metadata(&self, hash: &str) -> Result<CommitMetadata, HistoryError>;
}
