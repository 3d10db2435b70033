//! Error types for benchmark result handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, merging or querying benchmark results.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// Result file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Result file is not a valid results document
    #[error("Malformed benchmark results in {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// Results document could not be decoded
    #[error("Malformed benchmark results: {0}")]
    Json(#[from] serde_json::Error),

    /// Two documents refer to different commits
    #[error("Inconsistent commits: expected {expected}, got {actual}")]
    CommitMismatch {
        /// Commit of the document merged into.
        expected: String,
        /// Commit of the rejected document.
        actual: String,
    },

    /// Nothing to merge
    #[error("No benchmark results to merge")]
    NoResults,

    /// Benchmark index past the end of the case list
    #[error("Benchmark index {index} out of range ({len} benchmarks)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of benchmarks.
        len: usize,
    },

    /// Requested aggregate statistic is absent
    #[error("Cannot find real_time_{kind} in results of benchmark {index}")]
    MissingAggregate {
        /// Benchmark index.
        index: usize,
        /// Requested statistic.
        kind: String,
    },

    /// Aggregate reported in a unit other than milliseconds
    #[error("Time unit should be ms, got {unit} for benchmark {index}")]
    UnsupportedTimeUnit {
        /// Benchmark index.
        index: usize,
        /// Reported unit.
        unit: String,
    },
}

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchmarkError>;
