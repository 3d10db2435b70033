// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for dashboard synchronization.

use crate::commit::HistoryError;
use crate::dashboard::TransportError;
use iree_dashboard_benchmarks::BenchmarkError;
use thiserror::Error;

/// Errors that abort a dashboard synchronization run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Two benchmark cases share a series identifier
    #[error("Duplicated benchmarks: {0}")]
    DuplicateSeries(String),

    /// No threshold rule matches a series identifier
    #[error("No matched threshold setting for benchmark: {0}")]
    NoMatchingThreshold(String),

    /// Invalid threshold rule pattern
    #[error("Invalid threshold pattern {pattern}: {source}")]
    InvalidThresholdPattern {
        /// Offending pattern.
        pattern: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Benchmark result error
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),

    /// Version-control history error
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Dashboard transport error
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Payload serialization error
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for synchronization operations.
pub type Result<T> = std::result::Result<T, SyncError>;
