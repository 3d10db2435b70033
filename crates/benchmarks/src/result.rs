//! Benchmark result documents.
//!
//! This module provides the [`BenchmarkResults`] document produced by the
//! benchmark pipeline for one commit, and the operations the uploader needs
//! on it: merging documents and reading pre-computed aggregate statistics.

use crate::error::{BenchmarkError, Result};
use crate::info::BenchmarkInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate statistic computed by the benchmark harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateKind {
    /// Arithmetic mean of the repetitions.
    Mean,
    /// Median of the repetitions.
    Median,
    /// Standard deviation of the repetitions.
    Stddev,
}

impl AggregateKind {
    /// Name used in harness output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Stddev => "stddev",
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry reported by the benchmark harness.
///
/// Only the fields the uploader reads are typed; everything else is kept
/// verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRunResult {
    /// Harness entry name, e.g. `BM_main/real_time_mean`.
    pub name: String,
    /// `iteration` or `aggregate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_type: Option<String>,
    /// Aggregate name for aggregate entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_name: Option<String>,
    /// Wall-clock time in `time_unit`.
    pub real_time: f64,
    /// Unit of `real_time`.
    pub time_unit: String,
    /// Remaining harness fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BenchmarkRunResult {
    /// Create an aggregate entry measured in milliseconds.
    pub fn aggregate(kind: AggregateKind, real_time_ms: f64) -> Self {
        Self {
            name: format!("BM_main/real_time_{}", kind),
            run_type: Some("aggregate".to_string()),
            aggregate_name: Some(kind.as_str().to_string()),
            real_time: real_time_ms,
            time_unit: "ms".to_string(),
            extra: serde_json::Map::new(),
        }
    }

    fn is_aggregate_of(&self, kind: AggregateKind) -> bool {
        match &self.aggregate_name {
            Some(name) => name == kind.as_str(),
            None => self.name.ends_with(&format!("real_time_{}", kind)),
        }
    }
}

/// One benchmark case: its identity plus the harness output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkCase {
    /// Identity of the case.
    #[serde(alias = "benchmark")]
    pub benchmark_info: BenchmarkInfo,
    /// Harness context (host, library build type, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    /// Harness entries.
    pub results: Vec<BenchmarkRunResult>,
}

impl BenchmarkCase {
    /// Create a case from its identity and harness entries.
    pub fn new(benchmark_info: BenchmarkInfo, results: Vec<BenchmarkRunResult>) -> Self {
        Self {
            benchmark_info,
            context: None,
            results,
        }
    }
}

/// All benchmark cases measured for one commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResults {
    /// Commit reference the benchmarks were built from.
    pub commit: String,
    /// Benchmark cases, in the order they were reported.
    pub benchmarks: Vec<BenchmarkCase>,
}

impl BenchmarkResults {
    /// Create an empty document for the given commit.
    pub fn new(commit: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            benchmarks: Vec::new(),
        }
    }

    /// Parse a document from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append the cases of `other` after this document's cases.
    ///
    /// This document's commit stays authoritative; documents for a
    /// different commit are rejected. Duplicate cases are kept.
    pub fn merge(&mut self, other: BenchmarkResults) -> Result<()> {
        if self.commit != other.commit {
            return Err(BenchmarkError::CommitMismatch {
                expected: self.commit.clone(),
                actual: other.commit,
            });
        }
        self.benchmarks.extend(other.benchmarks);
        Ok(())
    }

    /// Fold a non-empty sequence of documents into the first one.
    pub fn merge_all(documents: impl IntoIterator<Item = BenchmarkResults>) -> Result<Self> {
        let mut documents = documents.into_iter();
        let mut merged = documents.next().ok_or(BenchmarkError::NoResults)?;
        for other in documents {
            merged.merge(other)?;
        }
        Ok(merged)
    }

    /// Pre-computed aggregate real time, in milliseconds, of one case.
    pub fn aggregate_time(&self, benchmark_index: usize, kind: AggregateKind) -> Result<f64> {
        let case = self
            .benchmarks
            .get(benchmark_index)
            .ok_or(BenchmarkError::IndexOutOfRange {
                index: benchmark_index,
                len: self.benchmarks.len(),
            })?;

        let mut time = None;
        for entry in case.results.iter().filter(|e| e.is_aggregate_of(kind)) {
            if entry.time_unit != "ms" {
                return Err(BenchmarkError::UnsupportedTimeUnit {
                    index: benchmark_index,
                    unit: entry.time_unit.clone(),
                });
            }
            time = Some(entry.real_time);
        }

        time.ok_or_else(|| BenchmarkError::MissingAggregate {
            index: benchmark_index,
            kind: kind.to_string(),
        })
    }
}
