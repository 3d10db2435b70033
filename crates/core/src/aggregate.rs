// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-series aggregation of merged benchmark results.

use crate::error::{Result, SyncError};
use iree_dashboard_benchmarks::{AggregateKind, BenchmarkInfo, BenchmarkResults};
use std::collections::HashSet;

/// One value to upload: a series and its aggregate for this commit.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSample {
    /// Series identifier (string form of `info`).
    pub series_id: String,
    /// Aggregate value in milliseconds.
    pub value: f64,
    /// Identity of the benchmark case.
    pub info: BenchmarkInfo,
}

/// Collect the `kind` aggregate of every case, in input order.
///
/// Fails on the first series identifier seen twice, so two cases can never
/// overwrite each other's sample.
pub fn aggregate_results(
    results: &BenchmarkResults,
    kind: AggregateKind,
) -> Result<Vec<AggregatedSample>> {
    let mut seen = HashSet::with_capacity(results.benchmarks.len());
    let mut samples = Vec::with_capacity(results.benchmarks.len());

    for (index, case) in results.benchmarks.iter().enumerate() {
        let series_id = case.benchmark_info.to_string();
        if !seen.insert(series_id.clone()) {
            return Err(SyncError::DuplicateSeries(series_id));
        }

        let value = results.aggregate_time(index, kind)?;
        samples.push(AggregatedSample {
            series_id,
            value,
            info: case.benchmark_info.clone(),
        });
    }

    Ok(samples)
}
