// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Fakes and fixtures shared by unit tests.

use crate::commit::{CommitHistory, CommitMetadata, HistoryError};
use crate::dashboard::{DashboardTransport, Endpoint, TransportError};
use iree_dashboard_benchmarks::{
    AggregateKind, BenchmarkCase, BenchmarkInfo, BenchmarkResults, BenchmarkRunResult,
    BenchmarkRunner, DeviceInfo, ModelSource,
};
use serde_json::Value;
use std::cell::RefCell;

pub(crate) fn case(model: &str, mean_ms: f64) -> BenchmarkCase {
    let info = BenchmarkInfo {
        model_name: model.to_string(),
        model_tags: Vec::new(),
        model_source: ModelSource::TFLite,
        bench_mode: vec!["big-core".to_string(), "full-inference".to_string()],
        runner: BenchmarkRunner::Dylib,
        device_info: DeviceInfo {
            platform_type: "Android".to_string(),
            model: "Pixel-4".to_string(),
            cpu_abi: "arm64-v8a".to_string(),
            cpu_features: Vec::new(),
            gpu_name: "Adreno-640".to_string(),
        },
    };
    BenchmarkCase::new(
        info,
        vec![BenchmarkRunResult::aggregate(AggregateKind::Mean, mean_ms)],
    )
}

pub(crate) fn results(cases: Vec<BenchmarkCase>) -> BenchmarkResults {
    BenchmarkResults {
        commit: "HEAD".to_string(),
        benchmarks: cases,
    }
}

/// History with a single commit of a fixed ordinal.
pub(crate) struct FakeHistory {
    pub(crate) hash: String,
    pub(crate) count: u64,
}

impl FakeHistory {
    pub(crate) fn new(count: u64) -> Self {
        Self {
            hash: "4f2a9c0d1e3b5a7c9e1f3a5b7c9d1e3f5a7b9c1d".to_string(),
            count,
        }
    }
}

impl CommitHistory for FakeHistory {
    fn resolve_commit(&self, _reference: &str) -> Result<String, HistoryError> {
        Ok(self.hash.clone())
    }

    fn count_commits(&self, hash: &str) -> Result<u64, HistoryError> {
        assert_eq!(hash, self.hash);
        Ok(self.count)
    }

    fn commit_metadata(&self, hash: &str) -> Result<CommitMetadata, HistoryError> {
        Ok(CommitMetadata {
            hash: hash.to_string(),
            abbrev_hash: hash[..7].to_string(),
            author_name: "Bench Bot".to_string(),
            author_email: "bench@example.com".to_string(),
            subject: "Tune tiling".to_string(),
        })
    }
}

/// Transport that records every post.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    posts: RefCell<Vec<(Endpoint, Value)>>,
}

impl RecordingTransport {
    pub(crate) fn posts(&self) -> Vec<(Endpoint, Value)> {
        self.posts.borrow().clone()
    }
}

impl DashboardTransport for RecordingTransport {
    fn post(&self, endpoint: Endpoint, body: &str) -> Result<(), TransportError> {
        let value = serde_json::from_str(body).map_err(|e| TransportError::Request(e.to_string()))?;
        self.posts.borrow_mut().push((endpoint, value));
        Ok(())
    }
}
