// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dashboard synchronization of one commit's benchmark results.
//!
//! # Flow
//!
//! ```text
//! merged results
//!   └─ aggregate per series (duplicates rejected, no I/O yet)
//!       └─ resolve commit: full hash, build id, metadata
//!           └─ addBuild
//!               └─ for each series: addSerie, then addSample
//! ```
//!
//! Every write carries `override = true`, so re-running the upload for the
//! same commit (for example from another device batch) replaces entities
//! instead of failing. There is no rollback: an error leaves whatever was
//! already posted in place, and the run can simply be repeated.

use crate::aggregate::{aggregate_results, AggregatedSample};
use crate::commit::{CommitHistory, CommitMetadata};
use crate::dashboard::{DashboardTransport, Endpoint, PayloadPublisher, PostOptions};
use crate::description::series_description;
use crate::error::Result;
use crate::payload::{compose_build_payload, compose_sample_payload, compose_series_payload};
use crate::threshold::ThresholdTable;
use iree_dashboard_benchmarks::{AggregateKind, BenchmarkResults};
use tracing::{debug, info};

/// Dashboard project receiving IREE benchmarks.
pub const IREE_PROJECT_ID: &str = "IREE";

/// Prefix of browsable IREE commit URLs.
pub const IREE_GITHUB_COMMIT_URL_PREFIX: &str = "https://github.com/google/iree/commit";

/// Project-level constants embedded in payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Dashboard project id.
    pub project_id: String,
    /// Commit URL prefix; the full hash is appended.
    pub commit_url_prefix: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            project_id: IREE_PROJECT_ID.to_string(),
            commit_url_prefix: IREE_GITHUB_COMMIT_URL_PREFIX.to_string(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Full hash of the uploaded commit.
    pub commit_hash: String,
    /// Build id (commit count) the samples were attached to.
    pub build_id: u64,
    /// Series uploaded, in upload order.
    pub series: Vec<String>,
}

/// Drives one upload: build, then series and samples.
pub struct DashboardSync<'a, H: ?Sized, T: ?Sized> {
    history: &'a H,
    publisher: PayloadPublisher<'a, T>,
    thresholds: &'a ThresholdTable,
    settings: DashboardSettings,
    aggregate: AggregateKind,
}

impl<'a, H, T> DashboardSync<'a, H, T>
where
    H: CommitHistory + ?Sized,
    T: DashboardTransport + ?Sized,
{
    /// Create a synchronizer with the built-in thresholds and IREE settings.
    pub fn new(history: &'a H, transport: &'a T, options: PostOptions) -> Self {
        Self {
            history,
            publisher: PayloadPublisher::new(transport, options),
            thresholds: ThresholdTable::builtin(),
            settings: DashboardSettings::default(),
            aggregate: AggregateKind::Mean,
        }
    }

    /// Use a different threshold table.
    pub fn with_thresholds(mut self, thresholds: &'a ThresholdTable) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Use different project settings.
    pub fn with_settings(mut self, settings: DashboardSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Upload a different aggregate statistic.
    pub fn with_aggregate(mut self, aggregate: AggregateKind) -> Self {
        self.aggregate = aggregate;
        self
    }

    /// Upload `results` to the dashboard.
    pub fn run(&self, results: &BenchmarkResults) -> Result<SyncReport> {
        let samples = aggregate_results(results, self.aggregate)?;
        debug!(count = samples.len(), aggregate = %self.aggregate, "aggregated benchmark results");

        let commit_hash = self.history.resolve_commit(&results.commit)?;
        let build_id = self.history.count_commits(&commit_hash)?;
        let metadata = self.history.commit_metadata(&commit_hash)?;
        debug!(reference = %results.commit, hash = %commit_hash, build_id, "resolved commit");

        // Override so the same build can be uploaded in several batches.
        self.register_build(build_id, &metadata)?;

        let mut series = Vec::with_capacity(samples.len());
        for sample in &samples {
            self.upload_series(build_id, sample)?;
            series.push(sample.series_id.clone());
        }

        info!(build_id, series = series.len(), "benchmark results uploaded");
        Ok(SyncReport {
            commit_hash,
            build_id,
            series,
        })
    }

    fn register_build(&self, build_id: u64, metadata: &CommitMetadata) -> Result<()> {
        info!(build_id, commit = %metadata.abbrev_hash, "registering build");
        let payload = compose_build_payload(
            &self.settings.project_id,
            &self.settings.commit_url_prefix,
            build_id,
            metadata,
            true,
        );
        self.publisher.publish(Endpoint::AddBuild, &payload)
    }

    fn upload_series(&self, build_id: u64, sample: &AggregatedSample) -> Result<()> {
        let rule = self.thresholds.resolve(&sample.series_id)?;
        info!(series = %sample.series_id, value = sample.value, "uploading sample");

        // Series go first: a sample must reference a known series.
        let series_payload = compose_series_payload(
            &self.settings.project_id,
            &sample.series_id,
            Some(series_description(&sample.info)),
            rule.averaging_window(),
            rule.required(),
            rule.trend(),
            true,
        );
        self.publisher.publish(Endpoint::AddSerie, &series_payload)?;

        let sample_payload = compose_sample_payload(
            &self.settings.project_id,
            &sample.series_id,
            build_id,
            sample.value,
            true,
        );
        self.publisher.publish(Endpoint::AddSample, &sample_payload)
    }
}
