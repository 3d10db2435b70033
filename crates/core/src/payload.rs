// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dashboard API request payloads.
//!
//! Pure constructors for the three request bodies the dashboard accepts:
//! a series (`addSerie`), a build (`addBuild`) and a sample (`addSample`).
//! The `override` flag asks the dashboard to replace an existing entity
//! instead of rejecting the write as a duplicate.

use crate::commit::CommitMetadata;
use crate::threshold::{SeriesAnalysis, TrendDirection};
use serde::{Deserialize, Serialize};

/// Body of an `addSerie` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPayload {
    /// Dashboard project.
    pub project_id: String,
    /// Series identifier.
    pub serie_id: String,
    /// Averaging configuration.
    pub analyse: SeriesAnalyse,
    /// Replace an existing series.
    #[serde(rename = "override")]
    pub override_existing: bool,
    /// HTML description; left out so the dashboard keeps the current one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `analyse` object of a series payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesAnalyse {
    /// Benchmark averaging settings.
    pub benchmark: SeriesAnalysis,
}

/// Body of an `addBuild` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPayload {
    /// Dashboard project.
    pub project_id: String,
    /// The build.
    pub build: BuildEntry,
    /// Replace an existing build.
    #[serde(rename = "override")]
    pub override_existing: bool,
}

/// `build` object of a build payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEntry {
    /// Commit ordinal.
    pub build_id: u64,
    /// Commit information shown on the dashboard.
    pub infos: BuildInfos,
}

/// Commit information with its browsable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfos {
    /// Commit metadata fields.
    #[serde(flatten)]
    pub commit: CommitMetadata,
    /// Commit page URL.
    pub url: String,
}

/// Body of an `addSample` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePayload {
    /// Dashboard project.
    pub project_id: String,
    /// Series the sample belongs to.
    pub serie_id: String,
    /// The sample.
    pub sample: SampleEntry,
    /// Replace an existing sample.
    #[serde(rename = "override")]
    pub override_existing: bool,
}

/// `sample` object of a sample payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleEntry {
    /// Build the sample is attached to.
    pub build_id: u64,
    /// Measured value.
    pub value: f64,
}

/// Compose an `addSerie` body.
pub fn compose_series_payload(
    project_id: &str,
    series_id: &str,
    description: Option<String>,
    average_range: impl Into<String>,
    average_min_count: u32,
    better_criterion: TrendDirection,
    override_existing: bool,
) -> SeriesPayload {
    SeriesPayload {
        project_id: project_id.to_string(),
        serie_id: series_id.to_string(),
        analyse: SeriesAnalyse {
            benchmark: SeriesAnalysis {
                range: average_range.into(),
                required: average_min_count,
                trend: better_criterion,
            },
        },
        override_existing,
        description,
    }
}

/// Compose an `addBuild` body; the commit URL is `{commit_url_prefix}/{hash}`.
pub fn compose_build_payload(
    project_id: &str,
    commit_url_prefix: &str,
    build_id: u64,
    commit: &CommitMetadata,
    override_existing: bool,
) -> BuildPayload {
    BuildPayload {
        project_id: project_id.to_string(),
        build: BuildEntry {
            build_id,
            infos: BuildInfos {
                url: format!("{}/{}", commit_url_prefix, commit.hash),
                commit: commit.clone(),
            },
        },
        override_existing,
    }
}

/// Compose an `addSample` body.
pub fn compose_sample_payload(
    project_id: &str,
    series_id: &str,
    build_id: u64,
    value: f64,
    override_existing: bool,
) -> SamplePayload {
    SamplePayload {
        project_id: project_id.to_string(),
        serie_id: series_id.to_string(),
        sample: SampleEntry { build_id, value },
        override_existing,
    }
}
