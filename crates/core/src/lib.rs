// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Result aggregation and dashboard synchronization for IREE benchmarks.
//!
//! This crate turns one commit's merged benchmark results into dashboard
//! writes: a build for the commit, a series per distinct benchmark, and a
//! sample per series. It owns the invariants of that protocol:
//!
//! - a series identifier appears at most once per upload ([`aggregate`]),
//! - every series gets exactly the first matching threshold rule
//!   ([`threshold`]),
//! - every write overrides, so uploads are safely repeatable ([`sync`]).
//!
//! Version-control queries and HTTP delivery are behind the
//! [`CommitHistory`] and [`DashboardTransport`] traits.
//!
//! # Example
//!
//! ```ignore
//! use iree_dashboard_core::{DashboardSync, PostOptions};
//!
//! let sync = DashboardSync::new(&git, &http, PostOptions { dry_run: true, verbose: false });
//! let report = sync.run(&results)?;
//! println!("uploaded {} series to build {}", report.series.len(), report.build_id);
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod commit;
pub mod dashboard;
pub mod description;
pub mod error;
pub mod payload;
pub mod sync;
pub mod threshold;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{aggregate_results, AggregatedSample};
pub use commit::{CommitHistory, CommitMetadata, HistoryError};
pub use dashboard::{DashboardTransport, Endpoint, PayloadPublisher, PostOptions, TransportError};
pub use error::{Result, SyncError};
pub use sync::{DashboardSettings, DashboardSync, SyncReport};
pub use threshold::{ThresholdRule, ThresholdTable, ThresholdUnit, TrendDirection};
