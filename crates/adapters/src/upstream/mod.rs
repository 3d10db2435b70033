// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Adapters for the systems an upload talks to.
//!
//! - **Git**: commit hash, commit count and metadata
//! - **Dashboard**: blocking HTTP delivery of API payloads
//! - **Config**: dashboard URL and API token
//!
//! # Example
//!
//! ```no_run
//! use iree_dashboard_adapters::upstream::prelude::*;
//!
//! let git = GitAdapter::new(".");
//! let http = HttpDashboardAdapter::new(DashboardConfig::from_env())?;
//! # Ok::<(), iree_dashboard_core::TransportError>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod git;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::config::{DashboardConfig, DashboardConfigKey};
    pub use super::dashboard::HttpDashboardAdapter;
    pub use super::git::GitAdapter;
}

pub use config::DashboardConfig;
pub use dashboard::HttpDashboardAdapter;
pub use git::GitAdapter;
