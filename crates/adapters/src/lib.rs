//! Git and dashboard adapters for the IREE dashboard uploader.
//!
//! Concrete implementations of the [`iree_dashboard_core::CommitHistory`]
//! and [`iree_dashboard_core::DashboardTransport`] seams.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod upstream;

pub use upstream::{DashboardConfig, GitAdapter, HttpDashboardAdapter};
