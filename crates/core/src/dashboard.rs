// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dashboard API endpoints and the transport seam.
//!
//! [`DashboardTransport`] delivers an already-serialized JSON body to one of
//! the dashboard endpoints. [`PayloadPublisher`] sits in front of it and is
//! the only place that honors `--dry-run` and `--verbose`, for every
//! endpoint alike.

use crate::error::Result;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Dashboard API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Create or override a series.
    AddSerie,
    /// Create or override a build.
    AddBuild,
    /// Create or override a sample.
    AddSample,
}

impl Endpoint {
    /// Path relative to the dashboard base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::AddSerie => "apis/addSerie",
            Self::AddBuild => "apis/addBuild",
            Self::AddSample => "apis/addSample",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Errors that can occur while talking to the dashboard.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Required environment variable is unset
    #[error("Missing environment variable \"{0}\"")]
    MissingEnvVar(&'static str),

    /// Request could not be sent or completed
    #[error("Failed to post to dashboard server: {0}")]
    Request(String),

    /// Dashboard answered with a non-200 status
    #[error("Failed to post to dashboard server {url} with status code {status}")]
    UnexpectedStatus {
        /// Endpoint URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

/// Delivers request bodies to the dashboard.
#[cfg_attr(test, mockall::automock)]
pub trait DashboardTransport {
    /// POST `body` (JSON text) to `endpoint`.
    fn post(&self, endpoint: Endpoint, body: &str) -> std::result::Result<(), TransportError>;
}

/// Pass-through flags applied to every dashboard post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostOptions {
    /// Print payloads instead of sending them.
    pub dry_run: bool,
    /// Print payloads in addition to sending them.
    pub verbose: bool,
}

/// Serializes payloads and hands them to a transport.
pub struct PayloadPublisher<'a, T: ?Sized> {
    transport: &'a T,
    options: PostOptions,
}

impl<'a, T: DashboardTransport + ?Sized> PayloadPublisher<'a, T> {
    /// Create a publisher over `transport`.
    pub fn new(transport: &'a T, options: PostOptions) -> Self {
        Self { transport, options }
    }

    /// Publish one payload to `endpoint`.
    pub fn publish<P: Serialize>(&self, endpoint: Endpoint, payload: &P) -> Result<()> {
        let data = serde_json::to_string(payload)?;

        if self.options.dry_run || self.options.verbose {
            println!("API request payload: {}", data);
        }

        if self.options.dry_run {
            debug!(%endpoint, "dry run, not posting");
            return Ok(());
        }

        debug!(%endpoint, bytes = data.len(), "posting payload");
        self.transport.post(endpoint, &data)?;
        Ok(())
    }
}
