// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP adapter for the benchmark dashboard API.
//!
//! Posts JSON bodies to `{IREE_DASHBOARD_URL}/apis/<endpoint>` with a bearer
//! token. Requests block the calling thread; there is no retry and no
//! timeout beyond the client default. Anything but HTTP 200 is an error.

use super::config::DashboardConfig;
use iree_dashboard_core::{DashboardTransport, Endpoint, TransportError};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::debug;

/// Blocking HTTP transport for dashboard writes.
#[derive(Debug, Clone)]
pub struct HttpDashboardAdapter {
    client: Client,
    config: DashboardConfig,
}

impl HttpDashboardAdapter {
    /// Create an adapter with a default HTTP client.
    pub fn new(config: DashboardConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self::with_client(config, client))
    }

    /// Create an adapter around an existing client.
    pub fn with_client(config: DashboardConfig, client: Client) -> Self {
        Self { client, config }
    }
}

impl DashboardTransport for HttpDashboardAdapter {
    fn post(&self, endpoint: Endpoint, body: &str) -> Result<(), TransportError> {
        let url = format!("{}/{}", self.config.require_url()?, endpoint.path());
        let token = self.config.require_api_token()?;

        debug!(%url, "posting to dashboard");
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(token)
            .body(body.to_string())
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TransportError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
