// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dashboard connection configuration.
//!
//! The configuration is read once at startup into a [`DashboardConfig`] and
//! threaded to the HTTP adapter. Both settings are optional at that point;
//! they are only required when a request is actually sent, so a dry run
//! works without them.
//!
//! # Example
//!
//! ```
//! use iree_dashboard_adapters::upstream::config::DashboardConfig;
//!
//! let config = DashboardConfig::from_lookup(|key| match key {
//!     "IREE_DASHBOARD_URL" => Some("https://perf.example.com/".to_string()),
//!     _ => None,
//! });
//! assert_eq!(config.require_url().unwrap(), "https://perf.example.com");
//! assert!(config.require_api_token().is_err());
//! ```

use iree_dashboard_core::TransportError;
use std::fmt;

/// Configuration keys and their environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardConfigKey {
    /// Base URL of the dashboard API
    Url,
    /// Bearer token for API writes
    ApiToken,
}

impl DashboardConfigKey {
    /// Environment variable holding this key.
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Url => "IREE_DASHBOARD_URL",
            Self::ApiToken => "IREE_DASHBOARD_API_TOKEN",
        }
    }

    /// All keys.
    pub fn all() -> [DashboardConfigKey; 2] {
        [Self::Url, Self::ApiToken]
    }
}

/// Dashboard connection settings.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    url: Option<String>,
    api_token: Option<String>,
}

impl fmt::Debug for DashboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardConfig")
            .field("url", &self.url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl DashboardConfig {
    /// Create a configuration from explicit values.
    pub fn new(url: Option<String>, api_token: Option<String>) -> Self {
        Self { url, api_token }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        for key in DashboardConfigKey::all() {
            let value = lookup(key.env_var());
            match key {
                DashboardConfigKey::Url => config.url = value,
                DashboardConfigKey::ApiToken => config.api_token = value,
            }
        }
        config
    }

    /// Dashboard base URL, without a trailing slash.
    pub fn require_url(&self) -> Result<&str, TransportError> {
        self.url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .ok_or(TransportError::MissingEnvVar(DashboardConfigKey::Url.env_var()))
    }

    /// API bearer token.
    pub fn require_api_token(&self) -> Result<&str, TransportError> {
        self.api_token
            .as_deref()
            .ok_or(TransportError::MissingEnvVar(DashboardConfigKey::ApiToken.env_var()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> DashboardConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_reads_both_variables() {
        let config = lookup(&[
            ("IREE_DASHBOARD_URL", "https://perf.example.com"),
            ("IREE_DASHBOARD_API_TOKEN", "secret"),
        ]);
        assert_eq!(config.require_url().unwrap(), "https://perf.example.com");
        assert_eq!(config.require_api_token().unwrap(), "secret");
    }

    #[test]
    fn test_missing_values_fail_lazily() {
        let config = lookup(&[]);
        assert!(matches!(
            config.require_url(),
            Err(TransportError::MissingEnvVar("IREE_DASHBOARD_URL"))
        ));
        assert!(matches!(
            config.require_api_token(),
            Err(TransportError::MissingEnvVar("IREE_DASHBOARD_API_TOKEN"))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = DashboardConfig::new(None, Some("secret".to_string()));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
