// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Regression-threshold rules for dashboard series.
//!
//! The dashboard averages recent samples of a series and flags a new sample
//! as a regression when it leaves the averaging window. Which window a
//! series gets is decided by matching its identifier against an ordered
//! list of rules; the first match wins.
//!
//! # Example
//!
//! ```
//! use iree_dashboard_core::threshold::ThresholdTable;
//!
//! let table = ThresholdTable::builtin();
//! let rule = table.resolve("PoseNet (TFLite) big-core with IREE-Vulkan @ Pixel-4 (GPU-Mali-G77)")?;
//! assert_eq!(rule.averaging_window(), "10%");
//! # Ok::<(), iree_dashboard_core::SyncError>(())
//! ```

use crate::error::{Result, SyncError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Samples required before the dashboard trusts the running average.
pub const DEFAULT_REQUIRED_SAMPLES: u32 = 3;

/// Which direction of change counts as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Lower values are better (latencies).
    Smaller,
    /// Higher values are better (throughput).
    Larger,
}

/// Unit of a threshold magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdUnit {
    /// Relative to the running average.
    Percentage,
    /// Absolute, in milliseconds.
    Milliseconds,
}

/// Averaging configuration sent with a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesAnalysis {
    /// Averaging window, e.g. `5%` or `2`.
    pub range: String,
    /// Minimum sample count before the average is trusted.
    pub required: u32,
    /// Improvement direction.
    pub trend: TrendDirection,
}

/// One pattern rule.
#[derive(Debug, Clone)]
pub struct ThresholdRule {
    pattern: Regex,
    threshold: u32,
    unit: ThresholdUnit,
    required: u32,
    trend: TrendDirection,
}

impl ThresholdRule {
    /// Create a rule matching series identifiers that start with `pattern`.
    pub fn new(pattern: &str, threshold: u32, unit: ThresholdUnit) -> Result<Self> {
        let anchored = Regex::new(&format!("^(?:{})", pattern)).map_err(|source| {
            SyncError::InvalidThresholdPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            pattern: anchored,
            threshold,
            unit,
            required: DEFAULT_REQUIRED_SAMPLES,
            trend: TrendDirection::Smaller,
        })
    }

    /// Override the minimum sample count.
    pub fn with_required(mut self, required: u32) -> Self {
        self.required = required;
        self
    }

    /// Override the improvement direction.
    pub fn with_trend(mut self, trend: TrendDirection) -> Self {
        self.trend = trend;
        self
    }

    /// Whether the rule applies to a series identifier.
    pub fn matches(&self, series_id: &str) -> bool {
        self.pattern.is_match(series_id)
    }

    /// Averaging window string as the dashboard expects it.
    pub fn averaging_window(&self) -> String {
        match self.unit {
            ThresholdUnit::Percentage => format!("{}%", self.threshold),
            ThresholdUnit::Milliseconds => self.threshold.to_string(),
        }
    }

    /// Minimum sample count.
    pub fn required(&self) -> u32 {
        self.required
    }

    /// Improvement direction.
    pub fn trend(&self) -> TrendDirection {
        self.trend
    }

    /// Averaging configuration for a series payload.
    pub fn analysis(&self) -> SeriesAnalysis {
        SeriesAnalysis {
            range: self.averaging_window(),
            required: self.required,
            trend: self.trend,
        }
    }
}

// Order matters: specific device/model rules first, catch-all last.
const BUILTIN_RULES: &[(&str, u32, ThresholdUnit)] = &[
    // Unstable and noisy GPU benchmarks.
    (r"DeepLabV3.*GPU-Mali", 20, ThresholdUnit::Percentage),
    (r"MobileNetV3Small.*GPU-Mali", 2, ThresholdUnit::Milliseconds),
    (r"MobileSSD.*GPU-Mali", 10, ThresholdUnit::Percentage),
    (r"PoseNet.*GPU-Mali", 10, ThresholdUnit::Percentage),
    // Fast GPU benchmarks that complete around 1ms.
    (r"MobileNet.*GPU", 1, ThresholdUnit::Milliseconds),
    (r".*", 5, ThresholdUnit::Percentage),
];

static BUILTIN: Lazy<ThresholdTable> = Lazy::new(|| {
    let rules = BUILTIN_RULES
        .iter()
        .map(|(pattern, threshold, unit)| ThresholdRule::new(pattern, *threshold, *unit))
        .collect::<Result<Vec<_>>>()
        .expect("built-in threshold patterns are valid");
    ThresholdTable::new(rules)
});

/// Ordered list of threshold rules.
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    rules: Vec<ThresholdRule>,
}

impl ThresholdTable {
    /// Create a table; rules are tried in the given order.
    pub fn new(rules: Vec<ThresholdRule>) -> Self {
        Self { rules }
    }

    /// The built-in table used for IREE benchmarks.
    pub fn builtin() -> &'static ThresholdTable {
        &BUILTIN
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[ThresholdRule] {
        &self.rules
    }

    /// First rule matching `series_id`.
    pub fn resolve(&self, series_id: &str) -> Result<&ThresholdRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches(series_id))
            .ok_or_else(|| SyncError::NoMatchingThreshold(series_id.to_string()))
    }
}
