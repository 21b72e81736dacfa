// ABOUTME: Per-metric trend direction, rate, and confidence over a measurement series
// ABOUTME: Uses an endpoint-to-endpoint average rate with a linear confidence saturation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: point counts are small

use std::collections::BTreeMap;

use progress_core::constants::trends::RATE_DECIMALS;
use progress_core::models::Metric;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TrendConfig;
use crate::metrics_extractor::{MetricPoint, SeriesByMetric};
use crate::statistical_analysis::round_to;

/// Direction of change of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Values rise over the series
    Increasing,
    /// Values fall over the series
    Decreasing,
    /// First and last values are equal
    Stable,
}

impl TrendDirection {
    /// Classify a slope by its sign
    #[must_use]
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            Self::Increasing
        } else if slope < 0.0 {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

/// Trend of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Sign of the rate
    pub direction: TrendDirection,
    /// Average change per step, in the metric's units, rounded to two decimals
    pub rate: f64,
    /// Reliability proxy in `[0, 1]` growing linearly with the point count
    pub confidence: f64,
}

/// Trend estimator
///
/// The rate is `(last - first) / (n - 1)`, not a regression slope. Confidence
/// is `min(n / saturation, 1)` and never decreases as points are added.
#[derive(Debug, Clone, Default)]
pub struct TrendCalculator {
    config: TrendConfig,
}

impl TrendCalculator {
    /// Create a calculator with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom configuration
    #[must_use]
    pub const fn with_config(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Trend of a date-ordered series, `None` with fewer than two points
    #[must_use]
    pub fn calculate(&self, series: &[MetricPoint]) -> Option<TrendResult> {
        let (first, last) = match series {
            [first, .., last] => (first.value, last.value),
            _ => return None,
        };

        let count = series.len();
        let slope = (last - first) / (count - 1) as f64;
        let saturation = self.config.confidence_saturation_points.max(1);
        let confidence = (count as f64 / saturation as f64).min(1.0);

        Some(TrendResult {
            direction: TrendDirection::from_slope(slope),
            rate: round_to(slope, RATE_DECIMALS),
            confidence,
        })
    }

    /// Trends for every metric with at least two points
    #[must_use]
    pub fn calculate_all(&self, series_by_metric: &SeriesByMetric) -> BTreeMap<Metric, TrendResult> {
        let trends: BTreeMap<Metric, TrendResult> = series_by_metric
            .iter()
            .filter_map(|(metric, series)| self.calculate(series).map(|trend| (*metric, trend)))
            .collect();

        debug!(
            metrics = series_by_metric.len(),
            trends = trends.len(),
            "computed metric trends"
        );
        trends
    }
}
