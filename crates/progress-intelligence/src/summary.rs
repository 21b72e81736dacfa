// ABOUTME: Per-metric summary statistics (mean, median, min, max) over measurement series
// ABOUTME: Metrics without values are omitted rather than reported as null
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use progress_core::constants::precision::MEASUREMENT_DECIMALS;
use progress_core::models::Metric;
use serde::{Deserialize, Serialize};

use crate::metrics_extractor::{series_values, SeriesByMetric};
use crate::statistical_analysis::{round_to, StatisticalAnalyzer};

/// Summary statistics for one metric, each rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Mean (average) value
    pub mean: f64,
    /// Median value
    pub median: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
}

impl MetricSummary {
    /// Summarize a list of present values, `None` when empty
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Some(Self {
            mean: round_to(StatisticalAnalyzer::mean(values)?, MEASUREMENT_DECIMALS),
            median: round_to(StatisticalAnalyzer::median(values)?, MEASUREMENT_DECIMALS),
            min: round_to(StatisticalAnalyzer::min(values)?, MEASUREMENT_DECIMALS),
            max: round_to(StatisticalAnalyzer::max(values)?, MEASUREMENT_DECIMALS),
        })
    }
}

/// Summary statistics for every metric that has at least one value
#[must_use]
pub fn compute_summary_statistics(series_by_metric: &SeriesByMetric) -> BTreeMap<Metric, MetricSummary> {
    series_by_metric
        .iter()
        .filter_map(|(metric, series)| {
            MetricSummary::from_values(&series_values(series)).map(|summary| (*metric, summary))
        })
        .collect()
}
