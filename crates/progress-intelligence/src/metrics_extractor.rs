// ABOUTME: Type-safe metric series extraction from progress entries
// ABOUTME: Builds date-ordered (date, value) series that skip absent measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::NaiveDate;
use progress_core::models::{Metric, ProgressEntry};
use serde::{Deserialize, Serialize};

/// One `(date, value)` observation of a metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Date of the entry the value came from
    pub date: NaiveDate,
    /// Measured value
    pub value: f64,
}

/// Date-ordered observations of one metric, present values only
pub type MetricSeries = Vec<MetricPoint>;

/// Series for several metrics keyed in declaration order
pub type SeriesByMetric = BTreeMap<Metric, MetricSeries>;

/// Extract the series of `metric` from `entries`
///
/// Entries may arrive in any order; the series is sorted by date. Entries
/// without the metric are skipped, never interpolated or zero-filled.
#[must_use]
pub fn extract_series(entries: &[ProgressEntry], metric: Metric) -> MetricSeries {
    let mut series: MetricSeries = entries
        .iter()
        .filter_map(|entry| {
            entry
                .metric_value(metric)
                .map(|value| MetricPoint {
                    date: entry.date,
                    value,
                })
        })
        .collect();
    series.sort_by_key(|point| point.date);
    series
}

/// Extract series for each of `metrics`, omitting metrics with no values
#[must_use]
pub fn series_by_metric(entries: &[ProgressEntry], metrics: &[Metric]) -> SeriesByMetric {
    metrics
        .iter()
        .filter_map(|&metric| {
            let series = extract_series(entries, metric);
            (!series.is_empty()).then_some((metric, series))
        })
        .collect()
}

/// Values of a series, in date order
#[must_use]
pub fn series_values(series: &[MetricPoint]) -> Vec<f64> {
    series.iter().map(|point| point.value).collect()
}

/// Entries sorted by ascending date
#[must_use]
pub fn sorted_by_date(entries: &[ProgressEntry]) -> Vec<&ProgressEntry> {
    let mut sorted: Vec<&ProgressEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.date);
    sorted
}
