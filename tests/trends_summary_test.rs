// ABOUTME: Integration tests for per-metric trends and summary statistics
// ABOUTME: Validates rates, directions, confidence saturation, and rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, daily_weights, day, init_test_logging, reference_today};
use progress_analytics::intelligence::{
    compute_summary_statistics, compute_trends, metrics_extractor::series_by_metric, MetricPoint,
    ProgressAnalyzer, TrendCalculator, TrendDirection,
};
use progress_analytics::models::{Metric, ProgressEntry};

fn points(values: &[f64]) -> Vec<MetricPoint> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| MetricPoint {
            date: day(2025, 1, 1 + index as u32),
            value: *value,
        })
        .collect()
}

#[test]
fn test_two_point_trend() {
    init_test_logging();
    let trend = TrendCalculator::new().calculate(&points(&[10.0, 20.0])).unwrap();

    assert_eq!(trend.direction, TrendDirection::Increasing);
    assert_close(trend.rate, 10.0);
    assert_close(trend.confidence, 0.2);
}

#[test]
fn test_trend_requires_two_points() {
    let calculator = TrendCalculator::new();
    assert!(calculator.calculate(&points(&[80.0])).is_none());
    assert!(calculator.calculate(&[]).is_none());
}

#[test]
fn test_trend_uses_endpoints_only() {
    // Middle values do not influence the rate
    let trend = TrendCalculator::new()
        .calculate(&points(&[80.0, 95.0, 60.0, 77.0]))
        .unwrap();

    assert_eq!(trend.direction, TrendDirection::Decreasing);
    assert_close(trend.rate, -1.0);
    assert_close(trend.confidence, 0.4);
}

#[test]
fn test_flat_trend_is_stable() {
    let trend = TrendCalculator::new()
        .calculate(&points(&[70.0, 71.0, 70.0]))
        .unwrap();

    assert_eq!(trend.direction, TrendDirection::Stable);
    assert_close(trend.rate, 0.0);
}

#[test]
fn test_trend_rate_rounds_to_two_decimals() {
    let trend = TrendCalculator::new()
        .calculate(&points(&[80.0, 80.5, 80.7, 81.0]))
        .unwrap();

    assert_close(trend.rate, 0.33);
}

#[test]
fn test_confidence_saturates_at_ten_points() {
    let values: Vec<f64> = (0..12).map(|i| 80.0 - f64::from(i) * 0.1).collect();
    let trend = TrendCalculator::new().calculate(&points(&values)).unwrap();

    assert_close(trend.confidence, 1.0);
}

#[test]
fn test_compute_trends_skips_sparse_metrics() {
    let today = reference_today();
    let mut entries = daily_weights(today, &[82.0, 81.0, 80.0]);
    entries[2] = entries[2].clone().with_body_fat(20.0);

    let trends = compute_trends(&series_by_metric(&entries, &Metric::CORE_TRENDS));

    assert_eq!(trends.len(), 1);
    let weight = trends.get(&Metric::Weight).unwrap();
    assert_eq!(weight.direction, TrendDirection::Decreasing);
    assert_close(weight.rate, -1.0);
    assert!(!trends.contains_key(&Metric::BodyFat));
}

#[test]
fn test_trend_series_is_sorted_by_date() {
    let entries = vec![
        ProgressEntry::new(day(2025, 1, 3)).with_waist(88.0),
        ProgressEntry::new(day(2025, 1, 1)).with_waist(90.0),
        ProgressEntry::new(day(2025, 1, 2)).with_waist(89.0),
    ];

    let trends = ProgressAnalyzer::new().trends(&entries, &[Metric::Waist]);
    let waist = trends.get(&Metric::Waist).unwrap();

    assert_eq!(waist.direction, TrendDirection::Decreasing);
    assert_close(waist.rate, -1.0);
}

#[test]
fn test_summary_statistics() {
    let entries: Vec<ProgressEntry> = [1.0, 2.0, 3.0, 4.0]
        .iter()
        .enumerate()
        .map(|(index, value)| ProgressEntry::new(day(2025, 1, 1 + index as u32)).with_arms(*value))
        .collect();

    let summary = compute_summary_statistics(&series_by_metric(&entries, &Metric::ALL));
    let arms = summary.get(&Metric::Arms).unwrap();

    assert_close(arms.mean, 2.5);
    assert_close(arms.median, 2.5);
    assert_close(arms.min, 1.0);
    assert_close(arms.max, 4.0);
    assert_eq!(summary.len(), 1);
}

#[test]
fn test_summary_rounds_to_one_decimal() {
    let entries = daily_weights(reference_today(), &[80.04, 80.11, 80.27]);
    let summary = compute_summary_statistics(&series_by_metric(&entries, &[Metric::Weight]));
    let weight = summary.get(&Metric::Weight).unwrap();

    assert_close(weight.mean, 80.1);
    assert_close(weight.median, 80.1);
    assert_close(weight.min, 80.0);
    assert_close(weight.max, 80.3);
}

#[test]
fn test_summary_serializes_with_metric_keys() {
    let entries = daily_weights(reference_today(), &[80.0, 81.0]);
    let summary = compute_summary_statistics(&series_by_metric(&entries, &Metric::ALL));
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["weight"]["mean"], 80.5);
    assert!(json.get("body_fat").is_none());
}
