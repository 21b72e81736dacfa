// ABOUTME: Period-scoped analytics over a trailing window of progress entries
// ABOUTME: Selects the window, builds data points, statistics, insights, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use progress_core::constants::precision::MEASUREMENT_DECIMALS;
use progress_core::models::{AnalyticsPeriod, Metric, ProgressEntry, SubjectProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::insights::{Insight, InsightGenerator};
use crate::metrics_extractor::{extract_series, series_values, MetricPoint};
use crate::recommendation_engine::RecommendationEngine;
use crate::statistical_analysis::{round_to, StatisticalAnalyzer};

/// Statistics of the requested metric within the window, rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Last value minus first value, 0 with a single point
    pub total_change: f64,
    /// Mean value
    pub average: f64,
    /// Highest value
    pub best_value: f64,
    /// Lowest value
    pub worst_value: f64,
    /// Sample standard deviation, 0 with a single point
    pub volatility: f64,
}

impl PeriodStats {
    /// Statistics of date-ordered values, `None` when empty
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let total_change = match values {
            [first, .., last] => round_to(last - first, MEASUREMENT_DECIMALS),
            _ => 0.0,
        };

        Some(Self {
            total_change,
            average: round_to(StatisticalAnalyzer::mean(values)?, MEASUREMENT_DECIMALS),
            best_value: round_to(StatisticalAnalyzer::max(values)?, MEASUREMENT_DECIMALS),
            worst_value: round_to(StatisticalAnalyzer::min(values)?, MEASUREMENT_DECIMALS),
            volatility: round_to(
                StatisticalAnalyzer::sample_std_dev(values),
                MEASUREMENT_DECIMALS,
            ),
        })
    }
}

/// Window statistics as reported in [`AnalyticsResult`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeriodStatsReport {
    /// Statistics of the metric's values in the window
    Computed(PeriodStats),
    /// The window has entries but none carries the metric; serializes as `{}`
    NoValues {},
}

impl PeriodStatsReport {
    /// Report for date-ordered values
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        PeriodStats::from_values(values).map_or(Self::NoValues {}, Self::Computed)
    }

    /// Computed statistics, `None` when the metric had no values
    #[must_use]
    pub const fn stats(self) -> Option<PeriodStats> {
        match self {
            Self::Computed(stats) => Some(stats),
            Self::NoValues {} => None,
        }
    }
}

/// Analytics for one metric over one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// Requested period
    pub period: AnalyticsPeriod,
    /// Requested metric
    pub metric: Metric,
    /// Date-ordered values of the metric inside the window
    pub data_points: Vec<MetricPoint>,
    /// Narrative insights
    pub insights: Vec<Insight>,
    /// Window statistics; absent when the window is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_stats: Option<PeriodStatsReport>,
    /// Goal-conditioned advice; absent when the window is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
}

impl AnalyticsResult {
    /// Well-formed result for a window without entries
    #[must_use]
    pub const fn empty(period: AnalyticsPeriod, metric: Metric) -> Self {
        Self {
            period,
            metric,
            data_points: Vec::new(),
            insights: Vec::new(),
            period_stats: None,
            recommendations: None,
        }
    }
}

/// Entries dated within `[period.start_date(today), today]`, ascending by date
#[must_use]
pub fn window_entries(
    entries: &[ProgressEntry],
    period: AnalyticsPeriod,
    today: NaiveDate,
) -> Vec<ProgressEntry> {
    let start = period.start_date(today);
    let mut window: Vec<ProgressEntry> = entries
        .iter()
        .filter(|entry| entry.date >= start && entry.date <= today)
        .cloned()
        .collect();
    window.sort_by_key(|entry| entry.date);
    window
}

/// Orchestrates window selection, insights, statistics, and recommendations
#[derive(Debug, Clone, Default)]
pub struct PeriodAnalyzer {
    insights: InsightGenerator,
    recommendations: RecommendationEngine,
}

impl PeriodAnalyzer {
    /// Create an analyzer with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer from configured collaborators
    #[must_use]
    pub const fn with_components(
        insights: InsightGenerator,
        recommendations: RecommendationEngine,
    ) -> Self {
        Self {
            insights,
            recommendations,
        }
    }

    /// Analytics of `metric` over the trailing `period` ending at `today`
    #[must_use]
    pub fn analyze(
        &self,
        entries: &[ProgressEntry],
        period: AnalyticsPeriod,
        metric: Metric,
        today: NaiveDate,
        profile: &SubjectProfile,
    ) -> AnalyticsResult {
        let window = window_entries(entries, period, today);
        if window.is_empty() {
            debug!(%period, %metric, "no entries in analytics window");
            return AnalyticsResult::empty(period, metric);
        }

        let data_points = extract_series(&window, metric);
        let period_stats = PeriodStatsReport::from_values(&series_values(&data_points));
        let insights = self.insights.generate_insights(&window, metric, profile);
        let recommendations = self
            .recommendations
            .generate_recommendations(&window, profile);

        debug!(
            %period,
            %metric,
            window_entries = window.len(),
            data_points = data_points.len(),
            insights = insights.len(),
            "computed period analytics"
        );

        AnalyticsResult {
            period,
            metric,
            data_points,
            insights,
            period_stats: Some(period_stats),
            recommendations: Some(recommendations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_stats_single_value() {
        let stats = PeriodStats::from_values(&[72.34]).unwrap();
        assert!(stats.total_change.abs() < f64::EPSILON);
        assert!(stats.volatility.abs() < f64::EPSILON);
        assert!((stats.average - 72.3).abs() < f64::EPSILON);
        assert!((stats.best_value - 72.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_period_stats_empty() {
        assert!(PeriodStats::from_values(&[]).is_none());
    }

    #[test]
    fn test_empty_result_omits_optional_sections() {
        let result = AnalyticsResult::empty(AnalyticsPeriod::Week, Metric::BodyFat);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["period"], "week");
        assert_eq!(json["metric"], "body_fat");
        assert_eq!(json["data_points"], serde_json::json!([]));
        assert_eq!(json["insights"], serde_json::json!([]));
        assert!(json.get("period_stats").is_none());
        assert!(json.get("recommendations").is_none());
    }

    #[test]
    fn test_report_without_values_serializes_as_empty_object() {
        let report = PeriodStatsReport::from_values(&[]);
        assert_eq!(report, PeriodStatsReport::NoValues {});
        assert_eq!(serde_json::to_value(report).unwrap(), serde_json::json!({}));

        let computed = PeriodStatsReport::from_values(&[80.0, 79.0]);
        let json = serde_json::to_value(computed).unwrap();
        assert_eq!(json["total_change"], -1.0);
        assert_eq!(computed.stats().map(|stats| stats.best_value), Some(80.0));
    }
}
