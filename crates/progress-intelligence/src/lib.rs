// ABOUTME: Progress analytics engine turning measurement histories into derived analytics
// ABOUTME: Streaks, trends, summary statistics, BMI, period insights, goals, and progress reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Progress Intelligence
//!
//! Deterministic, stateless computations over a subject's progress entries.
//! Every operation takes the reference date `today` as an argument, so the
//! same inputs always produce the same output.
//!
//! The free functions at the crate root use default thresholds. Use
//! [`ProgressAnalyzer`] to run the same computations with a custom
//! [`AnalyticsConfig`].

/// Progress analyzer facade
pub mod analyzer;
/// BMI calculation and classification
pub mod bmi;
/// Analytics configuration with environment overrides
pub mod config;
/// Goal suggestions
pub mod goal_engine;
/// Consistency and goal-progress insights
pub mod insights;
/// Metric series extraction
pub mod metrics_extractor;
/// Period-scoped analytics
pub mod period_analytics;
/// Whole-history progress report
pub mod progress_stats;
/// Goal-conditioned recommendations
pub mod recommendation_engine;
/// Statistical primitives
pub mod statistical_analysis;
/// Logging streak
pub mod streak;
/// Per-metric summary statistics
pub mod summary;
/// Per-metric trends
pub mod trend;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use progress_core::models::{AnalyticsPeriod, Metric, ProgressEntry, SubjectProfile};

pub use analyzer::ProgressAnalyzer;
pub use bmi::{calculate_bmi, BmiCategory, BmiPoint};
pub use config::{AnalyticsConfig, ConfigError};
pub use goal_engine::{GoalEngine, GoalKind, GoalSuggestion};
pub use insights::{Insight, InsightGenerator, InsightType};
pub use metrics_extractor::{extract_series, MetricPoint, MetricSeries, SeriesByMetric};
pub use period_analytics::{AnalyticsResult, PeriodAnalyzer, PeriodStats, PeriodStatsReport};
pub use progress_stats::{DateRange, ProgressStats, ProgressStatsCalculator};
pub use recommendation_engine::RecommendationEngine;
pub use statistical_analysis::StatisticalAnalyzer;
pub use streak::compute_streak;
pub use summary::{compute_summary_statistics, MetricSummary};
pub use trend::{TrendCalculator, TrendDirection, TrendResult};

/// Trends for every metric in `series_by_metric` with at least two points
#[must_use]
pub fn compute_trends(series_by_metric: &SeriesByMetric) -> BTreeMap<Metric, TrendResult> {
    TrendCalculator::new().calculate_all(series_by_metric)
}

/// BMI progression of `entries` for a subject of `height_cm`
#[must_use]
pub fn compute_bmi_progression(entries: &[ProgressEntry], height_cm: Option<f64>) -> Vec<BmiPoint> {
    bmi::compute_bmi_progression(entries, height_cm)
}

/// Analytics of `metric` over the trailing `period` ending at `today`
#[must_use]
pub fn compute_period_analytics(
    entries: &[ProgressEntry],
    period: AnalyticsPeriod,
    metric: Metric,
    today: NaiveDate,
    profile: &SubjectProfile,
) -> AnalyticsResult {
    PeriodAnalyzer::new().analyze(entries, period, metric, today, profile)
}

/// Goal suggestions for `profile` given their most recent entry
#[must_use]
pub fn suggest_goals(profile: &SubjectProfile, latest: Option<&ProgressEntry>) -> Vec<GoalSuggestion> {
    GoalEngine::new().suggest_goals(profile, latest)
}

/// Whole-history progress report as of `today`
#[must_use]
pub fn compute_progress_stats(
    entries: &[ProgressEntry],
    today: NaiveDate,
    height_cm: Option<f64>,
) -> ProgressStats {
    ProgressStatsCalculator::new().compute(entries, today, height_cm)
}
