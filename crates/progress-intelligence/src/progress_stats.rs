// ABOUTME: Whole-history progress report combining streak, changes, trends, averages, and BMI
// ABOUTME: Compares the first and latest entries and restricts trends to a recent window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use progress_core::constants::precision::MEASUREMENT_DECIMALS;
use progress_core::models::{Metric, ProgressEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bmi::{compute_bmi_progression, BmiPoint};
use crate::config::TrendConfig;
use crate::metrics_extractor::{series_by_metric, sorted_by_date};
use crate::statistical_analysis::round_to;
use crate::streak::compute_streak;
use crate::summary::{compute_summary_statistics, MetricSummary};
use crate::trend::{TrendCalculator, TrendResult};

/// First and latest logged dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest entry date
    pub first: NaiveDate,
    /// Most recent entry date
    pub latest: NaiveDate,
    /// Calendar days from first to latest, inclusive
    pub days_tracked: i64,
}

/// Progress report over the full history of a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    /// Number of entries
    pub total_entries: usize,
    /// Consecutive logged days ending today
    pub current_streak: u32,
    /// Latest minus first weight
    pub weight_change: f64,
    /// Latest minus first body fat percentage
    pub body_fat_change: f64,
    /// Latest minus first muscle mass
    pub muscle_mass_change: f64,
    /// Latest minus first value per circumference present on both entries
    pub measurements_change: BTreeMap<Metric, f64>,
    /// Recent trends of weight, body fat, and muscle mass
    pub trends: BTreeMap<Metric, TrendResult>,
    /// Summary statistics per metric
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub averages: Option<BTreeMap<Metric, MetricSummary>>,
    /// BMI progression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi_data: Option<Vec<BmiPoint>>,
    /// Span of the history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl ProgressStats {
    /// Report for a subject without entries
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_entries: 0,
            current_streak: 0,
            weight_change: 0.0,
            body_fat_change: 0.0,
            muscle_mass_change: 0.0,
            measurements_change: BTreeMap::new(),
            trends: BTreeMap::new(),
            averages: None,
            bmi_data: None,
            date_range: None,
        }
    }
}

/// Builds [`ProgressStats`] reports
#[derive(Debug, Clone)]
pub struct ProgressStatsCalculator {
    trends: TrendCalculator,
    window_days: i64,
}

impl Default for ProgressStatsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStatsCalculator {
    /// Create a calculator with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TrendConfig::default())
    }

    /// Create a calculator with custom trend configuration
    #[must_use]
    pub fn with_config(config: TrendConfig) -> Self {
        let window_days = config.stats_window_days;
        Self {
            trends: TrendCalculator::with_config(config),
            window_days,
        }
    }

    /// Progress report for `entries` as of `today`
    #[must_use]
    pub fn compute(
        &self,
        entries: &[ProgressEntry],
        today: NaiveDate,
        height_cm: Option<f64>,
    ) -> ProgressStats {
        let sorted = sorted_by_date(entries);
        let (first, latest) = match (sorted.first(), sorted.last()) {
            (Some(first), Some(latest)) => (*first, *latest),
            _ => return ProgressStats::empty(),
        };

        let measurements_change: BTreeMap<Metric, f64> = Metric::MEASUREMENTS
            .iter()
            .filter_map(|&metric| change_between(first, latest, metric).map(|c| (metric, c)))
            .collect();

        let window_start = today - Duration::days(self.window_days);
        let recent: Vec<ProgressEntry> = entries
            .iter()
            .filter(|entry| entry.date >= window_start)
            .cloned()
            .collect();
        let trends = if recent.len() < 2 {
            BTreeMap::new()
        } else {
            self.trends
                .calculate_all(&series_by_metric(&recent, &Metric::CORE_TRENDS))
        };

        let stats = ProgressStats {
            total_entries: entries.len(),
            current_streak: compute_streak(entries, today),
            weight_change: change_between(first, latest, Metric::Weight).unwrap_or(0.0),
            body_fat_change: change_between(first, latest, Metric::BodyFat).unwrap_or(0.0),
            muscle_mass_change: change_between(first, latest, Metric::MuscleMass).unwrap_or(0.0),
            measurements_change,
            trends,
            averages: Some(compute_summary_statistics(&series_by_metric(
                entries,
                &Metric::ALL,
            ))),
            bmi_data: Some(compute_bmi_progression(entries, height_cm)),
            date_range: Some(DateRange {
                first: first.date,
                latest: latest.date,
                days_tracked: (latest.date - first.date).num_days() + 1,
            }),
        };

        debug!(
            total_entries = stats.total_entries,
            current_streak = stats.current_streak,
            recent_entries = recent.len(),
            "computed progress stats"
        );
        stats
    }
}

/// Latest minus first value of `metric`, rounded, when both ends carry it
fn change_between(first: &ProgressEntry, latest: &ProgressEntry, metric: Metric) -> Option<f64> {
    let first_value = first.metric_value(metric)?;
    let latest_value = latest.metric_value(metric)?;
    Some(round_to(latest_value - first_value, MEASUREMENT_DECIMALS))
}
