// ABOUTME: Progress analyzer facade wiring every analytics engine to one configuration
// ABOUTME: Entry point used by the CLI and integrators that need tuned thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress analyzer for body-measurement histories

use std::collections::BTreeMap;

use chrono::NaiveDate;
use progress_core::errors::AppResult;
use progress_core::models::{AnalyticsPeriod, Metric, ProgressEntry, SubjectProfile};
use tracing::info;

use crate::config::AnalyticsConfig;
use crate::goal_engine::{GoalEngine, GoalSuggestion};
use crate::insights::InsightGenerator;
use crate::metrics_extractor::series_by_metric;
use crate::period_analytics::{AnalyticsResult, PeriodAnalyzer};
use crate::progress_stats::{ProgressStats, ProgressStatsCalculator};
use crate::recommendation_engine::RecommendationEngine;
use crate::trend::{TrendCalculator, TrendResult};

/// Main analyzer bundling the configured engines
#[derive(Debug, Clone)]
pub struct ProgressAnalyzer {
    config: AnalyticsConfig,
    trends: TrendCalculator,
    periods: PeriodAnalyzer,
    goals: GoalEngine,
    stats: ProgressStatsCalculator,
}

impl Default for ProgressAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressAnalyzer {
    /// Create an analyzer with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AnalyticsConfig::default())
    }

    /// Create an analyzer from an explicit configuration
    #[must_use]
    pub fn with_config(config: AnalyticsConfig) -> Self {
        let periods = PeriodAnalyzer::with_components(
            InsightGenerator::with_config(
                config.consistency.clone(),
                config.goal_progress.clone(),
            ),
            RecommendationEngine::with_config(config.consistency.clone()),
        );

        Self {
            trends: TrendCalculator::with_config(config.trends.clone()),
            periods,
            goals: GoalEngine::with_config(config.goal_suggestions.clone()),
            stats: ProgressStatsCalculator::with_config(config.trends.clone()),
            config,
        }
    }

    /// Create an analyzer from `PROGRESS_ANALYTICS_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or fails validation
    pub fn from_env() -> AppResult<Self> {
        let config = AnalyticsConfig::load()?;
        info!("Loaded analytics configuration from environment");
        Ok(Self::with_config(config))
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Trends for the requested metrics
    #[must_use]
    pub fn trends(
        &self,
        entries: &[ProgressEntry],
        metrics: &[Metric],
    ) -> BTreeMap<Metric, TrendResult> {
        self.trends.calculate_all(&series_by_metric(entries, metrics))
    }

    /// Period-scoped analytics of one metric
    #[must_use]
    pub fn period_analytics(
        &self,
        entries: &[ProgressEntry],
        period: AnalyticsPeriod,
        metric: Metric,
        today: NaiveDate,
        profile: &SubjectProfile,
    ) -> AnalyticsResult {
        self.periods.analyze(entries, period, metric, today, profile)
    }

    /// Goal suggestions from the most recent entry
    #[must_use]
    pub fn goals(&self, entries: &[ProgressEntry], profile: &SubjectProfile) -> Vec<GoalSuggestion> {
        let latest = entries.iter().max_by_key(|entry| entry.date);
        self.goals.suggest_goals(profile, latest)
    }

    /// Whole-history progress report
    #[must_use]
    pub fn progress_stats(
        &self,
        entries: &[ProgressEntry],
        today: NaiveDate,
        profile: &SubjectProfile,
    ) -> ProgressStats {
        self.stats.compute(entries, today, profile.height)
    }
}
