// ABOUTME: Analytics commands for progress-cli
// ABOUTME: Runs stats, period analytics, goals, streak, trends, summary, and BMI computations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use progress_analytics::{
    errors::AppResult,
    intelligence::{
        compute_bmi_progression, compute_streak, compute_summary_statistics,
        metrics_extractor::series_by_metric, ProgressAnalyzer,
    },
    models::{AnalyticsPeriod, Metric, ProgressEntry, SubjectProfile},
};
use serde_json::{json, Value};
use tracing::debug;

type Result<T> = AppResult<T>;

/// Inputs shared by every command
pub struct CommandContext<'a> {
    /// Analyzer built from the loaded configuration
    pub analyzer: &'a ProgressAnalyzer,
    /// Validated progress entries
    pub entries: &'a [ProgressEntry],
    /// Subject profile
    pub profile: &'a SubjectProfile,
    /// Reference date
    pub today: NaiveDate,
}

/// Whole-history progress report
pub fn stats(context: &CommandContext<'_>) -> Value {
    let stats = context
        .analyzer
        .progress_stats(context.entries, context.today, context.profile);
    json!({ "stats": stats })
}

/// Analytics of one metric over a trailing period
pub fn period(context: &CommandContext<'_>, period: &str, metric: &str) -> Result<Value> {
    let period: AnalyticsPeriod = period.parse()?;
    let metric: Metric = metric.parse()?;
    debug!(%period, %metric, "running period analytics");

    let analytics = context.analyzer.period_analytics(
        context.entries,
        period,
        metric,
        context.today,
        context.profile,
    );
    Ok(json!({ "analytics": analytics }))
}

/// Goal suggestions from the most recent entry
pub fn goals(context: &CommandContext<'_>) -> Value {
    let goals = context.analyzer.goals(context.entries, context.profile);
    json!({ "goals": goals })
}

/// Consecutive logged days ending today
pub fn streak(context: &CommandContext<'_>) -> Value {
    json!({ "current_streak": compute_streak(context.entries, context.today) })
}

/// Per-metric trends, defaulting to weight, body fat, and muscle mass
pub fn trends(context: &CommandContext<'_>, metrics: &[String]) -> Result<Value> {
    let metrics = parse_metrics(metrics, &Metric::CORE_TRENDS)?;
    let trends = context.analyzer.trends(context.entries, &metrics);
    Ok(json!({ "trends": trends }))
}

/// Per-metric summary statistics, defaulting to every metric
pub fn summary(context: &CommandContext<'_>, metrics: &[String]) -> Result<Value> {
    let metrics = parse_metrics(metrics, &Metric::ALL)?;
    let averages = compute_summary_statistics(&series_by_metric(context.entries, &metrics));
    Ok(json!({ "averages": averages }))
}

/// BMI progression for the profile height
pub fn bmi(context: &CommandContext<'_>) -> Value {
    let bmi_data = compute_bmi_progression(context.entries, context.profile.height);
    json!({ "bmi_data": bmi_data })
}

fn parse_metrics(names: &[String], defaults: &[Metric]) -> Result<Vec<Metric>> {
    if names.is_empty() {
        return Ok(defaults.to_vec());
    }
    names.iter().map(|name| name.parse()).collect()
}
