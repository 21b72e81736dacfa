// ABOUTME: Insight generation for a window of progress entries
// ABOUTME: Emits logging-consistency feedback and goal-progress messages for weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: entry and day counts are small

//! Insight generation for period analytics

use progress_core::models::{FitnessGoal, Metric, ProgressEntry, SubjectProfile};
use serde::{Deserialize, Serialize};

use crate::config::{ConsistencyConfig, GoalProgressConfig};
use crate::metrics_extractor::{extract_series, sorted_by_date};

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Praise for good behaviour or progress
    Positive,
    /// Advice to improve
    Suggestion,
}

/// A narrative insight about the analyzed window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Tone of the insight
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    /// Human-readable insight message
    pub message: String,
}

impl Insight {
    /// Positive insight
    #[must_use]
    pub fn positive(message: impl Into<String>) -> Self {
        Self {
            insight_type: InsightType::Positive,
            message: message.into(),
        }
    }

    /// Suggestion insight
    #[must_use]
    pub fn suggestion(message: impl Into<String>) -> Self {
        Self {
            insight_type: InsightType::Suggestion,
            message: message.into(),
        }
    }
}

/// Insight generator for a window of entries
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    consistency: ConsistencyConfig,
    goal_progress: GoalProgressConfig,
}

impl InsightGenerator {
    /// Create a new insight generator with default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new insight generator with custom config
    #[must_use]
    pub const fn with_config(
        consistency: ConsistencyConfig,
        goal_progress: GoalProgressConfig,
    ) -> Self {
        Self {
            consistency,
            goal_progress,
        }
    }

    /// Generate insights for the entries of a window
    ///
    /// Needs at least two entries; otherwise nothing is said.
    #[must_use]
    pub fn generate_insights(
        &self,
        entries: &[ProgressEntry],
        metric: Metric,
        profile: &SubjectProfile,
    ) -> Vec<Insight> {
        if entries.len() < 2 {
            return Vec::new();
        }

        let mut insights = Vec::new();
        insights.extend(self.consistency_insight(entries));

        if metric == Metric::Weight {
            insights.extend(self.goal_progress_insight(entries, profile));
        }

        insights
    }

    /// Share of calendar days spanned by the entries that carry an entry
    #[must_use]
    pub fn consistency_ratio(entries: &[ProgressEntry]) -> Option<f64> {
        let sorted = sorted_by_date(entries);
        let (first, last) = match sorted.as_slice() {
            [first, .., last] => (first.date, last.date),
            _ => return None,
        };
        let days_spanned = (last - first).num_days() + 1;
        Some(entries.len() as f64 / days_spanned as f64)
    }

    fn consistency_insight(&self, entries: &[ProgressEntry]) -> Option<Insight> {
        let consistency = Self::consistency_ratio(entries)?;

        if consistency > self.consistency.high_ratio {
            Some(Insight::positive(format!(
                "Excellent! You have been very consistent logging your progress ({:.0}% of the days).",
                consistency * 100.0
            )))
        } else if consistency < self.consistency.low_ratio {
            Some(Insight::suggestion(
                "Try to be more consistent with your logging to get better insights into your progress.",
            ))
        } else {
            None
        }
    }

    fn goal_progress_insight(
        &self,
        entries: &[ProgressEntry],
        profile: &SubjectProfile,
    ) -> Option<Insight> {
        let goal = profile.fitness_goal?;
        let weights = extract_series(entries, Metric::Weight);
        let (first, last) = match weights.as_slice() {
            [first, .., last] => (first.value, last.value),
            _ => return None,
        };
        let change = last - first;
        let threshold = self.goal_progress.min_change_kg;

        match goal {
            FitnessGoal::WeightLoss if change < -threshold => Some(Insight::positive(format!(
                "You're on the right track! You have lost {:.1} kg toward your goal.",
                change.abs()
            ))),
            FitnessGoal::MuscleGain if change > threshold => Some(Insight::positive(format!(
                "Excellent progress! You have gained {change:.1} kg of mass."
            ))),
            _ => None,
        }
    }
}
