// ABOUTME: Goal suggestions derived from the latest progress entry and the subject profile
// ABOUTME: Produces tracking, weight-loss, muscle-gain, and consistency goals in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal suggestion engine
//!
//! Suggestions are ordered: an optional metric goal conditioned on the
//! subject's fitness goal, then the consistency goal which always applies.
//! Without any entry only the tracking goal is returned.

use std::fmt::{self, Display};

use progress_core::models::{FitnessGoal, ProgressEntry, SubjectProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GoalSuggestionConfig;

/// Kind of suggested goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    /// Start logging progress
    Tracking,
    /// Reduce body weight
    WeightLoss,
    /// Increase muscle mass
    MuscleGain,
    /// Log regularly
    Consistency,
}

impl GoalKind {
    /// Serialized name of the goal kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tracking => "tracking",
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Consistency => "consistency",
        }
    }
}

impl Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggested goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSuggestion {
    /// Kind of goal
    #[serde(rename = "type")]
    pub goal_type: GoalKind,
    /// Short title
    pub title: String,
    /// One-sentence description
    pub description: String,
    /// Human-readable target, e.g. `"76.0 kg"`
    pub target: String,
    /// Numeric target for metric goals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    /// Human-readable deadline, e.g. `"8 weeks"`
    pub deadline: String,
    /// Current value of the tracked quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    /// Progress toward the target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

/// Goal suggestion engine
#[derive(Debug, Clone, Default)]
pub struct GoalEngine {
    config: GoalSuggestionConfig,
}

impl GoalEngine {
    /// Create an engine with default factors and deadlines
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom factors and deadlines
    #[must_use]
    pub const fn with_config(config: GoalSuggestionConfig) -> Self {
        Self { config }
    }

    /// Suggest goals for a subject given their most recent entry
    #[must_use]
    pub fn suggest_goals(
        &self,
        profile: &SubjectProfile,
        latest: Option<&ProgressEntry>,
    ) -> Vec<GoalSuggestion> {
        let Some(latest) = latest else {
            debug!("no entries recorded, suggesting tracking goal");
            return vec![Self::tracking_goal()];
        };

        let mut goals = Vec::with_capacity(2);
        match profile.fitness_goal {
            Some(FitnessGoal::WeightLoss) => {
                goals.extend(
                    positive(latest.weight).map(|weight| self.weight_loss_goal(weight)),
                );
            }
            Some(FitnessGoal::MuscleGain) => {
                goals.extend(
                    positive(latest.muscle_mass).map(|muscle| self.muscle_gain_goal(muscle)),
                );
            }
            _ => {}
        }
        goals.push(self.consistency_goal());

        debug!(
            goals = goals.len(),
            fitness_goal = ?profile.fitness_goal,
            "suggested goals"
        );
        goals
    }

    fn tracking_goal() -> GoalSuggestion {
        GoalSuggestion {
            goal_type: GoalKind::Tracking,
            title: "Start tracking".to_owned(),
            description: "Log your first measurement to set personalized goals".to_owned(),
            target: "Create first entry".to_owned(),
            target_value: None,
            deadline: "This week".to_owned(),
            current: None,
            progress: None,
        }
    }

    fn weight_loss_goal(&self, weight: f64) -> GoalSuggestion {
        let target = weight * self.config.weight_loss_factor;
        GoalSuggestion {
            goal_type: GoalKind::WeightLoss,
            title: "Healthy weight loss".to_owned(),
            description: format!("Reduce weight from {weight:.1} kg to {target:.1} kg"),
            target: format!("{target:.1} kg"),
            target_value: Some(target),
            deadline: weeks(self.config.weight_loss_weeks),
            current: Some(weight),
            progress: Some(0.0),
        }
    }

    fn muscle_gain_goal(&self, muscle_mass: f64) -> GoalSuggestion {
        let target = muscle_mass * self.config.muscle_gain_factor;
        GoalSuggestion {
            goal_type: GoalKind::MuscleGain,
            title: "Muscle mass gain".to_owned(),
            description: format!(
                "Increase muscle mass from {muscle_mass:.1} kg to {target:.1} kg"
            ),
            target: format!("{target:.1} kg"),
            target_value: Some(target),
            deadline: weeks(self.config.muscle_gain_weeks),
            current: Some(muscle_mass),
            progress: Some(0.0),
        }
    }

    fn consistency_goal(&self) -> GoalSuggestion {
        let entries = self.config.consistency_target_entries;
        let window = self.config.consistency_window_weeks;
        GoalSuggestion {
            goal_type: GoalKind::Consistency,
            title: "Tracking consistency".to_owned(),
            description: format!("Log your progress {} times per week", entries / window.max(1)),
            target: format!("{entries} entries"),
            target_value: Some(f64::from(entries)),
            deadline: weeks(window),
            current: Some(0.0),
            progress: Some(0.0),
        }
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

fn weeks(count: u32) -> String {
    format!("{count} weeks")
}
