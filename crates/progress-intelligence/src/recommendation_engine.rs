// ABOUTME: Goal-conditioned recommendations attached to period analytics
// ABOUTME: Fixed advice per fitness goal plus a logging-frequency reminder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use progress_core::models::{FitnessGoal, ProgressEntry, SubjectProfile};

use crate::config::ConsistencyConfig;

const START_LOGGING: &str =
    "Start logging your progress regularly to get personalized recommendations.";

const WEIGHT_LOSS_ADVICE: [&str; 2] = [
    "Keep a consistent caloric deficit and log your weight weekly.",
    "Combine cardio with strength training for better results.",
];

const MUSCLE_GAIN_ADVICE: [&str; 2] = [
    "Make sure you eat enough protein (1.6-2.2 g per kg of body weight).",
    "Log your body measurements as well as your weight to see muscle progress.",
];

const LOG_MORE_OFTEN: &str =
    "Try to log your progress at least 2-3 times per week for better insights.";

/// Recommendation generator
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: ConsistencyConfig,
}

impl RecommendationEngine {
    /// Create an engine with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom low-entry threshold
    #[must_use]
    pub const fn with_config(config: ConsistencyConfig) -> Self {
        Self { config }
    }

    /// Recommendations for the entries of a window
    #[must_use]
    pub fn generate_recommendations(
        &self,
        entries: &[ProgressEntry],
        profile: &SubjectProfile,
    ) -> Vec<String> {
        if entries.is_empty() {
            return vec![START_LOGGING.to_owned()];
        }

        let mut recommendations: Vec<String> = match profile.fitness_goal {
            Some(FitnessGoal::WeightLoss) => {
                WEIGHT_LOSS_ADVICE.iter().map(|s| (*s).to_owned()).collect()
            }
            Some(FitnessGoal::MuscleGain) => {
                MUSCLE_GAIN_ADVICE.iter().map(|s| (*s).to_owned()).collect()
            }
            _ => Vec::new(),
        };

        if entries.len() < self.config.low_entry_count {
            recommendations.push(LOG_MORE_OFTEN.to_owned());
        }

        recommendations
    }
}
