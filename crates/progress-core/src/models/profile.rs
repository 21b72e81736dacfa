// ABOUTME: Subject profile consumed by the analytics engine
// ABOUTME: Carries height and the stated fitness goal used for goal-conditioned output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Stated fitness goal of a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Reduce body weight
    WeightLoss,
    /// Increase muscle mass
    MuscleGain,
    /// Improve endurance
    Endurance,
    /// Improve strength
    Strength,
    /// General fitness
    GeneralFitness,
    /// Maintain current condition
    Maintenance,
}

impl FitnessGoal {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Endurance => "endurance",
            Self::Strength => "strength",
            Self::GeneralFitness => "general_fitness",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight_loss" => Ok(Self::WeightLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            "endurance" => Ok(Self::Endurance),
            "strength" => Ok(Self::Strength),
            "general_fitness" => Ok(Self::GeneralFitness),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(AppError::invalid_input(format!(
                "Invalid fitness goal '{other}'"
            ))),
        }
    }
}

/// Profile of the subject whose entries are analyzed
///
/// Height is not stored per entry; the profile height is applied to every
/// entry when projecting BMI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectProfile {
    /// Display name (not used by analytics)
    #[serde(default)]
    pub name: String,
    /// Height in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Stated fitness goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<FitnessGoal>,
}

impl SubjectProfile {
    /// Create a profile with only a display name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height: None,
            fitness_goal: None,
        }
    }

    /// Set the height in centimetres
    #[must_use]
    pub const fn with_height(mut self, height_cm: f64) -> Self {
        self.height = Some(height_cm);
        self
    }

    /// Set the stated fitness goal
    #[must_use]
    pub const fn with_goal(mut self, goal: FitnessGoal) -> Self {
        self.fitness_goal = Some(goal);
        self
    }

    /// Whether the subject pursues the given goal
    #[must_use]
    pub fn has_goal(&self, goal: FitnessGoal) -> bool {
        self.fitness_goal == Some(goal)
    }
}
