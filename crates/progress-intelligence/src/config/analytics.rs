// ABOUTME: Analytics engine configuration with environment variable overrides
// ABOUTME: Thresholds for trends, consistency insights, goal progress, and goal suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Configuration
//!
//! Defaults reproduce the published analytics behaviour exactly. Every value
//! can be overridden via environment variables with the `PROGRESS_ANALYTICS_`
//! prefix when loaded through [`AnalyticsConfig::load`].

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use progress_core::constants::{consistency, goals, trends};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ConfigError;

/// Global configuration singleton
static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

// ============================================================================
// Main Configuration
// ============================================================================

/// Analytics configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Trend estimation settings
    pub trends: TrendConfig,
    /// Logging-consistency insight thresholds
    pub consistency: ConsistencyConfig,
    /// Goal-progress insight thresholds
    pub goal_progress: GoalProgressConfig,
    /// Goal suggestion parameters
    pub goal_suggestions: GoalSuggestionConfig,
}

impl AnalyticsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analytics config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trends.confidence_saturation_points == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "confidence_saturation_points must be > 0",
            ));
        }

        if self.trends.stats_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "stats_window_days must be > 0",
            ));
        }

        let ratios = [
            self.consistency.high_ratio,
            self.consistency.low_ratio,
        ];
        if ratios.iter().any(|r| !(0.0..=1.0).contains(r)) {
            return Err(ConfigError::InvalidRange(
                "consistency ratios must be between 0 and 1",
            ));
        }

        if self.consistency.low_ratio > self.consistency.high_ratio {
            return Err(ConfigError::InvalidRange(
                "consistency low_ratio must not exceed high_ratio",
            ));
        }

        if self.goal_progress.min_change_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "goal progress min_change_kg must be >= 0",
            ));
        }

        if self.goal_suggestions.weight_loss_factor <= 0.0
            || self.goal_suggestions.weight_loss_factor >= 1.0
        {
            return Err(ConfigError::InvalidRange(
                "weight_loss_factor must be between 0 and 1 (exclusive)",
            ));
        }

        if self.goal_suggestions.muscle_gain_factor <= 1.0 {
            return Err(ConfigError::InvalidRange("muscle_gain_factor must be > 1"));
        }

        if self.goal_suggestions.consistency_target_entries == 0
            || self.goal_suggestions.consistency_window_weeks == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "consistency goal target and window must be > 0",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Trends
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_CONFIDENCE_SATURATION_POINTS",
            &mut self.trends.confidence_saturation_points,
        )?;
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_STATS_WINDOW_DAYS",
            &mut self.trends.stats_window_days,
        )?;

        // Consistency
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_HIGH_CONSISTENCY_RATIO",
            &mut self.consistency.high_ratio,
        )?;
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_LOW_CONSISTENCY_RATIO",
            &mut self.consistency.low_ratio,
        )?;
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_LOW_ENTRY_COUNT",
            &mut self.consistency.low_entry_count,
        )?;

        // Goal progress
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_GOAL_MIN_CHANGE_KG",
            &mut self.goal_progress.min_change_kg,
        )?;

        // Goal suggestions
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_WEIGHT_LOSS_FACTOR",
            &mut self.goal_suggestions.weight_loss_factor,
        )?;
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_WEIGHT_LOSS_WEEKS",
            &mut self.goal_suggestions.weight_loss_weeks,
        )?;
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_MUSCLE_GAIN_FACTOR",
            &mut self.goal_suggestions.muscle_gain_factor,
        )?;
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_MUSCLE_GAIN_WEEKS",
            &mut self.goal_suggestions.muscle_gain_weeks,
        )?;
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_CONSISTENCY_TARGET_ENTRIES",
            &mut self.goal_suggestions.consistency_target_entries,
        )?;
        Self::apply_env_var(
            "PROGRESS_ANALYTICS_CONSISTENCY_WINDOW_WEEKS",
            &mut self.goal_suggestions.consistency_window_weeks,
        )?;

        Ok(self)
    }
}

// ============================================================================
// Sub-Configurations
// ============================================================================

/// Trend estimation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Data points at which trend confidence reaches 1.0
    pub confidence_saturation_points: usize,
    /// Trailing days of entries used for trends in the progress report
    pub stats_window_days: i64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            confidence_saturation_points: trends::CONFIDENCE_SATURATION_POINTS,
            stats_window_days: trends::STATS_TREND_WINDOW_DAYS,
        }
    }
}

/// Logging-consistency configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyConfig {
    /// Ratio above which a positive consistency insight is emitted
    pub high_ratio: f64,
    /// Ratio below which a consistency suggestion is emitted
    pub low_ratio: f64,
    /// Entry count below which a logging-frequency recommendation is added
    pub low_entry_count: usize,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            high_ratio: consistency::HIGH_CONSISTENCY_RATIO,
            low_ratio: consistency::LOW_CONSISTENCY_RATIO,
            low_entry_count: consistency::LOW_ENTRY_COUNT,
        }
    }
}

/// Goal-progress insight configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgressConfig {
    /// Weight change (kg) that must be strictly exceeded to report progress
    pub min_change_kg: f64,
}

impl Default for GoalProgressConfig {
    fn default() -> Self {
        Self {
            min_change_kg: goals::GOAL_PROGRESS_MIN_CHANGE_KG,
        }
    }
}

/// Goal suggestion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSuggestionConfig {
    /// Target weight as a fraction of the latest weight
    pub weight_loss_factor: f64,
    /// Weeks allotted to the weight-loss goal
    pub weight_loss_weeks: u32,
    /// Target muscle mass as a fraction of the latest muscle mass
    pub muscle_gain_factor: f64,
    /// Weeks allotted to the muscle-gain goal
    pub muscle_gain_weeks: u32,
    /// Entries expected by the consistency goal
    pub consistency_target_entries: u32,
    /// Weeks allotted to the consistency goal
    pub consistency_window_weeks: u32,
}

impl Default for GoalSuggestionConfig {
    fn default() -> Self {
        Self {
            weight_loss_factor: goals::WEIGHT_LOSS_TARGET_FACTOR,
            weight_loss_weeks: goals::WEIGHT_LOSS_DEADLINE_WEEKS,
            muscle_gain_factor: goals::MUSCLE_GAIN_TARGET_FACTOR,
            muscle_gain_weeks: goals::MUSCLE_GAIN_DEADLINE_WEEKS,
            consistency_target_entries: goals::CONSISTENCY_TARGET_ENTRIES,
            consistency_window_weeks: goals::CONSISTENCY_WINDOW_WEEKS,
        }
    }
}
