// ABOUTME: Domain constants for body-measurement progress analytics
// ABOUTME: BMI bands, trend confidence, consistency ratios, goal factors, and analysis windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain constants
//!
//! Default thresholds used by the analytics engine. Tunable values are mirrored
//! by `AnalyticsConfig` in the intelligence crate, whose defaults read from here.

/// Body Mass Index classification bands (kg/m²)
///
/// Reference: WHO adult BMI classification
/// <https://www.who.int/data/gho/data/themes/topics/topic-details/GHO/body-mass-index>
pub mod bmi {
    /// Below this value the subject is classified as underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;

    /// Below this value (and at or above `UNDERWEIGHT_UPPER`) the subject is normal
    pub const NORMAL_UPPER: f64 = 25.0;

    /// Below this value (and at or above `NORMAL_UPPER`) the subject is overweight
    pub const OVERWEIGHT_UPPER: f64 = 30.0;

    /// Centimetres per metre
    pub const CM_PER_METER: f64 = 100.0;
}

/// Trend estimation
pub mod trends {
    /// Number of data points at which trend confidence saturates at 1.0
    pub const CONFIDENCE_SATURATION_POINTS: usize = 10;

    /// Trailing window (days) used for trends in the overall progress report
    pub const STATS_TREND_WINDOW_DAYS: i64 = 30;

    /// Decimal places kept on the reported trend rate
    pub const RATE_DECIMALS: u32 = 2;
}

/// Logging consistency thresholds (entries per calendar day spanned)
pub mod consistency {
    /// Above this ratio logging is praised
    pub const HIGH_CONSISTENCY_RATIO: f64 = 0.8;

    /// Below this ratio a consistency suggestion is emitted
    pub const LOW_CONSISTENCY_RATIO: f64 = 0.3;

    /// Fewer entries than this in a window triggers a logging-frequency recommendation
    pub const LOW_ENTRY_COUNT: usize = 5;
}

/// Goal progress and goal suggestion parameters
pub mod goals {
    /// Minimum absolute weight change (kg) worth reporting as goal progress
    pub const GOAL_PROGRESS_MIN_CHANGE_KG: f64 = 1.0;

    /// Target weight as a fraction of current weight (5% reduction)
    pub const WEIGHT_LOSS_TARGET_FACTOR: f64 = 0.95;

    /// Weeks allotted to the weight-loss target
    pub const WEIGHT_LOSS_DEADLINE_WEEKS: u32 = 8;

    /// Target muscle mass as a fraction of current muscle mass (5% increase)
    pub const MUSCLE_GAIN_TARGET_FACTOR: f64 = 1.05;

    /// Weeks allotted to the muscle-gain target
    pub const MUSCLE_GAIN_DEADLINE_WEEKS: u32 = 12;

    /// Entries expected for the consistency goal
    pub const CONSISTENCY_TARGET_ENTRIES: u32 = 12;

    /// Weeks allotted to the consistency goal
    pub const CONSISTENCY_WINDOW_WEEKS: u32 = 4;
}

/// Analysis window lengths (days)
pub mod periods {
    /// Trailing days for a week window
    pub const WEEK_DAYS: i64 = 7;
    /// Trailing days for a month window
    pub const MONTH_DAYS: i64 = 30;
    /// Trailing days for a quarter window
    pub const QUARTER_DAYS: i64 = 90;
    /// Trailing days for a year window
    pub const YEAR_DAYS: i64 = 365;
}

/// Number formatting
pub mod precision {
    /// Decimal places for reported measurements and statistics
    pub const MEASUREMENT_DECIMALS: u32 = 1;
}

/// Service names used in structured logging
pub mod service_names {
    /// Command-line front end
    pub const PROGRESS_CLI: &str = "progress-cli";
}
