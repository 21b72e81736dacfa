// ABOUTME: Configuration module for the progress-intelligence crate
// ABOUTME: Re-exports analytics configuration types and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analytics thresholds with environment overrides
pub mod analytics;
/// Configuration validation errors
pub mod error;

pub use analytics::{
    AnalyticsConfig, ConsistencyConfig, GoalProgressConfig, GoalSuggestionConfig, TrendConfig,
};
pub use error::ConfigError;
