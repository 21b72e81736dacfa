// ABOUTME: Intelligence module re-exports from the progress-intelligence crate
// ABOUTME: Gives binaries and integration tests one import path for every analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Progress analytics over body-measurement histories. This module re-exports
//! the `progress-intelligence` crate so callers depend on a single crate.

// Re-export all public items from progress-intelligence
pub use progress_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::config::TrendConfig)
pub use progress_intelligence::{
    analyzer, bmi, config, goal_engine, insights, metrics_extractor, period_analytics,
    progress_stats, recommendation_engine, statistical_analysis, streak, summary, trend,
};
