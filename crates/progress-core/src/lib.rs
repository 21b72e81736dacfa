// ABOUTME: Core types and constants for the progress analytics workspace
// ABOUTME: Foundation crate with error handling, measurement models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Progress Core
//!
//! Foundation crate providing shared types and constants for body-measurement
//! progress analytics. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Domain thresholds (BMI bands, consistency ratios, goal factors)
//! - **models**: Progress entries, subject profiles, metrics, and analysis periods

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (`ProgressEntry`, `SubjectProfile`, `Metric`, `AnalyticsPeriod`)
pub mod models;
