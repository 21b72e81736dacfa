// ABOUTME: Enumerated measurement metrics with typed field access on progress entries
// ABOUTME: Replaces dynamic attribute lookup with an explicit, closed metric set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ProgressEntry;
use crate::errors::AppError;

/// A named numeric measurement field of a [`ProgressEntry`]
///
/// Ordering follows declaration order so that maps keyed by `Metric`
/// serialize deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Body weight (kg)
    Weight,
    /// Body fat (%)
    BodyFat,
    /// Muscle mass (kg)
    MuscleMass,
    /// Chest circumference (cm)
    Chest,
    /// Waist circumference (cm)
    Waist,
    /// Hip circumference (cm)
    Hips,
    /// Arm circumference (cm)
    Arms,
    /// Thigh circumference (cm)
    Thighs,
}

impl Metric {
    /// Every metric, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Weight,
        Self::BodyFat,
        Self::MuscleMass,
        Self::Chest,
        Self::Waist,
        Self::Hips,
        Self::Arms,
        Self::Thighs,
    ];

    /// Composition metrics reported as trends in the progress report
    pub const CORE_TRENDS: [Self; 3] = [Self::Weight, Self::BodyFat, Self::MuscleMass];

    /// Body circumferences
    pub const MEASUREMENTS: [Self; 5] = [
        Self::Chest,
        Self::Waist,
        Self::Hips,
        Self::Arms,
        Self::Thighs,
    ];

    /// Read this metric from an entry, `None` when unset
    #[must_use]
    pub const fn extract_value(self, entry: &ProgressEntry) -> Option<f64> {
        match self {
            Self::Weight => entry.weight,
            Self::BodyFat => entry.body_fat,
            Self::MuscleMass => entry.muscle_mass,
            Self::Chest => entry.measurements.chest,
            Self::Waist => entry.measurements.waist,
            Self::Hips => entry.measurements.hips,
            Self::Arms => entry.measurements.arms,
            Self::Thighs => entry.measurements.thighs,
        }
    }

    /// Wire name (`body_fat`, `muscle_mass`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::BodyFat => "body_fat",
            Self::MuscleMass => "muscle_mass",
            Self::Chest => "chest",
            Self::Waist => "waist",
            Self::Hips => "hips",
            Self::Arms => "arms",
            Self::Thighs => "thighs",
        }
    }

    /// Get the unit string for this metric
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight | Self::MuscleMass => "kg",
            Self::BodyFat => "%",
            Self::Chest | Self::Waist | Self::Hips | Self::Arms | Self::Thighs => "cm",
        }
    }

    /// Get display name for this metric
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::BodyFat => "Body Fat",
            Self::MuscleMass => "Muscle Mass",
            Self::Chest => "Chest",
            Self::Waist => "Waist",
            Self::Hips => "Hips",
            Self::Arms => "Arms",
            Self::Thighs => "Thighs",
        }
    }

    /// Whether this metric is a body circumference
    #[must_use]
    pub const fn is_circumference(self) -> bool {
        matches!(
            self,
            Self::Chest | Self::Waist | Self::Hips | Self::Arms | Self::Thighs
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| AppError::unknown_metric(s))
    }
}
