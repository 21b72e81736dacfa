// ABOUTME: Descriptive statistics shared by the progress analytics calculators
// ABOUTME: Mean, median, extrema, sample standard deviation, and decimal rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: series lengths are tiny compared to f64 mantissa

use std::cmp::Ordering;

/// Descriptive statistics over plain value slices
///
/// Every function is total: empty input yields `None` (or `0.0` for the
/// dispersion measures) instead of dividing by zero.
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Median; the average of the two middle values for even counts
    #[must_use]
    pub fn median(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let len = sorted.len();
        if len.is_multiple_of(2) {
            Some(f64::midpoint(sorted[len / 2 - 1], sorted[len / 2]))
        } else {
            Some(sorted[len / 2])
        }
    }

    /// Smallest value
    #[must_use]
    pub fn min(values: &[f64]) -> Option<f64> {
        values
            .iter()
            .copied()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Largest value
    #[must_use]
    pub fn max(values: &[f64]) -> Option<f64> {
        values
            .iter()
            .copied()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Sample standard deviation (n - 1 denominator), `0.0` below two values
    #[must_use]
    pub fn sample_std_dev(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance = values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (values.len() - 1) as f64;
        variance.sqrt()
    }
}

/// Round `value` to `decimals` decimal places
///
/// Rounds the exact binary value, with exact ties going to the even digit:
/// `2.25` becomes `2.2` while `2.35` (stored just above the tie) becomes `2.4`.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let precision = usize::try_from(decimals).unwrap_or(usize::MAX);
    format!("{value:.precision$}").parse().unwrap_or(value)
}
