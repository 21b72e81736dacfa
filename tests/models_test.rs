// ABOUTME: Tests for metrics, analytics periods, fitness goals, and progress entries
// ABOUTME: Covers wire names, parsing failures, and error response serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, reference_today};
use progress_analytics::errors::{ErrorCode, ErrorResponse};
use progress_analytics::models::{
    AnalyticsPeriod, FitnessGoal, Metric, ProgressEntry, SubjectProfile,
};

#[test]
fn test_metric_wire_names_round_trip() {
    for metric in Metric::ALL {
        let parsed: Metric = metric.as_str().parse().unwrap();
        assert_eq!(parsed, metric);
        assert_eq!(metric.to_string(), metric.as_str());
    }
}

#[test]
fn test_metric_units() {
    assert_eq!(Metric::Weight.unit(), "kg");
    assert_eq!(Metric::BodyFat.unit(), "%");
    assert_eq!(Metric::Waist.unit(), "cm");
    assert_eq!(Metric::BodyFat.display_name(), "Body Fat");
    assert_eq!(Metric::MuscleMass.display_name(), "Muscle Mass");
    assert!(Metric::Thighs.is_circumference());
    assert!(!Metric::MuscleMass.is_circumference());
}

#[test]
fn test_unknown_metric_rejected() {
    let error = "biceps".parse::<Metric>().unwrap_err();
    assert_eq!(error.code, ErrorCode::UnknownMetric);

    let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();
    assert_eq!(json["error"]["code"], "UNKNOWN_METRIC");
}

#[test]
fn test_metric_reads_nested_measurements() {
    let entry = ProgressEntry::new(day(2025, 3, 1))
        .with_weight(81.0)
        .with_hips(99.5);

    assert_eq!(entry.metric_value(Metric::Weight), Some(81.0));
    assert_eq!(entry.metric_value(Metric::Hips), Some(99.5));
    assert_eq!(entry.metric_value(Metric::Chest), None);
    assert!(entry.has_measurements());
    assert!(!ProgressEntry::new(day(2025, 3, 1)).has_measurements());
}

#[test]
fn test_period_days_and_window_start() {
    let today = reference_today();
    assert_eq!(AnalyticsPeriod::Week.days(), 7);
    assert_eq!(AnalyticsPeriod::Month.days(), 30);
    assert_eq!(AnalyticsPeriod::Quarter.days(), 90);
    assert_eq!(AnalyticsPeriod::Year.days(), 365);
    assert_eq!(AnalyticsPeriod::Week.start_date(today), day(2025, 3, 24));
    assert_eq!(AnalyticsPeriod::default(), AnalyticsPeriod::Month);
}

#[test]
fn test_invalid_period_rejected() {
    let error = "fortnight".parse::<AnalyticsPeriod>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!("quarter".parse::<AnalyticsPeriod>().unwrap(), AnalyticsPeriod::Quarter);
}

#[test]
fn test_fitness_goal_parsing() {
    assert_eq!(
        "weight_loss".parse::<FitnessGoal>().unwrap(),
        FitnessGoal::WeightLoss
    );
    assert_eq!(FitnessGoal::GeneralFitness.to_string(), "general_fitness");
    assert_eq!(
        "flexibility".parse::<FitnessGoal>().unwrap_err().code,
        ErrorCode::InvalidInput
    );
}

#[test]
fn test_profile_builders() {
    let profile = SubjectProfile::new("Sam")
        .with_height(180.0)
        .with_goal(FitnessGoal::Strength);

    assert_eq!(profile.name, "Sam");
    assert_eq!(profile.height, Some(180.0));
    assert!(profile.has_goal(FitnessGoal::Strength));
    assert!(!profile.has_goal(FitnessGoal::WeightLoss));
}

#[test]
fn test_entry_serializes_nested_measurements() {
    let entry = ProgressEntry::new(day(2025, 3, 1)).with_waist(86.0);
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["date"], "2025-03-01");
    assert_eq!(json["measurements"]["waist"], 86.0);
    assert!(json.get("notes").is_none());
}
