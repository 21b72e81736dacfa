// ABOUTME: Tests for loading progress entries and profiles from JSON files
// ABOUTME: Covers accepted document shapes, validation failures, and missing files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::PathBuf;

use common::{day, init_test_logging};
use progress_analytics::errors::ErrorCode;
use progress_analytics::input::{load_entries, load_profile, parse_entries, parse_profile};
use progress_analytics::models::FitnessGoal;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_entries_from_array() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "entries.json",
        r#"[
            {"date": "2025-03-30", "weight": 80.2, "measurements": {"waist": 88.0}},
            {"date": "2025-03-31", "body_fat": 19.5, "notes": "after holiday"}
        ]"#,
    );

    let entries = load_entries(&path).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, day(2025, 3, 30));
    assert_eq!(entries[0].measurements.waist, Some(88.0));
    assert_eq!(entries[1].weight, None);
    assert_eq!(entries[1].body_fat, Some(19.5));
}

#[test]
fn test_load_profile() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "profile.json",
        r#"{"name": "Alex", "height": 172.5, "fitness_goal": "muscle_gain"}"#,
    );

    let profile = load_profile(&path).unwrap();

    assert_eq!(profile.name, "Alex");
    assert_eq!(profile.height, Some(172.5));
    assert_eq!(profile.fitness_goal, Some(FitnessGoal::MuscleGain));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let error = load_entries(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_duplicate_dates_rejected() {
    let error = parse_entries(
        r#"[{"date": "2025-03-30", "weight": 80.0}, {"date": "2025-03-30", "weight": 79.0}]"#,
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_negative_measurement_rejected() {
    let error = parse_entries(r#"[{"date": "2025-03-30", "weight": -1.0}]"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let error = parse_entries("[{\"date\": ").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_unknown_fitness_goal_rejected() {
    assert!(parse_profile(r#"{"fitness_goal": "flexibility"}"#).is_err());
}

#[test]
fn test_empty_profile_document() {
    let profile = parse_profile("{}").unwrap();
    assert!(profile.height.is_none());
    assert!(profile.fitness_goal.is_none());
}
