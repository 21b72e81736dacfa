// ABOUTME: Loads progress entries and subject profiles from JSON documents
// ABOUTME: Validates entries before they reach the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use progress_core::errors::{AppError, AppResult};
use progress_core::models::{validate_entries, ProgressEntry, SubjectProfile};
use serde::Deserialize;
use tracing::debug;

/// Accepted shapes of an entries document
#[derive(Deserialize)]
#[serde(untagged)]
enum EntriesDocument {
    /// Bare array of entries
    List(Vec<ProgressEntry>),
    /// Object wrapping the array, as returned by the entries listing endpoint
    Wrapped { entries: Vec<ProgressEntry> },
}

/// Parse and validate an entries document
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` for malformed JSON and a validation error for
/// duplicate dates or invalid measurements
pub fn parse_entries(json: &str) -> AppResult<Vec<ProgressEntry>> {
    let entries = match serde_json::from_str::<EntriesDocument>(json)? {
        EntriesDocument::List(entries) | EntriesDocument::Wrapped { entries } => entries,
    };
    validate_entries(&entries)?;
    debug!(entries = entries.len(), "parsed progress entries");
    Ok(entries)
}

/// Parse a subject profile document
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` for malformed JSON or an unknown fitness goal
pub fn parse_profile(json: &str) -> AppResult<SubjectProfile> {
    let profile: SubjectProfile = serde_json::from_str(json)?;
    if profile.height.is_some_and(|height| !height.is_finite() || height <= 0.0) {
        return Err(AppError::value_out_of_range(
            "height must be a positive number of centimeters",
        ));
    }
    Ok(profile)
}

/// Load entries from a JSON file
///
/// # Errors
///
/// Returns `RESOURCE_NOT_FOUND` when the file is missing, otherwise the errors
/// of [`parse_entries`]
pub fn load_entries(path: &Path) -> AppResult<Vec<ProgressEntry>> {
    parse_entries(&read_document(path)?)
}

/// Load a subject profile from a JSON file
///
/// # Errors
///
/// Returns `RESOURCE_NOT_FOUND` when the file is missing, otherwise the errors
/// of [`parse_profile`]
pub fn load_profile(path: &Path) -> AppResult<SubjectProfile> {
    parse_profile(&read_document(path)?)
}

fn read_document(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|error| {
        let display = path.display().to_string();
        if error.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("Input file {display}")).with_source(error)
        } else {
            AppError::internal(format!("Failed to read {display}")).with_source(error)
        }
    })
}
