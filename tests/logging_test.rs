// ABOUTME: Tests for logging configuration and environment variable handling
// ABOUTME: Covers format parsing, production defaults, and level overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use progress_analytics::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
];

fn clear_env() {
    for name in VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "progress-test");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "progress-test");
    assert!(config.include_location);
    assert!(config.include_thread);
}

#[test]
#[serial]
fn test_development_defaults() {
    clear_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert!(!config.include_location);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "warn");
    assert_eq!(config.service_name, "progress-cli");
    assert!(!config.service_version.is_empty());
}

#[test]
fn test_log_format_values() {
    assert_eq!(LogFormat::from_env_value(Some("json")), LogFormat::Json);
    assert_eq!(LogFormat::from_env_value(Some("pretty")), LogFormat::Pretty);
    assert_eq!(LogFormat::from_env_value(Some("compact")), LogFormat::Compact);
    assert_eq!(LogFormat::from_env_value(Some("xml")), LogFormat::Compact);
    assert_eq!(LogFormat::from_env_value(None), LogFormat::Compact);
}

#[test]
fn test_with_level_overrides() {
    let config = LoggingConfig::default().with_level("debug");
    assert_eq!(config.level, "debug");
}
