// ABOUTME: Integration tests for environment-driven planner and logging configuration
// ABOUTME: Tests data directory resolution, environment parsing, and log settings
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Event Beverage Planner Contributors

use event_beverage_planner::config::environment::{
    default_data_dir, DATA_DIR_ENV, ENVIRONMENT_ENV,
};
use event_beverage_planner::config::{Environment, PlannerConfig};
use event_beverage_planner::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

// ============================================================================
// Planner Configuration
// ============================================================================

#[test]
#[serial]
fn test_data_dir_from_environment() {
    env::set_var(DATA_DIR_ENV, "/tmp/planner-data");
    env::set_var(ENVIRONMENT_ENV, "production");

    let config = PlannerConfig::from_env();
    assert_eq!(config.data_dir, PathBuf::from("/tmp/planner-data"));
    assert!(config.environment.is_production());

    env::remove_var(DATA_DIR_ENV);
    env::remove_var(ENVIRONMENT_ENV);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    env::remove_var(DATA_DIR_ENV);
    env::remove_var(ENVIRONMENT_ENV);

    let config = PlannerConfig::from_env();
    assert_eq!(config.data_dir, default_data_dir());
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_blank_data_dir_is_ignored() {
    env::set_var(DATA_DIR_ENV, "   ");
    assert_eq!(PlannerConfig::from_env().data_dir, default_data_dir());
    env::remove_var(DATA_DIR_ENV);
}

#[test]
#[serial]
fn test_data_dir_override() {
    let config = PlannerConfig::from_env().with_data_dir("./event-data");
    assert_eq!(config.data_dir, PathBuf::from("./event-data"));
}

// ============================================================================
// Logging Configuration
// ============================================================================

#[test]
#[serial]
fn test_logging_from_environment() {
    env::set_var("RUST_LOG", "info");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "beverage-planner");

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");
}

#[test]
#[serial]
fn test_logging_defaults() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");
    env::remove_var("SERVICE_NAME");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
}
