// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, defaults, overrides and invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recomp_planner::config::environment::{
    parse_retailers, DEFAULT_RETAIL_MAX_CONCURRENCY, DEFAULT_RETAIL_TIMEOUT_MS,
};
use recomp_planner::config::{Environment, LogLevel, PlannerConfig, RetailConfig};
use recomp_planner::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const PLANNER_VARS: [&str; 8] = [
    "ENVIRONMENT",
    "RUST_LOG",
    "RECOMP_CATALOG_PATH",
    "RECOMP_DEFAULT_PACKAGE_G",
    "RECOMP_RETAIL_ENABLED",
    "RECOMP_RETAIL_MAX_CONCURRENCY",
    "RECOMP_RETAIL_TIMEOUT_MS",
    "RECOMP_DEFAULT_RETAILERS",
];

fn clear_planner_env() {
    for key in PLANNER_VARS {
        env::remove_var(key);
    }
}

// Tests for public configuration types

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
fn test_retail_defaults() {
    let retail = RetailConfig::default();
    assert!(!retail.enabled);
    assert_eq!(retail.max_concurrency, DEFAULT_RETAIL_MAX_CONCURRENCY);
    assert_eq!(retail.timeout(), Duration::from_millis(DEFAULT_RETAIL_TIMEOUT_MS));
    assert_eq!(retail.default_retailers, ["aldi", "lidl", "tesco"]);
}

#[test]
fn test_parse_retailers_normalizes() {
    assert_eq!(parse_retailers(" Rewe,EDEKA , "), ["rewe", "edeka"]);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_planner_env();
    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.default_package_g, 500);
    assert!(config.catalog_path.is_none());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_planner_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug");
    env::set_var("RECOMP_CATALOG_PATH", "/tmp/foods.json");
    env::set_var("RECOMP_DEFAULT_PACKAGE_G", "250");
    env::set_var("RECOMP_RETAIL_ENABLED", "true");
    env::set_var("RECOMP_RETAIL_MAX_CONCURRENCY", "2");
    env::set_var("RECOMP_RETAIL_TIMEOUT_MS", "1500");
    env::set_var("RECOMP_DEFAULT_RETAILERS", "Rewe, Edeka");

    let config = PlannerConfig::from_env().unwrap();
    clear_planner_env();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/foods.json")));
    assert_eq!(config.default_package_g, 250);
    assert!(config.retail.enabled);
    assert_eq!(config.retail.max_concurrency, 2);
    assert_eq!(config.retail.timeout(), Duration::from_millis(1500));
    assert_eq!(config.retail.default_retailers, ["rewe", "edeka"]);
}

#[test]
#[serial]
fn test_blank_catalog_path_ignored() {
    clear_planner_env();
    env::set_var("RECOMP_CATALOG_PATH", "   ");
    let config = PlannerConfig::from_env().unwrap();
    clear_planner_env();
    assert!(config.catalog_path.is_none());
}

#[test]
#[serial]
fn test_invalid_values_rejected() {
    for (key, value) in [
        ("RECOMP_DEFAULT_PACKAGE_G", "large"),
        ("RECOMP_DEFAULT_PACKAGE_G", "0"),
        ("RECOMP_RETAIL_ENABLED", "maybe"),
        ("RECOMP_RETAIL_MAX_CONCURRENCY", "0"),
        ("RECOMP_RETAIL_TIMEOUT_MS", "-5"),
    ] {
        clear_planner_env();
        env::set_var(key, value);
        let err = PlannerConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{key}={value}");
    }
    clear_planner_env();
}
