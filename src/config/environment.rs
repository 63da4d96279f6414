// ABOUTME: Environment configuration for the planner library and command-line tool
// ABOUTME: Parses catalog location, grocery defaults and retail enrichment settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration. Every setting has a default so an empty environment
//! yields a working planner backed by the embedded food catalog.

use crate::constants::{grocery::DEFAULT_PACKAGE_G, validation::DEFAULT_RETAILERS};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default number of retail lookups in flight
pub const DEFAULT_RETAIL_MAX_CONCURRENCY: usize = 5;
/// Default per-lookup timeout in milliseconds
pub const DEFAULT_RETAIL_TIMEOUT_MS: u64 = 4000;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Retail enrichment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailConfig {
    /// Whether enrichment runs at all
    pub enabled: bool,
    /// Maximum lookups in flight
    pub max_concurrency: usize,
    /// Per-lookup timeout in milliseconds
    pub timeout_ms: u64,
    /// Retailers used when a plan input does not name any
    pub default_retailers: Vec<String>,
}

impl RetailConfig {
    /// Per-lookup timeout as a duration
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RetailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_concurrency: DEFAULT_RETAIL_MAX_CONCURRENCY,
            timeout_ms: DEFAULT_RETAIL_TIMEOUT_MS,
            default_retailers: DEFAULT_RETAILERS.iter().map(|r| (*r).to_owned()).collect(),
        }
    }
}

/// Planner configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// JSON catalog overriding the embedded catalog
    pub catalog_path: Option<PathBuf>,
    /// Package size assumed for foods without one (g)
    pub default_package_g: u32,
    /// Retail enrichment
    pub retail: RetailConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            catalog_path: None,
            default_package_g: DEFAULT_PACKAGE_G,
            retail: RetailConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric or boolean variable cannot be parsed
    /// or the resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            catalog_path: env::var("RECOMP_CATALOG_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            default_package_g: parse_env("RECOMP_DEFAULT_PACKAGE_G", DEFAULT_PACKAGE_G)?,
            retail: RetailConfig {
                enabled: parse_env("RECOMP_RETAIL_ENABLED", false)?,
                max_concurrency: parse_env(
                    "RECOMP_RETAIL_MAX_CONCURRENCY",
                    DEFAULT_RETAIL_MAX_CONCURRENCY,
                )?,
                timeout_ms: parse_env("RECOMP_RETAIL_TIMEOUT_MS", DEFAULT_RETAIL_TIMEOUT_MS)?,
                default_retailers: env::var("RECOMP_DEFAULT_RETAILERS").map_or_else(
                    |_| RetailConfig::default().default_retailers,
                    |value| parse_retailers(&value),
                ),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a configuration error for zero package size, zero concurrency or zero timeout
    pub fn validate(&self) -> AppResult<()> {
        if self.default_package_g == 0 {
            return Err(AppError::config("RECOMP_DEFAULT_PACKAGE_G must be greater than 0"));
        }
        if self.retail.max_concurrency == 0 {
            return Err(AppError::config(
                "RECOMP_RETAIL_MAX_CONCURRENCY must be greater than 0",
            ));
        }
        if self.retail.timeout_ms == 0 {
            return Err(AppError::config("RECOMP_RETAIL_TIMEOUT_MS must be greater than 0"));
        }
        Ok(())
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated retailer names, normalized to lowercase
pub fn parse_retailers(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
