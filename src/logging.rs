// ABOUTME: Logging configuration and structured logging setup for the planner
// ABOUTME: Configures log level, output format and diagnostic fields from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging built on `tracing`.
//!
//! Logs always go to stderr so that plan JSON written to stdout stays machine-readable.

use crate::config::PlannerConfig;
use crate::constants::service_names;
use anyhow::{anyhow, Result};
use serde_json::json;
use std::convert::Infallible;
use std::env;
use std::fmt as std_fmt;
use std::io;
use std::str::FromStr;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    #[default]
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl FromStr for LogFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        })
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::RECOMP_PLANNER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Logging settings for a loaded planner configuration
    ///
    /// Level and environment come from `config`; output format, diagnostic flags and the
    /// service name are read from `LOG_*` and `SERVICE_NAME`.
    #[must_use]
    pub fn from_config(config: &PlannerConfig) -> Self {
        let format = env::var("LOG_FORMAT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        // Production logs carry full diagnostics
        let is_production = config.environment.is_production();

        Self {
            level: config.log_level.to_string(),
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::RECOMP_PLANNER.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: config.environment.to_string(),
        }
    }

    /// Same configuration with a different level, used for `--verbose`
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(env_filter);

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(self.span_events())
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(self.span_events()),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": self.format.to_string(),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });
        debug!("Logging configured: {config_summary}");
    }
}

/// Planner-specific structured log events
pub struct PlanLogger;

impl PlanLogger {
    /// Log a computed calorie plan
    pub fn log_plan_calculated(target_kcal: i64, training_kcal: i64, rest_kcal: i64, weeks: f64) {
        info!(
            event_type = "plan_calculated",
            target_kcal,
            training_kcal,
            rest_kcal,
            weeks_to_goal = weeks,
            "Calorie plan calculated"
        );
    }

    /// Log a generated week of meals
    pub fn log_meal_plan_generated(days: usize, clamped_days: usize, grocery_items: usize) {
        if clamped_days > 0 {
            warn!(
                event_type = "meal_plan_generated",
                days,
                clamped_days,
                grocery_items,
                "Meal plan generated with days above target"
            );
        } else {
            info!(
                event_type = "meal_plan_generated",
                days,
                grocery_items,
                "Meal plan generated"
            );
        }
    }

    /// Log a retail lookup outcome
    pub fn log_retail_lookup(ingredient: &str, found: bool, duration_ms: u64) {
        debug!(
            event_type = "retail_lookup",
            ingredient, found, duration_ms, "Retail product lookup"
        );
    }

    /// Log a check-in adjustment
    pub fn log_checkin(weekly_change_percent: f64, adjustment_kcal: i64) {
        info!(
            event_type = "weekly_checkin",
            weekly_change_percent, adjustment_kcal, "Weekly check-in evaluated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, LogLevel};

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().ok(), Some(LogFormat::Json));
        assert_eq!("COMPACT".parse::<LogFormat>().ok(), Some(LogFormat::Compact));
        assert_eq!("anything".parse::<LogFormat>().ok(), Some(LogFormat::Pretty));
    }

    #[test]
    fn test_production_config_enables_diagnostics() {
        let config = PlannerConfig {
            environment: Environment::Production,
            log_level: LogLevel::Warn,
            ..PlannerConfig::default()
        };
        let logging = LoggingConfig::from_config(&config);
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.environment, "production");
        assert!(logging.include_location);
        assert!(logging.include_thread);

        let parsed = PlannerConfig {
            environment: Environment::from_str_or_default("prod"),
            ..PlannerConfig::default()
        };
        assert!(LoggingConfig::from_config(&parsed).include_location);
    }

    #[test]
    fn test_with_level_overrides() {
        let config = LoggingConfig::default().with_level("debug");
        assert_eq!(config.level, "debug");
        assert_eq!(config.service_name, service_names::RECOMP_PLANNER);
    }
}
