// ABOUTME: Configuration module for the recomposition planner
// ABOUTME: Environment-driven settings shared by the library and the command-line tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment configuration
pub mod environment;

pub use environment::{Environment, LogLevel, PlannerConfig, RetailConfig};
