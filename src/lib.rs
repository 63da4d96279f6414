// ABOUTME: Main library entry point for the body-recomposition nutrition planner
// ABOUTME: Calorie and macro targets, weekly meal plans, grocery lists, projections and check-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recomp Planner
//!
//! A deterministic planner for body recomposition. From a person's measurements and goal it
//! derives body composition, calorie targets with training/rest periodization, macro targets,
//! a seven-day meal plan built from a food catalog, an aggregated grocery list, a capped weight
//! projection and a weekly adaptive calorie adjustment.
//!
//! ## Architecture
//!
//! - **Models**: validated plan input and the plain records every engine returns
//! - **Catalog**: read-only food reference data, embedded or loaded from JSON
//! - **Intelligence**: physiology calculator, meal composition engine, grocery aggregator,
//!   projection engine and adaptive check-in
//! - **Planner**: facade composing the engines per request
//! - **Retail**: optional asynchronous enrichment of ingredients with retail products
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recomp_planner::catalog::FoodCatalog;
//! use recomp_planner::errors::AppResult;
//! use recomp_planner::models::{ActivityLevel, Gender, PlanInput};
//! use recomp_planner::planner;
//!
//! fn main() -> AppResult<()> {
//!     let input = PlanInput::builder(
//!         171.0,
//!         71.0,
//!         31,
//!         Gender::Male,
//!         18.0,
//!         12.0,
//!         ActivityLevel::Moderate,
//!         4,
//!     )
//!     .build()?;
//!     let catalog = FoodCatalog::embedded()?;
//!     let plan = planner::generate_meals(&input, &catalog, 500)?;
//!     println!("{} grocery items", plan.grocery_list.len());
//!     Ok(())
//! }
//! ```

/// Unified error handling
pub use recomp_core::errors;

/// Physiology, allocation and validation constants
pub use recomp_core::constants;

/// Food catalog and catalog providers
pub mod catalog;

/// Environment configuration
pub mod config;

/// Calculation engines
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Planner facade
pub mod planner;

/// Retail product enrichment
pub mod retail;
