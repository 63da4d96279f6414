// ABOUTME: Calculation engines of the recomposition planner
// ABOUTME: Physiology, meal composition, grocery aggregation, projection and adaptive check-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Synchronous, deterministic engines. Each call works on immutable inputs and returns new
//! values; the only mutable state is local to a single call.

/// Weekly adaptive calorie adjustment
pub mod adaptive;
/// Grocery aggregation with package rounding
pub mod grocery;
/// Greedy weekly meal composition
pub mod meal_engine;
/// Body composition, calorie and macro targets
pub mod physiology;
/// Weight trajectory projection
pub mod projection;

pub use adaptive::apply_weekly_adjustment;
pub use grocery::build_grocery_list;
pub use meal_engine::MealEngine;
pub use physiology::{body_composition, calories_plan, macro_plan, weekly_loss_kg};
pub use projection::project;

/// Round to a fixed number of decimals
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to the nearest integer
#[must_use]
pub fn round_to_i64(value: f64) -> i64 {
    value.round() as i64
}
