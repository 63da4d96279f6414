// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, sample plan inputs and the embedded catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recomp_planner`
//!
//! Fixtures here are the reference profiles used across the integration tests.

use recomp_planner::{
    catalog::FoodCatalog,
    models::{ActivityLevel, Gender, GoalMode, MacroTargets, PlanInput},
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 171 cm, 71 kg, 31 y male at 18% body fat aiming for 12%, moderate activity, 4 training days
pub fn sample_plan() -> PlanInput {
    sample_plan_over(16)
}

/// The sample profile with a different timeline
pub fn sample_plan_over(timeline_weeks: u32) -> PlanInput {
    PlanInput::builder(171.0, 71.0, 31, Gender::Male, 18.0, 12.0, ActivityLevel::Moderate, 4)
        .timeline_weeks(timeline_weeks)
        .build()
        .expect("sample plan is valid")
}

/// 180 cm, 90 kg, 30 y male at 25% aiming for 15%, fat-loss mode over 16 weeks
pub fn fat_loss_plan() -> PlanInput {
    PlanInput::builder(180.0, 90.0, 30, Gender::Male, 25.0, 15.0, ActivityLevel::Moderate, 4)
        .timeline_weeks(16)
        .goal_mode(GoalMode::FatLoss)
        .build()
        .expect("fat loss plan is valid")
}

/// 165 cm, 62 kg, 28 y female at 30% aiming for 24%, light activity, 3 training days
pub fn female_plan() -> PlanInput {
    PlanInput::builder(165.0, 62.0, 28, Gender::Female, 30.0, 24.0, ActivityLevel::Light, 3)
        .build()
        .expect("female plan is valid")
}

/// Catalog compiled into the crate
pub fn catalog() -> FoodCatalog {
    FoodCatalog::embedded().expect("embedded catalog is valid")
}

/// Sample plan input as a JSON document
pub fn sample_plan_json() -> String {
    r#"{
        "height_cm": 171,
        "weight_kg": 71,
        "age": 31,
        "gender": "male",
        "body_fat_percent": 18,
        "target_body_fat_percent": 12,
        "activity_level": "moderate",
        "training_days_per_week": 4
    }"#
    .to_owned()
}

/// Difference between day totals and targets on the protein, carb and fat axes
pub fn overshoot(totals: &MacroTargets, target: &MacroTargets) -> (i64, i64, i64) {
    (
        totals.protein_g - target.protein_g,
        totals.carbs_g - target.carbs_g,
        totals.fat_g - target.fat_g,
    )
}
