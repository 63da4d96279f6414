// ABOUTME: End-to-end tests for the planner facade
// ABOUTME: Plan input parsing, full plan generation and the serialized response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use recomp_planner::errors::{ErrorCode, ErrorResponse};
use recomp_planner::models::{ActivityLevel, Gender, GoalMode, PlanInput};
use recomp_planner::planner::{calculate_plan, generate_meals, projection_for};
use serde_json::{json, Value};

#[test]
fn test_plan_input_from_json_applies_defaults() {
    common::init_test_logging();
    let plan: PlanInput = serde_json::from_str(&common::sample_plan_json()).unwrap();
    assert_eq!(plan, common::sample_plan());
    assert_eq!(plan.timeline_weeks(), 16);
    assert_eq!(plan.goal_mode(), GoalMode::Recomposition);
}

#[test]
fn test_plan_input_json_rejects_invalid_values() {
    let mut raw: Value = serde_json::from_str(&common::sample_plan_json()).unwrap();
    raw["target_body_fat_percent"] = json!(20);
    let err = serde_json::from_value::<PlanInput>(raw).unwrap_err();
    assert!(err.to_string().contains("target_body_fat_percent"));

    let mut raw: Value = serde_json::from_str(&common::sample_plan_json()).unwrap();
    raw["gender"] = json!("unknown");
    assert!(serde_json::from_value::<PlanInput>(raw).is_err());
}

#[test]
fn test_country_code_normalized() {
    let mut raw: Value = serde_json::from_str(&common::sample_plan_json()).unwrap();
    raw["country_code"] = json!(" gb ");
    let plan: PlanInput = serde_json::from_value(raw).unwrap();
    assert_eq!(plan.country_code(), "GB");
}

#[test]
fn test_calculate_plan_matches_generate_meals_targets() {
    let plan = common::sample_plan();
    let summary = calculate_plan(&plan);
    let full = generate_meals(&plan, &common::catalog(), 500).unwrap();

    assert_eq!(summary.calories, full.calories);
    assert_eq!(summary.macros, full.macros);
    assert_eq!(summary.body_composition, full.body_composition);
    assert_eq!(summary.projection, full.projection);
    assert_eq!(projection_for(&plan), summary.projection);
}

#[test]
fn test_generate_meals_rejects_zero_package_size() {
    let err = generate_meals(&common::sample_plan(), &common::catalog(), 0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_response_serializes_expected_fields() {
    let response = generate_meals(&common::fat_loss_plan(), &common::catalog(), 500).unwrap();
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["calories"]["target"], json!(2256));
    assert_eq!(value["macros"]["training_day"]["protein_g"], json!(149));

    let monday = &value["meal_plan"]["days"][0];
    assert_eq!(monday["day"], json!("monday"));
    assert_eq!(monday["day_type"], json!("training"));
    assert_eq!(monday["rebalance"], json!({"status": "exact"}));
    assert_eq!(monday["meals"].as_array().unwrap().len(), 4);
    // Empty retail slots are omitted
    assert!(monday["meals"][0]["ingredients"][0].get("retail_product").is_none());

    let groceries = value["grocery_list"].as_array().unwrap();
    assert!(!groceries.is_empty());
    assert!(groceries[0].get("packages_to_buy").is_some());
}

#[test]
fn test_clamped_day_serializes_residual() {
    let response = generate_meals(&common::female_plan(), &common::catalog(), 500).unwrap();
    let clamped = response
        .meal_plan
        .days
        .iter()
        .find(|day| !day.rebalance.is_exact())
        .expect("female profile overshoots protein");
    let value = serde_json::to_value(clamped.rebalance).unwrap();
    assert_eq!(value["status"], json!("clamped"));
    assert!(value["residual"]["protein_g"].as_i64().unwrap() > 0);
}

#[test]
fn test_error_response_envelope() {
    let err = PlanInput::builder(
        100.0,
        71.0,
        31,
        Gender::Male,
        18.0,
        12.0,
        ActivityLevel::Moderate,
        4,
    )
    .build()
    .unwrap_err();
    let envelope = serde_json::to_value(ErrorResponse::from(err)).unwrap();
    assert_eq!(envelope["error"]["code"], json!("VALUE_OUT_OF_RANGE"));
    assert_eq!(envelope["error"]["resource_id"], json!("height_cm"));
}
