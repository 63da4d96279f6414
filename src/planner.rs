// ABOUTME: Planner facade composing the physiology, meal, grocery, projection and check-in engines
// ABOUTME: Each entry point is a pure per-request computation wrapped in a tracing span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner facade
//!
//! Whatever transport embeds the library calls these functions; they hold no state between
//! calls.

use crate::catalog::FoodCatalog;
use crate::errors::AppResult;
use crate::intelligence::{
    apply_weekly_adjustment, body_composition, build_grocery_list, calories_plan, macro_plan,
    project, weekly_loss_kg, MealEngine,
};
use crate::logging::PlanLogger;
use crate::models::{
    BodyComposition, CalculatePlanResponse, GenerateMealsResponse, PlanInput, Projection,
    WeeklyCheckinRequest, WeeklyCheckinResponse,
};
use tracing::instrument;

fn projection_from(plan: &PlanInput, composition: &BodyComposition) -> Projection {
    project(
        plan.weight_kg(),
        composition.target_weight_kg,
        composition.fat_loss_required_kg,
        weekly_loss_kg(plan, composition.fat_loss_required_kg),
    )
}

/// Body composition, calorie targets, macro targets and projection
#[must_use]
#[instrument(
    skip_all,
    fields(goal = ?plan.goal_mode(), training_days = plan.training_days_per_week())
)]
pub fn calculate_plan(plan: &PlanInput) -> CalculatePlanResponse {
    let body_composition = body_composition(plan);
    let calories = calories_plan(plan);
    let macros = macro_plan(plan, &body_composition, &calories);
    let projection = projection_from(plan, &body_composition);

    PlanLogger::log_plan_calculated(
        calories.target,
        calories.training_day,
        calories.rest_day,
        projection.weeks_to_goal,
    );

    CalculatePlanResponse {
        body_composition,
        calories,
        macros,
        projection,
    }
}

/// Full plan: targets, a week of meals and the grocery list
///
/// # Errors
///
/// Returns a configuration error when `default_package_g` is zero
#[instrument(skip_all, fields(foods = catalog.len(), default_package_g = default_package_g))]
pub fn generate_meals(
    plan: &PlanInput,
    catalog: &FoodCatalog,
    default_package_g: u32,
) -> AppResult<GenerateMealsResponse> {
    let CalculatePlanResponse {
        body_composition,
        calories,
        macros,
        projection,
    } = calculate_plan(plan);

    let meal_plan = MealEngine::new(catalog).generate_week(plan.training_days_per_week(), &macros);
    let grocery_list = build_grocery_list(&meal_plan, catalog, default_package_g)?;

    let clamped_days = meal_plan
        .days
        .iter()
        .filter(|day| !day.rebalance.is_exact())
        .count();
    PlanLogger::log_meal_plan_generated(meal_plan.days.len(), clamped_days, grocery_list.len());

    Ok(GenerateMealsResponse {
        body_composition,
        calories,
        macros,
        projection,
        meal_plan,
        grocery_list,
    })
}

/// Weight trajectory only
#[must_use]
#[instrument(skip_all)]
pub fn projection_for(plan: &PlanInput) -> Projection {
    projection_from(plan, &body_composition(plan))
}

/// Validate a check-in and compute the calorie adjustment
///
/// # Errors
///
/// Returns a validation error when a weight, the previous target or the waist is out of range
#[instrument(skip_all)]
pub fn weekly_checkin(checkin: &WeeklyCheckinRequest) -> AppResult<WeeklyCheckinResponse> {
    checkin.validate()?;
    let response = apply_weekly_adjustment(checkin);
    PlanLogger::log_checkin(response.weekly_change_percent, response.adjustment_kcal);
    Ok(response)
}
