// ABOUTME: Domain models for the recomposition planner
// ABOUTME: Plan input, nutrition targets, meal plans, groceries, projections and check-ins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Models
//!
//! Every record is computed fresh per call. The only field written after the planner
//! returns is the optional retail product slot, filled by the enrichment pass.

/// Weekly check-in request and response
pub mod checkin;
/// Food catalog items and nutrient arithmetic
pub mod food;
/// Grocery list entries
pub mod grocery;
/// Weekly meal plan records
pub mod meal_plan;
/// Body composition and calorie/macro targets
pub mod nutrition;
/// Validated plan input
pub mod plan_input;
/// Weight trajectory
pub mod projection;
/// Aggregate planner responses
pub mod responses;
/// Retail enrichment record
pub mod retail;

pub use checkin::{WeeklyCheckinRequest, WeeklyCheckinResponse};
pub use food::{FoodCatalogItem, FoodCategory, Nutrients};
pub use grocery::GroceryItem;
pub use meal_plan::{
    DayMealPlan, DayType, IngredientAllocation, MacroResidual, Meal, RebalanceOutcome, Weekday,
    WeeklyMealPlan,
};
pub use nutrition::{BodyComposition, CaloriesPlan, MacroPlan, MacroTargets};
pub use plan_input::{ActivityLevel, Gender, GoalMode, PlanInput, PlanInputBuilder};
pub use projection::{MonthlyMilestone, Projection, WeeklyWeightTarget};
pub use responses::{CalculatePlanResponse, GenerateMealsResponse};
pub use retail::RetailProduct;
