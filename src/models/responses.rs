// ABOUTME: Aggregate response records returned by the planner facade
// ABOUTME: Plain structured data for whichever transport embeds the library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::grocery::GroceryItem;
use super::meal_plan::WeeklyMealPlan;
use super::nutrition::{BodyComposition, CaloriesPlan, MacroPlan};
use super::projection::Projection;
use serde::{Deserialize, Serialize};

/// Physiology-only plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatePlanResponse {
    /// Body composition estimate
    pub body_composition: BodyComposition,
    /// Calorie targets
    pub calories: CaloriesPlan,
    /// Macro targets per day type
    pub macros: MacroPlan,
    /// Weight trajectory
    pub projection: Projection,
}

/// Full plan including meals and groceries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateMealsResponse {
    /// Body composition estimate
    pub body_composition: BodyComposition,
    /// Calorie targets
    pub calories: CaloriesPlan,
    /// Macro targets per day type
    pub macros: MacroPlan,
    /// Weight trajectory
    pub projection: Projection,
    /// Seven generated days
    pub meal_plan: WeeklyMealPlan,
    /// Aggregated shopping list
    pub grocery_list: Vec<GroceryItem>,
}
