// ABOUTME: Weekly meal plan records: weekdays, day types, meals and ingredient allocations
// ABOUTME: Includes the rebalancing outcome reported for every generated day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::MacroTargets;
use super::retail::RetailProduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar weekday in fixed plan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// Days in plan order; training days are taken from the front of this list
    pub const WEEK: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Lowercase day label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a day uses training or rest targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Training day (higher carbohydrate)
    Training,
    /// Rest day
    Rest,
}

/// Grams of one ingredient inside a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientAllocation {
    /// Catalog food name
    pub ingredient: String,
    /// Rounded grams (at least 1)
    pub grams: u32,
    /// Brand hint from the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_hint: Option<String>,
    /// Retail product filled in by an enrichment pass after planning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_product: Option<RetailProduct>,
}

/// A meal with its ingredients and rounded macro totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Breakfast, Lunch, Dinner or Snack
    pub name: String,
    /// Ordered ingredient allocations
    pub ingredients: Vec<IngredientAllocation>,
    /// Energy (kcal)
    pub calories: i64,
    /// Protein (g)
    pub protein_g: i64,
    /// Carbohydrates (g)
    pub carbs_g: i64,
    /// Fat (g)
    pub fat_g: i64,
    /// Fiber (g)
    pub fiber_g: i64,
}

/// Macro grams the snack could not absorb because its values hit zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroResidual {
    /// Protein excess left in the day (g)
    pub protein_g: i64,
    /// Carbohydrate excess left in the day (g)
    pub carbs_g: i64,
    /// Fat excess left in the day (g)
    pub fat_g: i64,
}

impl MacroResidual {
    /// True when every axis was absorbed
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.protein_g == 0 && self.carbs_g == 0 && self.fat_g == 0
    }
}

/// Result of forcing a day's totals onto its targets through the snack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RebalanceOutcome {
    /// Protein, carbs and fat totals equal the targets
    Exact,
    /// The core meals already exceeded a target; the residual is what remains over
    Clamped {
        /// Grams above target per axis
        residual: MacroResidual,
    },
}

impl RebalanceOutcome {
    /// True when totals match targets exactly
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact)
    }
}

/// One day of the weekly plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMealPlan {
    /// Weekday
    pub day: Weekday,
    /// Training or rest
    pub day_type: DayType,
    /// Targets the day was built for
    pub target_macros: MacroTargets,
    /// Breakfast, Lunch, Dinner, Snack
    pub meals: Vec<Meal>,
    /// Sum of meals with fiber floored at target
    pub totals: MacroTargets,
    /// Whether snack rebalancing fully succeeded
    pub rebalance: RebalanceOutcome,
}

/// Seven days in fixed weekday order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMealPlan {
    /// Monday through Sunday
    pub days: Vec<DayMealPlan>,
}

impl WeeklyMealPlan {
    /// Every ingredient allocation of the week in plan order
    pub fn allocations(&self) -> impl Iterator<Item = &IngredientAllocation> {
        self.days
            .iter()
            .flat_map(|day| day.meals.iter())
            .flat_map(|meal| meal.ingredients.iter())
    }

    /// Mutable access to every ingredient allocation of the week
    pub fn allocations_mut(&mut self) -> impl Iterator<Item = &mut IngredientAllocation> {
        self.days
            .iter_mut()
            .flat_map(|day| day.meals.iter_mut())
            .flat_map(|meal| meal.ingredients.iter_mut())
    }
}
