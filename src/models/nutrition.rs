// ABOUTME: Body composition, calorie plan and macro target records
// ABOUTME: Derived per request by the physiology calculator and never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::physiology::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use serde::{Deserialize, Serialize};

/// Body composition estimate derived from weight and body fat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    /// Lean body mass (kg)
    pub lean_body_mass_kg: f64,
    /// Fat mass (kg)
    pub fat_mass_kg: f64,
    /// Weight at the target body fat with lean mass preserved (kg)
    pub target_weight_kg: f64,
    /// Fat to lose to reach the target weight (kg, never negative)
    pub fat_loss_required_kg: f64,
}

/// Daily calorie targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaloriesPlan {
    /// Basal metabolic rate (kcal)
    pub bmr: i64,
    /// Total daily energy expenditure (kcal)
    pub tdee: i64,
    /// Deficit applied to TDEE (kcal)
    pub daily_deficit: i64,
    /// Baseline target, floored at 1.2 x BMR (kcal)
    pub target: i64,
    /// Training-day target (kcal)
    pub training_day: i64,
    /// Rest-day target (kcal)
    pub rest_day: i64,
}

/// Calorie and macronutrient targets for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
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

impl MacroTargets {
    /// Energy implied by the macro grams at 4/4/9 kcal per gram
    #[must_use]
    pub const fn macro_energy_kcal(&self) -> i64 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.carbs_g * KCAL_PER_G_CARBS
            + self.fat_g * KCAL_PER_G_FAT
    }
}

/// Targets per day type; protein and fat are identical across all three
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPlan {
    /// Targets at the baseline calorie level
    pub baseline: MacroTargets,
    /// Targets on training days
    pub training_day: MacroTargets,
    /// Targets on rest days
    pub rest_day: MacroTargets,
}
