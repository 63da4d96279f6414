// ABOUTME: Food catalog item records with per-100g macronutrients
// ABOUTME: Read-only reference data consumed by the meal engine and grocery aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// Role a food plays when composing a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Main protein source
    Protein,
    /// Main carbohydrate source
    Carb,
    /// Vegetables and fruit
    Micronutrient,
    /// Added fat source
    Fat,
    /// Drinks (optional category)
    Beverage,
}

impl FoodCategory {
    /// Categories every catalog must provide
    pub const REQUIRED: [Self; 4] = [Self::Protein, Self::Carb, Self::Micronutrient, Self::Fat];

    /// Wire name of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carb => "carb",
            Self::Micronutrient => "micronutrient",
            Self::Fat => "fat",
            Self::Beverage => "beverage",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named food with macros per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCatalogItem {
    /// Unique name
    pub name: String,
    /// Category
    pub category: FoodCategory,
    /// Energy per 100 g
    pub kcal: f64,
    /// Protein per 100 g
    pub protein_g: f64,
    /// Carbohydrates per 100 g
    pub carbs_g: f64,
    /// Fat per 100 g
    pub fat_g: f64,
    /// Fiber per 100 g
    #[serde(default)]
    pub fiber_g: f64,
    /// Typical retail package size (g)
    #[serde(default, rename = "package_g", skip_serializing_if = "Option::is_none")]
    pub package_size_g: Option<u32>,
    /// Brand hints, most relevant first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<String>,
}

impl FoodCatalogItem {
    /// Macros supplied by `grams` of this food
    #[must_use]
    pub fn nutrients_for(&self, grams: f64) -> Nutrients {
        let factor = grams / 100.0;
        Nutrients {
            kcal: self.kcal * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
            fiber_g: self.fiber_g * factor,
        }
    }

    /// First brand hint, if any
    #[must_use]
    pub fn brand_hint(&self) -> Option<&str> {
        self.brands.first().map(String::as_str)
    }
}

/// Floating-point macro amounts used during gram allocation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nutrients {
    /// Energy (kcal)
    pub kcal: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Self) {
        self.kcal += rhs.kcal;
        self.protein_g += rhs.protein_g;
        self.carbs_g += rhs.carbs_g;
        self.fat_g += rhs.fat_g;
        self.fiber_g += rhs.fiber_g;
    }
}
