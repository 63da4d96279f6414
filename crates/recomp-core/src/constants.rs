// ABOUTME: Physiology coefficients, allocation constants and validation bounds
// ABOUTME: Shared by the calculators, the meal engine and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Constants are grouped by the engine that consumes them. Values backed by published
//! research carry the reference next to the constant.

/// Service identity used in structured logs
pub mod service_names {
    /// Library/service name
    pub const RECOMP_PLANNER: &str = "recomp-planner";
    /// Command-line binary name
    pub const RECOMP_CLI: &str = "recomp-cli";
}

/// Energy densities and body-composition math
pub mod physiology {
    /// Protein energy density (kcal/g)
    pub const KCAL_PER_G_PROTEIN: i64 = 4;
    /// Carbohydrate energy density (kcal/g)
    pub const KCAL_PER_G_CARBS: i64 = 4;
    /// Fat energy density (kcal/g)
    pub const KCAL_PER_G_FAT: i64 = 9;

    /// Practical energy equivalent of one kilogram of body fat
    /// Reference: Hall, K.D. (2008). What is the required energy deficit per unit weight loss?
    /// International Journal of Obesity, 32(3), 573-576.
    pub const KCAL_PER_KG_FAT: f64 = 7700.0;

    /// Mifflin-St Jeor weight coefficient
    /// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Mifflin-St Jeor male constant
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Mifflin-St Jeor female constant
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Calorie target never drops below BMR times this factor
    pub const BMR_FLOOR_FACTOR: f64 = 1.2;

    /// Training days receive this many extra kcal when periodization applies
    pub const TRAINING_DAY_SURPLUS_KCAL: i64 = 200;
    /// Inclusive lower bound of training days for calorie periodization
    pub const PERIODIZATION_MIN_TRAINING_DAYS: u8 = 4;
    /// Inclusive upper bound of training days for calorie periodization
    pub const PERIODIZATION_MAX_TRAINING_DAYS: u8 = 6;

    /// Protein per kg of lean mass in fat-loss mode
    /// Reference: Helms, E.R., et al. (2014). A systematic review of dietary protein during
    /// caloric restriction in resistance trained lean athletes. IJSNEM, 24(2), 127-138.
    pub const PROTEIN_G_PER_KG_LBM_FAT_LOSS: f64 = 2.2;
    /// Protein per kg of lean mass in recomposition mode
    pub const PROTEIN_G_PER_KG_LBM_RECOMP: f64 = 2.0;

    /// Default fat intake per kg of body weight
    pub const FAT_G_PER_KG: f64 = 0.7;
    /// Minimum fat intake per kg of body weight
    pub const FAT_MIN_G_PER_KG: f64 = 0.6;
    /// Maximum fat intake per kg of body weight
    pub const FAT_MAX_G_PER_KG: f64 = 0.8;

    /// Daily fiber target (g), identical for every day type
    pub const FIBER_TARGET_G: i64 = 30;
}

/// Safe weekly loss-rate bounds (percent of body weight per week)
pub mod loss_rate {
    /// Body fat above which the aggressive rate applies
    pub const HIGH_BODY_FAT_PERCENT: f64 = 20.0;
    /// Body fat below which the conservative rate applies
    pub const LOW_BODY_FAT_PERCENT: f64 = 15.0;
    /// Weekly rate for body fat above the high threshold
    pub const HIGH_BODY_FAT_RATE_PERCENT: f64 = 1.0;
    /// Weekly rate for body fat below the low threshold
    pub const LOW_BODY_FAT_RATE_PERCENT: f64 = 0.5;
    /// Weekly rate between the thresholds
    pub const MODERATE_RATE_PERCENT: f64 = 0.75;
    /// Slowest rate allowed in fat-loss mode
    pub const FAT_LOSS_MIN_RATE_PERCENT: f64 = 0.5;
    /// Slowest rate allowed in recomposition mode
    pub const RECOMP_MIN_RATE_PERCENT: f64 = 0.25;
}

/// Greedy per-meal allocation constants
pub mod meal_plan {
    /// Meals built by index before the snack
    pub const CORE_MEAL_NAMES: [&str; 3] = ["Breakfast", "Lunch", "Dinner"];
    /// Name of the rebalanced meal
    pub const SNACK_MEAL_NAME: &str = "Snack";
    /// Meals per day including the snack
    pub const MEALS_PER_DAY: i64 = 4;

    /// Minimum protein-food portion (g)
    pub const MIN_PROTEIN_FOOD_G: f64 = 90.0;
    /// Fixed micronutrient-food portion (g)
    pub const MICRONUTRIENT_FOOD_G: f64 = 120.0;
    /// Minimum carb-food portion (g)
    pub const MIN_CARB_FOOD_G: f64 = 40.0;
    /// Fixed breakfast beverage portion (g)
    pub const BEVERAGE_G: f64 = 240.0;
    /// Allocations under this many grams are dropped from ingredient lists
    pub const MIN_LISTED_ALLOCATION_G: f64 = 1.0;

    /// Upper cap of the per-meal protein target (g)
    pub const MAX_PROTEIN_PER_MEAL_G: i64 = 28;
    /// Lower bound of the per-meal protein share (g)
    pub const MIN_PROTEIN_PER_MEAL_G: i64 = 25;
    /// Minimum snack protein target (g)
    pub const MIN_SNACK_PROTEIN_G: f64 = 25.0;

    /// Carbohydrate share for breakfast, lunch, dinner
    pub const CARB_SPLIT: [f64; 3] = [0.22, 0.24, 0.22];
    /// Fat share for breakfast, lunch, dinner
    pub const FAT_SPLIT: [f64; 3] = [0.06, 0.10, 0.08];

    /// Protein foods at or under this fat density count as lean (g/100g)
    pub const LEAN_PROTEIN_MAX_FAT_G: f64 = 6.0;
    /// Carb foods at or under this protein density are preferred (g/100g)
    pub const LOW_PROTEIN_CARB_MAX_PROTEIN_G: f64 = 8.0;
    /// A protein food used this many times in a week yields to the least-used one
    pub const MAX_PROTEIN_REPEATS_PER_WEEK: u32 = 3;
    /// Rotation offset used for the snack's carb, micronutrient and fat picks
    pub const SNACK_ROTATION_OFFSET: usize = 3;

    /// Breakfast protein allow-list
    pub const BREAKFAST_PROTEINS: [&str; 2] = ["Eggs", "Greek Yogurt"];
    /// Breakfast fruit allow-list
    pub const BREAKFAST_FRUITS: [&str; 5] = ["Blueberries", "Apple", "Orange", "Pear", "Kiwi"];
    /// Carb food forced at breakfast when present
    pub const BREAKFAST_CARB: &str = "Oats";
    /// Beverage forced at breakfast when present
    pub const BREAKFAST_BEVERAGE: &str = "Black Coffee";
}

/// Grocery aggregation defaults
pub mod grocery {
    /// Package size assumed for foods without a declared package (g)
    pub const DEFAULT_PACKAGE_G: u32 = 500;
}

/// Weight trajectory projection
pub mod projection {
    /// Hard cap on the number of projected weeks
    pub const MAX_PROJECTION_WEEKS: u32 = 104;
    /// Weeks per monthly milestone
    pub const WEEKS_PER_MILESTONE: u32 = 4;
}

/// Weekly adaptive check-in band
pub mod checkin {
    /// Below this weekly loss percent calories are decreased
    pub const MIN_WEEKLY_CHANGE_PERCENT: f64 = 0.3;
    /// Above this weekly loss percent calories are increased
    pub const MAX_WEEKLY_CHANGE_PERCENT: f64 = 1.2;
    /// Size of a single calorie adjustment (kcal)
    pub const ADJUSTMENT_KCAL: i64 = 100;
}

/// Input validation bounds
pub mod validation {
    /// Height must be strictly above this (cm)
    pub const HEIGHT_MIN_CM: f64 = 120.0;
    /// Height must be strictly below this (cm)
    pub const HEIGHT_MAX_CM: f64 = 230.0;
    /// Weight must be strictly above this (kg)
    pub const WEIGHT_MIN_KG: f64 = 35.0;
    /// Weight must be strictly below this (kg)
    pub const WEIGHT_MAX_KG: f64 = 300.0;
    /// Inclusive age bounds (years)
    pub const AGE_RANGE: (u32, u32) = (14, 90);
    /// Inclusive current body fat bounds (percent)
    pub const BODY_FAT_RANGE: (f64, f64) = (4.0, 60.0);
    /// Inclusive target body fat bounds (percent)
    pub const TARGET_BODY_FAT_RANGE: (f64, f64) = (4.0, 40.0);
    /// Maximum training days per week
    pub const MAX_TRAINING_DAYS: u8 = 7;
    /// Inclusive timeline bounds (weeks)
    pub const TIMELINE_RANGE: (u32, u32) = (4, 52);
    /// Timeline used when the caller does not supply one
    pub const DEFAULT_TIMELINE_WEEKS: u32 = 16;
    /// Country used when the caller does not supply one
    pub const DEFAULT_COUNTRY_CODE: &str = "DE";
    /// Retailers used when the caller does not supply any
    pub const DEFAULT_RETAILERS: [&str; 3] = ["aldi", "lidl", "tesco"];
    /// Inclusive bounds of a previous calorie target at check-in (kcal)
    pub const CALORIE_TARGET_RANGE: (i64, i64) = (1000, 6000);
    /// Inclusive bounds of an optional waist measurement (cm)
    pub const WAIST_RANGE_CM: (f64, f64) = (40.0, 200.0);
}
