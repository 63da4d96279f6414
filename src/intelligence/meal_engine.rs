// ABOUTME: Greedy meal composition engine building a week of meals from the food catalog
// ABOUTME: Rotates foods per day and meal, sizes portions per macro share, rebalances via the snack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Composition Engine
//!
//! For each weekday the engine picks the day type, builds Breakfast, Lunch and Dinner from
//! rotating catalog foods, sizes a Snack to cover what the core meals left open, then moves
//! the remaining delta onto the Snack so the day's protein, carbohydrate and fat totals
//! land on target. When the core meals already overshoot an axis the Snack cannot go
//! negative; that day is reported as [`RebalanceOutcome::Clamped`] with the overshoot.
//!
//! Food selection:
//! - lean proteins are protein foods with at most 6 g fat per 100 g
//! - preferred carbs are carb foods with at most 8 g protein per 100 g
//! - breakfast favours Eggs or Greek Yogurt, Oats, Black Coffee and a fruit
//! - a protein used 3 times in the week yields to the least-used candidate

use super::round_to_i64;
use crate::catalog::FoodCatalog;
use crate::constants::meal_plan::{
    BEVERAGE_G, BREAKFAST_BEVERAGE, BREAKFAST_CARB, BREAKFAST_FRUITS, BREAKFAST_PROTEINS,
    CARB_SPLIT, CORE_MEAL_NAMES, FAT_SPLIT, LEAN_PROTEIN_MAX_FAT_G, LOW_PROTEIN_CARB_MAX_PROTEIN_G,
    MAX_PROTEIN_PER_MEAL_G, MAX_PROTEIN_REPEATS_PER_WEEK, MEALS_PER_DAY, MICRONUTRIENT_FOOD_G,
    MIN_CARB_FOOD_G, MIN_LISTED_ALLOCATION_G, MIN_PROTEIN_FOOD_G, MIN_PROTEIN_PER_MEAL_G,
    MIN_SNACK_PROTEIN_G, SNACK_MEAL_NAME, SNACK_ROTATION_OFFSET,
};
use crate::models::{
    DayMealPlan, DayType, FoodCatalogItem, FoodCategory, IngredientAllocation, MacroPlan,
    MacroResidual, MacroTargets, Meal, Nutrients, RebalanceOutcome, Weekday, WeeklyMealPlan,
};
use std::collections::HashMap;
use tracing::{debug, warn};

type Food<'a> = &'a FoodCatalogItem;

/// Foods and per-100g densities chosen for one meal, with its macro targets
struct MealRecipe<'a> {
    name: &'static str,
    protein_food: Food<'a>,
    carb_food: Food<'a>,
    micro_food: Food<'a>,
    fat_food: Food<'a>,
    protein_target_g: f64,
    carbs_target_g: f64,
    fat_target_g: f64,
    extras: Vec<(Food<'a>, f64)>,
}

/// Weekly meal generator over a validated catalog
#[derive(Debug, Clone)]
pub struct MealEngine<'a> {
    catalog: &'a FoodCatalog,
    proteins: Vec<Food<'a>>,
    lean_proteins: Vec<Food<'a>>,
    preferred_carbs: Vec<Food<'a>>,
    micronutrients: Vec<Food<'a>>,
    fats: Vec<Food<'a>>,
    breakfast_beverage: Option<Food<'a>>,
}

impl<'a> MealEngine<'a> {
    /// Group the catalog into the candidate lists used for rotation
    #[must_use]
    pub fn new(catalog: &'a FoodCatalog) -> Self {
        let proteins = catalog.by_category(FoodCategory::Protein);
        let lean_proteins = non_empty_or(
            proteins
                .iter()
                .copied()
                .filter(|food| food.fat_g <= LEAN_PROTEIN_MAX_FAT_G)
                .collect(),
            &proteins,
        );

        let carbs = catalog.by_category(FoodCategory::Carb);
        let preferred_carbs = non_empty_or(
            carbs
                .iter()
                .copied()
                .filter(|food| food.protein_g <= LOW_PROTEIN_CARB_MAX_PROTEIN_G)
                .collect(),
            &carbs,
        );

        let breakfast_beverage = catalog.find(BREAKFAST_BEVERAGE).or_else(|| {
            catalog
                .by_category(FoodCategory::Beverage)
                .first()
                .copied()
        });

        Self {
            catalog,
            proteins,
            lean_proteins,
            preferred_carbs,
            micronutrients: catalog.by_category(FoodCategory::Micronutrient),
            fats: catalog.by_category(FoodCategory::Fat),
            breakfast_beverage,
        }
    }

    /// Build Monday through Sunday; the first `training_days` days use training targets
    #[must_use]
    pub fn generate_week(&self, training_days: u8, macros: &MacroPlan) -> WeeklyMealPlan {
        let mut protein_usage: HashMap<&str, u32> = HashMap::new();

        let days = Weekday::WEEK
            .iter()
            .enumerate()
            .map(|(day_idx, &day)| {
                let day_type = if day_idx < usize::from(training_days) {
                    DayType::Training
                } else {
                    DayType::Rest
                };
                let target = match day_type {
                    DayType::Training => macros.training_day,
                    DayType::Rest => macros.rest_day,
                };
                self.build_day(day, day_idx, day_type, &target, &mut protein_usage)
            })
            .collect();

        WeeklyMealPlan { days }
    }

    fn build_day(
        &self,
        day: Weekday,
        day_idx: usize,
        day_type: DayType,
        target: &MacroTargets,
        protein_usage: &mut HashMap<&'a str, u32>,
    ) -> DayMealPlan {
        let protein_per_meal = round_to_i64(target.protein_g as f64 / MEALS_PER_DAY as f64)
            .clamp(MIN_PROTEIN_PER_MEAL_G, MAX_PROTEIN_PER_MEAL_G);

        let mut meals: Vec<Meal> = CORE_MEAL_NAMES
            .iter()
            .enumerate()
            .map(|(meal_idx, &name)| {
                let recipe = self.core_recipe(
                    name,
                    day_idx,
                    meal_idx,
                    protein_per_meal as f64,
                    target,
                    protein_usage,
                );
                build_meal(&recipe)
            })
            .collect();

        let core = sum_meals(&meals, target.fiber_g);
        meals.push(build_meal(&self.snack_recipe(day_idx, target, &core)));

        let rebalance = rebalance_to_target(&mut meals, target);
        let totals = sum_meals(&meals, target.fiber_g);

        if let RebalanceOutcome::Clamped { residual } = rebalance {
            warn!(
                day = %day,
                protein_over_g = residual.protein_g,
                carbs_over_g = residual.carbs_g,
                fat_over_g = residual.fat_g,
                "Core meals exceed day target; snack clamped at zero"
            );
        }
        debug!(
            day = %day,
            day_type = ?day_type,
            calories = totals.calories,
            protein_g = totals.protein_g,
            carbs_g = totals.carbs_g,
            fat_g = totals.fat_g,
            "Day composed"
        );

        DayMealPlan {
            day,
            day_type,
            target_macros: *target,
            meals,
            totals,
            rebalance,
        }
    }

    fn core_recipe(
        &self,
        name: &'static str,
        day_idx: usize,
        meal_idx: usize,
        protein_target_g: f64,
        target: &MacroTargets,
        protein_usage: &mut HashMap<&'a str, u32>,
    ) -> MealRecipe<'a> {
        let rotation = day_idx + meal_idx;
        let mut extras = Vec::new();

        let (candidates, pick, carb_food, micro_food) = if meal_idx == 0 {
            let breakfast_proteins = non_empty_or(
                self.proteins
                    .iter()
                    .copied()
                    .filter(|food| BREAKFAST_PROTEINS.contains(&food.name.as_str()))
                    .collect(),
                &self.lean_proteins,
            );
            let candidates = by_usage_then_fat(&breakfast_proteins, protein_usage);
            let pick = rotate(&candidates, day_idx);

            let carb_food = self
                .catalog
                .find(BREAKFAST_CARB)
                .unwrap_or_else(|| rotate(&self.preferred_carbs, rotation));
            if let Some(beverage) = self.breakfast_beverage {
                extras.push((beverage, BEVERAGE_G));
            }

            let fruits: Vec<Food<'a>> = self
                .micronutrients
                .iter()
                .copied()
                .filter(|food| BREAKFAST_FRUITS.contains(&food.name.as_str()))
                .collect();
            let micro_food = if fruits.is_empty() {
                rotate(&self.micronutrients, rotation)
            } else {
                rotate(&fruits, day_idx)
            };
            (candidates, pick, carb_food, micro_food)
        } else {
            let candidates = by_usage_then_fat(&self.lean_proteins, protein_usage);
            let pick = rotate(&candidates, rotation);
            (
                candidates,
                pick,
                rotate(&self.preferred_carbs, rotation),
                rotate(&self.micronutrients, rotation),
            )
        };

        let mut protein_food = pick;
        if usage_of(protein_usage, protein_food) >= MAX_PROTEIN_REPEATS_PER_WEEK {
            protein_food = candidates[0];
        }
        *protein_usage.entry(protein_food.name.as_str()).or_insert(0) += 1;

        MealRecipe {
            name,
            protein_food,
            carb_food,
            micro_food,
            fat_food: rotate(&self.fats, rotation),
            protein_target_g,
            carbs_target_g: target.carbs_g as f64 * CARB_SPLIT[meal_idx],
            fat_target_g: target.fat_g as f64 * FAT_SPLIT[meal_idx],
            extras,
        }
    }

    fn snack_recipe(
        &self,
        day_idx: usize,
        target: &MacroTargets,
        core: &MacroTargets,
    ) -> MealRecipe<'a> {
        let rotation = day_idx + SNACK_ROTATION_OFFSET;
        let protein_food = self
            .lean_proteins
            .iter()
            .copied()
            .min_by(|a, b| a.fat_g.total_cmp(&b.fat_g))
            .unwrap_or(self.lean_proteins[0]);

        MealRecipe {
            name: SNACK_MEAL_NAME,
            protein_food,
            carb_food: rotate(&self.preferred_carbs, rotation),
            micro_food: rotate(&self.micronutrients, rotation),
            fat_food: rotate(&self.fats, rotation),
            protein_target_g: ((target.protein_g - core.protein_g) as f64).max(MIN_SNACK_PROTEIN_G),
            carbs_target_g: ((target.carbs_g - core.carbs_g) as f64).max(0.0),
            fat_target_g: ((target.fat_g - core.fat_g) as f64).max(0.0),
            extras: Vec::new(),
        }
    }
}

fn non_empty_or<'a>(preferred: Vec<Food<'a>>, fallback: &[Food<'a>]) -> Vec<Food<'a>> {
    if preferred.is_empty() {
        fallback.to_vec()
    } else {
        preferred
    }
}

/// Candidate list element at `index`, wrapping around
fn rotate<'a>(foods: &[Food<'a>], index: usize) -> Food<'a> {
    foods[index % foods.len()]
}

fn usage_of(usage: &HashMap<&str, u32>, food: Food<'_>) -> u32 {
    usage.get(food.name.as_str()).copied().unwrap_or(0)
}

/// Least-used first, then leanest; ties keep catalog order
fn by_usage_then_fat<'a>(foods: &[Food<'a>], usage: &HashMap<&str, u32>) -> Vec<Food<'a>> {
    let mut sorted = foods.to_vec();
    sorted.sort_by(|a, b| {
        usage_of(usage, a)
            .cmp(&usage_of(usage, b))
            .then_with(|| a.fat_g.total_cmp(&b.fat_g))
    });
    sorted
}

/// Size every food of a recipe and total its macros
///
/// Protein food is sized for the protein target (at least 90 g), the micronutrient food is a
/// fixed 120 g, and the carb and fat foods cover what those two left of their targets.
fn build_meal(recipe: &MealRecipe<'_>) -> Meal {
    let protein_grams = (recipe.protein_target_g / recipe.protein_food.protein_g.max(1.0) * 100.0)
        .max(MIN_PROTEIN_FOOD_G);
    let protein_supplied = recipe.protein_food.nutrients_for(protein_grams);
    let micro_supplied = recipe.micro_food.nutrients_for(MICRONUTRIENT_FOOD_G);

    let remaining_carbs =
        (recipe.carbs_target_g - protein_supplied.carbs_g - micro_supplied.carbs_g).max(0.0);
    let remaining_fat =
        (recipe.fat_target_g - protein_supplied.fat_g - micro_supplied.fat_g).max(0.0);

    let carb_grams =
        (remaining_carbs / recipe.carb_food.carbs_g.max(1.0) * 100.0).max(MIN_CARB_FOOD_G);
    let fat_grams = (remaining_fat / recipe.fat_food.fat_g.max(1.0) * 100.0).max(0.0);

    let allocations = [
        (recipe.protein_food, protein_grams),
        (recipe.carb_food, carb_grams),
        (recipe.micro_food, MICRONUTRIENT_FOOD_G),
        (recipe.fat_food, fat_grams),
    ]
    .into_iter()
    .chain(recipe.extras.iter().copied());

    let mut total = Nutrients::default();
    let mut ingredients = Vec::with_capacity(4 + recipe.extras.len());
    for (food, grams) in allocations {
        if grams < MIN_LISTED_ALLOCATION_G {
            continue;
        }
        total += food.nutrients_for(grams);
        ingredients.push(IngredientAllocation {
            ingredient: food.name.clone(),
            grams: round_to_i64(grams) as u32,
            brand_hint: food.brand_hint().map(str::to_owned),
            retail_product: None,
        });
    }

    Meal {
        name: recipe.name.to_owned(),
        ingredients,
        calories: round_to_i64(total.kcal),
        protein_g: round_to_i64(total.protein_g),
        carbs_g: round_to_i64(total.carbs_g),
        fat_g: round_to_i64(total.fat_g),
        fiber_g: round_to_i64(total.fiber_g),
    }
}

/// Day totals of the given meals; fiber is floored at the fiber target
#[must_use]
pub fn sum_meals(meals: &[Meal], fiber_target_g: i64) -> MacroTargets {
    let mut totals = MacroTargets {
        calories: 0,
        protein_g: 0,
        carbs_g: 0,
        fat_g: 0,
        fiber_g: 0,
    };
    for meal in meals {
        totals.calories += meal.calories;
        totals.protein_g += meal.protein_g;
        totals.carbs_g += meal.carbs_g;
        totals.fat_g += meal.fat_g;
        totals.fiber_g += meal.fiber_g;
    }
    totals.fiber_g = totals.fiber_g.max(fiber_target_g);
    totals
}

/// Move the day's remaining delta onto the Snack's macro values
///
/// Only the Snack's calories, protein, carbs and fat change; ingredients and the other meals
/// are untouched. Each adjusted value is floored at zero, and any overshoot that floor
/// leaves behind is reported in the returned outcome.
pub fn rebalance_to_target(meals: &mut [Meal], target: &MacroTargets) -> RebalanceOutcome {
    let totals = sum_meals(meals, target.fiber_g);
    let Some(snack) = meals.iter_mut().find(|meal| meal.name == SNACK_MEAL_NAME) else {
        return RebalanceOutcome::Exact;
    };

    let adjust = |current: i64, wanted: i64, total: i64| -> (i64, i64) {
        let value = current + wanted - total;
        (value.max(0), (-value).max(0))
    };

    let (protein, protein_over) = adjust(snack.protein_g, target.protein_g, totals.protein_g);
    let (carbs, carbs_over) = adjust(snack.carbs_g, target.carbs_g, totals.carbs_g);
    let (fat, fat_over) = adjust(snack.fat_g, target.fat_g, totals.fat_g);
    let (calories, _) = adjust(snack.calories, target.calories, totals.calories);

    snack.protein_g = protein;
    snack.carbs_g = carbs;
    snack.fat_g = fat;
    snack.calories = calories;

    let residual = MacroResidual {
        protein_g: protein_over,
        carbs_g: carbs_over,
        fat_g: fat_over,
    };
    if residual.is_zero() {
        RebalanceOutcome::Exact
    } else {
        RebalanceOutcome::Clamped { residual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(name: &str, protein_g: i64, carbs_g: i64, fat_g: i64) -> Meal {
        Meal {
            name: name.to_owned(),
            ingredients: Vec::new(),
            calories: protein_g * 4 + carbs_g * 4 + fat_g * 9,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g: 5,
        }
    }

    fn target(protein_g: i64, carbs_g: i64, fat_g: i64) -> MacroTargets {
        MacroTargets {
            calories: protein_g * 4 + carbs_g * 4 + fat_g * 9,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g: 30,
        }
    }

    #[test]
    fn test_rebalance_hits_target_exactly() {
        let mut meals = vec![
            meal("Breakfast", 35, 60, 10),
            meal("Lunch", 35, 70, 12),
            meal("Dinner", 35, 60, 10),
            meal("Snack", 20, 20, 5),
        ];
        let goal = target(150, 250, 60);
        let outcome = rebalance_to_target(&mut meals, &goal);

        assert!(outcome.is_exact());
        let totals = sum_meals(&meals, 30);
        assert_eq!(totals.protein_g, 150);
        assert_eq!(totals.carbs_g, 250);
        assert_eq!(totals.fat_g, 60);
        assert_eq!(totals.calories, goal.calories);
        assert_eq!(totals.fiber_g, 30);
    }

    #[test]
    fn test_rebalance_reports_clamp() {
        let mut meals = vec![
            meal("Breakfast", 50, 60, 10),
            meal("Lunch", 50, 70, 12),
            meal("Dinner", 50, 60, 10),
            meal("Snack", 25, 20, 5),
        ];
        let goal = target(140, 250, 60);
        let outcome = rebalance_to_target(&mut meals, &goal);

        let snack = &meals[3];
        assert_eq!(snack.protein_g, 0);
        assert_eq!(
            outcome,
            RebalanceOutcome::Clamped {
                residual: MacroResidual {
                    protein_g: 10,
                    carbs_g: 0,
                    fat_g: 0,
                }
            }
        );
        assert_eq!(sum_meals(&meals, 30).protein_g, 150);
    }

    #[test]
    fn test_rebalance_without_snack_is_noop() {
        let mut meals = vec![meal("Breakfast", 10, 10, 10)];
        let before = meals.clone();
        assert!(rebalance_to_target(&mut meals, &target(100, 100, 100)).is_exact());
        assert_eq!(meals, before);
    }

    #[test]
    fn test_fiber_floor_only_raises() {
        let meals = vec![meal("Breakfast", 1, 1, 1); 8];
        assert_eq!(sum_meals(&meals, 30).fiber_g, 40);
        assert_eq!(sum_meals(&meals[..2], 30).fiber_g, 30);
    }
}
