// ABOUTME: Integration tests for the weekly meal composition engine
// ABOUTME: Checks day ordering, meal structure, breakfast rules and snack rebalancing outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use recomp_planner::intelligence::{body_composition, calories_plan, macro_plan, MealEngine};
use recomp_planner::models::{
    ActivityLevel, DayType, Gender, MacroPlan, MacroResidual, PlanInput, RebalanceOutcome,
    Weekday, WeeklyMealPlan,
};
use std::collections::BTreeSet;

fn macros_for(plan: &PlanInput) -> MacroPlan {
    let composition = body_composition(plan);
    macro_plan(plan, &composition, &calories_plan(plan))
}

fn week_for(plan: &PlanInput) -> (WeeklyMealPlan, MacroPlan) {
    common::init_test_logging();
    let catalog = common::catalog();
    let macros = macros_for(plan);
    let week = MealEngine::new(&catalog).generate_week(plan.training_days_per_week(), &macros);
    (week, macros)
}

#[test]
fn test_week_is_ordered_with_training_days_first() {
    let (week, macros) = week_for(&common::sample_plan());

    let days: Vec<Weekday> = week.days.iter().map(|day| day.day).collect();
    assert_eq!(days, Weekday::WEEK);

    for (idx, day) in week.days.iter().enumerate() {
        if idx < 4 {
            assert_eq!(day.day_type, DayType::Training);
            assert_eq!(day.target_macros, macros.training_day);
        } else {
            assert_eq!(day.day_type, DayType::Rest);
            assert_eq!(day.target_macros, macros.rest_day);
        }
    }
}

#[test]
fn test_every_day_has_four_named_meals() {
    let (week, _) = week_for(&common::sample_plan());
    for day in &week.days {
        let names: Vec<&str> = day.meals.iter().map(|meal| meal.name.as_str()).collect();
        assert_eq!(names, ["Breakfast", "Lunch", "Dinner", "Snack"]);
        for meal in &day.meals {
            assert!(!meal.ingredients.is_empty(), "{} on {} is empty", meal.name, day.day);
            assert!(meal.ingredients.iter().all(|allocation| allocation.grams >= 1));
            assert!(meal.ingredients.iter().all(|allocation| allocation.retail_product.is_none()));
        }
    }
}

#[test]
fn test_breakfast_composition() {
    let (week, _) = week_for(&common::sample_plan());
    for day in &week.days {
        let breakfast = &day.meals[0];
        let names: Vec<&str> = breakfast
            .ingredients
            .iter()
            .map(|allocation| allocation.ingredient.as_str())
            .collect();

        assert!(["Eggs", "Greek Yogurt"].contains(&names[0]), "{} breakfast: {names:?}", day.day);
        assert!(names.contains(&"Oats"));

        let coffee = breakfast
            .ingredients
            .iter()
            .find(|allocation| allocation.ingredient == "Black Coffee")
            .expect("breakfast carries coffee");
        assert_eq!(coffee.grams, 240);
    }
}

#[test]
fn test_snack_uses_leanest_protein() {
    let (week, _) = week_for(&common::sample_plan());
    for day in &week.days {
        assert_eq!(day.meals[3].ingredients[0].ingredient, "Cottage Cheese");
    }
}

#[test]
fn test_protein_repeats_are_bounded_for_core_meals() {
    let (week, _) = week_for(&common::sample_plan());
    let lunch_dinner_proteins: Vec<&str> = week
        .days
        .iter()
        .flat_map(|day| day.meals[1..3].iter())
        .map(|meal| meal.ingredients[0].ingredient.as_str())
        .collect();
    // Six lean proteins rotate across fourteen lunches and dinners
    let distinct: BTreeSet<&str> = lunch_dinner_proteins.iter().copied().collect();
    assert!(distinct.len() >= 4, "rotation too narrow: {distinct:?}");
}

#[test]
fn test_residual_matches_overshoot() {
    let weeks = [
        week_for(&common::sample_plan()).0,
        week_for(&common::female_plan()).0,
    ];
    for day in weeks.iter().flat_map(|week| week.days.iter()) {
        let (protein_over, carbs_over, fat_over) =
            common::overshoot(&day.totals, &day.target_macros);
        match day.rebalance {
            RebalanceOutcome::Exact => {
                assert_eq!((protein_over, carbs_over, fat_over), (0, 0, 0), "{}", day.day);
            }
            RebalanceOutcome::Clamped { residual } => {
                assert!(!residual.is_zero());
                assert_eq!(residual.protein_g, protein_over);
                assert_eq!(residual.carbs_g, carbs_over);
                assert_eq!(residual.fat_g, fat_over);
                let snack = &day.meals[3];
                assert_eq!(snack.protein_g.min(snack.carbs_g).min(snack.fat_g), 0);
            }
        }
    }
}

#[test]
fn test_sample_week_clamps_only_wednesday() {
    let (week, _) = week_for(&common::sample_plan());
    for day in &week.days {
        if day.day == Weekday::Wednesday {
            assert_eq!(
                day.rebalance,
                RebalanceOutcome::Clamped {
                    residual: MacroResidual {
                        protein_g: 4,
                        carbs_g: 0,
                        fat_g: 0,
                    },
                }
            );
            assert_eq!(day.totals.protein_g, 120);
            assert_eq!(day.target_macros.protein_g, 116);
        } else {
            assert!(day.rebalance.is_exact(), "{} should rebalance exactly", day.day);
        }
    }
}

#[test]
fn test_fat_loss_week_rebalances_exactly() {
    let (week, _) = week_for(&common::fat_loss_plan());
    for day in &week.days {
        assert_eq!(day.rebalance, RebalanceOutcome::Exact, "{} was clamped", day.day);
        assert_eq!(day.totals.protein_g, day.target_macros.protein_g);
        assert_eq!(day.totals.carbs_g, day.target_macros.carbs_g);
        assert_eq!(day.totals.fat_g, day.target_macros.fat_g);
        assert_eq!(day.totals.calories, day.target_macros.calories);
    }
}

#[test]
fn test_fiber_floored_at_target() {
    let (week, _) = week_for(&common::female_plan());
    for day in &week.days {
        assert!(day.totals.fiber_g >= day.target_macros.fiber_g);
    }
}

#[test]
fn test_zero_training_days_uses_rest_targets() {
    let plan = PlanInput::builder(
        171.0,
        71.0,
        31,
        Gender::Male,
        18.0,
        12.0,
        ActivityLevel::Moderate,
        0,
    )
    .build()
    .unwrap();
    let (week, macros) = week_for(&plan);
    assert!(week.days.iter().all(|day| day.day_type == DayType::Rest));
    assert!(week.days.iter().all(|day| day.target_macros == macros.rest_day));
}

#[test]
fn test_generation_is_deterministic() {
    let plan = common::sample_plan();
    let (first, _) = week_for(&plan);
    let (second, _) = week_for(&plan);
    assert_eq!(first, second);
}
