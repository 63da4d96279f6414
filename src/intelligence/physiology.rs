// ABOUTME: Physiology calculator for body composition, energy expenditure and macro targets
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, bounded loss rate and day-type periodization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiology Calculator
//!
//! Every function is a pure function of a validated [`PlanInput`]. Inputs are bounded at
//! construction, so nothing here can fail.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Hall, K.D. (2008). What is the required energy deficit per unit weight loss?
//!   *International Journal of Obesity*, 32(3), 573-576.
//!
//! - Helms, E.R., et al. (2014). A systematic review of dietary protein during caloric
//!   restriction in resistance trained lean athletes. *IJSNEM*, 24(2), 127-138.

use super::{round_to, round_to_i64};
use crate::constants::loss_rate::{
    FAT_LOSS_MIN_RATE_PERCENT, HIGH_BODY_FAT_PERCENT, HIGH_BODY_FAT_RATE_PERCENT,
    LOW_BODY_FAT_PERCENT, LOW_BODY_FAT_RATE_PERCENT, MODERATE_RATE_PERCENT,
    RECOMP_MIN_RATE_PERCENT,
};
use crate::constants::physiology::{
    BMR_FLOOR_FACTOR, FAT_G_PER_KG, FAT_MAX_G_PER_KG, FAT_MIN_G_PER_KG, FIBER_TARGET_G,
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, KCAL_PER_KG_FAT, MSJ_AGE_COEF,
    MSJ_FEMALE_CONSTANT, MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF,
    PERIODIZATION_MAX_TRAINING_DAYS, PERIODIZATION_MIN_TRAINING_DAYS,
    PROTEIN_G_PER_KG_LBM_FAT_LOSS, PROTEIN_G_PER_KG_LBM_RECOMP, TRAINING_DAY_SURPLUS_KCAL,
};
use crate::models::{
    ActivityLevel, BodyComposition, CaloriesPlan, Gender, GoalMode, MacroPlan, MacroTargets,
    PlanInput,
};
use tracing::debug;

const DAYS_PER_WEEK: i64 = 7;

/// Lean mass, fat mass and the weight at target body fat with lean mass preserved
///
/// All four values are rounded to 2 decimals. Fat loss is floored at zero.
#[must_use]
pub fn body_composition(plan: &PlanInput) -> BodyComposition {
    let body_fat = plan.body_fat_percent() / 100.0;
    let target_body_fat = plan.target_body_fat_percent() / 100.0;

    let lean_mass = plan.weight_kg() * (1.0 - body_fat);
    let fat_mass = plan.weight_kg() - lean_mass;
    let target_weight = lean_mass / (1.0 - target_body_fat);
    let fat_loss_required = (plan.weight_kg() - target_weight).max(0.0);

    BodyComposition {
        lean_body_mass_kg: round_to(lean_mass, 2),
        fat_mass_kg: round_to(fat_mass, 2),
        target_weight_kg: round_to(target_weight, 2),
        fat_loss_required_kg: round_to(fat_loss_required, 2),
    }
}

/// Basal metabolic rate using the Mifflin-St Jeor equation
///
/// Formula: `10 x weight + 6.25 x height - 5 x age + (5 | -161)`, rounded
#[must_use]
pub fn bmr(plan: &PlanInput) -> i64 {
    let base = MSJ_AGE_COEF.mul_add(
        f64::from(plan.age()),
        MSJ_WEIGHT_COEF.mul_add(plan.weight_kg(), MSJ_HEIGHT_COEF * plan.height_cm()),
    );
    let gender_constant = match plan.gender() {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female => MSJ_FEMALE_CONSTANT,
    };
    round_to_i64(base + gender_constant)
}

/// Total daily energy expenditure
#[must_use]
pub fn tdee(bmr: i64, activity_level: ActivityLevel) -> i64 {
    round_to_i64(bmr as f64 * activity_level.multiplier())
}

/// Baseline weekly loss rate (percent of body weight) for a body fat level
#[must_use]
pub fn loss_rate_percent(body_fat_percent: f64) -> f64 {
    if body_fat_percent > HIGH_BODY_FAT_PERCENT {
        HIGH_BODY_FAT_RATE_PERCENT
    } else if body_fat_percent < LOW_BODY_FAT_PERCENT {
        LOW_BODY_FAT_RATE_PERCENT
    } else {
        MODERATE_RATE_PERCENT
    }
}

/// Weekly loss in kg: the pace implied by the timeline, clamped to safe bounds
///
/// The lower bound depends on the goal mode; the upper bound is the body-fat based rate.
/// With nothing left to lose the baseline rate applies unclamped.
#[must_use]
pub fn weekly_loss_kg(plan: &PlanInput, fat_loss_required_kg: f64) -> f64 {
    let base_rate = loss_rate_percent(plan.body_fat_percent());
    let min_rate = match plan.goal_mode() {
        GoalMode::FatLoss => FAT_LOSS_MIN_RATE_PERCENT,
        GoalMode::Recomposition => RECOMP_MIN_RATE_PERCENT,
    };
    let max_rate = if plan.body_fat_percent() > HIGH_BODY_FAT_PERCENT {
        HIGH_BODY_FAT_RATE_PERCENT
    } else {
        base_rate
    };

    let chosen_rate = if plan.timeline_weeks() > 0 && fat_loss_required_kg > 0.0 {
        let required_weekly = fat_loss_required_kg / f64::from(plan.timeline_weeks());
        let required_rate = required_weekly / plan.weight_kg() * 100.0;
        required_rate.min(max_rate).max(min_rate)
    } else {
        base_rate
    };

    plan.weight_kg() * chosen_rate / 100.0
}

/// Calorie targets with training/rest periodization
///
/// Periodization applies for 4 to 6 training days: training days get +200 kcal and rest days
/// absorb the difference so the weekly total stays close to `target x 7`.
#[must_use]
pub fn calories_plan(plan: &PlanInput) -> CaloriesPlan {
    let bmr = bmr(plan);
    let tdee = tdee(bmr, plan.activity_level());
    let composition = body_composition(plan);
    let weekly_loss = weekly_loss_kg(plan, composition.fat_loss_required_kg);

    let daily_deficit = round_to_i64(weekly_loss * KCAL_PER_KG_FAT / DAYS_PER_WEEK as f64);
    let floor = round_to_i64(bmr as f64 * BMR_FLOOR_FACTOR);
    let target = (tdee - daily_deficit).max(floor);

    let training_days = plan.training_days_per_week();
    let (training_day, rest_day) = if (PERIODIZATION_MIN_TRAINING_DAYS
        ..=PERIODIZATION_MAX_TRAINING_DAYS)
        .contains(&training_days)
    {
        let training_day = target + TRAINING_DAY_SURPLUS_KCAL;
        let training_count = i64::from(training_days);
        let rest_count = DAYS_PER_WEEK - training_count;
        let rest_total = target * DAYS_PER_WEEK - training_day * training_count;
        (
            training_day,
            round_to_i64(rest_total as f64 / rest_count as f64),
        )
    } else {
        (target, target)
    };

    debug!(
        bmr,
        tdee,
        daily_deficit,
        target,
        training_day,
        rest_day,
        floored = target == floor,
        "Calorie plan derived"
    );

    CaloriesPlan {
        bmr,
        tdee,
        daily_deficit,
        target,
        training_day,
        rest_day,
    }
}

fn carbs_for(calories: i64, protein_g: i64, fat_g: i64) -> i64 {
    let carb_kcal = (calories - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT).max(0);
    round_to_i64(carb_kcal as f64 / KCAL_PER_G_CARBS as f64)
}

/// Daily fat grams: 0.7 g/kg clamped to 0.6..=0.8 g/kg
#[must_use]
pub fn fat_target_g(weight_kg: f64) -> i64 {
    let fat = round_to_i64(weight_kg * FAT_G_PER_KG);
    let min = (weight_kg * FAT_MIN_G_PER_KG).ceil() as i64;
    let max = (weight_kg * FAT_MAX_G_PER_KG).floor() as i64;
    fat.min(max).max(min)
}

/// Daily protein grams from lean mass and goal mode
#[must_use]
pub fn protein_target_g(lean_body_mass_kg: f64, goal_mode: GoalMode) -> i64 {
    let per_kg = match goal_mode {
        GoalMode::FatLoss => PROTEIN_G_PER_KG_LBM_FAT_LOSS,
        GoalMode::Recomposition => PROTEIN_G_PER_KG_LBM_RECOMP,
    };
    round_to_i64(lean_body_mass_kg * per_kg)
}

/// Macro targets for the baseline, training and rest calorie levels
///
/// Protein and fat are computed once and shared by all three day types; carbohydrates fill
/// the remaining energy at 4 kcal/g and never go negative.
#[must_use]
pub fn macro_plan(
    plan: &PlanInput,
    composition: &BodyComposition,
    calories: &CaloriesPlan,
) -> MacroPlan {
    let protein_g = protein_target_g(composition.lean_body_mass_kg, plan.goal_mode());
    let fat_g = fat_target_g(plan.weight_kg());

    let targets_for = |kcal: i64| MacroTargets {
        calories: kcal,
        protein_g,
        carbs_g: carbs_for(kcal, protein_g, fat_g),
        fat_g,
        fiber_g: FIBER_TARGET_G,
    };

    MacroPlan {
        baseline: targets_for(calories.target),
        training_day: targets_for(calories.training_day),
        rest_day: targets_for(calories.rest_day),
    }
}
