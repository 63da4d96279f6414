// ABOUTME: Weekly adaptive check-in adjusting calories from week-over-week weight change
// ABOUTME: Stateless band rule: below 0.3% cut 100 kcal, above 1.2% add 100 kcal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::round_to;
use crate::constants::checkin::{
    ADJUSTMENT_KCAL, MAX_WEEKLY_CHANGE_PERCENT, MIN_WEEKLY_CHANGE_PERCENT,
};
use crate::models::{WeeklyCheckinRequest, WeeklyCheckinResponse};

/// Suggest a calorie change from the weight lost since the previous check-in
///
/// The band is evaluated on the unrounded change; the reported change is rounded to
/// 2 decimals. Weight gain yields a negative change and therefore a decrease.
#[must_use]
pub fn apply_weekly_adjustment(checkin: &WeeklyCheckinRequest) -> WeeklyCheckinResponse {
    let change_percent = (checkin.previous_weight_kg - checkin.current_weight_kg)
        / checkin.previous_weight_kg
        * 100.0;

    let (adjustment_kcal, note) = if change_percent < MIN_WEEKLY_CHANGE_PERCENT {
        (
            -ADJUSTMENT_KCAL,
            format!(
                "Progress below {MIN_WEEKLY_CHANGE_PERCENT}%/week. Decrease calories by {ADJUSTMENT_KCAL} kcal."
            ),
        )
    } else if change_percent > MAX_WEEKLY_CHANGE_PERCENT {
        (
            ADJUSTMENT_KCAL,
            format!(
                "Progress above {MAX_WEEKLY_CHANGE_PERCENT}%/week. Increase calories by {ADJUSTMENT_KCAL} kcal to reduce aggressiveness."
            ),
        )
    } else {
        (
            0,
            "Progress within target band. Keep calories unchanged.".to_owned(),
        )
    };

    WeeklyCheckinResponse {
        weekly_change_percent: round_to(change_percent, 2),
        adjustment_kcal,
        new_calorie_target: checkin.previous_calorie_target + adjustment_kcal,
        note,
    }
}
