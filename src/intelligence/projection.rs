// ABOUTME: Weight trajectory projection from the chosen weekly loss rate
// ABOUTME: Weekly targets capped at 104 weeks plus a milestone every fourth week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::round_to;
use crate::constants::projection::{MAX_PROJECTION_WEEKS, WEEKS_PER_MILESTONE};
use crate::models::{MonthlyMilestone, Projection, WeeklyWeightTarget};

/// Project expected weight week by week toward the target weight
///
/// With nothing to lose or no loss rate the projection holds a single week-0 entry at the
/// current weight. Expected weight never drops below `target_weight_kg`.
#[must_use]
pub fn project(
    current_weight_kg: f64,
    target_weight_kg: f64,
    fat_loss_required_kg: f64,
    weekly_loss_kg: f64,
) -> Projection {
    if fat_loss_required_kg <= 0.0 || weekly_loss_kg <= 0.0 {
        return Projection {
            weeks_to_goal: 0.0,
            weekly_loss_kg: 0.0,
            weekly_weight_targets: vec![WeeklyWeightTarget {
                week: 0,
                expected_weight_kg: round_to(current_weight_kg, 2),
            }],
            monthly_milestones: Vec::new(),
        };
    }

    let weeks = fat_loss_required_kg / weekly_loss_kg;
    let horizon = (weeks.ceil() as u32).min(MAX_PROJECTION_WEEKS);
    let expected_at = |week: u32| {
        let expected = weekly_loss_kg.mul_add(-f64::from(week), current_weight_kg);
        round_to(expected.max(target_weight_kg), 2)
    };

    let weekly_weight_targets = (1..=horizon)
        .map(|week| WeeklyWeightTarget {
            week,
            expected_weight_kg: expected_at(week),
        })
        .collect();

    let monthly_milestones = (WEEKS_PER_MILESTONE..=horizon)
        .step_by(WEEKS_PER_MILESTONE as usize)
        .zip(1..)
        .map(|(week, month)| MonthlyMilestone {
            month,
            expected_weight_kg: expected_at(week),
        })
        .collect();

    Projection {
        weeks_to_goal: round_to(weeks, 1),
        weekly_loss_kg: round_to(weekly_loss_kg, 3),
        weekly_weight_targets,
        monthly_milestones,
    }
}
