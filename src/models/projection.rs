// ABOUTME: Weight trajectory projection records
// ABOUTME: Weekly targets and monthly milestones toward the goal weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Expected weight at the end of a week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWeightTarget {
    /// Week number (0 only for the degenerate projection)
    pub week: u32,
    /// Expected weight (kg, 2 decimals)
    pub expected_weight_kg: f64,
}

/// Expected weight every fourth week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMilestone {
    /// Month number starting at 1
    pub month: u32,
    /// Expected weight (kg, 2 decimals)
    pub expected_weight_kg: f64,
}

/// Capped weight trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Weeks needed at the chosen rate (1 decimal)
    pub weeks_to_goal: f64,
    /// Weekly loss (kg, 3 decimals)
    pub weekly_loss_kg: f64,
    /// Expected weight per week up to the capped horizon
    pub weekly_weight_targets: Vec<WeeklyWeightTarget>,
    /// Expected weight every four weeks
    pub monthly_milestones: Vec<MonthlyMilestone>,
}
