// ABOUTME: Weekly check-in request and response records
// ABOUTME: Request validation mirrors the bounds applied to plan inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::validation::{
    CALORIE_TARGET_RANGE, WAIST_RANGE_CM, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Week-over-week weigh-in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCheckinRequest {
    /// Weight at the previous check-in (kg)
    pub previous_weight_kg: f64,
    /// Weight now (kg)
    pub current_weight_kg: f64,
    /// Calorie target followed during the week (kcal)
    pub previous_calorie_target: i64,
    /// Waist measurement (cm); recorded but not used by the adjustment rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
}

impl WeeklyCheckinRequest {
    /// Check every field against its bounds
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first field out of range
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("previous_weight_kg", self.previous_weight_kg),
            ("current_weight_kg", self.current_weight_kg),
        ] {
            if !(value.is_finite() && value > WEIGHT_MIN_KG && value < WEIGHT_MAX_KG) {
                return Err(AppError::value_out_of_range(
                    field,
                    format!(
                        "{field} must be greater than {WEIGHT_MIN_KG} and less than {WEIGHT_MAX_KG}, got {value}"
                    ),
                ));
            }
        }

        let (min_kcal, max_kcal) = CALORIE_TARGET_RANGE;
        if !(min_kcal..=max_kcal).contains(&self.previous_calorie_target) {
            return Err(AppError::value_out_of_range(
                "previous_calorie_target",
                format!(
                    "previous_calorie_target must be between {min_kcal} and {max_kcal}, got {}",
                    self.previous_calorie_target
                ),
            ));
        }

        if let Some(waist) = self.waist_cm {
            let (min_waist, max_waist) = WAIST_RANGE_CM;
            if !(waist.is_finite() && (min_waist..=max_waist).contains(&waist)) {
                return Err(AppError::value_out_of_range(
                    "waist_cm",
                    format!("waist_cm must be between {min_waist} and {max_waist}, got {waist}"),
                ));
            }
        }

        Ok(())
    }
}

/// Suggested calorie change after a check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCheckinResponse {
    /// Weight lost as percent of previous weight (2 decimals, negative for gain)
    pub weekly_change_percent: f64,
    /// Signed adjustment (kcal)
    pub adjustment_kcal: i64,
    /// Previous target plus adjustment (kcal)
    pub new_calorie_target: i64,
    /// Human-readable explanation
    pub note: String,
}
