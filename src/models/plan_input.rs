// ABOUTME: Validated plan input describing the person and their recomposition goal
// ABOUTME: Immutable once built; construction and deserialization both enforce bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::validation::{
    AGE_RANGE, BODY_FAT_RANGE, DEFAULT_COUNTRY_CODE, DEFAULT_RETAILERS, DEFAULT_TIMELINE_WEEKS,
    HEIGHT_MAX_CM, HEIGHT_MIN_CM, MAX_TRAINING_DAYS, TARGET_BODY_FAT_RANGE, TIMELINE_RANGE,
    WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    High,
    /// Hard training twice a day
    Athlete,
}

impl ActivityLevel {
    /// Every level in ascending order of expenditure
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::High,
        Self::Athlete,
    ];

    /// TDEE multiplier applied to BMR
    ///
    /// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::High => 1.725,
            Self::Athlete => 1.9,
        }
    }

    /// Wire name of the level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Athlete => "athlete",
        }
    }
}

/// Overall goal driving protein and loss-rate choices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalMode {
    /// Prioritize fat loss (higher protein, faster minimum rate)
    FatLoss,
    /// Lose fat while building muscle (slower pacing allowed)
    #[default]
    Recomposition,
}

/// Validated input for a recomposition plan
///
/// Fields are private so that every instance went through [`PlanInputBuilder::build`]
/// or validated deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlanInputDraft")]
pub struct PlanInput {
    height_cm: f64,
    weight_kg: f64,
    age: u32,
    gender: Gender,
    body_fat_percent: f64,
    target_body_fat_percent: f64,
    activity_level: ActivityLevel,
    training_days_per_week: u8,
    timeline_weeks: u32,
    country_code: String,
    preferred_retailers: Vec<String>,
    goal_mode: GoalMode,
}

impl PlanInput {
    /// Start building a plan input from the required fields
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn builder(
        height_cm: f64,
        weight_kg: f64,
        age: u32,
        gender: Gender,
        body_fat_percent: f64,
        target_body_fat_percent: f64,
        activity_level: ActivityLevel,
        training_days_per_week: u8,
    ) -> PlanInputBuilder {
        PlanInputBuilder {
            draft: PlanInputDraft {
                height_cm,
                weight_kg,
                age,
                gender,
                body_fat_percent,
                target_body_fat_percent,
                activity_level,
                training_days_per_week,
                timeline_weeks: DEFAULT_TIMELINE_WEEKS,
                country_code: DEFAULT_COUNTRY_CODE.to_owned(),
                preferred_retailers: default_retailers(),
                goal_mode: GoalMode::default(),
            },
        }
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Body weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Gender used for the BMR constant
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Current body fat percent
    #[must_use]
    pub const fn body_fat_percent(&self) -> f64 {
        self.body_fat_percent
    }

    /// Goal body fat percent (always below current)
    #[must_use]
    pub const fn target_body_fat_percent(&self) -> f64 {
        self.target_body_fat_percent
    }

    /// Activity level
    #[must_use]
    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Training days per week (0-7)
    #[must_use]
    pub const fn training_days_per_week(&self) -> u8 {
        self.training_days_per_week
    }

    /// Desired pacing in weeks
    #[must_use]
    pub const fn timeline_weeks(&self) -> u32 {
        self.timeline_weeks
    }

    /// Upper-case ISO country code
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Retailers preferred for product enrichment
    #[must_use]
    pub fn preferred_retailers(&self) -> &[String] {
        &self.preferred_retailers
    }

    /// Goal mode
    #[must_use]
    pub const fn goal_mode(&self) -> GoalMode {
        self.goal_mode
    }
}

/// Builder for [`PlanInput`] with defaults for optional fields
#[derive(Debug, Clone)]
pub struct PlanInputBuilder {
    draft: PlanInputDraft,
}

impl PlanInputBuilder {
    /// Set the pacing timeline in weeks
    #[must_use]
    pub const fn timeline_weeks(mut self, weeks: u32) -> Self {
        self.draft.timeline_weeks = weeks;
        self
    }

    /// Set the country code used for retail enrichment
    #[must_use]
    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.draft.country_code = code.into();
        self
    }

    /// Set preferred retailers
    #[must_use]
    pub fn preferred_retailers(mut self, retailers: Vec<String>) -> Self {
        self.draft.preferred_retailers = retailers;
        self
    }

    /// Set the goal mode
    #[must_use]
    pub const fn goal_mode(mut self, goal_mode: GoalMode) -> Self {
        self.draft.goal_mode = goal_mode;
        self
    }

    /// Validate and build the plan input
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first constraint that failed
    pub fn build(self) -> AppResult<PlanInput> {
        PlanInput::try_from(self.draft)
    }
}

/// Unvalidated wire shape of [`PlanInput`]
#[derive(Debug, Clone, Deserialize)]
struct PlanInputDraft {
    height_cm: f64,
    weight_kg: f64,
    age: u32,
    gender: Gender,
    body_fat_percent: f64,
    target_body_fat_percent: f64,
    activity_level: ActivityLevel,
    training_days_per_week: u8,
    #[serde(default = "default_timeline")]
    timeline_weeks: u32,
    #[serde(default = "default_country")]
    country_code: String,
    #[serde(default = "default_retailers")]
    preferred_retailers: Vec<String>,
    #[serde(default)]
    goal_mode: GoalMode,
}

const fn default_timeline() -> u32 {
    DEFAULT_TIMELINE_WEEKS
}

fn default_country() -> String {
    DEFAULT_COUNTRY_CODE.to_owned()
}

fn default_retailers() -> Vec<String> {
    DEFAULT_RETAILERS.iter().map(|r| (*r).to_owned()).collect()
}

fn check_open_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if value.is_finite() && value > min && value < max {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(
            field,
            format!("{field} must be greater than {min} and less than {max}, got {value}"),
        ))
    }
}

fn check_closed_range(field: &str, value: f64, (min, max): (f64, f64)) -> AppResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(
            field,
            format!("{field} must be between {min} and {max}, got {value}"),
        ))
    }
}

impl TryFrom<PlanInputDraft> for PlanInput {
    type Error = AppError;

    fn try_from(draft: PlanInputDraft) -> AppResult<Self> {
        check_open_range("height_cm", draft.height_cm, HEIGHT_MIN_CM, HEIGHT_MAX_CM)?;
        check_open_range("weight_kg", draft.weight_kg, WEIGHT_MIN_KG, WEIGHT_MAX_KG)?;

        let (min_age, max_age) = AGE_RANGE;
        if !(min_age..=max_age).contains(&draft.age) {
            return Err(AppError::value_out_of_range(
                "age",
                format!("age must be between {min_age} and {max_age}, got {}", draft.age),
            ));
        }

        check_closed_range("body_fat_percent", draft.body_fat_percent, BODY_FAT_RANGE)?;
        check_closed_range(
            "target_body_fat_percent",
            draft.target_body_fat_percent,
            TARGET_BODY_FAT_RANGE,
        )?;
        if draft.target_body_fat_percent >= draft.body_fat_percent {
            return Err(AppError::invalid_input(
                "target_body_fat_percent must be lower than current body_fat_percent",
            )
            .with_resource_id("target_body_fat_percent"));
        }

        if draft.training_days_per_week > MAX_TRAINING_DAYS {
            return Err(AppError::value_out_of_range(
                "training_days_per_week",
                format!(
                    "training_days_per_week must be between 0 and {MAX_TRAINING_DAYS}, got {}",
                    draft.training_days_per_week
                ),
            ));
        }

        let (min_weeks, max_weeks) = TIMELINE_RANGE;
        if !(min_weeks..=max_weeks).contains(&draft.timeline_weeks) {
            return Err(AppError::value_out_of_range(
                "timeline_weeks",
                format!(
                    "timeline_weeks must be between {min_weeks} and {max_weeks}, got {}",
                    draft.timeline_weeks
                ),
            ));
        }

        let country_code = draft.country_code.trim().to_ascii_uppercase();
        if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::invalid_input(format!(
                "country_code must be a two-letter code, got '{}'",
                draft.country_code
            ))
            .with_resource_id("country_code"));
        }

        Ok(Self {
            height_cm: draft.height_cm,
            weight_kg: draft.weight_kg,
            age: draft.age,
            gender: draft.gender,
            body_fat_percent: draft.body_fat_percent,
            target_body_fat_percent: draft.target_body_fat_percent,
            activity_level: draft.activity_level,
            training_days_per_week: draft.training_days_per_week,
            timeline_weeks: draft.timeline_weeks,
            country_code,
            preferred_retailers: draft.preferred_retailers,
            goal_mode: draft.goal_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn builder() -> PlanInputBuilder {
        PlanInput::builder(
            171.0,
            71.0,
            31,
            Gender::Male,
            18.0,
            12.0,
            ActivityLevel::Moderate,
            4,
        )
    }

    #[test]
    fn test_defaults_applied() {
        let plan = builder().build().unwrap();
        assert_eq!(plan.timeline_weeks(), 16);
        assert_eq!(plan.country_code(), "DE");
        assert_eq!(plan.preferred_retailers(), ["aldi", "lidl", "tesco"]);
        assert_eq!(plan.goal_mode(), GoalMode::Recomposition);
    }

    #[test]
    fn test_target_body_fat_must_be_lower() {
        let err = PlanInput::builder(
            171.0,
            71.0,
            31,
            Gender::Male,
            18.0,
            18.0,
            ActivityLevel::Moderate,
            4,
        )
        .build()
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.context.resource_id.as_deref(), Some("target_body_fat_percent"));
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let err = PlanInput::builder(
            171.0,
            71.0,
            31,
            Gender::Male,
            18.0,
            12.0,
            ActivityLevel::Moderate,
            8,
        )
        .build()
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let err = builder().timeline_weeks(2).build().unwrap_err();
        assert_eq!(err.context.resource_id.as_deref(), Some("timeline_weeks"));

        let err = PlanInput::builder(
            171.0,
            30.0,
            31,
            Gender::Male,
            18.0,
            12.0,
            ActivityLevel::Moderate,
            4,
        )
        .build()
        .unwrap_err();
        assert_eq!(err.context.resource_id.as_deref(), Some("weight_kg"));
    }

    #[test]
    fn test_country_code_normalized() {
        let plan = builder().country_code("gb").build().unwrap();
        assert_eq!(plan.country_code(), "GB");
        assert!(builder().country_code("GBR").build().is_err());
    }

    #[test]
    fn test_deserialization_validates() {
        let json = r#"{
            "height_cm": 171, "weight_kg": 71, "age": 31, "gender": "male",
            "body_fat_percent": 18, "target_body_fat_percent": 25,
            "activity_level": "moderate", "training_days_per_week": 4
        }"#;
        assert!(serde_json::from_str::<PlanInput>(json).is_err());

        let json = json.replace("\"target_body_fat_percent\": 25", "\"target_body_fat_percent\": 12");
        let plan: PlanInput = serde_json::from_str(&json).unwrap();
        assert!((plan.weight_kg() - 71.0).abs() < f64::EPSILON);
        assert_eq!(plan.activity_level(), ActivityLevel::Moderate);
    }
}
