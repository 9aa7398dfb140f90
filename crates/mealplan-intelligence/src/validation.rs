// ABOUTME: Input validation for nutrition computations
// ABOUTME: Rejects profiles and activity levels that would produce NaN or meaningless budgets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_core::errors::{AppError, AppResult};
use mealplan_core::models::{Goal, Profile};

/// Validate a biometric profile
///
/// Weight and height must be finite and positive, age must be positive.
/// No upper bounds are enforced.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidProfile` naming the first offending field
pub fn validate_profile(profile: &Profile) -> AppResult<()> {
    if !profile.weight_kg.is_finite() || profile.weight_kg <= 0.0 {
        return Err(AppError::invalid_profile("Weight must be a positive number of kg")
            .with_details(serde_json::json!({ "field": "weight_kg" })));
    }
    if !profile.height_cm.is_finite() || profile.height_cm <= 0.0 {
        return Err(AppError::invalid_profile("Height must be a positive number of cm")
            .with_details(serde_json::json!({ "field": "height_cm" })));
    }
    if profile.age == 0 {
        return Err(AppError::invalid_profile("Age must be a positive number of years")
            .with_details(serde_json::json!({ "field": "age" })));
    }
    Ok(())
}

/// Validate goal settings
///
/// Any positive finite activity multiplier is accepted, including values
/// outside the five standard levels.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidProfile` if the activity level is not positive
pub fn validate_goal(goal: &Goal) -> AppResult<()> {
    if !goal.activity_level.is_finite() || goal.activity_level <= 0.0 {
        return Err(
            AppError::invalid_profile("Activity level must be a positive multiplier")
                .with_details(serde_json::json!({ "field": "activity_level" })),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_core::errors::ErrorCode;
    use mealplan_core::models::{FitnessGoal, Gender};

    #[test]
    fn test_rejects_non_positive_fields() {
        let cases = [
            Profile::new(Gender::Male, 0.0, 180.0, 30),
            Profile::new(Gender::Male, 80.0, -1.0, 30),
            Profile::new(Gender::Female, 60.0, 165.0, 0),
            Profile::new(Gender::Female, f64::NAN, 165.0, 30),
        ];
        for profile in cases {
            let err = validate_profile(&profile).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidProfile);
        }
    }

    #[test]
    fn test_accepts_non_standard_activity_level() {
        assert!(validate_goal(&Goal::new(FitnessGoal::Recomp, 1.42)).is_ok());
        assert!(validate_goal(&Goal::new(FitnessGoal::Recomp, 0.0)).is_err());
    }
}
