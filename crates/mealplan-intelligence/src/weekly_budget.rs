// ABOUTME: Weekly planning budget from a biometric profile and fitness goal
// ABOUTME: Mifflin-St Jeor BMR, 50 kcal rounded TDEE, and goal-specific weekly macro totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly Budget Calculator
//!
//! Converts a [`Profile`] and [`Goal`] into the seven-day calorie, protein and
//! fat totals a meal plan is built against.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! # Rounding
//!
//! All rounding goes through [`round_half_up`], which rounds ties towards
//! positive infinity. Rounding happens only where noted: TDEE, daily protein
//! and weekly fat. Weekly calories are never rounded.

use crate::validation::{validate_goal, validate_profile};
use mealplan_core::constants::{bmr, energy, weekly_plan};
use mealplan_core::errors::AppResult;
use mealplan_core::models::{FitnessGoal, Gender, Goal, Profile, WeeklyBudget};
use tracing::debug;

/// Round to the nearest integer, ties towards positive infinity
///
/// `2.5` rounds to `3` and `-2.5` rounds to `-2`.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
/// - Men: +5
/// - Women: -161
///
/// The profile is not validated here; callers go through
/// [`compute_weekly_budget`] or validate first.
#[must_use]
#[allow(clippy::suboptimal_flops)] // operands are combined in formula order, not fused
pub fn calculate_bmr(profile: &Profile) -> f64 {
    let gender_constant = match profile.gender {
        Gender::Male => bmr::MALE_CONSTANT,
        Gender::Female => bmr::FEMALE_CONSTANT,
    };

    bmr::WEIGHT_COEF * profile.weight_kg + bmr::HEIGHT_COEF * profile.height_cm
        - bmr::AGE_COEF * f64::from(profile.age)
        + gender_constant
}

/// Calculate Total Daily Energy Expenditure rounded to the nearest 50 kcal
///
/// Formula: TDEE = round(BMR x `activity_level` / 50) x 50
///
/// `activity_level` is used as given; values between the standard levels
/// (1.2, 1.375, 1.55, 1.725, 1.9) are legitimate.
#[must_use]
pub fn calculate_tdee(profile: &Profile, activity_level: f64) -> f64 {
    let bmr = calculate_bmr(profile);
    round_half_up(bmr * activity_level / bmr::TDEE_ROUNDING_STEP) * bmr::TDEE_ROUNDING_STEP
}

/// Weekly fat grams for a calorie total and fat share
///
/// Formula: fat = round(`fat_share` x `weekly_calories` / 9)
#[must_use]
pub fn weekly_fat_grams(fat_share: f64, weekly_calories: f64) -> f64 {
    round_half_up(fat_share * weekly_calories / energy::KCAL_PER_GRAM_FAT)
}

/// Goal-dependent multipliers of the weekly planning variant
struct WeeklyGoalFactors {
    calorie_factor: Option<f64>,
    protein_per_kg: f64,
    fat_share: f64,
}

impl WeeklyGoalFactors {
    fn for_goal(goal: &FitnessGoal) -> Self {
        match goal {
            FitnessGoal::Bulk => Self {
                calorie_factor: Some(weekly_plan::BULK_CALORIE_FACTOR),
                protein_per_kg: weekly_plan::BULK_PROTEIN_PER_KG,
                fat_share: weekly_plan::BULK_FAT_SHARE,
            },
            FitnessGoal::Shred => Self {
                calorie_factor: Some(weekly_plan::SHRED_CALORIE_FACTOR),
                protein_per_kg: weekly_plan::SHRED_PROTEIN_PER_KG,
                fat_share: weekly_plan::SHRED_FAT_SHARE,
            },
            // Recomp and unrecognised goals share the default branch
            FitnessGoal::Recomp | FitnessGoal::Other(_) => Self {
                calorie_factor: None,
                protein_per_kg: weekly_plan::DEFAULT_PROTEIN_PER_KG,
                fat_share: weekly_plan::DEFAULT_FAT_SHARE,
            },
        }
    }
}

/// Compute the seven-day calorie, protein and fat budget
///
/// 1. TDEE via [`calculate_tdee`]
/// 2. Daily calories: Bulk x1.15, Shred x0.8, otherwise TDEE
/// 3. Weekly calories = daily x 7
/// 4. Daily protein = min(round(g/kg x weight), height + 20); Bulk 1.8,
///    Shred 2.0, otherwise 1.9 g/kg. Weekly protein = daily x 7
/// 5. Weekly fat = round(share x weekly calories / 9); Bulk 0.25,
///    Shred 0.20, otherwise 0.225
///
/// # Errors
///
/// Returns `ErrorCode::InvalidProfile` if the profile or activity level is
/// not usable
pub fn compute_weekly_budget(profile: &Profile, goal: &Goal) -> AppResult<WeeklyBudget> {
    validate_profile(profile)?;
    validate_goal(goal)?;

    let factors = WeeklyGoalFactors::for_goal(&goal.goal);
    let tdee = calculate_tdee(profile, goal.activity_level);

    let daily_calories = factors
        .calorie_factor
        .map_or(tdee, |factor| tdee * factor);
    let calories = daily_calories * weekly_plan::DAYS_PER_WEEK;

    let protein_ceiling = profile.height_cm + weekly_plan::PROTEIN_HEIGHT_CAP_OFFSET;
    let daily_protein =
        round_half_up(factors.protein_per_kg * profile.weight_kg).min(protein_ceiling);
    let protein = daily_protein * weekly_plan::DAYS_PER_WEEK;

    let fat = weekly_fat_grams(factors.fat_share, calories);

    debug!(
        goal = %goal.goal,
        budget.tdee = tdee,
        budget.calories = calories,
        budget.protein = protein,
        budget.fat = fat,
        "Computed weekly budget"
    );

    Ok(WeeklyBudget::new(calories, protein, fat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_core::errors::ErrorCode;

    fn male_83kg() -> Profile {
        Profile::new(Gender::Male, 83.0, 173.0, 22)
    }

    #[test]
    fn test_round_half_up_ties() {
        assert!((round_half_up(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_half_up(2.4999) - 2.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.5) - -2.0).abs() < f64::EPSILON);
        assert!((round_half_up(-2.6) - -3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_male_and_female() {
        assert!((calculate_bmr(&male_83kg()) - 1806.25).abs() < 1e-9);

        let female = Profile::new(Gender::Female, 60.0, 165.0, 25);
        assert!((calculate_bmr(&female) - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_rounds_to_fifty() {
        // 1806.25 * 1.55 = 2799.6875 -> 55.99 steps -> 56 * 50
        let tdee = calculate_tdee(&male_83kg(), 1.55);
        assert!((tdee - 2800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bulk_reference_profile() {
        let goal = Goal::new(FitnessGoal::Bulk, 1.55);
        let budget = compute_weekly_budget(&male_83kg(), &goal).unwrap();

        // 2800 * 1.15 * 7
        assert!((budget.calories - 22540.0).abs() < 1e-6);
        // round(1.8 * 83) = 149, under the 193 g ceiling
        assert!((budget.protein - 1043.0).abs() < f64::EPSILON);
        // round(0.25 * 22540 / 9) = round(626.11)
        assert!((budget.fat - 626.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shred_female() {
        let profile = Profile::new(Gender::Female, 60.0, 165.0, 25);
        let goal = Goal::new(FitnessGoal::Shred, 1.375);
        let budget = compute_weekly_budget(&profile, &goal).unwrap();

        // TDEE 1850, x0.8 = 1480/day
        assert!((budget.calories - 10360.0).abs() < 1e-6);
        assert!((budget.protein - 840.0).abs() < f64::EPSILON);
        assert!((budget.fat - 230.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recomp_protein_capped_by_height() {
        let profile = Profile::new(Gender::Male, 150.0, 150.0, 40);
        let goal = Goal::new(FitnessGoal::Recomp, 1.2);
        let budget = compute_weekly_budget(&profile, &goal).unwrap();

        // round(1.9 * 150) = 285 > 150 + 20
        assert!((budget.protein - 170.0 * 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_goal_matches_recomp() {
        let profile = male_83kg();
        let recomp =
            compute_weekly_budget(&profile, &Goal::new(FitnessGoal::Recomp, 1.725)).unwrap();
        let other =
            compute_weekly_budget(&profile, &Goal::new(FitnessGoal::from("Maintain"), 1.725))
                .unwrap();
        assert_eq!(recomp, other);
    }

    #[test]
    fn test_fat_rounds_half_up_at_boundary() {
        // 0.25 * 22518 / 9 = 625.5 exactly
        assert!((weekly_fat_grams(0.25, 22518.0) - 626.0).abs() < f64::EPSILON);
        // 0.25 * 22482 / 9 = 624.5 exactly
        assert!((weekly_fat_grams(0.25, 22482.0) - 625.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        let profile = Profile::new(Gender::Male, -83.0, 173.0, 22);
        let err = compute_weekly_budget(&profile, &Goal::new(FitnessGoal::Bulk, 1.55)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidProfile);
    }
}
