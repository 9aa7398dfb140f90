// ABOUTME: Daily display figures: TDEE, daily target, macros, and breakfast/snack slices
// ABOUTME: Uses its own goal constants, independent of the weekly planning budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Breakdown Calculator
//!
//! Produces the per-day numbers shown next to a meal plan. The goal constants
//! here are not the weekly planning constants: a bulk uses 1.9 g/kg protein
//! here and 1.8 g/kg in the weekly budget, a shred 21% fat here and 20% there.
//! Both sets live in `mealplan_core::constants`.

use crate::validation::{validate_goal, validate_profile};
use crate::weekly_budget::{calculate_tdee, round_half_up};
use mealplan_core::constants::{daily_display, energy};
use mealplan_core::errors::AppResult;
use mealplan_core::models::{DailyBudget, FitnessGoal, Goal, Profile};

fn goal_constants(goal: &FitnessGoal) -> (f64, f64, f64) {
    match goal {
        FitnessGoal::Bulk => (
            daily_display::BULK_CALORIE_OFFSET,
            daily_display::BULK_PROTEIN_PER_KG,
            daily_display::BULK_FAT_SHARE,
        ),
        FitnessGoal::Shred => (
            daily_display::SHRED_CALORIE_OFFSET,
            daily_display::SHRED_PROTEIN_PER_KG,
            daily_display::SHRED_FAT_SHARE,
        ),
        FitnessGoal::Recomp | FitnessGoal::Other(_) => (
            0.0,
            daily_display::DEFAULT_PROTEIN_PER_KG,
            daily_display::DEFAULT_FAT_SHARE,
        ),
    }
}

/// Compute the daily display breakdown
///
/// - `tdee` as in the weekly budget (rounded to 50 kcal)
/// - `daily_target = tdee + offset` (Bulk +300, Shred -400, otherwise 0)
/// - `protein = round(g/kg x weight)` (Bulk 1.9, Shred 2.1, otherwise 2.0)
/// - `fat = round(share x daily_target / 9)` (Bulk 0.25, Shred 0.21, otherwise 0.225)
/// - `snack_calories = 300`
/// - `breakfast_calories = round(0.2 x (daily_target - 300))`
/// - `breakfast_protein = round(0.1 x protein)`, `breakfast_fat = round(0.2 x fat)`
///
/// # Errors
///
/// Returns `ErrorCode::InvalidProfile` if the profile or activity level is
/// not usable
pub fn compute_daily_breakdown(profile: &Profile, goal: &Goal) -> AppResult<DailyBudget> {
    validate_profile(profile)?;
    validate_goal(goal)?;

    let (calorie_offset, protein_per_kg, fat_share) = goal_constants(&goal.goal);

    let tdee = calculate_tdee(profile, goal.activity_level);
    let daily_target = tdee + calorie_offset;
    let protein = round_half_up(protein_per_kg * profile.weight_kg);
    let fat = round_half_up(fat_share * daily_target / energy::KCAL_PER_GRAM_FAT);

    let snack_calories = daily_display::SNACK_CALORIES;

    Ok(DailyBudget {
        tdee,
        daily_target,
        protein,
        fat,
        breakfast_calories: round_half_up(
            daily_display::BREAKFAST_CALORIE_SHARE * (daily_target - snack_calories),
        ),
        breakfast_protein: round_half_up(daily_display::BREAKFAST_PROTEIN_SHARE * protein),
        breakfast_fat: round_half_up(daily_display::BREAKFAST_FAT_SHARE * fat),
        snack_calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekly_budget::compute_weekly_budget;
    use mealplan_core::models::Gender;

    #[test]
    fn test_bulk_breakdown() {
        let profile = Profile::new(Gender::Male, 83.0, 173.0, 22);
        let daily = compute_daily_breakdown(&profile, &Goal::new(FitnessGoal::Bulk, 1.55)).unwrap();

        assert!((daily.tdee - 2800.0).abs() < f64::EPSILON);
        assert!((daily.daily_target - 3100.0).abs() < f64::EPSILON);
        // round(1.9 * 83) = round(157.7)
        assert!((daily.protein - 158.0).abs() < f64::EPSILON);
        // round(0.25 * 3100 / 9) = round(86.11)
        assert!((daily.fat - 86.0).abs() < f64::EPSILON);
        // round(0.2 * 2800)
        assert!((daily.breakfast_calories - 560.0).abs() < f64::EPSILON);
        // round(15.8)
        assert!((daily.breakfast_protein - 16.0).abs() < f64::EPSILON);
        // round(17.2)
        assert!((daily.breakfast_fat - 17.0).abs() < f64::EPSILON);
        assert!((daily.snack_calories - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_daily_constants_diverge_from_weekly() {
        let profile = Profile::new(Gender::Male, 83.0, 173.0, 22);
        let goal = Goal::new(FitnessGoal::Bulk, 1.55);
        let daily = compute_daily_breakdown(&profile, &goal).unwrap();
        let weekly = compute_weekly_budget(&profile, &goal).unwrap();

        // 158 g/day for display, 149 g/day for planning
        assert!((daily.protein * 7.0 - weekly.protein).abs() > 1.0);
    }

    #[test]
    fn test_shred_uses_offset() {
        let profile = Profile::new(Gender::Female, 60.0, 165.0, 25);
        let daily =
            compute_daily_breakdown(&profile, &Goal::new(FitnessGoal::Shred, 1.375)).unwrap();

        assert!((daily.tdee - 1850.0).abs() < f64::EPSILON);
        assert!((daily.daily_target - 1450.0).abs() < f64::EPSILON);
        assert!((daily.protein - 126.0).abs() < f64::EPSILON);
        // round(0.21 * 1450 / 9) = round(33.83)
        assert!((daily.fat - 34.0).abs() < f64::EPSILON);
        // round(0.2 * 1150)
        assert!((daily.breakfast_calories - 230.0).abs() < f64::EPSILON);
    }
}
