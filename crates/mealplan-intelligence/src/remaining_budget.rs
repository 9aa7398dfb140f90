// ABOUTME: Remaining weekly budget after subtracting already planned recipes
// ABOUTME: Amortises each recipe by the number of days its meal slot is eaten
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_core::models::{MealSlot, RecipeNutrition, WeeklyBudget};
use tracing::{debug, trace};

/// Days per week a recipe with this name is eaten
///
/// "Lunch 1" → 3, "Lunch 2" → 4, "Dinner 1" → 4, "Dinner 2" → 3, anything
/// else → 0.
#[must_use]
pub fn recipe_days_for(recipe_name: &str) -> u8 {
    MealSlot::from_recipe_name(recipe_name).day_count()
}

/// Subtract every planned recipe's weekly contribution from `weekly_budget`
///
/// Each recipe contributes `nutrition x day_count` of its slot. Recipes in
/// slots that are not eaten on batched days (breakfasts, snacks, unlabelled
/// recipes) contribute nothing. The result is not clamped: a negative
/// component means the plan already exceeds that target.
#[must_use]
pub fn reduce_by_existing(
    weekly_budget: WeeklyBudget,
    existing_recipes: &[RecipeNutrition],
) -> WeeklyBudget {
    let remaining = existing_recipes
        .iter()
        .fold(weekly_budget, |mut remaining, recipe| {
            let slot = recipe.effective_slot();
            let days = f64::from(slot.day_count());
            trace!(recipe.name = %recipe.name, recipe.slot = %slot, days, "Amortising recipe");

            remaining.calories -= recipe.calories * days;
            remaining.protein -= recipe.protein * days;
            remaining.fat -= recipe.fat * days;
            remaining
        });

    debug!(
        recipes = existing_recipes.len(),
        budget.calories = remaining.calories,
        budget.protein = remaining.protein,
        budget.fat = remaining.fat,
        "Reduced weekly budget by existing recipes"
    );

    remaining
}
