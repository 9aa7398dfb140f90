// ABOUTME: NutritionBudgetEngine facade combining budget, reduction, cuisine pick, and prompt
// ABOUTME: Stateless; the random source is the only input besides the plan request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::daily_breakdown::compute_daily_breakdown;
use crate::prompt::{build_prompt, select_cuisine};
use crate::remaining_budget::reduce_by_existing;
use crate::weekly_budget::compute_weekly_budget;
use mealplan_core::constants::defaults;
use mealplan_core::errors::AppResult;
use mealplan_core::models::{DailyBudget, Goal, MealSlot, Profile, RecipeNutrition, WeeklyBudget};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Everything needed to plan the next recipe of a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Biometric profile
    pub profile: Profile,
    /// Fitness goal, activity level and diet preferences
    pub goal: Goal,
    /// Recipes already in the plan
    #[serde(default)]
    pub existing_recipes: Vec<RecipeNutrition>,
    /// Ordered cuisine preferences
    #[serde(default)]
    pub cuisine_pool: Vec<String>,
    /// Slot the next recipe fills
    pub slot: MealSlot,
}

/// Result of planning: targets plus the prompt for the generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePlan {
    /// Full weekly budget for the goal
    pub weekly_budget: WeeklyBudget,
    /// Weekly budget left after existing recipes
    pub remaining_weekly_budget: WeeklyBudget,
    /// Slot the recipe is planned for
    pub slot: MealSlot,
    /// Selected cuisine, `None` when the pool is empty
    pub cuisine: Option<String>,
    /// Prompt text for the recipe generator
    pub prompt_text: String,
}

/// Weekly nutrition budget engine
#[derive(Debug, Clone, Copy, Default)]
pub struct NutritionBudgetEngine;

impl NutritionBudgetEngine {
    /// Weekly calorie, protein and fat budget
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidProfile` for unusable profile values
    pub fn weekly_budget(profile: &Profile, goal: &Goal) -> AppResult<WeeklyBudget> {
        compute_weekly_budget(profile, goal)
    }

    /// Weekly budget left after the given recipes
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidProfile` for unusable profile values
    pub fn remaining_budget(
        profile: &Profile,
        goal: &Goal,
        existing_recipes: &[RecipeNutrition],
    ) -> AppResult<WeeklyBudget> {
        let weekly = compute_weekly_budget(profile, goal)?;
        Ok(reduce_by_existing(weekly, existing_recipes))
    }

    /// Daily display breakdown
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidProfile` for unusable profile values
    pub fn daily_breakdown(profile: &Profile, goal: &Goal) -> AppResult<DailyBudget> {
        compute_daily_breakdown(profile, goal)
    }

    /// Plan the next recipe: remaining targets, cuisine and generator prompt
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidProfile` for unusable profile values
    #[instrument(
        skip_all,
        fields(recipe.slot = %request.slot, recipes = request.existing_recipes.len())
    )]
    pub fn plan_next_recipe<R>(request: &PlanRequest, rng: &mut R) -> AppResult<RecipePlan>
    where
        R: Rng + ?Sized,
    {
        let weekly_budget = compute_weekly_budget(&request.profile, &request.goal)?;
        let remaining_weekly_budget = reduce_by_existing(weekly_budget, &request.existing_recipes);
        let cuisine = select_cuisine(&request.cuisine_pool, rng);

        let diet = if request.goal.diet.trim().is_empty() {
            defaults::DIET
        } else {
            request.goal.diet.as_str()
        };

        let prompt_text = build_prompt(
            &remaining_weekly_budget,
            request.slot,
            cuisine,
            diet,
            &request.goal.lacto_ovo,
        );

        debug!(
            cuisine = cuisine.unwrap_or("any"),
            budget.calories = remaining_weekly_budget.calories,
            "Planned next recipe"
        );

        Ok(RecipePlan {
            weekly_budget,
            remaining_weekly_budget,
            slot: request.slot,
            cuisine: cuisine.map(str::to_owned),
            prompt_text,
        })
    }

    /// [`Self::plan_next_recipe`] with the thread-local random source
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidProfile` for unusable profile values
    pub fn plan_next_recipe_default(request: &PlanRequest) -> AppResult<RecipePlan> {
        Self::plan_next_recipe(request, &mut rand::thread_rng())
    }
}
