// ABOUTME: Meal-plan domain service orchestrating engine, generator, storage, and wallet charges
// ABOUTME: Recipe generation, budget queries, recipe editing, and shopping/prep aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PlanningConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::generator::RecipeGenerator;
use crate::storage::MealPlanStore;
use chrono::{NaiveDate, Utc};
use mealplan_core::models::{
    AuthenticatedUser, DailyBudget, Goal, Ingredient, MealPlan, MealSlot, Profile, Recipe,
    RecipeNutrition, RecipeStep, WeeklyBudget,
};
use mealplan_intelligence::validation::{validate_goal, validate_profile};
use mealplan_intelligence::{
    prep_list, reduce_by_existing, shopping_list, GeneratedIngredient, GeneratedRecipe,
    NutritionBudgetEngine, PlanRequest, PrepTask, ShoppingItem,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Outcome of generating the next recipe of a plan
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRecipeResult {
    /// The stored recipe
    pub recipe: Recipe,
    /// Weekly budget left once the new recipe is counted
    pub remaining_weekly_budget: WeeklyBudget,
    /// Wallet balance after the charge
    pub balance_cents: i64,
}

/// Edit-in-place changes to a recipe; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipePatch {
    /// New name
    pub name: Option<String>,
    /// New slot
    pub slot: Option<MealSlot>,
    /// Calories per serving
    pub calories: Option<f64>,
    /// Protein grams per serving
    pub protein: Option<f64>,
    /// Fat grams per serving
    pub fat: Option<f64>,
    /// Servings per batch
    pub servings: Option<u8>,
    /// Replacement ingredient list
    pub ingredients: Option<Vec<GeneratedIngredient>>,
    /// Replacement preprocessing steps
    pub preprocessing: Option<Vec<String>>,
    /// Replacement cooking steps
    pub steps: Option<Vec<String>>,
}

fn check_amount(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a non-negative number"),
        )
        .with_details(serde_json::json!({ "field": field })))
    }
}

impl RecipePatch {
    fn validate(&self) -> AppResult<()> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AppError::invalid_input("Recipe name cannot be empty"));
        }
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("fat", self.fat),
        ] {
            if let Some(value) = value {
                check_amount(field, value)?;
            }
        }
        if self.servings == Some(0) {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                "servings must be at least 1",
            ));
        }
        for ingredient in self.ingredients.iter().flatten() {
            if ingredient.name.trim().is_empty() {
                return Err(AppError::invalid_input("Ingredient name cannot be empty"));
            }
            check_amount("ingredients.quantity", ingredient.quantity)?;
        }
        Ok(())
    }

    fn apply(self, recipe: &mut Recipe) {
        if let Some(name) = self.name {
            recipe.name = name.trim().to_owned();
        }
        if let Some(slot) = self.slot {
            recipe.slot = slot;
        }
        if let Some(calories) = self.calories {
            recipe.calories = calories;
        }
        if let Some(protein) = self.protein {
            recipe.protein = protein;
        }
        if let Some(fat) = self.fat {
            recipe.fat = fat;
        }
        if let Some(servings) = self.servings {
            recipe.servings = servings;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients
                .into_iter()
                .map(|i| Ingredient::new(i.name.trim(), i.quantity, i.unit.trim()))
                .collect();
        }
        if let Some(preprocessing) = self.preprocessing {
            recipe.preprocessing = RecipeStep::numbered(preprocessing);
        }
        if let Some(steps) = self.steps {
            recipe.steps = RecipeStep::numbered(steps);
        }
        recipe.updated_at = Utc::now();
    }
}

/// Meal-plan service
///
/// Collaborators are injected at construction; the service holds no state of
/// its own.
#[derive(Clone)]
pub struct MealPlanService {
    store: Arc<dyn MealPlanStore>,
    generator: Arc<dyn RecipeGenerator>,
    planning: PlanningConfig,
}

impl MealPlanService {
    /// Create a service
    #[must_use]
    pub fn new(
        store: Arc<dyn MealPlanStore>,
        generator: Arc<dyn RecipeGenerator>,
        planning: PlanningConfig,
    ) -> Self {
        Self {
            store,
            generator,
            planning,
        }
    }

    // ================================
    // Profile and goal
    // ================================

    /// Validate and save the caller's biometric profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` for unusable values, or storage errors
    pub async fn save_profile(
        &self,
        user: &AuthenticatedUser,
        profile: Profile,
    ) -> AppResult<Profile> {
        validate_profile(&profile)?;
        self.store.save_profile(user.id, profile).await?;
        info!(user.id = %user.id, "Saved profile");
        Ok(profile)
    }

    /// Validate and save the caller's goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` for a non-positive activity level, or storage errors
    pub async fn save_goal(&self, user: &AuthenticatedUser, goal: Goal) -> AppResult<Goal> {
        validate_goal(&goal)?;
        self.store.save_goal(user.id, &goal).await?;
        info!(user.id = %user.id, goal = %goal.goal, "Saved goal");
        Ok(goal)
    }

    async fn nutrition_inputs(&self, user: &AuthenticatedUser) -> AppResult<(Profile, Goal)> {
        let profile = match user.profile {
            Some(profile) => profile,
            None => self.store.get_profile(user.id).await?.ok_or_else(|| {
                AppError::invalid_profile("No profile saved; set weight, height and age first")
            })?,
        };
        let goal = self.store.get_goal(user.id).await?.ok_or_else(|| {
            AppError::new(ErrorCode::MissingRequiredField, "No goal saved")
                .with_details(serde_json::json!({ "field": "goal" }))
        })?;
        Ok((profile, goal))
    }

    // ================================
    // Meal plans
    // ================================

    /// Create a meal plan owned by the caller
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name, or storage errors
    pub async fn create_meal_plan(
        &self,
        user: &AuthenticatedUser,
        name: &str,
        week_start: Option<NaiveDate>,
    ) -> AppResult<MealPlan> {
        if name.trim().is_empty() {
            return Err(AppError::invalid_input("Meal plan name cannot be empty"));
        }
        let plan = MealPlan::new(user.id, name.trim(), week_start);
        self.store.create_meal_plan(&plan).await?;
        info!(user.id = %user.id, meal_plan.id = %plan.id, "Created meal plan");
        Ok(plan)
    }

    async fn owned_plan(&self, user: &AuthenticatedUser, plan_id: Uuid) -> AppResult<MealPlan> {
        let plan = self
            .store
            .get_meal_plan(plan_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Meal plan {plan_id}")))?;
        if plan.user_id != user.id {
            return Err(AppError::permission_denied("Meal plan belongs to another user")
                .with_user_id(user.id)
                .with_resource_id(plan_id.to_string()));
        }
        Ok(plan)
    }

    async fn owned_recipe(&self, user: &AuthenticatedUser, recipe_id: Uuid) -> AppResult<Recipe> {
        let recipe = self
            .store
            .get_recipe(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;
        if recipe.user_id != user.id {
            return Err(AppError::permission_denied("Recipe belongs to another user")
                .with_user_id(user.id)
                .with_resource_id(recipe_id.to_string()));
        }
        Ok(recipe)
    }

    // ================================
    // Budgets
    // ================================

    /// Weekly budget left in a meal plan
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` or `MissingRequiredField` when the caller has
    /// not completed onboarding, and ownership errors for foreign plans
    pub async fn remaining_budget(
        &self,
        user: &AuthenticatedUser,
        plan_id: Uuid,
    ) -> AppResult<WeeklyBudget> {
        self.owned_plan(user, plan_id).await?;
        let (profile, goal) = self.nutrition_inputs(user).await?;
        let existing = self.existing_nutrition(plan_id).await?;
        NutritionBudgetEngine::remaining_budget(&profile, &goal, &existing)
    }

    /// Daily display breakdown for the caller
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` or `MissingRequiredField` when the caller has
    /// not completed onboarding
    pub async fn daily_breakdown(&self, user: &AuthenticatedUser) -> AppResult<DailyBudget> {
        let (profile, goal) = self.nutrition_inputs(user).await?;
        NutritionBudgetEngine::daily_breakdown(&profile, &goal)
    }

    async fn existing_nutrition(&self, plan_id: Uuid) -> AppResult<Vec<RecipeNutrition>> {
        Ok(self
            .store
            .list_recipes(plan_id)
            .await?
            .iter()
            .map(Recipe::nutrition)
            .collect())
    }

    // ================================
    // Generation
    // ================================

    /// Generate, store and charge for the next recipe of a plan
    ///
    /// The wallet is checked before the generator is called and debited only
    /// after the recipe is stored. If the debit fails the recipe is removed
    /// again.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientBalance` when the wallet cannot cover a
    /// generation, `InvalidFormat` when the generator output is unusable,
    /// external service errors from the generator, and ownership errors
    #[instrument(
        skip(self, user),
        fields(user.id = %user.id, meal_plan.id = %plan_id, recipe.slot = %slot)
    )]
    pub async fn generate_next_recipe(
        &self,
        user: &AuthenticatedUser,
        plan_id: Uuid,
        slot: MealSlot,
    ) -> AppResult<GeneratedRecipeResult> {
        let plan = self.owned_plan(user, plan_id).await?;
        let (profile, goal) = self.nutrition_inputs(user).await?;

        let cost = self.planning.recipe_generation_cost_cents;
        let wallet = self.store.get_wallet(user.id).await?;
        if wallet.balance_cents < cost {
            return Err(
                AppError::insufficient_balance(cost, wallet.balance_cents).with_user_id(user.id),
            );
        }

        let request = PlanRequest {
            profile,
            goal,
            existing_recipes: self.existing_nutrition(plan.id).await?,
            cuisine_pool: self.planning.cuisine_pool.clone(),
            slot,
        };
        let recipe_plan = NutritionBudgetEngine::plan_next_recipe_default(&request)?;

        let output = self.generator.generate_recipe(&recipe_plan.prompt_text).await?;
        let generated = match output {
            Value::String(text) => GeneratedRecipe::from_text(&text)?,
            value => GeneratedRecipe::from_json(value)?,
        };
        let recipe = generated.into_recipe(user.id, plan.id, slot, recipe_plan.cuisine);
        self.store.create_recipe(&recipe).await?;

        let wallet = match self.store.debit_wallet(user.id, cost).await {
            Ok(wallet) => wallet,
            Err(e) => {
                warn!(recipe.id = %recipe.id, "Charge failed after generation, discarding recipe");
                if let Err(delete_error) = self.store.delete_recipe(recipe.id).await {
                    error!(
                        recipe.id = %recipe.id,
                        error = %delete_error,
                        "Failed to discard uncharged recipe"
                    );
                }
                return Err(e);
            }
        };

        let remaining_weekly_budget =
            reduce_by_existing(recipe_plan.remaining_weekly_budget, &[recipe.nutrition()]);

        info!(
            recipe.id = %recipe.id,
            generator = self.generator.name(),
            budget.calories = remaining_weekly_budget.calories,
            wallet.balance_cents = wallet.balance_cents,
            "Generated recipe"
        );

        Ok(GeneratedRecipeResult {
            recipe,
            remaining_weekly_budget,
            balance_cents: wallet.balance_cents,
        })
    }

    // ================================
    // Recipes
    // ================================

    /// Recipes of one of the caller's plans
    ///
    /// # Errors
    ///
    /// Returns ownership or storage errors
    pub async fn list_recipes(
        &self,
        user: &AuthenticatedUser,
        plan_id: Uuid,
    ) -> AppResult<Vec<Recipe>> {
        self.owned_plan(user, plan_id).await?;
        self.store.list_recipes(plan_id).await
    }

    /// One of the caller's recipes
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` or `PermissionDenied`
    pub async fn get_recipe(&self, user: &AuthenticatedUser, recipe_id: Uuid) -> AppResult<Recipe> {
        self.owned_recipe(user, recipe_id).await
    }

    /// Apply an edit-in-place patch to one of the caller's recipes
    ///
    /// # Errors
    ///
    /// Returns validation errors for the patch, `ResourceNotFound` or
    /// `PermissionDenied`
    pub async fn update_recipe(
        &self,
        user: &AuthenticatedUser,
        recipe_id: Uuid,
        patch: RecipePatch,
    ) -> AppResult<Recipe> {
        patch.validate()?;
        let mut recipe = self.owned_recipe(user, recipe_id).await?;
        patch.apply(&mut recipe);
        self.store.update_recipe(&recipe).await?;
        info!(user.id = %user.id, recipe.id = %recipe_id, "Updated recipe");
        Ok(recipe)
    }

    /// Delete one of the caller's recipes
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` or `PermissionDenied`
    pub async fn delete_recipe(&self, user: &AuthenticatedUser, recipe_id: Uuid) -> AppResult<()> {
        self.owned_recipe(user, recipe_id).await?;
        if !self.store.delete_recipe(recipe_id).await? {
            return Err(AppError::not_found(format!("Recipe {recipe_id}")));
        }
        info!(user.id = %user.id, recipe.id = %recipe_id, "Deleted recipe");
        Ok(())
    }

    /// Shopping list of one of the caller's plans
    ///
    /// # Errors
    ///
    /// Returns ownership or storage errors
    pub async fn shopping_list(
        &self,
        user: &AuthenticatedUser,
        plan_id: Uuid,
    ) -> AppResult<Vec<ShoppingItem>> {
        let recipes = self.list_recipes(user, plan_id).await?;
        Ok(shopping_list(&recipes))
    }

    /// Prep list of one of the caller's plans
    ///
    /// # Errors
    ///
    /// Returns ownership or storage errors
    pub async fn prep_list(
        &self,
        user: &AuthenticatedUser,
        plan_id: Uuid,
    ) -> AppResult<Vec<PrepTask>> {
        let recipes = self.list_recipes(user, plan_id).await?;
        Ok(prep_list(&recipes))
    }
}
