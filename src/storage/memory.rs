// ABOUTME: In-memory MealPlanStore implementation backed by DashMap
// ABOUTME: Used by tests and by the server when no external storage is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MealPlanStore;
use crate::errors::{AppError, AppResult, ErrorCode};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::{DashMap, DashSet};
use mealplan_core::models::{Goal, MealPlan, Profile, Recipe, User, Wallet};
use uuid::Uuid;

/// In-memory store
///
/// Each table is a separate `DashMap`, so operations on different users do
/// not contend. Wallet updates go through the entry API and are atomic per
/// user.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: DashMap<Uuid, User>,
    profiles: DashMap<Uuid, Profile>,
    goals: DashMap<Uuid, Goal>,
    meal_plans: DashMap<Uuid, MealPlan>,
    recipes: DashMap<Uuid, Recipe>,
    wallets: DashMap<Uuid, Wallet>,
    credited_sessions: DashSet<String>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealPlanStore for InMemoryStore {
    async fn create_user(&self, user: &User) -> AppResult<()> {
        if self.users.contains_key(&user.id) {
            return Err(AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("User {} already exists", user.id),
            ));
        }
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&user_id).map(|user| user.clone()))
    }

    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.profiles.get(&user_id).map(|profile| *profile))
    }

    async fn save_profile(&self, user_id: Uuid, profile: Profile) -> AppResult<()> {
        self.profiles.insert(user_id, profile);
        Ok(())
    }

    async fn get_goal(&self, user_id: Uuid) -> AppResult<Option<Goal>> {
        Ok(self.goals.get(&user_id).map(|goal| goal.clone()))
    }

    async fn save_goal(&self, user_id: Uuid, goal: &Goal) -> AppResult<()> {
        self.goals.insert(user_id, goal.clone());
        Ok(())
    }

    async fn create_meal_plan(&self, plan: &MealPlan) -> AppResult<()> {
        self.meal_plans.insert(plan.id, plan.clone());
        Ok(())
    }

    async fn get_meal_plan(&self, plan_id: Uuid) -> AppResult<Option<MealPlan>> {
        Ok(self.meal_plans.get(&plan_id).map(|plan| plan.clone()))
    }

    async fn create_recipe(&self, recipe: &Recipe) -> AppResult<()> {
        self.recipes.insert(recipe.id, recipe.clone());
        Ok(())
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> AppResult<Option<Recipe>> {
        Ok(self.recipes.get(&recipe_id).map(|recipe| recipe.clone()))
    }

    async fn list_recipes(&self, plan_id: Uuid) -> AppResult<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|entry| entry.meal_plan_id == plan_id)
            .map(|entry| entry.value().clone())
            .collect();
        recipes.sort_by_key(|recipe| recipe.created_at);
        Ok(recipes)
    }

    async fn update_recipe(&self, recipe: &Recipe) -> AppResult<()> {
        let mut stored = self
            .recipes
            .get_mut(&recipe.id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {}", recipe.id)))?;
        *stored = recipe.clone();
        Ok(())
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> AppResult<bool> {
        Ok(self.recipes.remove(&recipe_id).is_some())
    }

    async fn get_wallet(&self, user_id: Uuid) -> AppResult<Wallet> {
        Ok(self
            .wallets
            .get(&user_id)
            .map_or_else(|| Wallet::empty(user_id), |wallet| *wallet))
    }

    async fn credit_wallet(&self, user_id: Uuid, amount_cents: i64) -> AppResult<Wallet> {
        let mut wallet = self
            .wallets
            .entry(user_id)
            .or_insert_with(|| Wallet::empty(user_id));
        wallet.balance_cents = wallet
            .balance_cents
            .checked_add(amount_cents)
            .ok_or_else(|| AppError::storage("Wallet balance would overflow"))?;
        wallet.updated_at = Utc::now();
        Ok(*wallet)
    }

    async fn debit_wallet(&self, user_id: Uuid, amount_cents: i64) -> AppResult<Wallet> {
        let mut wallet = self
            .wallets
            .entry(user_id)
            .or_insert_with(|| Wallet::empty(user_id));
        if wallet.balance_cents < amount_cents {
            return Err(AppError::insufficient_balance(
                amount_cents,
                wallet.balance_cents,
            ));
        }
        wallet.balance_cents -= amount_cents;
        wallet.updated_at = Utc::now();
        Ok(*wallet)
    }

    async fn claim_payment_session(&self, session_id: &str) -> AppResult<bool> {
        Ok(self.credited_sessions.insert(session_id.to_owned()))
    }

    async fn release_payment_session(&self, session_id: &str) -> AppResult<()> {
        self.credited_sessions.remove(session_id);
        Ok(())
    }
}
