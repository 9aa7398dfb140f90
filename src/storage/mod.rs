// ABOUTME: Storage collaborator abstraction for users, goals, meal plans, recipes, and wallets
// ABOUTME: Services depend on the MealPlanStore trait; InMemoryStore backs tests and development
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Storage abstraction
//!
//! Schema and migrations are out of scope for this server; any backend that
//! implements [`MealPlanStore`] can be injected into [`crate::resources::ServerResources`].

/// `DashMap` backed store
pub mod memory;

pub use memory::InMemoryStore;

use crate::errors::AppResult;
use async_trait::async_trait;
use mealplan_core::models::{Goal, MealPlan, Profile, Recipe, User, Wallet};
use tracing::error;
use uuid::Uuid;

/// Core storage abstraction
///
/// Recipes are stored whole: ingredients, preprocessing and cooking steps
/// are written and read together with the recipe record.
#[async_trait]
pub trait MealPlanStore: Send + Sync {
    // ================================
    // Users
    // ================================

    /// Create a user account
    async fn create_user(&self, user: &User) -> AppResult<()>;

    /// Get user by ID
    async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>>;

    /// Get the saved biometric profile
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>>;

    /// Replace the saved biometric profile
    async fn save_profile(&self, user_id: Uuid, profile: Profile) -> AppResult<()>;

    /// Get the saved goal
    async fn get_goal(&self, user_id: Uuid) -> AppResult<Option<Goal>>;

    /// Replace the saved goal
    async fn save_goal(&self, user_id: Uuid, goal: &Goal) -> AppResult<()>;

    // ================================
    // Meal plans and recipes
    // ================================

    /// Create a meal plan
    async fn create_meal_plan(&self, plan: &MealPlan) -> AppResult<()>;

    /// Get a meal plan by ID
    async fn get_meal_plan(&self, plan_id: Uuid) -> AppResult<Option<MealPlan>>;

    /// Store a new recipe with its ingredients and steps
    async fn create_recipe(&self, recipe: &Recipe) -> AppResult<()>;

    /// Get a recipe by ID
    async fn get_recipe(&self, recipe_id: Uuid) -> AppResult<Option<Recipe>>;

    /// Recipes of a meal plan, oldest first
    async fn list_recipes(&self, plan_id: Uuid) -> AppResult<Vec<Recipe>>;

    /// Replace an existing recipe
    ///
    /// Fails with `ResourceNotFound` if the recipe does not exist
    async fn update_recipe(&self, recipe: &Recipe) -> AppResult<()>;

    /// Delete a recipe, returning whether it existed
    async fn delete_recipe(&self, recipe_id: Uuid) -> AppResult<bool>;

    // ================================
    // Wallets
    // ================================

    /// Current wallet, empty if the user never topped up
    async fn get_wallet(&self, user_id: Uuid) -> AppResult<Wallet>;

    /// Add to the balance
    async fn credit_wallet(&self, user_id: Uuid, amount_cents: i64) -> AppResult<Wallet>;

    /// Subtract from the balance
    ///
    /// Fails with `InsufficientBalance` and leaves the wallet unchanged if
    /// the balance would go negative
    async fn debit_wallet(&self, user_id: Uuid, amount_cents: i64) -> AppResult<Wallet>;

    // ================================
    // Payment sessions
    // ================================

    /// Record a payment session as credited
    ///
    /// Returns `false` if the session had already been recorded
    async fn claim_payment_session(&self, session_id: &str) -> AppResult<bool>;

    /// Forget a claimed payment session so it can be credited again
    async fn release_payment_session(&self, session_id: &str) -> AppResult<()>;

    /// Credit `amount_cents` for a paid session exactly once
    ///
    /// Returns `None` when the session was already credited. If the credit
    /// fails the claim is released, so a retry can still credit the session.
    /// Transactional backends should override this with a single transaction.
    async fn credit_payment_once(
        &self,
        session_id: &str,
        user_id: Uuid,
        amount_cents: i64,
    ) -> AppResult<Option<Wallet>> {
        if !self.claim_payment_session(session_id).await? {
            return Ok(None);
        }

        match self.credit_wallet(user_id, amount_cents).await {
            Ok(wallet) => Ok(Some(wallet)),
            Err(e) => {
                if let Err(release_error) = self.release_payment_session(session_id).await {
                    error!(
                        session_id,
                        error = %release_error,
                        "Failed to release payment session after credit failure"
                    );
                }
                Err(e)
            }
        }
    }
}
