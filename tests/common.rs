// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging init, nutrition fixtures, and in-memory server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `mealplan_server`

use async_trait::async_trait;
use mealplan_core::models::{
    AuthenticatedUser, FitnessGoal, Gender, Goal, MealPlan, Profile, Recipe, User, Wallet,
};
use mealplan_server::{
    auth::{IdentityProvider, InMemoryIdentityProvider},
    config::ServerConfig,
    errors::{AppError, AppResult},
    generator::StaticRecipeGenerator,
    payments::SandboxPaymentGateway,
    resources::ServerResources,
    storage::{InMemoryStore, MealPlanStore},
};
use serde_json::Value;
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};
use uuid::Uuid;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ================================
// Nutrition fixtures
// ================================

/// Male, 83 kg, 173 cm, 22 years
pub const fn reference_profile() -> Profile {
    Profile::new(Gender::Male, 83.0, 173.0, 22)
}

/// Bulk at activity 1.55
pub const fn bulk_goal() -> Goal {
    Goal::new(FitnessGoal::Bulk, 1.55)
}

// ================================
// Server fixtures
// ================================

/// In-memory resources with handles on the concrete collaborators
pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub identity: Arc<InMemoryIdentityProvider>,
    pub payments: Arc<SandboxPaymentGateway>,
    pub generator: Arc<StaticRecipeGenerator>,
    pub resources: Arc<ServerResources>,
}

impl TestContext {
    /// Context using the sample generator and default configuration
    pub fn new() -> Self {
        Self::with_generator(StaticRecipeGenerator::sample())
    }

    /// Context answering every generation with `response`
    pub fn with_generator_response(response: Value) -> Self {
        Self::with_generator(StaticRecipeGenerator::new(response))
    }

    /// Context whose services go through a [`FaultyStore`] over `ctx.store`
    pub fn with_faulty_store() -> (Self, Arc<FaultyStore>) {
        let store = Arc::new(InMemoryStore::new());
        let faulty = Arc::new(FaultyStore::new(store.clone()));
        let ctx = Self::build(StaticRecipeGenerator::sample(), store, faulty.clone());
        (ctx, faulty)
    }

    fn with_generator(generator: StaticRecipeGenerator) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::build(generator, store.clone(), store)
    }

    fn build(
        generator: StaticRecipeGenerator,
        store: Arc<InMemoryStore>,
        service_store: Arc<dyn MealPlanStore>,
    ) -> Self {
        init_test_logging();
        let identity = Arc::new(InMemoryIdentityProvider::new(store.clone()));
        let payments = Arc::new(SandboxPaymentGateway::new());
        let generator = Arc::new(generator);

        let resources = Arc::new(
            ServerResources::builder(ServerConfig::default())
                .with_store(service_store)
                .with_identity(identity.clone())
                .with_payments(payments.clone())
                .with_generator(generator.clone())
                .build(),
        );

        Self {
            store,
            identity,
            payments,
            generator,
            resources,
        }
    }

    /// Register a user, returning it as the identity provider resolves it and its token
    pub async fn register(&self, email: &str) -> (AuthenticatedUser, String) {
        let (_, token) = self.identity.register_user(email).await.unwrap();
        let user = self.identity.current_user(&token).await.unwrap();
        (user, token)
    }

    /// Register a user with the reference profile, a bulk goal, and a funded wallet
    pub async fn onboarded_user(
        &self,
        email: &str,
        balance_cents: i64,
    ) -> (AuthenticatedUser, String) {
        let (user, token) = self.register(email).await;
        self.store.save_profile(user.id, reference_profile()).await.unwrap();
        self.store.save_goal(user.id, &bulk_goal()).await.unwrap();
        if balance_cents > 0 {
            self.store.credit_wallet(user.id, balance_cents).await.unwrap();
        }
        let user = self.identity.current_user(&token).await.unwrap();
        (user, token)
    }
}

// ================================
// Failure injection
// ================================

/// Store delegating to an [`InMemoryStore`] with switchable failures
pub struct FaultyStore {
    inner: Arc<InMemoryStore>,
    /// `credit_wallet` fails with a storage error
    pub fail_credit: AtomicBool,
    /// `debit_wallet` fails as if another request spent the balance first
    pub fail_debit: AtomicBool,
    /// `delete_recipe` fails with a storage error
    pub fail_delete: AtomicBool,
}

impl FaultyStore {
    pub fn new(inner: Arc<InMemoryStore>) -> Self {
        Self {
            inner,
            fail_credit: AtomicBool::new(false),
            fail_debit: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }

    pub fn set(flag: &AtomicBool, enabled: bool) {
        flag.store(enabled, Ordering::SeqCst);
    }

    fn failing(flag: &AtomicBool) -> bool {
        flag.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MealPlanStore for FaultyStore {
    async fn create_user(&self, user: &User) -> AppResult<()> {
        self.inner.create_user(user).await
    }

    async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        self.inner.get_user(user_id).await
    }

    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        self.inner.get_profile(user_id).await
    }

    async fn save_profile(&self, user_id: Uuid, profile: Profile) -> AppResult<()> {
        self.inner.save_profile(user_id, profile).await
    }

    async fn get_goal(&self, user_id: Uuid) -> AppResult<Option<Goal>> {
        self.inner.get_goal(user_id).await
    }

    async fn save_goal(&self, user_id: Uuid, goal: &Goal) -> AppResult<()> {
        self.inner.save_goal(user_id, goal).await
    }

    async fn create_meal_plan(&self, plan: &MealPlan) -> AppResult<()> {
        self.inner.create_meal_plan(plan).await
    }

    async fn get_meal_plan(&self, plan_id: Uuid) -> AppResult<Option<MealPlan>> {
        self.inner.get_meal_plan(plan_id).await
    }

    async fn create_recipe(&self, recipe: &Recipe) -> AppResult<()> {
        self.inner.create_recipe(recipe).await
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> AppResult<Option<Recipe>> {
        self.inner.get_recipe(recipe_id).await
    }

    async fn list_recipes(&self, plan_id: Uuid) -> AppResult<Vec<Recipe>> {
        self.inner.list_recipes(plan_id).await
    }

    async fn update_recipe(&self, recipe: &Recipe) -> AppResult<()> {
        self.inner.update_recipe(recipe).await
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> AppResult<bool> {
        if Self::failing(&self.fail_delete) {
            return Err(AppError::storage("recipe table unavailable"));
        }
        self.inner.delete_recipe(recipe_id).await
    }

    async fn get_wallet(&self, user_id: Uuid) -> AppResult<Wallet> {
        self.inner.get_wallet(user_id).await
    }

    async fn credit_wallet(&self, user_id: Uuid, amount_cents: i64) -> AppResult<Wallet> {
        if Self::failing(&self.fail_credit) {
            return Err(AppError::storage("wallet table unavailable"));
        }
        self.inner.credit_wallet(user_id, amount_cents).await
    }

    async fn debit_wallet(&self, user_id: Uuid, amount_cents: i64) -> AppResult<Wallet> {
        if Self::failing(&self.fail_debit) {
            return Err(AppError::insufficient_balance(amount_cents, 0));
        }
        self.inner.debit_wallet(user_id, amount_cents).await
    }

    async fn claim_payment_session(&self, session_id: &str) -> AppResult<bool> {
        self.inner.claim_payment_session(session_id).await
    }

    async fn release_payment_session(&self, session_id: &str) -> AppResult<()> {
        self.inner.release_payment_session(session_id).await
    }
}
