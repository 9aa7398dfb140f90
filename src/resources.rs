// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Holds the store, collaborators, configuration, and the services built on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Every collaborator is created once and shared behind an `Arc`. Routers
//! receive `Arc<ServerResources>` as state.

use crate::auth::{IdentityProvider, InMemoryIdentityProvider};
use crate::config::ServerConfig;
use crate::generator::{RecipeGenerator, StaticRecipeGenerator};
use crate::payments::{PaymentGateway, SandboxPaymentGateway};
use crate::services::{MealPlanService, WalletService};
use crate::storage::{InMemoryStore, MealPlanStore};
use std::sync::Arc;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence
    pub store: Arc<dyn MealPlanStore>,
    /// Bearer token resolution
    pub identity: Arc<dyn IdentityProvider>,
    /// Hosted checkout provider
    pub payments: Arc<dyn PaymentGateway>,
    /// Recipe generation collaborator
    pub generator: Arc<dyn RecipeGenerator>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Meal-plan service
    pub meal_plans: MealPlanService,
    /// Wallet service
    pub wallet: WalletService,
}

impl ServerResources {
    /// Start a builder for `config`
    #[must_use]
    pub fn builder(config: ServerConfig) -> ServerResourcesBuilder {
        ServerResourcesBuilder::new(config)
    }
}

/// Builder for [`ServerResources`]
///
/// Collaborators left unset fall back to the in-memory implementations.
pub struct ServerResourcesBuilder {
    config: ServerConfig,
    store: Option<Arc<dyn MealPlanStore>>,
    identity: Option<Arc<dyn IdentityProvider>>,
    payments: Option<Arc<dyn PaymentGateway>>,
    generator: Option<Arc<dyn RecipeGenerator>>,
}

impl ServerResourcesBuilder {
    /// Create a builder with no collaborators set
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            store: None,
            identity: None,
            payments: None,
            generator: None,
        }
    }

    /// Use `store` for persistence
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn MealPlanStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use `identity` to resolve bearer tokens
    #[must_use]
    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Use `payments` for checkouts
    #[must_use]
    pub fn with_payments(mut self, payments: Arc<dyn PaymentGateway>) -> Self {
        self.payments = Some(payments);
        self
    }

    /// Use `generator` for recipe generation
    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn RecipeGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Build the resources and the services on top of them
    #[must_use]
    pub fn build(self) -> ServerResources {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryStore::new()));
        let identity = self
            .identity
            .unwrap_or_else(|| Arc::new(InMemoryIdentityProvider::new(store.clone())));
        let payments = self
            .payments
            .unwrap_or_else(|| Arc::new(SandboxPaymentGateway::new()));
        let generator = self
            .generator
            .unwrap_or_else(|| Arc::new(StaticRecipeGenerator::sample()));

        let meal_plans = MealPlanService::new(
            store.clone(),
            generator.clone(),
            self.config.planning.clone(),
        );
        let wallet = WalletService::new(
            store.clone(),
            payments.clone(),
            self.config.planning.min_top_up_cents,
        );

        ServerResources {
            store,
            identity,
            payments,
            generator,
            config: Arc::new(self.config),
            meal_plans,
            wallet,
        }
    }
}
