// ABOUTME: Server binary for the meal-plan HTTP API
// ABOUTME: Loads configuration, initializes logging, wires collaborators, and serves requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal-Plan Server Binary
//!
//! Starts the HTTP API with in-memory storage, the sandbox payment gateway,
//! and either the configured HTTP recipe generator or the static one.

use anyhow::Result;
use clap::Parser;
use mealplan_server::{
    auth::InMemoryIdentityProvider,
    config::ServerConfig,
    generator::{HttpRecipeGenerator, RecipeGenerator, StaticRecipeGenerator},
    logging,
    resources::ServerResources,
    server::MealPlanServer,
    storage::{InMemoryStore, MealPlanStore},
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "mealplan-server")]
#[command(about = "Meal-plan server - weekly nutrition budgets and recipe generation")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Email of a development user registered at startup (ignored in production)
    #[arg(long)]
    dev_user: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let generator: Arc<dyn RecipeGenerator> =
        match HttpRecipeGenerator::from_config(&config.recipe_generator)? {
            Some(generator) => Arc::new(generator),
            None => {
                warn!("RECIPE_GENERATOR_URL not set, using the static recipe generator");
                Arc::new(StaticRecipeGenerator::sample())
            }
        };
    info!(generator = generator.name(), "Recipe generator ready");

    let store: Arc<dyn MealPlanStore> = Arc::new(InMemoryStore::new());
    let identity = Arc::new(InMemoryIdentityProvider::new(store.clone()));

    if let Some(email) = args.dev_user {
        if config.environment.is_production() {
            warn!("Ignoring --dev-user in production");
        } else {
            let (user, token) = identity.register_user(&email).await?;
            info!(user.id = %user.id, "Development user {email} registered, bearer token: {token}");
        }
    }

    let port = config.http_port;
    let resources = Arc::new(
        ServerResources::builder(config)
            .with_store(store)
            .with_identity(identity)
            .with_generator(generator)
            .build(),
    );

    display_available_endpoints(port);

    if let Err(e) = MealPlanServer::new(resources).run(port).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    info!("=== Available API Endpoints (port {port}) ===");
    info!("   Health:            GET  /health, /ready");
    info!("   Weekly Budget:     POST /api/nutrition/weekly-budget");
    info!("   Remaining Budget:  POST /api/nutrition/remaining-budget");
    info!("   Daily Breakdown:   POST /api/nutrition/daily-breakdown");
    info!("   Profile:           PUT  /api/me/profile, /api/me/goal");
    info!("   My Breakdown:      GET  /api/me/daily-breakdown");
    info!("   Meal Plans:        POST /api/meal-plans");
    info!("   Plan Recipes:      GET|POST /api/meal-plans/{{id}}/recipes");
    info!("   Plan Budget:       GET  /api/meal-plans/{{id}}/remaining-budget");
    info!("   Shopping List:     GET  /api/meal-plans/{{id}}/shopping-list");
    info!("   Prep List:         GET  /api/meal-plans/{{id}}/prep-list");
    info!("   Recipes:           GET|PATCH|DELETE /api/recipes/{{id}}");
    info!("   Wallet:            GET  /api/wallet, POST /api/wallet/{{checkout,confirm}}");
}
