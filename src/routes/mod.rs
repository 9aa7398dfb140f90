// ABOUTME: Route module organization for the meal-plan HTTP API
// ABOUTME: Groups routes by domain and provides bearer authentication shared by handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the meal-plan server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Meal plan routes: generation, budgets, shopping and prep lists
pub mod meal_plans;
/// Stateless nutrition budget computations
pub mod nutrition;
/// Profile and goal routes for the authenticated user
pub mod profile;
/// Recipe read, edit and delete routes
pub mod recipes;
/// Wallet balance and checkout routes
pub mod wallet;

pub use health::HealthRoutes;
pub use meal_plans::MealPlanRoutes;
pub use nutrition::NutritionRoutes;
pub use profile::ProfileRoutes;
pub use recipes::RecipeRoutes;
pub use wallet::WalletRoutes;

use crate::auth::extract_bearer_token;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use axum::http::HeaderMap;
use axum::Router;
use mealplan_core::models::AuthenticatedUser;
use std::sync::Arc;
use tracing::Span;

/// Every API route, without middleware layers
#[must_use]
pub fn api_router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(NutritionRoutes::routes())
        .merge(ProfileRoutes::routes(resources.clone()))
        .merge(MealPlanRoutes::routes(resources.clone()))
        .merge(RecipeRoutes::routes(resources.clone()))
        .merge(WalletRoutes::routes(resources.clone()))
}

/// Resolve the caller from the `Authorization: Bearer` header
///
/// # Errors
///
/// Returns `AuthRequired` when the header is missing and `AuthInvalid` when
/// the token cannot be resolved
pub(crate) async fn authenticate(
    headers: &HeaderMap,
    resources: &ServerResources,
) -> AppResult<AuthenticatedUser> {
    let header = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(AppError::auth_required)?;
    let token = extract_bearer_token(header)?;

    match resources.identity.current_user(token).await {
        Ok(user) => {
            Span::current().record("user_id", user.id.to_string());
            AppLogger::log_auth_event(Some(user.id), "bearer_token", true);
            Ok(user)
        }
        Err(e) => {
            AppLogger::log_auth_event(None, "bearer_token", false);
            Err(e)
        }
    }
}
