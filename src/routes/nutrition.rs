// ABOUTME: Stateless nutrition budget endpoints over explicit profile and goal payloads
// ABOUTME: Weekly budget, remaining budget after existing recipes, and daily display breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition routes
//!
//! These endpoints take the whole computation input in the request body and
//! need no authentication or stored state.

use crate::errors::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use mealplan_core::models::{Goal, Profile, RecipeNutrition};
use mealplan_intelligence::NutritionBudgetEngine;
use serde::Deserialize;

/// Profile and goal payload
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetRequest {
    /// Biometric profile
    pub profile: Profile,
    /// Goal and activity level
    pub goal: Goal,
}

/// Payload for the remaining-budget computation
#[derive(Debug, Clone, Deserialize)]
pub struct RemainingBudgetRequest {
    /// Biometric profile
    pub profile: Profile,
    /// Goal and activity level
    pub goal: Goal,
    /// Recipes already in the plan
    #[serde(default, alias = "existingRecipes")]
    pub existing_recipes: Vec<RecipeNutrition>,
}

/// Nutrition routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route(
                "/api/nutrition/weekly-budget",
                post(Self::handle_weekly_budget),
            )
            .route(
                "/api/nutrition/remaining-budget",
                post(Self::handle_remaining_budget),
            )
            .route(
                "/api/nutrition/daily-breakdown",
                post(Self::handle_daily_breakdown),
            )
    }

    async fn handle_weekly_budget(Json(body): Json<BudgetRequest>) -> Result<Response, AppError> {
        let budget = NutritionBudgetEngine::weekly_budget(&body.profile, &body.goal)?;
        Ok((StatusCode::OK, Json(budget)).into_response())
    }

    async fn handle_remaining_budget(
        Json(body): Json<RemainingBudgetRequest>,
    ) -> Result<Response, AppError> {
        let budget = NutritionBudgetEngine::remaining_budget(
            &body.profile,
            &body.goal,
            &body.existing_recipes,
        )?;
        Ok((StatusCode::OK, Json(budget)).into_response())
    }

    async fn handle_daily_breakdown(Json(body): Json<BudgetRequest>) -> Result<Response, AppError> {
        let breakdown = NutritionBudgetEngine::daily_breakdown(&body.profile, &body.goal)?;
        Ok((StatusCode::OK, Json(breakdown)).into_response())
    }
}
