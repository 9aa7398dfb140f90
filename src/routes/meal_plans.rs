// ABOUTME: Route handlers for meal plans and recipe generation
// ABOUTME: Plan creation, next-recipe generation, remaining budget, shopping and prep lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan routes
//!
//! All endpoints require a bearer token. Plans of other users answer 403.

use super::authenticate;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use mealplan_core::models::MealSlot;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Body of `POST /api/meal-plans`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMealPlanRequest {
    /// Display name
    pub name: String,
    /// Monday of the planned week
    #[serde(default, alias = "weekStart")]
    pub week_start: Option<NaiveDate>,
}

/// Body of `POST /api/meal-plans/:id/recipes`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRecipeRequest {
    /// Slot the new recipe fills
    pub slot: MealSlot,
}

/// Meal plan routes implementation
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal plan routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/meal-plans", post(Self::handle_create))
            .route(
                "/api/meal-plans/:id/recipes",
                get(Self::handle_list_recipes).post(Self::handle_generate_recipe),
            )
            .route(
                "/api/meal-plans/:id/remaining-budget",
                get(Self::handle_remaining_budget),
            )
            .route(
                "/api/meal-plans/:id/shopping-list",
                get(Self::handle_shopping_list),
            )
            .route("/api/meal-plans/:id/prep-list", get(Self::handle_prep_list))
            .with_state(resources)
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<CreateMealPlanRequest>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let plan = resources
            .meal_plans
            .create_meal_plan(&user, &body.name, body.week_start)
            .await?;
        Ok((StatusCode::CREATED, Json(plan)).into_response())
    }

    async fn handle_list_recipes(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let recipes = resources.meal_plans.list_recipes(&user, plan_id).await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    async fn handle_generate_recipe(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<Uuid>,
        Json(body): Json<GenerateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let result = resources
            .meal_plans
            .generate_next_recipe(&user, plan_id, body.slot)
            .await?;
        Ok((StatusCode::CREATED, Json(result)).into_response())
    }

    async fn handle_remaining_budget(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let budget = resources.meal_plans.remaining_budget(&user, plan_id).await?;
        Ok((StatusCode::OK, Json(budget)).into_response())
    }

    async fn handle_shopping_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let items = resources.meal_plans.shopping_list(&user, plan_id).await?;
        Ok((StatusCode::OK, Json(items)).into_response())
    }

    async fn handle_prep_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(plan_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let tasks = resources.meal_plans.prep_list(&user, plan_id).await?;
        Ok((StatusCode::OK, Json(tasks)).into_response())
    }
}
