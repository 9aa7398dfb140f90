// ABOUTME: Routes for the authenticated user's profile, goal, and daily breakdown
// ABOUTME: Onboarding writes and the daily display computed from saved values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::authenticate;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use mealplan_core::models::{Goal, Profile};
use std::sync::Arc;

/// Profile routes implementation
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/me/profile", put(Self::handle_save_profile))
            .route("/api/me/goal", put(Self::handle_save_goal))
            .route("/api/me/daily-breakdown", get(Self::handle_daily_breakdown))
            .with_state(resources)
    }

    async fn handle_save_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(profile): Json<Profile>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let profile = resources.meal_plans.save_profile(&user, profile).await?;
        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    async fn handle_save_goal(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(goal): Json<Goal>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let goal = resources.meal_plans.save_goal(&user, goal).await?;
        Ok((StatusCode::OK, Json(goal)).into_response())
    }

    async fn handle_daily_breakdown(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let breakdown = resources.meal_plans.daily_breakdown(&user).await?;
        Ok((StatusCode::OK, Json(breakdown)).into_response())
    }
}
