// ABOUTME: Route handlers for reading, editing, and deleting stored recipes
// ABOUTME: Edit-in-place patches are validated by the meal-plan service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::authenticate;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::RecipePatch;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recipes/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(recipe_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let recipe = resources.meal_plans.get_recipe(&user, recipe_id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(recipe_id): Path<Uuid>,
        Json(patch): Json<RecipePatch>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let recipe = resources
            .meal_plans
            .update_recipe(&user, recipe_id, patch)
            .await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(recipe_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        resources.meal_plans.delete_recipe(&user, recipe_id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
