// ABOUTME: Recipe generator answering every prompt with the same recipe JSON
// ABOUTME: Default generator when no endpoint is configured; keeps the prompts it receives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecipeGenerator;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

/// Generator with a fixed response
pub struct StaticRecipeGenerator {
    response: Value,
    prompts: Mutex<Vec<String>>,
}

impl StaticRecipeGenerator {
    /// Answer every prompt with `response`
    #[must_use]
    pub fn new(response: Value) -> Self {
        Self {
            response,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Generator returning a balanced batch-cooking recipe
    #[must_use]
    pub fn sample() -> Self {
        Self::new(json!({
            "name": "Chickpea and Spinach Stew",
            "calories": 620,
            "protein": 38,
            "fat": 18,
            "ingredients": [
                {"name": "Dried chickpeas", "quantity": 400, "unit": "g"},
                {"name": "Chicken breast", "quantity": 600, "unit": "g"},
                {"name": "Spinach", "quantity": 300, "unit": "g"},
                {"name": "Crushed tomatoes", "quantity": 800, "unit": "g"},
                {"name": "Olive oil", "quantity": 2, "unit": "tbsp"}
            ],
            "preprocessing": ["Soak chickpeas overnight", "Dice chicken"],
            "steps": [
                "Brown the chicken in olive oil",
                "Add chickpeas and tomatoes and simmer for 40 minutes",
                "Stir in spinach and portion into containers"
            ]
        }))
    }

    /// Prompts received so far, oldest first
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecipeGenerator for StaticRecipeGenerator {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn generate_recipe(&self, prompt: &str) -> AppResult<Value> {
        self.prompts
            .lock()
            .map_err(|_| AppError::internal("Prompt log lock poisoned"))?
            .push(prompt.to_owned());
        Ok(self.response.clone())
    }
}
