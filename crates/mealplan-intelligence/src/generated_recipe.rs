// ABOUTME: Validation of recipe JSON returned by the generation collaborator
// ABOUTME: Converts untrusted generator output into a Recipe tagged with its meal slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Generated Recipe Validation
//!
//! The generator is a black box. Its output is parsed into [`GeneratedRecipe`]
//! and checked before anything is stored: nutrition values must be finite and
//! non-negative, ingredient quantities likewise, and the name must be present.

use mealplan_core::errors::{AppError, AppResult};
use mealplan_core::models::{Ingredient, MealSlot, Recipe, RecipeStep};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ingredient line as produced by the generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIngredient {
    /// Ingredient name
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// Unit, empty for countable items
    #[serde(default)]
    pub unit: String,
}

/// Validated generator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    /// Recipe name
    pub name: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein grams per serving
    pub protein: f64,
    /// Fat grams per serving
    pub fat: f64,
    /// Servings per batch
    #[serde(default)]
    pub servings: Option<u8>,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<GeneratedIngredient>,
    /// Steps done ahead of cooking
    #[serde(default)]
    pub preprocessing: Vec<String>,
    /// Cooking steps
    #[serde(default)]
    pub steps: Vec<String>,
}

fn check_amount(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(
            AppError::invalid_format(format!("Generated recipe has invalid {field}: {value}"))
                .with_details(serde_json::json!({ "field": field })),
        )
    }
}

/// Remove a surrounding Markdown code fence, if any
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

impl GeneratedRecipe {
    /// Parse and validate a JSON value
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` if required fields are missing or
    /// any amount is negative or not finite
    pub fn from_json(value: serde_json::Value) -> AppResult<Self> {
        let recipe: Self = serde_json::from_value(value).map_err(|e| {
            AppError::invalid_format(format!("Generated recipe is malformed: {e}"))
        })?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Parse and validate raw generator text, tolerating a Markdown code fence
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` if the text is not valid recipe JSON
    pub fn from_text(text: &str) -> AppResult<Self> {
        let value: serde_json::Value = serde_json::from_str(strip_code_fence(text))
            .map_err(|e| AppError::invalid_format(format!("Generated recipe is not JSON: {e}")))?;
        Self::from_json(value)
    }

    fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_format("Generated recipe has no name")
                .with_details(serde_json::json!({ "field": "name" })));
        }
        check_amount("calories", self.calories)?;
        check_amount("protein", self.protein)?;
        check_amount("fat", self.fat)?;
        if self.servings == Some(0) {
            return Err(AppError::invalid_format("Generated recipe has zero servings")
                .with_details(serde_json::json!({ "field": "servings" })));
        }
        for ingredient in &self.ingredients {
            if ingredient.name.trim().is_empty() {
                return Err(AppError::invalid_format("Generated ingredient has no name")
                    .with_details(serde_json::json!({ "field": "ingredients.name" })));
            }
            check_amount("ingredients.quantity", ingredient.quantity)?;
        }
        Ok(())
    }

    /// Name carrying the slot label, prefixed when the generator left it out
    #[must_use]
    pub fn labelled_name(&self, slot: MealSlot) -> String {
        let name = self.name.trim();
        if slot == MealSlot::Other || name.contains(slot.label()) {
            name.to_owned()
        } else {
            format!("{} - {name}", slot.label())
        }
    }

    /// Build a stored recipe for a meal plan
    ///
    /// Servings default to the slot's day count for batched slots and to one
    /// otherwise.
    #[must_use]
    pub fn into_recipe(
        self,
        user_id: Uuid,
        meal_plan_id: Uuid,
        slot: MealSlot,
        cuisine: Option<String>,
    ) -> Recipe {
        let mut recipe = Recipe::new(user_id, meal_plan_id, self.labelled_name(slot), slot)
            .with_nutrition(self.calories, self.protein, self.fat);

        recipe.cuisine = cuisine;
        recipe.servings = self.servings.unwrap_or_else(|| slot.day_count().max(1));
        recipe.ingredients = self
            .ingredients
            .into_iter()
            .map(|ingredient| {
                Ingredient::new(ingredient.name.trim(), ingredient.quantity, ingredient.unit.trim())
            })
            .collect();
        recipe.preprocessing = RecipeStep::numbered(self.preprocessing);
        recipe.steps = RecipeStep::numbered(self.steps);
        recipe
    }
}
