// ABOUTME: Recipe records, meal slots, and the nutrition view used for budget accounting
// ABOUTME: MealSlot day-count table, RecipeNutrition, Recipe, Ingredient, and RecipeStep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::meal_slots;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Position of a recipe in the weekly plan
///
/// Lunches and dinners are cooked in batches: the first lunch batch covers
/// three days and the second four, dinners the other way around. Breakfasts,
/// snacks and anything else are not amortised against the weekly budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast (tracked by the daily breakdown only)
    Breakfast,
    /// First lunch batch
    #[serde(rename = "lunch_1", alias = "Lunch 1")]
    Lunch1,
    /// Second lunch batch
    #[serde(rename = "lunch_2", alias = "Lunch 2")]
    Lunch2,
    /// First dinner batch
    #[serde(rename = "dinner_1", alias = "Dinner 1")]
    Dinner1,
    /// Second dinner batch
    #[serde(rename = "dinner_2", alias = "Dinner 2")]
    Dinner2,
    /// Snack
    Snack,
    /// Unclassified
    #[default]
    Other,
}

impl MealSlot {
    /// Slots whose recipes count against the weekly budget
    pub const BATCHED: [Self; 4] = [Self::Lunch1, Self::Lunch2, Self::Dinner1, Self::Dinner2];

    /// Days per week a recipe in this slot is eaten
    #[must_use]
    pub const fn day_count(&self) -> u8 {
        match self {
            Self::Lunch1 => meal_slots::LUNCH_1_DAYS,
            Self::Lunch2 => meal_slots::LUNCH_2_DAYS,
            Self::Dinner1 => meal_slots::DINNER_1_DAYS,
            Self::Dinner2 => meal_slots::DINNER_2_DAYS,
            Self::Breakfast | Self::Snack | Self::Other => 0,
        }
    }

    /// Label embedded in recipe names
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch1 => "Lunch 1",
            Self::Lunch2 => "Lunch 2",
            Self::Dinner1 => "Dinner 1",
            Self::Dinner2 => "Dinner 2",
            Self::Snack => "Snack",
            Self::Other => "Meal",
        }
    }

    /// Classify a free-text recipe name by the slot label it contains
    ///
    /// Batched labels are checked first, in plan order, so "Lunch 1" wins over
    /// any later marker in the same name.
    #[must_use]
    pub fn from_recipe_name(name: &str) -> Self {
        Self::BATCHED
            .into_iter()
            .chain([Self::Breakfast, Self::Snack])
            .find(|slot| name.contains(slot.label()))
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nutrition totals of a planned recipe, as consumed by budget accounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutrition {
    /// Recipe name (may carry a legacy slot label such as "Lunch 1 - Paella")
    pub name: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein grams per serving
    pub protein: f64,
    /// Fat grams per serving
    pub fat: f64,
    /// Structured slot; when absent the slot is inferred from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<MealSlot>,
}

impl RecipeNutrition {
    /// Create a nutrition entry classified by its name only
    #[must_use]
    pub fn new(name: impl Into<String>, calories: f64, protein: f64, fat: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            fat,
            slot: None,
        }
    }

    /// Attach a structured slot
    #[must_use]
    pub const fn with_slot(mut self, slot: MealSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Structured slot if present, otherwise the slot named in the recipe name
    #[must_use]
    pub fn effective_slot(&self) -> MealSlot {
        self.slot
            .unwrap_or_else(|| MealSlot::from_recipe_name(&self.name))
    }
}

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient identifier
    pub id: Uuid,
    /// Human-readable name
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// Free-text unit ("g", "cup", "pc", ...)
    pub unit: String,
}

impl Ingredient {
    /// Create an ingredient with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Ordered instruction, used for both preprocessing and cooking steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStep {
    /// Step identifier
    pub id: Uuid,
    /// Zero-based position within its list
    pub position: u16,
    /// Instruction text
    pub instruction: String,
}

impl RecipeStep {
    /// Build an ordered step list from instruction strings
    #[must_use]
    pub fn numbered<I, S>(instructions: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        instructions
            .into_iter()
            .zip(0_u16..)
            .map(|(instruction, position)| Self {
                id: Uuid::new_v4(),
                position,
                instruction: instruction.into(),
            })
            .collect()
    }
}

/// A stored recipe with its ingredients and steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Meal plan this recipe belongs to
    pub meal_plan_id: Uuid,
    /// Recipe name
    pub name: String,
    /// Slot in the weekly plan
    pub slot: MealSlot,
    /// Cuisine the recipe was generated for
    pub cuisine: Option<String>,
    /// Calories per serving
    pub calories: f64,
    /// Protein grams per serving
    pub protein: f64,
    /// Fat grams per serving
    pub fat: f64,
    /// Servings produced by one batch
    pub servings: u8,
    /// Ingredient lines
    pub ingredients: Vec<Ingredient>,
    /// Steps done ahead of cooking (marinating, soaking, chopping)
    pub preprocessing: Vec<RecipeStep>,
    /// Cooking steps
    pub steps: Vec<RecipeStep>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Create an empty recipe in a meal plan
    #[must_use]
    pub fn new(user_id: Uuid, meal_plan_id: Uuid, name: impl Into<String>, slot: MealSlot) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            meal_plan_id,
            name: name.into(),
            slot,
            cuisine: None,
            calories: 0.0,
            protein: 0.0,
            fat: 0.0,
            servings: 1,
            ingredients: Vec::new(),
            preprocessing: Vec::new(),
            steps: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set per-serving nutrition
    #[must_use]
    pub const fn with_nutrition(mut self, calories: f64, protein: f64, fat: f64) -> Self {
        self.calories = calories;
        self.protein = protein;
        self.fat = fat;
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Nutrition view for budget accounting
    #[must_use]
    pub fn nutrition(&self) -> RecipeNutrition {
        RecipeNutrition {
            name: self.name.clone(),
            calories: self.calories,
            protein: self.protein,
            fat: self.fat,
            slot: Some(self.slot),
        }
    }
}
