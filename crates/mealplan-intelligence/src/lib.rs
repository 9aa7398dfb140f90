// ABOUTME: Nutrition budget engine for weekly meal planning
// ABOUTME: Weekly and daily targets, remaining-budget accounting, prompts, and plan aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal-Plan Intelligence
//!
//! Pure computations behind the meal-plan server. Nothing here performs I/O;
//! every function can be called concurrently without coordination.
//!
//! ## Modules
//!
//! - **`weekly_budget`**: BMR, TDEE and the seven-day planning budget
//! - **`remaining_budget`**: subtract amortised contributions of planned recipes
//! - **`daily_breakdown`**: per-day display figures with their own constants
//! - **prompt**: cuisine pick and generator prompt text
//! - **engine**: [`NutritionBudgetEngine`] tying the above together
//! - **`generated_recipe`**: validation of generator output
//! - **aggregation**: shopping and prep lists

/// Aggregation of ingredients and preprocessing steps across recipes
pub mod aggregation;

/// Daily display breakdown
pub mod daily_breakdown;

/// Engine facade
pub mod engine;

/// Generator output validation
pub mod generated_recipe;

/// Prompt rendering and cuisine selection
pub mod prompt;

/// Remaining weekly budget accounting
pub mod remaining_budget;

/// Profile and goal validation
pub mod validation;

/// Weekly planning budget
pub mod weekly_budget;

pub use aggregation::{prep_list, shopping_list, PrepTask, ShoppingItem};
pub use daily_breakdown::compute_daily_breakdown;
pub use engine::{NutritionBudgetEngine, PlanRequest, RecipePlan};
pub use generated_recipe::{GeneratedIngredient, GeneratedRecipe};
pub use prompt::{build_prompt, select_cuisine};
pub use remaining_budget::{recipe_days_for, reduce_by_existing};
pub use weekly_budget::{calculate_bmr, calculate_tdee, compute_weekly_budget, round_half_up};
