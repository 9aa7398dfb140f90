// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Meal-plan orchestration and wallet top-ups, independent of the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold their collaborators behind trait objects and return
//! `AppResult`, so route handlers only translate requests and responses.

/// Meal plans, recipe generation, and recipe editing
pub mod meal_plan;

/// Wallet balance and checkout top-ups
pub mod wallet;

pub use meal_plan::{GeneratedRecipeResult, MealPlanService, RecipePatch};
pub use wallet::{PaymentConfirmation, WalletService};
