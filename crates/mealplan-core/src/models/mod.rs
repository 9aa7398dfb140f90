// ABOUTME: Core data models and types for the meal-plan server
// ABOUTME: Re-exports Profile, Goal, Recipe, MealSlot, budgets, and account records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The nutrition engine consumes [`Profile`], [`Goal`] and [`RecipeNutrition`]
//! and produces [`WeeklyBudget`] and [`DailyBudget`]. Everything else is owned
//! by the storage collaborator and passed through unchanged.

mod account;
mod budget;
mod profile;
mod recipe;

// Engine inputs
pub use profile::{FitnessGoal, Gender, Goal, Profile};

// Engine outputs
pub use budget::{DailyBudget, WeeklyBudget};

// Recipe domain
pub use recipe::{Ingredient, MealSlot, Recipe, RecipeNutrition, RecipeStep};

// Account domain
pub use account::{AuthenticatedUser, CheckoutSession, MealPlan, PaymentStatus, User, Wallet};
