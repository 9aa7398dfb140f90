// ABOUTME: Recipe generation collaborator turning a prompt into structured recipe JSON
// ABOUTME: RecipeGenerator trait with an HTTP JSON client and a fixed-response generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Generation
//!
//! The generator is opaque: it receives the prompt rendered by the engine and
//! returns JSON. Validation of that JSON happens in
//! `mealplan_intelligence::generated_recipe`, never here.

/// HTTP JSON generator client
pub mod remote;

/// Generator returning a fixed recipe
pub mod fixed;

pub use fixed::StaticRecipeGenerator;
pub use remote::HttpRecipeGenerator;

use crate::errors::AppResult;
use async_trait::async_trait;

/// Produces recipe JSON from a natural-language prompt
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Generator name for logs and errors
    fn name(&self) -> &'static str;

    /// Generate one recipe
    ///
    /// The value is either the recipe object or a JSON string holding it
    async fn generate_recipe(&self, prompt: &str) -> AppResult<serde_json::Value>;
}
