// ABOUTME: Main library entry point for the meal-plan server
// ABOUTME: Wires the nutrition budget engine to storage, identity, payments, and recipe generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal-Plan Server
//!
//! An HTTP API that plans a week of batch-cooked meals against a nutrition
//! budget. The engine itself lives in `mealplan-intelligence`; this crate
//! supplies the service layer and the collaborators around it.
//!
//! ## Features
//!
//! - **Nutrition budgets**: weekly targets from Mifflin-St Jeor BMR and TDEE,
//!   reduced by the recipes already planned
//! - **Recipe generation**: prompts built from the remaining budget, validated
//!   generator output, one wallet charge per recipe
//! - **Planning aids**: aggregated shopping lists and preprocessing lists
//! - **Prepaid wallet**: checkout top-ups confirmed exactly once
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealplan_server::config::ServerConfig;
//! use mealplan_server::resources::ServerResources;
//! use mealplan_server::server::MealPlanServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let port = config.http_port;
//!     let resources = Arc::new(ServerResources::builder(config).build());
//!     MealPlanServer::new(resources).run(port).await
//! }
//! ```

/// Bearer token resolution
pub mod auth;

/// Environment-based configuration
pub mod config;

/// Constants shared with the engine
pub mod constants;

/// Error types
pub mod errors;

/// Recipe generator collaborators
pub mod generator;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Payment gateway collaborators
pub mod payments;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Domain services
pub mod services;

/// Persistence
pub mod storage;
