// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven server, planning, pricing, and generator configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the meal-plan server
//!
//! Configuration is read from environment variables only; see
//! [`environment::ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{
    Environment, LogLevel, PlanningConfig, RecipeGeneratorConfig, ServerConfig,
};
