// ABOUTME: Integration tests for environment-based server configuration
// ABOUTME: Defaults, typed overrides, invalid values, and log-safe summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealplan_server::config::{Environment, LogLevel, ServerConfig};
use serial_test::serial;
use std::env;

const VARIABLES: [&str; 10] = [
    "HTTP_PORT",
    "RUST_LOG",
    "ENVIRONMENT",
    "CORS_ORIGINS",
    "CUISINE_POOL",
    "RECIPE_GENERATION_COST_CENTS",
    "MIN_TOP_UP_CENTS",
    "RECIPE_GENERATOR_URL",
    "RECIPE_GENERATOR_API_KEY",
    "RECIPE_GENERATOR_TIMEOUT_SECS",
];

fn clear_environment() {
    for key in VARIABLES {
        env::remove_var(key);
    }
}

// ================================
// Defaults
// ================================

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_environment();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors_origins, vec!["*"]);
    assert_eq!(
        config.planning.cuisine_pool,
        vec!["Mediterranean", "Mexican", "Japanese", "Indian"]
    );
    assert_eq!(config.planning.recipe_generation_cost_cents, 50);
    assert_eq!(config.planning.min_top_up_cents, 500);
    assert!(config.recipe_generator.url.is_none());
    assert_eq!(config.recipe_generator.timeout_secs, 60);
}

// ================================
// Overrides
// ================================

#[test]
#[serial]
fn test_overrides_are_parsed() {
    clear_environment();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("RUST_LOG", "debug");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ORIGINS", "https://app.example.com, https://admin.example.com");
    env::set_var("CUISINE_POOL", "Thai, Korean");
    env::set_var("RECIPE_GENERATION_COST_CENTS", "75");
    env::set_var("RECIPE_GENERATOR_URL", "http://localhost:7000/recipes");
    env::set_var("RECIPE_GENERATOR_API_KEY", "sk-test");

    let config = ServerConfig::from_env().unwrap();
    clear_environment();

    assert_eq!(config.http_port, 9090);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.environment.is_production());
    assert_eq!(
        config.cors_origins,
        vec!["https://app.example.com", "https://admin.example.com"]
    );
    assert_eq!(config.planning.cuisine_pool, vec!["Thai", "Korean"]);
    assert_eq!(config.planning.recipe_generation_cost_cents, 75);
    assert_eq!(
        config.recipe_generator.url.as_deref(),
        Some("http://localhost:7000/recipes")
    );
    assert_eq!(config.recipe_generator.api_key.as_deref(), Some("sk-test"));
}

#[test]
#[serial]
fn test_empty_cuisine_pool_is_allowed() {
    clear_environment();
    env::set_var("CUISINE_POOL", "");

    let config = ServerConfig::from_env().unwrap();
    clear_environment();

    assert!(config.planning.cuisine_pool.is_empty());
}

// ================================
// Invalid values
// ================================

#[test]
#[serial]
fn test_invalid_port_names_variable() {
    clear_environment();
    env::set_var("HTTP_PORT", "not-a-port");

    let err = ServerConfig::from_env().unwrap_err();
    clear_environment();

    assert!(format!("{err:#}").contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_negative_cost_is_rejected() {
    clear_environment();
    env::set_var("RECIPE_GENERATION_COST_CENTS", "-5");

    let result = ServerConfig::from_env();
    clear_environment();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_zero_timeout_is_rejected() {
    clear_environment();
    env::set_var("RECIPE_GENERATOR_TIMEOUT_SECS", "0");

    let result = ServerConfig::from_env();
    clear_environment();

    assert!(result.is_err());
}

// ================================
// Summary
// ================================

#[test]
fn test_summary_never_contains_api_key() {
    let mut config = ServerConfig::default();
    config.recipe_generator.api_key = Some("sk-very-secret".to_owned());

    let summary = config.summary();
    assert!(summary.contains("static (no endpoint configured)"));
    assert!(!summary.contains("sk-very-secret"));

    let serialized = serde_json::to_string(&config).unwrap();
    assert!(!serialized.contains("sk-very-secret"));
}
