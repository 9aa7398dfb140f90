// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, log level, planning defaults, wallet pricing, and generator endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, ports};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Meal planning and pricing settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanningConfig {
    /// Ordered cuisine preferences offered to the engine
    pub cuisine_pool: Vec<String>,
    /// Wallet charge per generated recipe
    pub recipe_generation_cost_cents: i64,
    /// Smallest accepted checkout amount
    pub min_top_up_cents: i64,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            cuisine_pool: parse_list(defaults::CUISINE_POOL),
            recipe_generation_cost_cents: defaults::RECIPE_GENERATION_COST_CENTS,
            min_top_up_cents: defaults::MIN_TOP_UP_CENTS,
        }
    }
}

/// Recipe generator endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeGeneratorConfig {
    /// JSON endpoint; when unset the server runs with the static generator
    pub url: Option<String>,
    /// Bearer key sent to the endpoint
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for RecipeGeneratorConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout_secs: defaults::RECIPE_GENERATOR_TIMEOUT_SECS,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Allowed CORS origins, `*` for any
    pub cors_origins: Vec<String>,
    /// Planning and pricing
    pub planning: PlanningConfig,
    /// Recipe generator endpoint
    pub recipe_generator: RecipeGeneratorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            log_level: LogLevel::Info,
            environment: Environment::Development,
            cors_origins: vec!["*".to_owned()],
            planning: PlanningConfig::default(),
            recipe_generator: RecipeGeneratorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable if a numeric value does not parse
    /// or the resulting configuration is invalid
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_env("HTTP_PORT", ports::DEFAULT_HTTP_PORT)?,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors_origins: parse_origins(&env_var_or("CORS_ORIGINS", "*")),
            planning: PlanningConfig {
                cuisine_pool: parse_list(&env_var_or("CUISINE_POOL", defaults::CUISINE_POOL)),
                recipe_generation_cost_cents: parse_env(
                    "RECIPE_GENERATION_COST_CENTS",
                    defaults::RECIPE_GENERATION_COST_CENTS,
                )?,
                min_top_up_cents: parse_env("MIN_TOP_UP_CENTS", defaults::MIN_TOP_UP_CENTS)?,
            },
            recipe_generator: RecipeGeneratorConfig {
                url: optional_env("RECIPE_GENERATOR_URL"),
                api_key: optional_env("RECIPE_GENERATOR_API_KEY"),
                timeout_secs: parse_env(
                    "RECIPE_GENERATOR_TIMEOUT_SECS",
                    defaults::RECIPE_GENERATOR_TIMEOUT_SECS,
                )?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for negative prices, a non-positive top-up minimum or
    /// a zero generator timeout
    pub fn validate(&self) -> Result<()> {
        if self.planning.recipe_generation_cost_cents < 0 {
            bail!("RECIPE_GENERATION_COST_CENTS cannot be negative");
        }
        if self.planning.min_top_up_cents <= 0 {
            bail!("MIN_TOP_UP_CENTS must be positive");
        }
        if self.recipe_generator.timeout_secs == 0 {
            bail!("RECIPE_GENERATOR_TIMEOUT_SECS must be positive");
        }
        Ok(())
    }

    /// Summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Meal-Plan Server Configuration:\n\
             - HTTP Port: {}\n\
             - Log Level: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Cuisine Pool: {}\n\
             - Recipe Cost: {} cents\n\
             - Minimum Top-Up: {} cents\n\
             - Recipe Generator: {}",
            self.http_port,
            self.log_level,
            self.environment,
            self.cors_origins.join(", "),
            self.planning.cuisine_pool.join(", "),
            self.planning.recipe_generation_cost_cents,
            self.planning.min_top_up_cents,
            self.recipe_generator
                .url
                .as_deref()
                .unwrap_or("static (no endpoint configured)"),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Non-empty environment variable
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse a typed environment variable, defaulting when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}

/// Parse a comma-separated list
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        parse_list(origins_str)
    }
}
