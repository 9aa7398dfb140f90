// ABOUTME: HTTP recipe generator posting the prompt to a JSON endpoint with reqwest
// ABOUTME: Applies a request timeout and optional bearer key; maps failures to service errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecipeGenerator;
use crate::config::RecipeGeneratorConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Connection timeout, separate from the overall request timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

/// Generator behind an HTTP endpoint
///
/// Sends `POST {url}` with `{"prompt": "..."}` and expects the recipe JSON
/// in the response body, either bare or wrapped as `{"recipe": {...}}`.
pub struct HttpRecipeGenerator {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpRecipeGenerator {
    /// Create a generator for `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(
        url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
            api_key,
        })
    }

    /// Create a generator from configuration, `None` when no URL is configured
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn from_config(config: &RecipeGeneratorConfig) -> AppResult<Option<Self>> {
        config
            .url
            .as_ref()
            .map(|url| {
                Self::new(
                    url.clone(),
                    config.api_key.clone(),
                    Duration::from_secs(config.timeout_secs),
                )
            })
            .transpose()
    }

    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let excerpt: String = body.chars().take(200).collect();
        match status.as_u16() {
            401 | 403 => AppError::external_service(
                service_names::RECIPE_GENERATOR,
                "Generator rejected the API key",
            ),
            502..=504 => AppError::external_unavailable(
                service_names::RECIPE_GENERATOR,
                format!("Generator is not responding ({status})"),
            ),
            _ => AppError::external_service(
                service_names::RECIPE_GENERATOR,
                format!("API error ({status}): {excerpt}"),
            ),
        }
    }

    async fn send(&self, prompt: &str) -> AppResult<Value> {
        let request = self
            .client
            .post(&self.url)
            .json(&GenerateRequest { prompt });

        let response = self.add_auth_header(request).send().await.map_err(|e| {
            error!("Failed to send request to recipe generator: {e}");
            if e.is_timeout() || e.is_connect() {
                AppError::external_unavailable(
                    service_names::RECIPE_GENERATOR,
                    format!("Cannot reach generator: {e}"),
                )
            } else {
                AppError::external_service(
                    service_names::RECIPE_GENERATOR,
                    format!("Failed to connect: {e}"),
                )
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(
                service_names::RECIPE_GENERATOR,
                format!("Failed to read response: {e}"),
            )
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            let excerpt: String = body.chars().take(500).collect();
            error!("Failed to parse generator response: {e} - body: {excerpt}");
            AppError::external_service(
                service_names::RECIPE_GENERATOR,
                format!("Failed to parse response: {e}"),
            )
        })?;

        Ok(match value {
            Value::Object(mut object) if object.contains_key("recipe") => {
                object.remove("recipe").unwrap_or(Value::Null)
            }
            other => other,
        })
    }
}

#[async_trait]
impl RecipeGenerator for HttpRecipeGenerator {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn generate_recipe(&self, prompt: &str) -> AppResult<Value> {
        debug!(prompt.len = prompt.len(), url = %self.url, "Requesting recipe from generator");
        let started = Instant::now();
        let result = self.send(prompt).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_external_call(
            service_names::RECIPE_GENERATOR,
            "generate_recipe",
            result.is_ok(),
            elapsed_ms,
        );
        result
    }
}
