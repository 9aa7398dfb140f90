// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Builds the Cross-Origin Resource Sharing layer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS for the API
///
/// An empty origin list or a `*` entry allows any origin. Otherwise only the
/// listed origins are allowed; entries that are not valid header values are
/// skipped.
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_any = config.cors_origins.is_empty() || config.cors_origins.iter().any(|o| o == "*");

    let allow_origin = if allow_any {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
