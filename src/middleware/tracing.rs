// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span used by the HTTP trace layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::Body;
use http::Request;
use tracing::field::Empty;
use tracing::Span;
use uuid::Uuid;

/// Header carrying the caller's correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Fresh correlation id
#[must_use]
pub fn new_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// Correlation id of a request, generated when the caller sent none
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(new_request_id, str::to_owned)
}

/// Create the tracing span for an HTTP request
///
/// `user_id` is left empty and recorded once the bearer token is resolved.
#[must_use]
pub fn create_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
        user_id = Empty,
    )
}
