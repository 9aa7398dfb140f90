// ABOUTME: Request correlation ids for the HTTP API
// ABOUTME: Fills in missing x-request-id headers and stamps the id onto error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::tracing::{new_request_id, request_id};
use crate::errors::ErrorResponse;
use axum::body::Body;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};

/// Generates `req_<uuid>` ids for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestToken;

impl MakeRequestId for MakeRequestToken {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&new_request_id())
            .ok()
            .map(RequestId::new)
    }
}

/// Copy the request id into JSON error bodies that do not carry one yet
pub async fn attach_request_id(request: Request<Body>, next: Next) -> Response {
    let request_id = request_id(&request);
    let response = next.run(request).await;

    let Some(mut body) = response.extensions().get::<ErrorResponse>().cloned() else {
        return response;
    };
    if body.error.request_id.is_some() {
        return response;
    }

    body.error.request_id = Some(request_id);
    let (parts, _) = response.into_parts();
    (parts, Json(body)).into_response()
}
