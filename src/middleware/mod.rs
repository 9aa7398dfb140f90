// ABOUTME: HTTP middleware for request tracing, correlation ids, and cross-origin access
// ABOUTME: Provides request spans, request id handling, and the CORS layer built from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Request id generation and error body stamping
pub mod correlation;
/// CORS layer
pub mod cors;
/// Request spans
pub mod tracing;

pub use self::tracing::{create_request_span, new_request_id, request_id, REQUEST_ID_HEADER};
pub use correlation::{attach_request_id, MakeRequestToken};
pub use cors::setup_cors;
