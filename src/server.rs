// ABOUTME: HTTP server assembly for the meal-plan API
// ABOUTME: Layers request ids, tracing and CORS over the router and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::middleware::{attach_request_id, create_request_span, setup_cors, MakeRequestToken};
use crate::resources::ServerResources;
use crate::routes::api_router;
use anyhow::{Context, Result};
use axum::middleware::from_fn;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Meal-plan HTTP server
pub struct MealPlanServer {
    resources: Arc<ServerResources>,
}

impl MealPlanServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Complete router with request ids, tracing and CORS
    ///
    /// The request id is assigned before the trace span opens, so the span,
    /// the `x-request-id` response header and error bodies share one id.
    #[must_use]
    pub fn router(&self) -> Router {
        api_router(&self.resources).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestToken))
                .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(setup_cors(&self.resources.config))
                .layer(from_fn(attach_request_id)),
        )
    }

    /// Serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
        info!("HTTP server listening on {addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}
