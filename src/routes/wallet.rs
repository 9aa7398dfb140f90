// ABOUTME: Route handlers for the prepaid wallet
// ABOUTME: Balance lookup, checkout session creation, and payment confirmation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::authenticate;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /api/wallet/checkout`
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    /// Top-up amount
    #[serde(alias = "amountCents")]
    pub amount_cents: i64,
}

/// Body of `POST /api/wallet/confirm`
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmPaymentRequest {
    /// Checkout session returned by the checkout endpoint
    #[serde(alias = "sessionId")]
    pub session_id: String,
}

/// Wallet routes implementation
pub struct WalletRoutes;

impl WalletRoutes {
    /// Create all wallet routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/wallet", get(Self::handle_balance))
            .route("/api/wallet/checkout", post(Self::handle_checkout))
            .route("/api/wallet/confirm", post(Self::handle_confirm))
            .with_state(resources)
    }

    async fn handle_balance(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let wallet = resources.wallet.balance(&user).await?;
        Ok((StatusCode::OK, Json(wallet)).into_response())
    }

    async fn handle_checkout(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<CheckoutRequest>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let session = resources
            .wallet
            .start_checkout(&user, body.amount_cents)
            .await?;
        Ok((StatusCode::CREATED, Json(session)).into_response())
    }

    async fn handle_confirm(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<ConfirmPaymentRequest>,
    ) -> Result<Response, AppError> {
        let user = authenticate(&headers, &resources).await?;
        let confirmation = resources
            .wallet
            .confirm_payment(&user, &body.session_id)
            .await?;
        Ok((StatusCode::OK, Json(confirmation)).into_response())
    }
}
