// ABOUTME: Wallet service for prepaid recipe-generation credit
// ABOUTME: Balance lookup, checkout top-ups via the payment gateway, idempotent confirmation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::payments::PaymentGateway;
use crate::storage::MealPlanStore;
use mealplan_core::models::{AuthenticatedUser, CheckoutSession, Wallet};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Result of confirming a checkout session
#[derive(Debug, Clone, Serialize)]
pub struct PaymentConfirmation {
    /// Wallet after the confirmation
    pub wallet: Wallet,
    /// Amount credited by this call, zero when the session was already credited
    pub credited_cents: i64,
    /// Whether an earlier call had already credited this session
    pub already_credited: bool,
}

/// Wallet service
#[derive(Clone)]
pub struct WalletService {
    store: Arc<dyn MealPlanStore>,
    payments: Arc<dyn PaymentGateway>,
    min_top_up_cents: i64,
}

impl WalletService {
    /// Create a service enforcing `min_top_up_cents` on checkouts
    #[must_use]
    pub fn new(
        store: Arc<dyn MealPlanStore>,
        payments: Arc<dyn PaymentGateway>,
        min_top_up_cents: i64,
    ) -> Self {
        Self {
            store,
            payments,
            min_top_up_cents,
        }
    }

    /// Caller's wallet
    ///
    /// # Errors
    ///
    /// Returns storage errors
    pub async fn balance(&self, user: &AuthenticatedUser) -> AppResult<Wallet> {
        self.store.get_wallet(user.id).await
    }

    /// Open a checkout session to top up the caller's wallet
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` below the minimum top-up, or payment gateway errors
    pub async fn start_checkout(
        &self,
        user: &AuthenticatedUser,
        amount_cents: i64,
    ) -> AppResult<CheckoutSession> {
        if amount_cents < self.min_top_up_cents {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("Top-up must be at least {} cents", self.min_top_up_cents),
            )
            .with_details(serde_json::json!({
                "field": "amount_cents",
                "minimum_cents": self.min_top_up_cents,
            })));
        }

        let session = self
            .payments
            .create_payment_intent(user.id, amount_cents)
            .await?;
        info!(
            user.id = %user.id,
            amount_cents,
            session_id = %session.session_id,
            "Opened checkout"
        );
        Ok(session)
    }

    /// Credit the caller's wallet for a paid checkout session
    ///
    /// Confirming the same session twice credits it once.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for another user's session, `InvalidInput`
    /// when the session is not paid yet, or gateway and storage errors
    pub async fn confirm_payment(
        &self,
        user: &AuthenticatedUser,
        session_id: &str,
    ) -> AppResult<PaymentConfirmation> {
        let status = self.payments.retrieve_payment(session_id).await?;
        if status.user_id != user.id {
            return Err(
                AppError::permission_denied("Checkout session belongs to another user")
                    .with_user_id(user.id)
                    .with_resource_id(session_id),
            );
        }
        if !status.paid {
            return Err(AppError::invalid_input("Checkout session has not been paid")
                .with_resource_id(session_id));
        }

        let Some(wallet) = self
            .store
            .credit_payment_once(session_id, user.id, status.amount_cents)
            .await?
        else {
            let wallet = self.store.get_wallet(user.id).await?;
            return Ok(PaymentConfirmation {
                wallet,
                credited_cents: 0,
                already_credited: true,
            });
        };

        AppLogger::log_wallet_event(
            user.id,
            "top_up",
            status.amount_cents,
            wallet.balance_cents,
        );
        Ok(PaymentConfirmation {
            wallet,
            credited_cents: status.amount_cents,
            already_credited: false,
        })
    }
}
