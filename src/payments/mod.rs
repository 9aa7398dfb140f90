// ABOUTME: Payment collaborator abstraction for hosted checkout top-ups
// ABOUTME: PaymentGateway trait and the in-memory sandbox gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory sandbox gateway
pub mod sandbox;

pub use sandbox::SandboxPaymentGateway;

use crate::errors::AppResult;
use async_trait::async_trait;
use mealplan_core::models::{CheckoutSession, PaymentStatus};
use uuid::Uuid;

/// Hosted checkout provider
///
/// The gateway client is injected where needed; there is no process-wide
/// payment client.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Open a checkout session for `amount_cents` on behalf of `user_id`
    async fn create_payment_intent(
        &self,
        user_id: Uuid,
        amount_cents: i64,
    ) -> AppResult<CheckoutSession>;

    /// Current state of a checkout session
    ///
    /// Fails with `ResourceNotFound` for unknown sessions
    async fn retrieve_payment(&self, session_id: &str) -> AppResult<PaymentStatus>;
}
