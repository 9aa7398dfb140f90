// ABOUTME: Sandbox payment gateway keeping checkout sessions in memory
// ABOUTME: Sessions start unpaid; tests and local setups capture them with mark_paid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::PaymentGateway;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use dashmap::DashMap;
use mealplan_core::models::{CheckoutSession, PaymentStatus};
use tracing::debug;
use uuid::Uuid;

/// Payment gateway that never leaves the process
#[derive(Debug, Default)]
pub struct SandboxPaymentGateway {
    sessions: DashMap<String, PaymentStatus>,
}

impl SandboxPaymentGateway {
    /// Create a gateway with no sessions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a session, as the hosted checkout would after the card is charged
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown sessions
    pub fn mark_paid(&self, session_id: &str) -> AppResult<()> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::not_found(format!("Checkout session {session_id}")))?;
        session.paid = true;
        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for SandboxPaymentGateway {
    async fn create_payment_intent(
        &self,
        user_id: Uuid,
        amount_cents: i64,
    ) -> AppResult<CheckoutSession> {
        let session_id = format!("cs_sandbox_{}", Uuid::new_v4().simple());
        let client_secret = format!("{session_id}_secret_{}", Uuid::new_v4().simple());

        self.sessions.insert(
            session_id.clone(),
            PaymentStatus {
                session_id: session_id.clone(),
                paid: false,
                amount_cents,
                user_id,
            },
        );
        debug!(
            user.id = %user_id,
            amount_cents,
            session_id = %session_id,
            "Opened sandbox checkout"
        );

        Ok(CheckoutSession {
            session_id,
            client_secret,
            amount_cents,
        })
    }

    async fn retrieve_payment(&self, session_id: &str) -> AppResult<PaymentStatus> {
        self.sessions
            .get(session_id)
            .map(|session| session.clone())
            .ok_or_else(|| AppError::not_found(format!("Checkout session {session_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let gateway = SandboxPaymentGateway::new();
        let user_id = Uuid::new_v4();
        let session = gateway.create_payment_intent(user_id, 1000).await.unwrap();

        let status = gateway.retrieve_payment(&session.session_id).await.unwrap();
        assert!(!status.paid);
        assert_eq!(status.user_id, user_id);

        gateway.mark_paid(&session.session_id).unwrap();
        assert!(gateway.retrieve_payment(&session.session_id).await.unwrap().paid);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let gateway = SandboxPaymentGateway::new();
        assert!(gateway.retrieve_payment("cs_missing").await.is_err());
        assert!(gateway.mark_paid("cs_missing").is_err());
    }
}
