// ABOUTME: Identity collaborator resolving bearer tokens to authenticated users
// ABOUTME: IdentityProvider trait plus an in-memory token table backed by the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication
//!
//! Session handling and the identity SDK are outside this server. Routes only
//! need `current_user(token) -> {id, email, profile}`, expressed by
//! [`IdentityProvider`].

use crate::errors::{AppError, AppResult};
use crate::storage::MealPlanStore;
use async_trait::async_trait;
use dashmap::DashMap;
use mealplan_core::models::{AuthenticatedUser, User};
use std::sync::Arc;
use uuid::Uuid;

/// Resolves the caller of a request
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// User owning `bearer_token`
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` if the token is unknown or its user is gone
    async fn current_user(&self, bearer_token: &str) -> AppResult<AuthenticatedUser>;
}

/// Token table held in memory
///
/// Tokens are opaque strings; the user record and saved profile come from
/// the store on every lookup so profile edits are visible immediately.
pub struct InMemoryIdentityProvider {
    store: Arc<dyn MealPlanStore>,
    tokens: DashMap<String, Uuid>,
}

impl InMemoryIdentityProvider {
    /// Create a provider reading users from `store`
    #[must_use]
    pub fn new(store: Arc<dyn MealPlanStore>) -> Self {
        Self {
            store,
            tokens: DashMap::new(),
        }
    }

    /// Create a user and return a fresh token for it
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the user
    pub async fn register_user(&self, email: &str) -> AppResult<(User, String)> {
        let user = User::new(email);
        self.store.create_user(&user).await?;
        let token = self.issue_token(user.id);
        Ok((user, token))
    }

    /// Issue a new token for an existing user
    #[must_use]
    pub fn issue_token(&self, user_id: Uuid) -> String {
        let token = format!("mp_{}", Uuid::new_v4().simple());
        self.tokens.insert(token.clone(), user_id);
        token
    }

    /// Revoke a token, returning whether it existed
    pub fn revoke_token(&self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn current_user(&self, bearer_token: &str) -> AppResult<AuthenticatedUser> {
        let user_id = self
            .tokens
            .get(bearer_token)
            .map(|entry| *entry)
            .ok_or_else(|| AppError::auth_invalid("Unknown or revoked token"))?;

        let user = self
            .store
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::auth_invalid("Token user no longer exists"))?;
        let profile = self.store.get_profile(user_id).await?;

        Ok(AuthenticatedUser {
            id: user.id,
            email: user.email,
            profile,
        })
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value
///
/// # Errors
///
/// Returns `AuthInvalid` if the scheme is not bearer or the token is empty
pub fn extract_bearer_token(header_value: &str) -> AppResult<&str> {
    let token = header_value
        .strip_prefix("Bearer ")
        .or_else(|| header_value.strip_prefix("bearer "))
        .ok_or_else(|| AppError::auth_invalid("Authorization header must use Bearer scheme"))?
        .trim();
    if token.is_empty() {
        return Err(AppError::auth_invalid("Bearer token is empty"));
    }
    Ok(token)
}
