// ABOUTME: User, meal plan, wallet, and payment models owned by the storage collaborator
// ABOUTME: Plain records passed through services; no behaviour beyond constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Profile;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: Uuid,
    /// Login email
    pub email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with a fresh identifier
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

/// Identity returned by the authentication collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// User identifier
    pub id: Uuid,
    /// Login email
    pub email: String,
    /// Saved biometric profile, if the user has completed onboarding
    pub profile: Option<Profile>,
}

/// Weekly meal plan grouping generated recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Monday of the planned week
    pub week_start: Option<NaiveDate>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    /// Create a plan with a fresh identifier
    #[must_use]
    pub fn new(user_id: Uuid, name: impl Into<String>, week_start: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            week_start,
            created_at: Utc::now(),
        }
    }
}

/// Prepaid balance used to pay for recipe generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// Owner
    pub user_id: Uuid,
    /// Balance in cents
    pub balance_cents: i64,
    /// Last change
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Empty wallet
    #[must_use]
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            balance_cents: 0,
            updated_at: Utc::now(),
        }
    }
}

/// Hosted checkout session handed to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Session identifier used to confirm the payment later
    pub session_id: String,
    /// Secret the client passes to the hosted checkout
    pub client_secret: String,
    /// Amount requested
    pub amount_cents: i64,
}

/// Payment state reported by the payment collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatus {
    /// Session identifier
    pub session_id: String,
    /// Whether the payment was captured
    pub paid: bool,
    /// Captured amount
    pub amount_cents: i64,
    /// User the session was opened for
    pub user_id: Uuid,
}
