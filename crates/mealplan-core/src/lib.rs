// ABOUTME: Core types and constants for the meal-plan server
// ABOUTME: Foundation crate with error handling, nutrition constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal-Plan Core
//!
//! Foundation crate providing shared types and constants for the meal-plan
//! server. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Formula coefficients, meal-slot day counts, server defaults
//! - **models**: Profiles, goals, recipes, budgets, users and wallets

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (Profile, Goal, Recipe, budgets, users)
pub mod models;
