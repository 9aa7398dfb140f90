// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: AppError, ErrorCode, and ErrorResponse with axum IntoResponse support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Errors are defined in `mealplan_core` so the engine crate and the server
//! share one error type. The server enables the `http-response` feature, which
//! renders every [`AppError`] as an [`ErrorResponse`] with the mapped status.

pub use mealplan_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
