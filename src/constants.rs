// ABOUTME: Application constants re-exported from the core crate
// ABOUTME: Formula coefficients, meal-slot day counts, ports, and server defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared by the engine and the server

pub use mealplan_core::constants::{
    bmr, daily_display, defaults, energy, meal_slots, ports, service_names, weekly_plan,
};
