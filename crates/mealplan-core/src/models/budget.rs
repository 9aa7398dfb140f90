// ABOUTME: Weekly and daily nutrition budget value types produced by the engine
// ABOUTME: WeeklyBudget supports subtraction of amortised recipe contributions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Seven-day calorie, protein and fat totals
///
/// Remaining budgets derived from this type may be negative; a negative value
/// means the plan already exceeds the target.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyBudget {
    /// kcal for the week
    pub calories: f64,
    /// Protein grams for the week
    pub protein: f64,
    /// Fat grams for the week
    pub fat: f64,
}

impl WeeklyBudget {
    /// Create a budget
    #[must_use]
    pub const fn new(calories: f64, protein: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            fat,
        }
    }

    /// Whether any component is below zero
    #[must_use]
    pub fn is_overdrawn(&self) -> bool {
        self.calories < 0.0 || self.protein < 0.0 || self.fat < 0.0
    }

    /// Divide every component by `days`
    #[must_use]
    pub fn per_day(&self, days: u8) -> Option<Self> {
        (days > 0).then(|| {
            let days = f64::from(days);
            Self::new(self.calories / days, self.protein / days, self.fat / days)
        })
    }
}

/// Daily display figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBudget {
    /// Total daily energy expenditure, rounded to 50 kcal
    pub tdee: f64,
    /// Calorie target after the goal offset
    pub daily_target: f64,
    /// Protein grams per day
    pub protein: f64,
    /// Fat grams per day
    pub fat: f64,
    /// Breakfast calories
    pub breakfast_calories: f64,
    /// Breakfast protein grams
    pub breakfast_protein: f64,
    /// Breakfast fat grams
    pub breakfast_fat: f64,
    /// Fixed snack allowance
    pub snack_calories: f64,
}
