// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrition formula coefficients, meal-slot day counts, and server defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. The two nutrition constant sets
//! ([`weekly_plan`] and [`daily_display`]) are deliberately separate: each
//! calculation site keeps its own multipliers.

/// Mifflin-St Jeor coefficients shared by every BMR computation
pub mod bmr {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const AGE_COEF: f64 = 5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
    /// TDEE is rounded to the nearest multiple of this many kcal
    pub const TDEE_ROUNDING_STEP: f64 = 50.0;
}

/// Energy density of macronutrients
pub mod energy {
    /// kcal per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Constants for the weekly planning budget
pub mod weekly_plan {
    /// Days in a planning week
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Calorie multiplier on a bulk
    pub const BULK_CALORIE_FACTOR: f64 = 1.15;
    /// Calorie multiplier on a shred
    pub const SHRED_CALORIE_FACTOR: f64 = 0.8;
    /// Protein g/kg on a bulk
    pub const BULK_PROTEIN_PER_KG: f64 = 1.8;
    /// Protein g/kg on a shred
    pub const SHRED_PROTEIN_PER_KG: f64 = 2.0;
    /// Protein g/kg on a recomp (and any unrecognised goal)
    pub const DEFAULT_PROTEIN_PER_KG: f64 = 1.9;
    /// Daily protein never exceeds height (cm) plus this many grams
    pub const PROTEIN_HEIGHT_CAP_OFFSET: f64 = 20.0;
    /// Share of calories from fat on a bulk
    pub const BULK_FAT_SHARE: f64 = 0.25;
    /// Share of calories from fat on a shred
    pub const SHRED_FAT_SHARE: f64 = 0.20;
    /// Share of calories from fat on a recomp (and any unrecognised goal)
    pub const DEFAULT_FAT_SHARE: f64 = 0.225;
}

/// Constants for the daily display breakdown
pub mod daily_display {
    /// kcal added to TDEE on a bulk
    pub const BULK_CALORIE_OFFSET: f64 = 300.0;
    /// kcal removed from TDEE on a shred
    pub const SHRED_CALORIE_OFFSET: f64 = -400.0;
    /// Protein g/kg on a bulk
    pub const BULK_PROTEIN_PER_KG: f64 = 1.9;
    /// Protein g/kg on a shred
    pub const SHRED_PROTEIN_PER_KG: f64 = 2.1;
    /// Protein g/kg on a recomp (and any unrecognised goal)
    pub const DEFAULT_PROTEIN_PER_KG: f64 = 2.0;
    /// Share of calories from fat on a bulk
    pub const BULK_FAT_SHARE: f64 = 0.25;
    /// Share of calories from fat on a shred
    pub const SHRED_FAT_SHARE: f64 = 0.21;
    /// Share of calories from fat on a recomp (and any unrecognised goal)
    pub const DEFAULT_FAT_SHARE: f64 = 0.225;
    /// Fixed snack allowance
    pub const SNACK_CALORIES: f64 = 300.0;
    /// Breakfast share of the non-snack calories
    pub const BREAKFAST_CALORIE_SHARE: f64 = 0.2;
    /// Breakfast share of daily protein
    pub const BREAKFAST_PROTEIN_SHARE: f64 = 0.1;
    /// Breakfast share of daily fat
    pub const BREAKFAST_FAT_SHARE: f64 = 0.2;
}

/// Days per week a recipe in each meal slot is eaten
pub mod meal_slots {
    /// First lunch batch
    pub const LUNCH_1_DAYS: u8 = 3;
    /// Second lunch batch
    pub const LUNCH_2_DAYS: u8 = 4;
    /// First dinner batch
    pub const DINNER_1_DAYS: u8 = 4;
    /// Second dinner batch
    pub const DINNER_2_DAYS: u8 = 3;
    /// Cuisine is picked among at most this many leading pool entries
    pub const CUISINE_PICK_WINDOW: usize = 4;
}

/// Service names for structured logging
pub mod service_names {
    /// Server binary name
    pub const MEALPLAN_SERVER: &str = "mealplan-server";
    /// Generator collaborator name used in errors
    pub const RECIPE_GENERATOR: &str = "recipe-generator";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Defaults for environment-driven configuration
pub mod defaults {
    /// Cuisines offered when `CUISINE_POOL` is unset
    pub const CUISINE_POOL: &str = "Mediterranean,Mexican,Japanese,Indian";
    /// Wallet charge per generated recipe
    pub const RECIPE_GENERATION_COST_CENTS: i64 = 50;
    /// Smallest accepted checkout amount
    pub const MIN_TOP_UP_CENTS: i64 = 500;
    /// Generator request timeout
    pub const RECIPE_GENERATOR_TIMEOUT_SECS: u64 = 60;
    /// Diet string used when the goal does not carry one
    pub const DIET: &str = "omnivore";
}
