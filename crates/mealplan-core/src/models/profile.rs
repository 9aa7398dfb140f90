// ABOUTME: Biometric profile and fitness goal models consumed by the nutrition engine
// ABOUTME: Gender, Profile, FitnessGoal with lenient parsing, and Goal settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male (+5 kcal Mifflin-St Jeor constant)
    #[serde(alias = "male")]
    Male,
    /// Female (-161 kcal Mifflin-St Jeor constant)
    #[serde(alias = "female")]
    Female,
}

/// Biometric profile used for every budget computation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Biological gender
    pub gender: Gender,
    /// Body weight in kilograms
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(alias = "height")]
    pub height_cm: f64,
    /// Age in whole years
    pub age: u32,
}

impl Profile {
    /// Create a new profile
    #[must_use]
    pub const fn new(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> Self {
        Self {
            gender,
            weight_kg,
            height_cm,
            age,
        }
    }
}

/// Fitness goal driving calorie and macro multipliers
///
/// Values other than `Bulk`, `Shred` and `Recomp` are kept verbatim in
/// [`FitnessGoal::Other`] and follow the recomp/default branch of every
/// calculation instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FitnessGoal {
    /// Caloric surplus
    Bulk,
    /// Caloric deficit
    Shred,
    /// Maintenance with recomposition
    Recomp,
    /// Any unrecognised goal label
    Other(String),
}

impl FitnessGoal {
    /// Canonical label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bulk => "Bulk",
            Self::Shred => "Shred",
            Self::Recomp => "Recomp",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for FitnessGoal {
    fn from(value: &str) -> Self {
        match value {
            "Bulk" => Self::Bulk,
            "Shred" => Self::Shred,
            "Recomp" => Self::Recomp,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for FitnessGoal {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<FitnessGoal> for String {
    fn from(goal: FitnessGoal) -> Self {
        match goal {
            FitnessGoal::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal settings saved by the user
///
/// `diet` and `lacto_ovo` are only forwarded to the recipe prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Fitness goal
    pub goal: FitnessGoal,
    /// TDEE activity multiplier (typically 1.2 to 1.9, not enforced)
    #[serde(alias = "activityLevel")]
    pub activity_level: f64,
    /// Diet preference (e.g. "vegetarian")
    #[serde(default)]
    pub diet: String,
    /// Lacto-ovo sub-preference (e.g. "eggs and dairy")
    #[serde(default, alias = "lactoOvo")]
    pub lacto_ovo: String,
}

impl Goal {
    /// Create goal settings without diet preferences
    #[must_use]
    pub const fn new(goal: FitnessGoal, activity_level: f64) -> Self {
        Self {
            goal,
            activity_level,
            diet: String::new(),
            lacto_ovo: String::new(),
        }
    }

    /// Attach diet preferences
    #[must_use]
    pub fn with_diet(mut self, diet: impl Into<String>, lacto_ovo: impl Into<String>) -> Self {
        self.diet = diet.into();
        self.lacto_ovo = lacto_ovo.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_goal_round_trips_verbatim() {
        let goal: FitnessGoal = serde_json::from_str("\"Maintain\"").unwrap();
        assert_eq!(goal, FitnessGoal::Other("Maintain".to_owned()));
        assert_eq!(serde_json::to_string(&goal).unwrap(), "\"Maintain\"");
    }

    #[test]
    fn test_goal_accepts_camel_case_fields() {
        let goal: Goal =
            serde_json::from_str(r#"{"goal":"Shred","activityLevel":1.375,"lactoOvo":"eggs"}"#)
                .unwrap();
        assert_eq!(goal.goal, FitnessGoal::Shred);
        assert!((goal.activity_level - 1.375).abs() < f64::EPSILON);
        assert_eq!(goal.lacto_ovo, "eggs");
        assert!(goal.diet.is_empty());
    }
}
