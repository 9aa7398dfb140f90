// ABOUTME: Shopping list and prep list aggregation across the recipes of a meal plan
// ABOUTME: Sums ingredient quantities by name and unit; collects preprocessing steps in plan order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealplan_core::models::{MealSlot, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Ingredient name as first seen
    pub name: String,
    /// Unit shared by every summed line
    pub unit: String,
    /// Total quantity across recipes
    pub quantity: f64,
    /// Names of the recipes using this item
    pub recipes: Vec<String>,
}

/// A preprocessing step to do ahead of cooking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepTask {
    /// Recipe the step belongs to
    pub recipe_id: Uuid,
    /// Recipe name
    pub recipe_name: String,
    /// Recipe slot
    pub slot: MealSlot,
    /// Position within the recipe's preprocessing list
    pub position: u16,
    /// Instruction text
    pub instruction: String,
}

/// Sum ingredient quantities across recipes
///
/// Lines are merged when their trimmed, lowercased name and unit match.
/// Different units of the same ingredient stay separate lines. The result is
/// sorted by merged name, then unit.
#[must_use]
pub fn shopping_list(recipes: &[Recipe]) -> Vec<ShoppingItem> {
    let mut items: BTreeMap<(String, String), ShoppingItem> = BTreeMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let key = (
                ingredient.name.trim().to_lowercase(),
                ingredient.unit.trim().to_lowercase(),
            );
            let item = items.entry(key).or_insert_with(|| ShoppingItem {
                name: ingredient.name.trim().to_owned(),
                unit: ingredient.unit.trim().to_owned(),
                quantity: 0.0,
                recipes: Vec::new(),
            });
            item.quantity += ingredient.quantity;
            if !item.recipes.contains(&recipe.name) {
                item.recipes.push(recipe.name.clone());
            }
        }
    }

    items.into_values().collect()
}

/// Preprocessing steps of every recipe, recipe by recipe, in step order
#[must_use]
pub fn prep_list(recipes: &[Recipe]) -> Vec<PrepTask> {
    recipes
        .iter()
        .flat_map(|recipe| {
            let mut steps: Vec<_> = recipe.preprocessing.iter().collect();
            steps.sort_by_key(|step| step.position);
            steps.into_iter().map(move |step| PrepTask {
                recipe_id: recipe.id,
                recipe_name: recipe.name.clone(),
                slot: recipe.slot,
                position: step.position,
                instruction: step.instruction.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_core::models::{Ingredient, RecipeStep};

    fn recipe(name: &str, slot: MealSlot, ingredients: &[(&str, f64, &str)]) -> Recipe {
        let plan = Uuid::new_v4();
        ingredients.iter().fold(
            Recipe::new(Uuid::new_v4(), plan, name, slot),
            |recipe, (ingredient, quantity, unit)| {
                recipe.with_ingredient(Ingredient::new(*ingredient, *quantity, *unit))
            },
        )
    }

    #[test]
    fn test_quantities_merge_case_insensitively() {
        let recipes = vec![
            recipe(
                "Lunch 1 - Bowl",
                MealSlot::Lunch1,
                &[("Rice", 300.0, "g"), ("Onion", 1.0, "pc")],
            ),
            recipe(
                "Dinner 1 - Curry",
                MealSlot::Dinner1,
                &[(" rice ", 200.0, "g"), ("Onion", 2.0, "pc")],
            ),
        ];
        let list = shopping_list(&recipes);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Onion");
        assert!((list[0].quantity - 3.0).abs() < f64::EPSILON);
        assert_eq!(list[1].name, "Rice");
        assert!((list[1].quantity - 500.0).abs() < f64::EPSILON);
        assert_eq!(list[1].recipes, vec!["Lunch 1 - Bowl", "Dinner 1 - Curry"]);
    }

    #[test]
    fn test_units_are_not_converted() {
        let recipes = vec![recipe(
            "Snack",
            MealSlot::Snack,
            &[("Milk", 200.0, "ml"), ("Milk", 1.0, "cup")],
        )];
        assert_eq!(shopping_list(&recipes).len(), 2);
    }

    #[test]
    fn test_prep_list_follows_recipe_then_step_order() {
        let mut first = recipe("Lunch 1 - Beans", MealSlot::Lunch1, &[]);
        first.preprocessing = RecipeStep::numbered(["Soak beans", "Dice onion"]);
        first.preprocessing.reverse();
        let mut second = recipe("Dinner 2 - Tofu", MealSlot::Dinner2, &[]);
        second.preprocessing = RecipeStep::numbered(["Press tofu"]);

        let tasks = prep_list(&[first, second]);
        let instructions: Vec<_> = tasks.iter().map(|t| t.instruction.as_str()).collect();
        assert_eq!(instructions, vec!["Soak beans", "Dice onion", "Press tofu"]);
        assert_eq!(tasks[2].slot, MealSlot::Dinner2);
    }
}
