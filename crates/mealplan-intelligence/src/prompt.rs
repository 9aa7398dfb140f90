// ABOUTME: Cuisine selection and recipe-generation prompt rendering
// ABOUTME: Embeds the remaining weekly targets, slot label, cuisine, and diet preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::weekly_budget::round_half_up;
use mealplan_core::constants::meal_slots::CUISINE_PICK_WINDOW;
use mealplan_core::models::{MealSlot, WeeklyBudget};
use rand::Rng;
use std::fmt::Write;

/// Pick a cuisine uniformly among the first four entries of the pool
///
/// Entries past the fourth are never picked. A pool with fewer entries is
/// sampled over what it has; an empty pool yields `None`.
pub fn select_cuisine<'a, R>(cuisine_pool: &'a [String], rng: &mut R) -> Option<&'a str>
where
    R: Rng + ?Sized,
{
    let window = cuisine_pool.len().min(CUISINE_PICK_WINDOW);
    if window == 0 {
        return None;
    }
    cuisine_pool
        .get(rng.gen_range(0..window))
        .map(String::as_str)
}

/// Render the prompt handed to the recipe generator
///
/// Remaining targets are rounded to whole numbers. For batched slots the
/// per-serving target is the remaining budget spread over the slot's days.
#[must_use]
pub fn build_prompt(
    remaining: &WeeklyBudget,
    slot: MealSlot,
    cuisine: Option<&str>,
    diet: &str,
    lacto_ovo: &str,
) -> String {
    let mut prompt = String::from(
        "Create one batch-cooked recipe that fits the nutrition budget below.\n\n",
    );

    let _ = writeln!(prompt, "Remaining weekly budget:");
    let _ = writeln!(
        prompt,
        "- Calories: {:.0} kcal",
        round_half_up(remaining.calories)
    );
    let _ = writeln!(prompt, "- Protein: {:.0} g", round_half_up(remaining.protein));
    let _ = writeln!(prompt, "- Fat: {:.0} g", round_half_up(remaining.fat));
    prompt.push('\n');

    let days = slot.day_count();
    if let Some(per_serving) = remaining.per_day(days) {
        let _ = writeln!(
            prompt,
            "The recipe is eaten on {days} days, so one serving should provide about \
             {:.0} kcal, {:.0} g protein and {:.0} g fat.",
            round_half_up(per_serving.calories),
            round_half_up(per_serving.protein),
            round_half_up(per_serving.fat),
        );
    }

    let _ = writeln!(
        prompt,
        "The recipe name must start with \"{}\".",
        slot.label()
    );
    let _ = writeln!(prompt, "Cuisine: {}", cuisine.unwrap_or("any cuisine"));
    let _ = writeln!(prompt, "Diet: {diet}");
    if !lacto_ovo.trim().is_empty() {
        let _ = writeln!(prompt, "Lacto-ovo preference: {lacto_ovo}");
    }
    prompt.push('\n');

    prompt.push_str(
        "Respond with JSON only, in this shape:\n\
         {\"name\": string, \"calories\": number, \"protein\": number, \"fat\": number, \
         \"servings\": number, \
         \"ingredients\": [{\"name\": string, \"quantity\": number, \"unit\": string}], \
         \"preprocessing\": [string], \"steps\": [string]}\n\
         Calories, protein and fat are per serving.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pool(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn test_cuisine_limited_to_first_four() {
        let cuisines = pool(&["Thai", "Greek", "Peruvian", "Korean", "Ethiopian", "French"]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let picked = select_cuisine(&cuisines, &mut rng).unwrap();
            assert!(cuisines[..4].iter().any(|c| c == picked));
        }
    }

    #[test]
    fn test_short_pool_is_sampled_without_gaps() {
        let cuisines = pool(&["Thai", "Greek"]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = [false; 2];
        for _ in 0..200 {
            match select_cuisine(&cuisines, &mut rng) {
                Some("Thai") => seen[0] = true,
                Some("Greek") => seen[1] = true,
                other => panic!("unexpected pick {other:?}"),
            }
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_empty_pool_has_no_cuisine() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(select_cuisine(&[], &mut rng), None);
    }

    #[test]
    fn test_prompt_embeds_rounded_targets() {
        let remaining = WeeklyBudget::new(12_345.6, 801.4, 402.5);
        let prompt = build_prompt(
            &remaining,
            MealSlot::Lunch2,
            Some("Mexican"),
            "vegetarian",
            "yes",
        );

        assert!(prompt.contains("12346 kcal"));
        assert!(prompt.contains("801 g"));
        assert!(prompt.contains("403 g"));
        assert!(prompt.contains("start with \"Lunch 2\""));
        assert!(prompt.contains("eaten on 4 days"));
        assert!(prompt.contains("Cuisine: Mexican"));
        assert!(prompt.contains("Diet: vegetarian"));
        assert!(prompt.contains("Lacto-ovo preference: yes"));
    }

    #[test]
    fn test_prompt_without_cuisine_or_batch_days() {
        let remaining = WeeklyBudget::new(2000.0, 150.0, 60.0);
        let prompt = build_prompt(&remaining, MealSlot::Breakfast, None, "omnivore", "");

        assert!(prompt.contains("Cuisine: any cuisine"));
        assert!(!prompt.contains("eaten on"));
        assert!(!prompt.contains("Lacto-ovo"));
    }
}
