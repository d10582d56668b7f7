//! Randomized recipe synthesis.
//!
//! The synthesizer fills fixed templates with draws from the catalogs in
//! [`super::catalog`]. Output shape is deterministic for a given input:
//! `mains.len() + 3` ingredient lines and 8 or 9 instruction steps. Content
//! is random; seed the synthesizer for reproducible output.

use chrono::Utc;
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use uuid::Uuid;

use super::catalog::{
    Seasoning, COOKING_STYLES, COOK_TIMES, MAIN_UNITS, SEASONINGS, SEASONINGS_PER_RECIPE,
};
use super::{Difficulty, IngredientLine, NutritionInfo, Recipe};
use crate::error::ValidationError;

/// Builds [`Recipe`] records from a list of main ingredients.
pub struct RecipeSynthesizer {
    rng: Mcg128Xsl64,
}

impl Default for RecipeSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeSynthesizer {
    /// Create a synthesizer seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Create a synthesizer with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Synthesize one recipe.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIngredients`] if `mains` is empty.
    pub fn synthesize<S: AsRef<str>>(&mut self, mains: &[S]) -> Result<Recipe, ValidationError> {
        let mains: Vec<&str> = mains.iter().map(AsRef::as_ref).collect();
        let Some(&primary) = mains.first() else {
            return Err(ValidationError::EmptyIngredients);
        };

        let name = self.recipe_name(&mains);
        let seasonings = self.pick_seasonings();
        let ingredients = self.ingredient_lines(&mains, &seasonings);
        let instructions = self.instructions(primary, &mains[1..], &seasonings);

        let cooking_time = COOK_TIMES[self.rng.gen_range(0..COOK_TIMES.len())];
        let difficulty = Difficulty::ALL[self.rng.gen_range(0..Difficulty::ALL.len())];
        let nutrition_info = NutritionInfo {
            calories: self.rng.gen_range(200..600),
            protein: self.rng.gen_range(10..40),
            carbs: self.rng.gen_range(20..70),
            fat: self.rng.gen_range(5..25),
        };

        Ok(Recipe {
            id: recipe_id(),
            description: describe(&name),
            name,
            cooking_time,
            difficulty,
            ingredients,
            instructions,
            nutrition_info,
            image: String::new(),
        })
    }

    fn cooking_style(&mut self) -> &'static str {
        COOKING_STYLES[self.rng.gen_range(0..COOKING_STYLES.len())]
    }

    fn recipe_name(&mut self, mains: &[&str]) -> String {
        let style = self.cooking_style();
        match mains.get(1) {
            Some(secondary) => format!("{style} {} with {secondary}", mains[0]),
            None => format!("{style} {}", mains[0]),
        }
    }

    /// Shuffle the catalog and take the first three.
    fn pick_seasonings(&mut self) -> [Seasoning; SEASONINGS_PER_RECIPE] {
        let mut pool = SEASONINGS;
        pool.shuffle(&mut self.rng);
        [pool[0], pool[1], pool[2]]
    }

    fn ingredient_lines(&mut self, mains: &[&str], seasonings: &[Seasoning]) -> Vec<IngredientLine> {
        let mut lines = Vec::with_capacity(mains.len() + seasonings.len());

        for (index, main) in mains.iter().enumerate() {
            let quantity: u32 = self.rng.gen_range(100..400);
            let unit = MAIN_UNITS[self.rng.gen_range(0..MAIN_UNITS.len())];
            lines.push(IngredientLine {
                id: format!("main-{}", index + 1),
                name: (*main).to_string(),
                quantity: quantity.to_string(),
                unit: unit.to_string(),
            });
        }

        for (index, seasoning) in seasonings.iter().enumerate() {
            lines.push(IngredientLine {
                id: format!("seasoning-{}", index + 1),
                name: seasoning.name.to_string(),
                quantity: seasoning.quantity.to_string(),
                unit: seasoning.unit.to_string(),
            });
        }

        lines
    }

    fn instructions(
        &mut self,
        primary: &str,
        others: &[&str],
        seasonings: &[Seasoning; SEASONINGS_PER_RECIPE],
    ) -> Vec<String> {
        let method = self.cooking_style();

        let mut steps = vec![
            "Prepare all ingredients and measure out the quantities.".to_string(),
            format!(
                "Season {primary} with {} and {}.",
                seasonings[0].name, seasonings[1].name
            ),
            "Heat your cooking vessel over medium-high heat.".to_string(),
            format!("{method} the {primary} until perfectly cooked."),
        ];

        if !others.is_empty() {
            steps.push(format!("Add {} and cook until tender.", others.join(", ")));
        }

        steps.push(format!("Add {} and stir to combine.", seasonings[2].name));
        steps.push("Adjust seasoning to taste.".to_string());
        steps.push("Let rest for 2-3 minutes before serving.".to_string());
        steps.push("Garnish with fresh herbs and serve hot.".to_string());

        steps
    }
}

/// Creation time in epoch milliseconds plus a random suffix, so recipes
/// built within the same millisecond stay distinct.
fn recipe_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}

fn describe(name: &str) -> String {
    format!(
        "A delightful {} prepared with fresh ingredients and aromatic seasonings. Perfect for any occasion!",
        name.to_lowercase()
    )
}
