//! Recipe data model and synthesis.
//!
//! A [`Recipe`] is created whole by the [`RecipeSynthesizer`]; the only field
//! touched afterwards is `image`, filled in by the recommender.

pub mod catalog;
pub mod synthesizer;

pub use catalog::{Seasoning, COOKING_STYLES, COOK_TIMES, MAIN_UNITS, SEASONINGS};
pub use synthesizer::RecipeSynthesizer;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty rating of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Unique within the recipe (`main-1`, `seasoning-2`, ...)
    pub id: String,
    pub name: String,
    /// Decimal or vulgar-fraction text, e.g. `"250"` or `"1/2"`
    pub quantity: String,
    pub unit: String,
}

/// Estimated nutrition per serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// A synthesized recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Minutes
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<IngredientLine>,
    pub instructions: Vec<String>,
    pub nutrition_info: NutritionInfo,
    /// Image URL; empty until enriched
    pub image: String,
}

impl Recipe {
    /// Return a copy of this recipe with `image` replaced.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}
