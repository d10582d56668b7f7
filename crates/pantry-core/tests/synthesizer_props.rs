//! Property tests for recipe synthesis.
//!
//! Output is random, so these assert structure only.

use pantry_core::recipe::{COOK_TIMES, SEASONINGS};
use pantry_core::{Difficulty, RecipeSynthesizer};
use proptest::prelude::*;

fn mains_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}( [a-z]{1,8})?", 1..6)
}

proptest! {
    #[test]
    fn ingredients_start_with_mains_in_order(mains in mains_strategy(), seed in any::<u64>()) {
        let recipe = RecipeSynthesizer::with_seed(seed).synthesize(mains.as_slice()).unwrap();

        prop_assert_eq!(recipe.ingredients.len(), mains.len() + 3);
        for (line, main) in recipe.ingredients.iter().zip(&mains) {
            prop_assert_eq!(&line.name, main);
        }
        for line in &recipe.ingredients[mains.len()..] {
            prop_assert!(SEASONINGS.iter().any(|s| s.name == line.name));
        }
    }

    #[test]
    fn instruction_count_depends_only_on_main_count(mains in mains_strategy(), seed in any::<u64>()) {
        let recipe = RecipeSynthesizer::with_seed(seed).synthesize(mains.as_slice()).unwrap();
        let expected = if mains.len() == 1 { 8 } else { 9 };
        prop_assert_eq!(recipe.instructions.len(), expected);
    }

    #[test]
    fn scalar_fields_stay_in_their_sets(mains in mains_strategy(), seed in any::<u64>()) {
        let recipe = RecipeSynthesizer::with_seed(seed).synthesize(mains.as_slice()).unwrap();

        prop_assert!(COOK_TIMES.contains(&recipe.cooking_time));
        prop_assert!(Difficulty::ALL.contains(&recipe.difficulty));

        let n = recipe.nutrition_info;
        prop_assert!((200..600).contains(&n.calories));
        prop_assert!((10..40).contains(&n.protein));
        prop_assert!((20..70).contains(&n.carbs));
        prop_assert!((5..25).contains(&n.fat));
        prop_assert!(recipe.image.is_empty());
    }

    #[test]
    fn name_mentions_first_two_mains(mains in mains_strategy(), seed in any::<u64>()) {
        let recipe = RecipeSynthesizer::with_seed(seed).synthesize(mains.as_slice()).unwrap();
        let suffix = match mains.get(1) {
            Some(second) => format!(" {} with {}", mains[0], second),
            None => format!(" {}", mains[0]),
        };
        prop_assert!(recipe.name.ends_with(&suffix));
    }
}
