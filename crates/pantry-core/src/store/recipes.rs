//! Recipe search results and favorites.

use serde::Serialize;
use tokio::sync::watch;
use tracing::info;

use crate::error::{CoreError, ValidationError};
use crate::images::ImageLookup;
use crate::recipe::Recipe;
use crate::recommend::Recommender;

/// Snapshot of everything a front end renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeState {
    pub recipes: Vec<Recipe>,
    pub favorite_recipes: Vec<Recipe>,
    pub is_loading: bool,
    /// User-facing message of the last failure, cleared on the next fetch.
    pub error: Option<String>,
    pub last_search_ingredients: Vec<String>,
}

/// Owns the recommender and the observable [`RecipeState`].
pub struct RecipeStore<L> {
    recommender: Recommender<L>,
    state: watch::Sender<RecipeState>,
}

impl<L: ImageLookup + 'static> RecipeStore<L> {
    pub fn new(recommender: Recommender<L>) -> Self {
        let (state, _) = watch::channel(RecipeState::default());
        Self { recommender, state }
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<RecipeState> {
        self.state.subscribe()
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> RecipeState {
        self.state.borrow().clone()
    }

    /// Fetch a new batch for `ingredients`.
    ///
    /// The outcome is always reflected in the state. On failure the current
    /// recipes are cleared and `error` holds the message that is also
    /// returned here.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyIngredients`] without contacting the
    /// recommender, or the recommender's generation error.
    pub async fn fetch_recipes<S: AsRef<str>>(&mut self, ingredients: &[S]) -> Result<(), CoreError> {
        if ingredients.is_empty() {
            let err = ValidationError::EmptyIngredients;
            self.state.send_modify(|s| s.error = Some(err.to_string()));
            return Err(err.into());
        }

        let search: Vec<String> = ingredients.iter().map(|i| i.as_ref().to_string()).collect();
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
            s.last_search_ingredients = search;
        });

        let result = self.recommender.recommend(ingredients).await;

        match result {
            Ok(recipes) => {
                info!(count = recipes.len(), "recipes fetched");
                self.state.send_modify(|s| {
                    s.recipes = recipes;
                    s.is_loading = false;
                });
                Ok(())
            }
            Err(err) => {
                self.state.send_modify(|s| {
                    s.error = Some(err.to_string());
                    s.recipes.clear();
                    s.is_loading = false;
                });
                Err(err.into())
            }
        }
    }

    /// Add `recipe` unless a favorite with the same id exists.
    /// Returns whether it was added.
    pub fn add_to_favorites(&self, recipe: Recipe) -> bool {
        self.state.send_if_modified(|s| {
            if s.favorite_recipes.iter().any(|r| r.id == recipe.id) {
                return false;
            }
            s.favorite_recipes.push(recipe);
            true
        })
    }

    /// Remove favorites with `recipe_id`. Returns whether any were removed.
    pub fn remove_from_favorites(&self, recipe_id: &str) -> bool {
        self.state.send_if_modified(|s| {
            let before = s.favorite_recipes.len();
            s.favorite_recipes.retain(|r| r.id != recipe_id);
            s.favorite_recipes.len() != before
        })
    }
}
