//! Batch recommendation: synthesize, enrich with images, merge by position.
//!
//! ## Flow
//!
//! ```text
//! ingredients -> synthesize x3 -> spawn lookup per recipe -> join all -> merge by index
//! ```
//!
//! Lookups complete in any order. Each spawned task carries the batch index
//! of its recipe, so results are written back by position, never by
//! completion order. Either the whole batch is returned or nothing is.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::error::RecipeGenerationError;
use crate::images::ImageLookup;
use crate::recipe::{Recipe, RecipeSynthesizer};

/// Number of recipes produced per request.
pub const BATCH_SIZE: usize = 3;

/// Drives the synthesizer and the image lookup for one batch at a time.
pub struct Recommender<L> {
    synthesizer: RecipeSynthesizer,
    images: Arc<L>,
}

impl<L: ImageLookup + 'static> Recommender<L> {
    /// Create a recommender with an entropy-seeded synthesizer.
    pub fn new(images: L) -> Self {
        Self::with_synthesizer(RecipeSynthesizer::new(), images)
    }

    pub fn with_synthesizer(synthesizer: RecipeSynthesizer, images: L) -> Self {
        Self {
            synthesizer,
            images: Arc::new(images),
        }
    }

    /// Produce [`BATCH_SIZE`] recipes for `ingredients`, each with an image.
    ///
    /// Input is assumed to be validated by the caller.
    ///
    /// # Errors
    ///
    /// Any synthesis or task failure collapses into [`RecipeGenerationError`].
    pub async fn recommend<S: AsRef<str>>(
        &mut self,
        ingredients: &[S],
    ) -> Result<Vec<Recipe>, RecipeGenerationError> {
        let recipes = (0..BATCH_SIZE)
            .map(|_| self.synthesizer.synthesize(ingredients))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!(error = %e, "error generating recipes");
                RecipeGenerationError
            })?;

        self.enrich(recipes).await
    }

    async fn enrich(&self, recipes: Vec<Recipe>) -> Result<Vec<Recipe>, RecipeGenerationError> {
        let mut lookups = JoinSet::new();
        for (index, recipe) in recipes.iter().enumerate() {
            let images = Arc::clone(&self.images);
            let query = recipe.name.clone();
            lookups.spawn(async move { (index, images.lookup_image(&query).await) });
        }

        let mut urls: Vec<Option<String>> = vec![None; recipes.len()];
        while let Some(joined) = lookups.join_next().await {
            let (index, url) = joined.map_err(|e| {
                error!(error = %e, "image lookup task failed");
                RecipeGenerationError
            })?;
            debug!(index, %url, "image resolved");
            urls[index] = Some(url);
        }

        recipes
            .into_iter()
            .zip(urls)
            .map(|(recipe, url)| url.map(|u| recipe.with_image(u)).ok_or(RecipeGenerationError))
            .collect()
    }
}
