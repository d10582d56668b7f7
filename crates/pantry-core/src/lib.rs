//! # Pantry Chef Core Library
//!
//! This library provides the core logic behind Pantry Chef, a recipe
//! suggestion tool. A user supplies the ingredients they have on hand and
//! receives a batch of synthesized recipes, each enriched with a stock photo.
//! The CLI and the feedback relay server are thin layers over this crate.
//!
//! ## Architecture
//!
//! - **Recipe Synthesizer**: randomized template filling over static word
//!   lists, driven by a seedable PRNG
//! - **Image Lookup**: best-effort photo search that never fails; any problem
//!   maps to a placeholder URL
//! - **Recommender**: synthesizes a batch, fans out image lookups and merges
//!   the results back by position
//! - **Stores**: explicit state containers for recipes, favorites and toasts
//! - **Feedback**: the feedback form model and a client for the relay server
//!
//! ## Key Components
//!
//! - [`RecipeSynthesizer`]: builds one [`Recipe`] from a list of mains
//! - [`ImageLookup`]: trait implemented by [`PexelsClient`]
//! - [`Recommender`]: batch orchestration
//! - [`RecipeStore`]: observable recipe state
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod feedback;
pub mod images;
pub mod recipe;
pub mod recommend;
pub mod store;

pub use config::Config;
pub use error::{ConfigError, CoreError, FeedbackError, RecipeGenerationError, ValidationError};
pub use feedback::{FeedbackClient, FeedbackMessage, OutgoingMail};
pub use images::{ImageLookup, PexelsClient, PlaceholderImages, PLACEHOLDER_IMAGE_URL};
pub use recipe::{Difficulty, IngredientLine, NutritionInfo, Recipe, RecipeSynthesizer};
pub use recommend::{Recommender, BATCH_SIZE};
pub use store::{RecipeState, RecipeStore, Toast, ToastState};
