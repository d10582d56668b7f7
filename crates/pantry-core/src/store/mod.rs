//! Explicit state containers for front ends.
//!
//! Each store is an ordinary value owned by the caller and passed by
//! reference. [`RecipeStore`] publishes snapshots through a
//! `tokio::sync::watch` channel for observers.

pub mod recipes;
pub mod toast;

pub use recipes::{RecipeState, RecipeStore};
pub use toast::{Toast, ToastState};
