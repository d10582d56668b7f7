//! Core error types for pantry-core.
//!
//! This module defines the error hierarchy using thiserror. Image lookup
//! failures are deliberately absent: they are recovered inside the image
//! client and never reach a caller.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pantry-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Batch generation failed
    #[error(transparent)]
    RecipeGeneration(#[from] RecipeGenerationError),

    /// Feedback delivery errors
    #[error("Feedback error: {0}")]
    Feedback(#[from] FeedbackError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input validation errors.
///
/// The `Display` text doubles as the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No ingredients were supplied
    #[error("Please add at least one ingredient")]
    EmptyIngredients,

    /// A feedback form lacks name, email or message
    #[error("Missing required fields")]
    MissingFeedbackFields,
}

/// Failure to produce a recipe batch.
///
/// The underlying cause is logged where it happens and then discarded,
/// so callers only ever see the fixed message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to generate recipes. Please try again.")]
pub struct RecipeGenerationError;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dotted key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to access data directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Errors raised while delivering feedback to the relay server.
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// The form failed local validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The configured server URL cannot be used
    #[error("Invalid feedback server URL: {0}")]
    BadUrl(#[from] url::ParseError),

    /// The request never produced a response
    #[error("Failed to reach feedback server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Feedback rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}
