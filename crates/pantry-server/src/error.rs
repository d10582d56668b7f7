use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pantry_core::{feedback::FeedbackResponse, ValidationError};
use thiserror::Error;

/// Failures while handing a message to the mail relay.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Failed to send feedback")]
    Relay(#[source] RelayError),

    #[error("Route not found")]
    NotFound,

    /// Anything the handlers did not anticipate, including panics.
    #[error("Something went wrong!")]
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(_: ValidationError) -> Self {
        AppError::MissingFields
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error = match &self {
            AppError::Relay(source) => Some(source.to_string()),
            AppError::Internal(detail) => Some(detail.clone()),
            _ => None,
        };
        let body = FeedbackResponse {
            message: self.to_string(),
            error,
        };

        (status, Json(body)).into_response()
    }
}
