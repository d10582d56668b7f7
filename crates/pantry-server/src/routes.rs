use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use pantry_core::{feedback::FeedbackResponse, FeedbackMessage};
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::error::AppError;
use crate::AppState;

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "Server is running" }))
}

pub async fn feedback_handler(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackMessage>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let Json(feedback) = payload.map_err(reject_payload)?;
    feedback.validate()?;

    let mail = feedback.to_mail(&state.recipient);
    state.relay.send(mail).await.map_err(|e| {
        error!(error = %e, "Error sending email");
        AppError::Relay(e)
    })?;

    info!(from = %feedback.email, "Feedback relayed");
    Ok(Json(FeedbackResponse {
        message: "Feedback sent successfully".to_string(),
        error: None,
    }))
}

/// A body without a JSON content type, or with wrongly typed fields, carries
/// no usable fields. Anything unparsable is an internal error.
fn reject_payload(rejection: JsonRejection) -> AppError {
    debug!(%rejection, "Rejected feedback payload");
    match rejection {
        JsonRejection::MissingJsonContentType(_) | JsonRejection::JsonDataError(_) => {
            AppError::MissingFields
        }
        other => AppError::Internal(other.body_text()),
    }
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
