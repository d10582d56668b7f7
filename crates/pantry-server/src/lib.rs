//! Pantry Chef feedback relay.
//!
//! A small HTTP server that accepts feedback form submissions and forwards
//! them by email.
//!
//! # Routes
//!
//! - `GET /` health check
//! - `POST /api/feedback` validate and relay a [`FeedbackMessage`]
//! - anything else answers 404 with a JSON body
//!
//! # Configuration
//!
//! Read from the environment at startup: `PORT`, `SMTP_HOST`, `SMTP_PORT`,
//! `SMTP_USERNAME`, `SMTP_PASSWORD`, `FEEDBACK_RECIPIENT`.
//!
//! [`FeedbackMessage`]: pantry_core::FeedbackMessage

use std::{any::Any, sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use pantry_core::feedback::FEEDBACK_PATH;
use tokio::{net::TcpListener, signal};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
};
use tracing::{error, info, warn};

pub mod config;
pub mod error;
pub mod relay;
pub mod routes;

use config::ServerConfig;
use error::AppError;
use relay::MailRelay;
use routes::{feedback_handler, health_handler, not_found_handler};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn MailRelay>,
    pub recipient: String,
}

impl AppState {
    pub fn new(relay: Arc<dyn MailRelay>, recipient: impl Into<String>) -> Self {
        Self {
            relay,
            recipient: recipient.into(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(health_handler).fallback(not_found_handler))
        .route(FEEDBACK_PATH, post(feedback_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

/// Turn a handler panic into the generic 500 JSON body.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    error!(%detail, "Request handler panicked");
    AppError::Internal(detail).into_response()
}

/// Bind to `config.port` and serve until Ctrl+C or SIGTERM.
pub async fn start_server(config: ServerConfig, relay: Arc<dyn MailRelay>) -> std::io::Result<()> {
    let state = AppState::new(relay, config.recipient);
    let app = build_router(state);

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;

    info!("Server running on port {}", config.port);
    info!("Health check: http://localhost:{}", config.port);
    info!("Feedback endpoint: http://localhost:{}{FEEDBACK_PATH}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
