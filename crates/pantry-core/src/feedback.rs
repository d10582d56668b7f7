//! Feedback form model and relay client.
//!
//! The relay server and the CLI share these types: the server validates a
//! [`FeedbackMessage`] and renders it into an [`OutgoingMail`], the CLI posts
//! one through [`FeedbackClient`].

use html_escape::encode_safe;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{FeedbackError, ValidationError};

/// Path of the feedback endpoint on the relay server.
pub const FEEDBACK_PATH: &str = "/api/feedback";

/// A feedback form submission.
///
/// Every field defaults to empty so that incomplete payloads deserialize and
/// are then rejected by [`FeedbackMessage::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// A rendered email ready for a mail relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Body returned by the relay server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FeedbackMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject,
            message: message.into(),
        }
    }

    /// Name, email and message are required; subject is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let blank = |s: &String| s.trim().is_empty();
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(ValidationError::MissingFeedbackFields);
        }
        Ok(())
    }

    fn subject_line(&self) -> &str {
        self.subject
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("(no subject)")
    }

    /// Render the email delivered to `recipient`.
    pub fn to_mail(&self, recipient: &str) -> OutgoingMail {
        let subject = self.subject_line();
        let html_body = format!(
            "<h2>New Feedback from Pantry Chef</h2>\n\
             <p><strong>From:</strong> {name} ({email})</p>\n\
             <p><strong>Subject:</strong> {subject}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{message}</p>\n",
            name = encode_safe(&self.name),
            email = encode_safe(&self.email),
            subject = encode_safe(subject),
            message = encode_safe(&self.message),
        );

        OutgoingMail {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            reply_to: self.email.clone(),
            to: recipient.to_string(),
            subject: format!("Pantry Chef Feedback: {subject}"),
            html_body,
        }
    }
}

/// HTTP client for the feedback relay server.
pub struct FeedbackClient {
    endpoint: Url,
    http_client: Client,
}

impl FeedbackClient {
    /// Create a client for the server rooted at `server_url`.
    pub fn new(server_url: &str) -> Result<Self, FeedbackError> {
        let mut base = Url::parse(server_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        // Relative join keeps any prefix the relay is mounted under.
        let endpoint = base.join(FEEDBACK_PATH.trim_start_matches('/'))?;
        Ok(Self {
            endpoint,
            http_client: Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Validate and submit `feedback`, returning the server's message.
    ///
    /// # Errors
    ///
    /// Fails on local validation, transport errors, or a non-success reply.
    pub async fn send(&self, feedback: &FeedbackMessage) -> Result<String, FeedbackError> {
        feedback.validate()?;

        let resp = self
            .http_client
            .post(self.endpoint.clone())
            .json(feedback)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        debug!(status = status.as_u16(), "feedback server replied");

        let body: Option<FeedbackResponse> = serde_json::from_str(&text).ok();

        if status.is_success() {
            return Ok(body.map(|b| b.message).unwrap_or(text));
        }

        let message = match body {
            Some(FeedbackResponse {
                message,
                error: Some(error),
            }) => format!("{message}: {error}"),
            Some(FeedbackResponse { message, .. }) => message,
            None => text,
        };

        Err(FeedbackError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
