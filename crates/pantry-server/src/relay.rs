//! Outbound mail delivery.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use pantry_core::OutgoingMail;
use tracing::debug;

use crate::config::SmtpConfig;
use crate::error::RelayError;

/// Delivers rendered feedback mail.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), RelayError>;
}

/// SMTP relay using STARTTLS.
pub struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpRelay {
    pub fn new(config: &SmtpConfig) -> Result<Self, RelayError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

/// Convert an [`OutgoingMail`] into a lettre message.
fn build_message(mail: OutgoingMail) -> Result<Message, RelayError> {
    let from = Mailbox::new(Some(mail.from_name), mail.from_email.parse()?);

    let message = Message::builder()
        .from(from)
        .reply_to(mail.reply_to.parse()?)
        .to(mail.to.parse()?)
        .subject(mail.subject)
        .header(ContentType::TEXT_HTML)
        .body(mail.html_body)?;

    Ok(message)
}

#[async_trait]
impl MailRelay for SmtpRelay {
    async fn send(&self, mail: OutgoingMail) -> Result<(), RelayError> {
        let message = build_message(mail)?;
        let response = self.transport.send(message).await?;
        debug!(code = %response.code(), "SMTP relay accepted message");
        Ok(())
    }
}
