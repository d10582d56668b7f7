use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Relay server settings, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub smtp: SmtpConfig,
    /// Address that receives every feedback mail.
    pub recipient: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ServerConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let smtp = SmtpConfig {
            host: try_load(&lookup, "SMTP_HOST", "smtp.gmail.com".to_string()),
            port: try_load(&lookup, "SMTP_PORT", 587),
            username: secret(&lookup, "SMTP_USERNAME"),
            password: secret(&lookup, "SMTP_PASSWORD"),
        };

        let recipient = match secret(&lookup, "FEEDBACK_RECIPIENT").or_else(|| smtp.username.clone())
        {
            Some(recipient) => recipient,
            None => {
                warn!("No feedback recipient configured, every send will fail");
                String::new()
            }
        };

        Self {
            port: try_load(&lookup, "PORT", 3000),
            smtp,
            recipient,
        }
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T::Err: Display,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}, using default");
            default
        }),
        None => {
            info!("{key} not set, using default");
            default
        }
    }
}

fn secret(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    let value = lookup(key).filter(|v| !v.trim().is_empty());
    if value.is_none() {
        warn!("Environment variable {key} not found");
    }
    value
}
