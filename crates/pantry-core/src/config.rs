//! TOML-based application configuration.
//!
//! Stores:
//! - Image provider settings (endpoint, API key, page size, orientation)
//! - Feedback relay server location
//!
//! Configuration is stored at `~/.config/pantry-chef/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable holding the image provider API key.
pub const ENV_API_KEY: &str = "PEXELS_API_KEY";
/// Environment variable overriding the image search endpoint.
pub const ENV_IMAGE_ENDPOINT: &str = "PANTRY_CHEF_IMAGE_ENDPOINT";
/// Environment variable overriding the feedback server URL.
pub const ENV_FEEDBACK_URL: &str = "PANTRY_CHEF_FEEDBACK_URL";

/// Returns `~/.config/pantry-chef[-dev]/` based on PANTRY_CHEF_ENV.
///
/// Set PANTRY_CHEF_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PANTRY_CHEF_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("pantry-chef-dev")
    } else {
        base_dir.join("pantry-chef")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// Image search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_image_endpoint")]
    pub endpoint: String,
    /// Sent verbatim in the `Authorization` header.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_orientation")]
    pub orientation: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Feedback relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/pantry-chef/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

// Default functions
fn default_image_endpoint() -> String {
    "https://api.pexels.com/v1/search".into()
}
fn default_per_page() -> u32 {
    15
}
fn default_orientation() -> String {
    "landscape".into()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_server_url() -> String {
    "http://localhost:3000".into()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_image_endpoint(),
            api_key: String::new(),
            per_page: default_per_page(),
            orientation: default_orientation(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(unknown());
            }
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                serde_json::Value::Object(_) => return Err(unknown()),
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Default location of the configuration file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value has the wrong type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Apply environment overrides for secrets and endpoints.
    ///
    /// Kept separate from [`Config::load`] so overrides are never written
    /// back to disk.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.images.api_key = key;
        }
        if let Some(endpoint) = lookup(ENV_IMAGE_ENDPOINT).filter(|v| !v.is_empty()) {
            self.images.endpoint = endpoint;
        }
        if let Some(url) = lookup(ENV_FEEDBACK_URL).filter(|v| !v.is_empty()) {
            self.feedback.server_url = url;
        }
        self
    }
}
