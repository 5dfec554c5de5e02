//! Hosted backend configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::runtime::Environment;
use crate::domain::user::DEFAULT_MAX_AVATAR_BYTES;

/// Connection settings for the hosted backend (record store, identity,
/// file storage).
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`
    #[serde(default)]
    pub url: String,

    /// Public anonymous API key
    #[serde(default)]
    pub anon_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Storage bucket holding avatar images
    #[serde(default = "default_avatar_bucket")]
    pub avatar_bucket: String,

    /// Largest accepted avatar, in bytes
    #[serde(default = "default_max_avatar_bytes")]
    pub max_avatar_bytes: u64,
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The anon key, wrapped so it stays out of logs.
    pub fn anon_key_secret(&self) -> SecretString {
        SecretString::new(self.anon_key.clone())
    }

    /// Validate backend configuration
    ///
    /// In production, requires HTTPS for the backend URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("BACKEND__URL"));
        }
        if self.anon_key.is_empty() {
            return Err(ValidationError::MissingRequired("BACKEND__ANON_KEY"));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if *environment == Environment::Production && !self.url.starts_with("https://") {
            return Err(ValidationError::BackendMustBeHttps);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_avatar_bytes == 0 {
            return Err(ValidationError::InvalidAvatarLimit);
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            request_timeout_secs: default_request_timeout(),
            avatar_bucket: default_avatar_bucket(),
            max_avatar_bytes: default_max_avatar_bytes(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_avatar_bucket() -> String {
    "avatars".to_string()
}

fn default_max_avatar_bytes() -> u64 {
    DEFAULT_MAX_AVATAR_BYTES
}
