//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LAKEHOUSE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use lakehouse_calendar::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod backend;
mod error;
mod features;
mod runtime;

pub use backend::BackendConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use runtime::{Environment, RuntimeConfig};

use serde::Deserialize;

use crate::application::handlers::user::ProfileSettings;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment and log filter
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Hosted backend connection; unused in demo mode
    #[serde(default)]
    pub backend: BackendConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LAKEHOUSE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LAKEHOUSE__BACKEND__URL=...` -> `backend.url = ...`
    /// - `LAKEHOUSE__FEATURES__DEMO_MODE=true` -> `features.demo_mode = true`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LAKEHOUSE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The backend section is only checked outside demo mode.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        if !self.features.demo_mode {
            self.backend.validate(&self.runtime.environment)?;
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }

    /// Settings for the profile handlers.
    pub fn profile_settings(&self) -> ProfileSettings {
        ProfileSettings {
            demo_mode: self.features.demo_mode,
            max_avatar_bytes: self.backend.max_avatar_bytes,
        }
    }
}
