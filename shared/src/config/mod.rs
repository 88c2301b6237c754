//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token secrets, lifetimes and the reference identity
//! - `cache` - Session store (Redis) connection settings
//! - `environment` - Environment detection
//! - `proxy` - Read-through cache and upstream client settings
//! - `server` - HTTP server settings

pub mod auth;
pub mod cache;
pub mod environment;
pub mod proxy;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub use auth::{AuthConfig, ReferenceUser};
pub use cache::{CacheConfig, SessionBackend};
pub use environment::Environment;
pub use proxy::ProxyConfig;
pub use server::ServerConfig;

/// Configuration problems detected at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Session store configuration
    pub cache: CacheConfig,

    /// Proxy configuration
    #[serde(default)]
    pub proxy: ProxyConfig,
}

impl AppConfig {
    /// Load configuration from environment, honouring a `.env` file if present
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            cache: CacheConfig::from_env(),
            proxy: ProxyConfig::from_env(),
        }
    }

    /// Validate the parts of the configuration that cannot be defaulted safely
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;
        if self.environment.is_production() && self.auth.is_using_default_secrets() {
            return Err(ConfigError::Missing("ACCESS_SECRET / REFRESH_SECRET"));
        }
        Ok(())
    }
}

pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
