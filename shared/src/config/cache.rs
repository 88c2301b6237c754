//! Session store (Redis) configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Which session store backend to run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// Redis server
    #[default]
    Redis,
    /// In-process map (development only, not shared between instances)
    Memory,
}

impl std::str::FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(SessionBackend::Redis),
            "memory" | "in-memory" => Ok(SessionBackend::Memory),
            other => Err(format!("Unknown session store: {}", other)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Session store backend
    #[serde(default)]
    pub backend: SessionBackend,

    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Maximum connection attempts at startup
    pub connect_retries: u32,

    /// Enable cache key prefix
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            url: String::from("redis://localhost:6379"),
            connection_timeout: 5,
            connect_retries: 3,
            key_prefix: None,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: env_parse_or("SESSION_STORE", defaults.backend),
            url: env_or("REDIS_URL", &defaults.url),
            connection_timeout: env_parse_or("REDIS_CONNECTION_TIMEOUT", defaults.connection_timeout),
            connect_retries: env_parse_or("REDIS_CONNECT_RETRIES", defaults.connect_retries),
            key_prefix: std::env::var("REDIS_KEY_PREFIX").ok().filter(|p| !p.is_empty()),
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}
