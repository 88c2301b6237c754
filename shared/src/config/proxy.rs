//! Caching proxy configuration

use serde::{Deserialize, Serialize};

use super::env_parse_or;

/// Read-through cache and upstream client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProxyConfig {
    /// Lifetime of a cached upstream body in seconds
    pub cache_ttl: u64,

    /// How often expired bodies are swept, in seconds
    pub cleanup_interval: u64,

    /// Idle keep-alive connections kept per upstream host
    pub max_idle_connections: usize,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Upstream request timeout in seconds
    pub request_timeout: u64,

    /// Scheme used to reach the requested host
    pub upstream_scheme: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            cache_ttl: 300,
            cleanup_interval: 600,
            max_idle_connections: 10,
            idle_timeout: 30,
            request_timeout: 15,
            upstream_scheme: String::from("http"),
        }
    }
}

impl ProxyConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env_parse_or("PROXY_CACHE_TTL", defaults.cache_ttl),
            cleanup_interval: env_parse_or("PROXY_CLEANUP_INTERVAL", defaults.cleanup_interval),
            request_timeout: env_parse_or("PROXY_REQUEST_TIMEOUT", defaults.request_timeout),
            ..defaults
        }
    }
}
