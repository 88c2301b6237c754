//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,

    /// Client request read timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8000,
            workers: 0,
            keep_alive: default_keep_alive(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("SERVER_HOST", &defaults.host),
            port: env_parse_or("SERVER_PORT", defaults.port),
            workers: env_parse_or("SERVER_WORKERS", defaults.workers),
            ..defaults
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_keep_alive() -> u64 {
    75
}

fn default_request_timeout() -> u64 {
    15
}
