//! Shared configuration and wire types for the Tollgate server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error envelope returned by every endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, ConfigError, Environment, ProxyConfig, ReferenceUser,
    ServerConfig, SessionBackend,
};
pub use errors::{error_codes, ErrorResponse};
