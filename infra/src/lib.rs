//! # Infrastructure Layer
//!
//! Concrete collaborators for the Tollgate core:
//! - **Cache**: Redis-backed and in-memory session stores, in-memory proxy response cache
//! - **HTTP**: upstream fetcher for the caching proxy
//!
//! ## Features
//!
//! - `redis-cache`: Enable Redis session store support (default)

use tg_core::errors::StoreError;

/// Cache module - Redis client, session stores and response cache
pub mod cache;

/// HTTP module - Upstream client
pub mod http;

pub use cache::{MemoryResponseCache, MemorySessionStore, RedisClient, RedisSessionStore};
pub use http::ReqwestHostFetcher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP client error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for StoreError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Cache(e) if e.is_connection_dropped() || e.is_io_error() => {
                StoreError::Unavailable {
                    message: e.to_string(),
                }
            }
            other => StoreError::Backend {
                message: other.to_string(),
            },
        }
    }
}
