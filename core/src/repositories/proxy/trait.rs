//! Collaborators of the caching proxy: the response cache and the upstream fetcher.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Body and message used when an upstream body could not be retrieved
pub const FETCH_FAILED: &str = "failed to get the request";

/// Failure to retrieve an upstream body
///
/// `status` is the upstream HTTP status when one was received, otherwise 500.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    pub status: u16,
    pub message: String,
}

impl FetchError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Transport failure with no upstream status
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }
}

/// Host-keyed cache of proxied bodies
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Cached body for `host`, `None` on miss or expiry
    async fn get(&self, host: &str) -> Option<String>;

    /// Store `body` for `host` for `ttl`
    async fn set(&self, host: &str, body: &str, ttl: Duration);
}

/// Retrieves an upstream resource
#[async_trait]
pub trait HostFetcher: Send + Sync {
    /// GET `url` and return its body when the upstream answers 200
    async fn retrieve(&self, url: &str) -> Result<String, FetchError>;
}
