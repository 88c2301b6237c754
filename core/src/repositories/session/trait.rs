//! Session store trait: the key-value collaborator holding live sessions.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::DomainError;

/// Key-value store mapping a session identifier to its owning user id
///
/// The presence of a record is the authoritative liveness signal for a
/// token: deleting it revokes the token even while its signature and
/// embedded expiry are still valid. Records carry a TTL equal to the
/// remaining lifetime of the token they back.
///
/// Implementations must be safe for concurrent use by many requests.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store `value` under `key` for `ttl`
    ///
    /// # Returns
    /// * `Ok(())` - Record written
    /// * `Err(DomainError::Store)` - Backend failure
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Read the value under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Live record
    /// * `Ok(None)` - Never written, expired or deleted
    /// * `Err(DomainError::Store)` - Backend failure
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Delete the record under `key`
    ///
    /// # Returns
    /// * `Ok(count)` - Number of records removed; `0` when nothing was live
    /// * `Err(DomainError::Store)` - Backend failure
    async fn delete(&self, key: &str) -> Result<u64, DomainError>;
}
