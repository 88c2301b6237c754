//! Session store backed by Redis

use async_trait::async_trait;
use std::time::Duration;

use tg_core::errors::{DomainError, StoreError};
use tg_core::repositories::SessionStore;

use super::redis_client::RedisClient;

/// Stores session records as `SET key value EX ttl`
///
/// Keys carry the configured prefix.
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
}

impl RedisSessionStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(&self, session_id: &str) -> String {
        self.client.config().make_key(session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        // EX rejects 0; a sub-second remainder still gets one second
        let seconds = ttl.as_secs().max(1);
        self.client
            .set_with_expiry(&self.key(key), value, seconds)
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self
            .client
            .get(&self.key(key))
            .await
            .map_err(StoreError::from)?)
    }

    async fn delete(&self, key: &str) -> Result<u64, DomainError> {
        Ok(self
            .client
            .delete(&self.key(key))
            .await
            .map_err(StoreError::from)?)
    }
}
